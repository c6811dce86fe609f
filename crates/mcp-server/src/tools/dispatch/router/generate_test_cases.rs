use super::super::Dispatcher;
use super::error::ToolError;
use crate::tools::schemas::generate_test_cases::GenerateTestCasesRequest;
use experiment_analysis::{test_plan, TestPlan};

pub(in crate::tools::dispatch) fn generate_test_cases(
    _service: &Dispatcher,
    request: GenerateTestCasesRequest,
) -> Result<TestPlan, ToolError> {
    Ok(test_plan::generate(
        &request.function_signature,
        &request.language,
        request.test_categories.as_slice(),
    ))
}
