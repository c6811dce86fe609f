use super::super::{Dispatcher, ToolName};
use super::error::ToolError;
use crate::tools::schemas::create_optimization_report::CreateOptimizationReportRequest;
use crate::tools::util::unix_ms;
use experiment_analysis::{report, ExperimentData, OptimizationReport};
use std::time::SystemTime;

pub(in crate::tools::dispatch) fn create_optimization_report(
    _service: &Dispatcher,
    request: CreateOptimizationReportRequest,
) -> Result<OptimizationReport, ToolError> {
    let raw = serde_json::Value::Object(request.experiment_data);
    let data: ExperimentData = serde_json::from_value(raw).map_err(|source| {
        ToolError::InvalidArguments {
            tool: ToolName::CreateOptimizationReport.as_str(),
            source,
        }
    })?;

    Ok(report::compose(
        &data,
        request.include_visualizations,
        unix_ms(SystemTime::now()),
    ))
}
