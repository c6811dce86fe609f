//! Keyword-level detection of well-known algorithm shapes and performance smells.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmFinding {
    pub kind: String,
    pub algorithm: String,
    pub optimization_potential: Level,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceIssue {
    pub issue: String,
    pub severity: Level,
    pub description: String,
    pub suggestion: String,
}

fn algorithm(kind: &str, name: &str, potential: Level, suggestion: &str) -> AlgorithmFinding {
    AlgorithmFinding {
        kind: kind.to_string(),
        algorithm: name.to_string(),
        optimization_potential: potential,
        suggestion: suggestion.to_string(),
    }
}

fn issue(name: &str, severity: Level, description: &str, suggestion: &str) -> PerformanceIssue {
    PerformanceIssue {
        issue: name.to_string(),
        severity,
        description: description.to_string(),
        suggestion: suggestion.to_string(),
    }
}

fn loop_keywords(lower: &str) -> usize {
    lower.matches("for").count() + lower.matches("while").count()
}

pub fn detect_algorithms(code: &str) -> Vec<AlgorithmFinding> {
    let lower = code.to_lowercase();
    let loops = loop_keywords(&lower);
    let mut found = Vec::new();

    if lower.contains("sort") {
        if lower.contains("bubble") || lower.matches("for").count() >= 2 {
            found.push(algorithm(
                "sorting",
                "bubble_sort",
                Level::High,
                "Replace with the standard library sort or a quicksort/mergesort.",
            ));
        } else if lower.contains("quick") || lower.contains("partition") {
            found.push(algorithm(
                "sorting",
                "quicksort",
                Level::Medium,
                "Consider insertion sort for small partitions.",
            ));
        }
    }

    if ["find", "search", "indexof"].iter().any(|t| lower.contains(t)) && lower.contains("for") {
        found.push(algorithm(
            "search",
            "linear_search",
            Level::High,
            "Use binary search on sorted data or a hash map for frequent lookups.",
        ));
    }

    if loops >= 2 {
        found.push(algorithm(
            "loops",
            "nested_loops",
            Level::High,
            "Consider caching, precomputation, or a better algorithm.",
        ));
    }

    if lower.contains("fibonacci") || lower.contains("factorial") {
        found.push(algorithm(
            "recursion",
            "recursive_function",
            Level::High,
            "Add memoization or convert to an iterative approach.",
        ));
    }

    found
}

pub fn detect_performance_issues(code: &str, language: &str) -> Vec<PerformanceIssue> {
    let lower = code.to_lowercase();
    let mut issues = Vec::new();

    match language.trim().to_ascii_lowercase().as_str() {
        "python" | "py" => {
            if code.contains("+=") && lower.contains("str") {
                issues.push(issue(
                    "string_concatenation",
                    Level::Medium,
                    "String concatenation in a loop",
                    "Collect parts and use str.join().",
                ));
            }
            if code.contains("list(") && code.contains("range(") {
                issues.push(issue(
                    "inefficient_list_creation",
                    Level::Low,
                    "List built from range()",
                    "Use a list comprehension or iterate the range directly.",
                ));
            }
        }
        "javascript" | "js" | "typescript" | "ts" => {
            if lower.contains("document.getelementby") {
                issues.push(issue(
                    "dom_queries",
                    Level::Medium,
                    "Repeated DOM queries",
                    "Cache DOM element references.",
                ));
            }
            if code.matches("var ").count() > 5 {
                issues.push(issue(
                    "var_usage",
                    Level::Low,
                    "Function-scoped var declarations",
                    "Use let/const.",
                ));
            }
        }
        _ => {}
    }

    if loop_keywords(&lower) >= 3 {
        issues.push(issue(
            "deeply_nested_loops",
            Level::High,
            "Deeply nested loops detected",
            "Consider algorithmic optimization.",
        ));
    }

    issues
}

/// Advice keyed by optimization target.
pub fn target_suggestions(target: &str) -> Vec<String> {
    let lines: &[&str] = match target.trim().to_ascii_lowercase().as_str() {
        "performance" | "speed" => &[
            "Reduce loop nesting; prefer hash-based lookups over linear scans.",
            "Hoist invariant work out of hot loops.",
            "Memoize pure functions that are called repeatedly with the same input.",
        ],
        "memory" => &[
            "Stream data instead of materializing full collections.",
            "Reuse buffers across iterations.",
            "Prefer in-place algorithms where ownership allows it.",
        ],
        "readability" => &[
            "Extract nested loop bodies into named helpers.",
            "Replace index arithmetic with iterator adapters.",
            "Name intermediate values after what they mean.",
        ],
        "security" => &[
            "Validate and bound all external input sizes.",
            "Avoid quadratic behavior on attacker-controlled input.",
            "Never build queries or commands by string concatenation.",
        ],
        _ => &[
            "Measure before optimizing; target the hottest path first.",
            "Keep a reference implementation for regression tests.",
        ],
    };
    lines.iter().map(|s| s.to_string()).collect()
}
