use crate::complexity::looks_recursive;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::OnceLock;

pub const DYNAMIC_PROGRAMMING: &str = "dynamic_programming";
pub const CACHING: &str = "caching";

pub const DEFAULT_PATTERN_TYPES: &[&str] = &[
    DYNAMIC_PROGRAMMING,
    CACHING,
    "two_pointers",
    "sliding_window",
    "hash_maps",
];

/// Results at or below this score are dropped.
pub const MIN_APPLICABILITY: f64 = 0.3;
pub const MAX_RECOMMENDATIONS: usize = 3;

const NEUTRAL_SCORE: f64 = 0.5;
const LINEAR_LOOKUP_TOKENS: &[&str] = &["indexOf", "find"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternResult {
    pub pattern_name: String,
    /// Heuristic confidence in `[0, 1]`.
    pub applicability_score: f64,
    pub implementation_difficulty: Difficulty,
    pub estimated_improvement_percent: u32,
    pub indicators: Vec<String>,
    pub hint: String,
}

fn memo_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(memo\w*|\w*cache\w*|dp)\b").expect("static memo regex")
    })
}

fn memo_tokens(code: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    memo_token_re()
        .find_iter(code)
        .map(|m| m.as_str().to_string())
        .filter(|token| seen.insert(token.clone()))
        .collect()
}

fn score_dynamic_programming(code: &str) -> PatternResult {
    let recursive = looks_recursive(code);
    let memo = memo_tokens(code);

    let mut indicators = Vec::new();
    if recursive {
        indicators.push("return_with_call".to_string());
    }
    indicators.extend(memo.iter().cloned());

    if recursive && !memo.is_empty() {
        PatternResult {
            pattern_name: DYNAMIC_PROGRAMMING.to_string(),
            applicability_score: 0.8,
            implementation_difficulty: Difficulty::Medium,
            estimated_improvement_percent: 70,
            indicators,
            hint: "Memoize overlapping subproblems or turn the recursion into a bottom-up table."
                .to_string(),
        }
    } else {
        PatternResult {
            pattern_name: DYNAMIC_PROGRAMMING.to_string(),
            applicability_score: 0.2,
            implementation_difficulty: Difficulty::Hard,
            estimated_improvement_percent: 10,
            indicators,
            hint: "No overlapping subproblems detected.".to_string(),
        }
    }
}

fn score_caching(code: &str) -> PatternResult {
    let indicators: Vec<String> = LINEAR_LOOKUP_TOKENS
        .iter()
        .filter(|token| code.contains(*token))
        .map(|token| token.to_string())
        .collect();

    if indicators.is_empty() {
        PatternResult {
            pattern_name: CACHING.to_string(),
            applicability_score: 0.3,
            implementation_difficulty: Difficulty::Easy,
            estimated_improvement_percent: 5,
            indicators,
            hint: "No repeated linear lookups detected.".to_string(),
        }
    } else {
        PatternResult {
            pattern_name: CACHING.to_string(),
            applicability_score: 0.9,
            implementation_difficulty: Difficulty::Easy,
            estimated_improvement_percent: 50,
            indicators,
            hint: "Replace repeated linear lookups with a hash-based index or a result cache."
                .to_string(),
        }
    }
}

fn score_neutral(pattern: &str) -> PatternResult {
    PatternResult {
        pattern_name: pattern.to_string(),
        applicability_score: NEUTRAL_SCORE,
        implementation_difficulty: Difficulty::Medium,
        estimated_improvement_percent: 25,
        indicators: Vec::new(),
        hint: format!("Review the code for {} opportunities.", pattern.replace('_', " ")),
    }
}

pub fn score_pattern(code: &str, pattern: &str) -> PatternResult {
    match pattern {
        DYNAMIC_PROGRAMMING => score_dynamic_programming(code),
        CACHING => score_caching(code),
        other => {
            if !DEFAULT_PATTERN_TYPES.contains(&other) {
                log::debug!("unknown pattern '{other}', using neutral score");
            }
            score_neutral(other)
        }
    }
}

/// Scores each requested pattern once (first-seen order) and keeps those above
/// [`MIN_APPLICABILITY`].
pub fn detect<S: AsRef<str>>(code: &str, language: &str, pattern_types: &[S]) -> Vec<PatternResult> {
    let mut seen = HashSet::new();
    let results: Vec<PatternResult> = pattern_types
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| seen.insert(*name))
        .map(|name| score_pattern(code, name))
        .filter(|result| result.applicability_score > MIN_APPLICABILITY)
        .collect();
    log::trace!(
        "patterns[{language}]: requested={} kept={}",
        pattern_types.len(),
        results.len()
    );
    results
}

/// Top results by descending score; ties keep their input order.
pub fn recommend(results: &[PatternResult]) -> Vec<PatternResult> {
    let mut ranked = results.to_vec();
    ranked.sort_by(|a, b| {
        b.applicability_score
            .partial_cmp(&a.applicability_score)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(MAX_RECOMMENDATIONS);
    ranked
}
