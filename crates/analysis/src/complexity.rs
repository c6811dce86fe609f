use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const CONSTANT: &str = "O(1)";
pub const LINEAR: &str = "O(n)";
pub const QUADRATIC: &str = "O(n²)";

/// Keywords that look like calls (`if (`, `for (` ...) but never recurse.
const NON_CALL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "return", "function", "elif", "sizeof", "typeof",
    "match", "with", "until",
];

/// Heuristic cost profile of a source snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityResult {
    pub time_complexity: String,
    pub space_complexity: String,
    pub loop_count: usize,
    pub nested_loops: usize,
    pub recursive_calls: usize,
    /// `loop_count + 2 * nested_loops + recursive_calls`
    pub complexity_score: usize,
}

impl ComplexityResult {
    pub fn score(&self) -> f64 {
        self.complexity_score as f64
    }
}

fn loop_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(?:for|while)\s*\(").expect("static loop regex"))
}

fn return_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\breturn\b").expect("static return regex"))
}

fn call_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b([A-Za-z_][A-Za-z0-9_]*)\s*\(").expect("static call regex"))
}

pub fn count_loops(code: &str) -> usize {
    loop_header_re().find_iter(code).count()
}

/// Index of the delimiter closing the one at `open`, or `None` if it is never closed.
fn matching_close(bytes: &[u8], open: usize, open_ch: u8, close_ch: u8) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, &byte) in bytes[open..].iter().enumerate() {
        if byte == open_ch {
            depth += 1;
        } else if byte == close_ch {
            depth -= 1;
            if depth == 0 {
                return Some(open + offset);
            }
        }
    }
    None
}

/// Braced body span `(open, close)` of the loop whose header `(` sits at `paren`.
/// An unterminated body runs to the end of the code.
fn loop_body(bytes: &[u8], paren: usize) -> Option<(usize, usize)> {
    let header_end = matching_close(bytes, paren, b'(', b')')?;
    let open = header_end
        + 1
        + bytes[header_end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }
    let close = matching_close(bytes, open, b'{', b'}').unwrap_or(bytes.len());
    Some((open, close))
}

/// Loops whose braced body contains at least one further loop header.
pub fn count_nested_loops(code: &str) -> usize {
    let bytes = code.as_bytes();
    let headers: Vec<(usize, usize)> = loop_header_re()
        .find_iter(code)
        .map(|m| (m.start(), m.end() - 1))
        .collect();

    headers
        .iter()
        .filter_map(|&(_, paren)| loop_body(bytes, paren))
        .filter(|&(open, close)| {
            headers
                .iter()
                .any(|&(start, _)| start > open && start < close)
        })
        .count()
}

pub fn has_call(code: &str) -> bool {
    call_re().captures_iter(code).any(|caps| {
        caps.get(1)
            .map(|name| !NON_CALL_KEYWORDS.contains(&name.as_str()))
            .unwrap_or(false)
    })
}

/// Coarse recursion proxy: a `return` plus anything shaped like a call.
pub fn looks_recursive(code: &str) -> bool {
    return_re().is_match(code) && has_call(code)
}

pub fn analyze(code: &str, language: &str) -> ComplexityResult {
    let loop_count = count_loops(code);
    let nested_loops = count_nested_loops(code);
    let recursive_calls = usize::from(looks_recursive(code));

    let time_complexity = if nested_loops > 0 {
        QUADRATIC
    } else if loop_count > 0 || recursive_calls > 0 {
        LINEAR
    } else {
        CONSTANT
    };
    let space_complexity = if nested_loops > 0 { LINEAR } else { CONSTANT };

    let result = ComplexityResult {
        time_complexity: time_complexity.to_string(),
        space_complexity: space_complexity.to_string(),
        loop_count,
        nested_loops,
        recursive_calls,
        complexity_score: loop_count + 2 * nested_loops + recursive_calls,
    };
    log::trace!(
        "complexity[{language}]: loops={} nested={} recursive={} score={}",
        result.loop_count,
        result.nested_loops,
        result.recursive_calls,
        result.complexity_score
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nested_for_loops_are_quadratic() {
        let result = analyze("for (;;) { for (;;) {} }", "javascript");
        assert_eq!(result.loop_count, 2);
        assert_eq!(result.nested_loops, 1);
        assert_eq!(result.time_complexity, QUADRATIC);
        assert_eq!(result.space_complexity, LINEAR);
        assert_eq!(result.complexity_score, 4);
    }

    #[test]
    fn plain_statements_are_constant() {
        let result = analyze("const x = 1;\nconst y = x + 2;", "javascript");
        assert_eq!(
            result,
            ComplexityResult {
                time_complexity: CONSTANT.to_string(),
                space_complexity: CONSTANT.to_string(),
                loop_count: 0,
                nested_loops: 0,
                recursive_calls: 0,
                complexity_score: 0,
            }
        );
    }

    #[test]
    fn sibling_loops_are_not_nested() {
        let code = "for (let i = 0; i < n; i++) { a(); }\nwhile (x) { x--; }";
        let result = analyze(code, "javascript");
        assert_eq!(result.loop_count, 2);
        assert_eq!(result.nested_loops, 0);
        assert_eq!(result.time_complexity, LINEAR);
        assert_eq!(result.space_complexity, CONSTANT);
    }

    #[test]
    fn while_inside_for_counts_as_nested() {
        let code = "for(let i=0;i<n;i++){ while(j<i){ j++; } }";
        let result = analyze(code, "javascript");
        assert_eq!(result.loop_count, 2);
        assert_eq!(result.nested_loops, 1);
        assert_eq!(result.time_complexity, QUADRATIC);
    }

    #[test]
    fn inner_loop_after_braced_block_is_nested() {
        let code = "for (let i = 0; i < n; i++) {\n  if (a[i] > 0) { c++; }\n  for (let j = 0; j < n; j++) { s += a[j]; }\n}";
        let result = analyze(code, "javascript");
        assert_eq!(result.loop_count, 2);
        assert_eq!(result.nested_loops, 1);
        assert_eq!(result.time_complexity, QUADRATIC);
        assert_eq!(result.complexity_score, 4);
    }

    #[test]
    fn loop_after_closed_body_is_not_nested() {
        let code = "for (;;) { if (x) { y(); } }\nfor (;;) { z(); }";
        assert_eq!(count_nested_loops(code), 0);
    }

    #[test]
    fn each_enclosing_loop_counts_once() {
        assert_eq!(count_nested_loops("for (;;) { for (;;) { while (x) {} } }"), 2);
        assert_eq!(count_nested_loops("for (;;) { for (;;) {} for (;;) {} }"), 1);
    }

    #[test]
    fn unbraced_and_unterminated_bodies() {
        assert_eq!(count_nested_loops("while (x) x--; for (;;) {}"), 0);
        assert_eq!(count_nested_loops("for (;;) { for (;;) {"), 1);
        assert_eq!(count_nested_loops("for (;;"), 0);
    }

    #[test]
    fn return_with_call_marks_recursion() {
        let code = "function fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); }";
        let result = analyze(code, "javascript");
        assert_eq!(result.loop_count, 0);
        assert_eq!(result.recursive_calls, 1);
        assert_eq!(result.time_complexity, LINEAR);
        assert_eq!(result.complexity_score, 1);
    }

    #[test]
    fn control_keywords_do_not_count_as_calls() {
        assert!(!has_call("if (x) { return y; }"));
        assert!(!looks_recursive("if (x) { return y; }"));
        assert!(has_call("return compute(x);"));
    }
}
