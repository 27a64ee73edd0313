//! Text helpers shared by the rewrite rules and the clause generators.

use once_cell::sync::Lazy;
use regex::Regex;

static ROW_LIMIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:OFFSET|LIMIT)\b").expect("valid row limit pattern"));

// A `;` terminator and/or trailing `--` comment lines. Comments holding a
// `'` are not recognized, so `'--'` inside a literal never counts.
static STATEMENT_TAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\s*;\s*(?:--[^'\n]*\s*)*|\s*(?:--[^'\n]*\s*)+)$")
        .expect("valid statement tail pattern")
});

/// Whether the statement already carries an `OFFSET` or `LIMIT` keyword.
pub fn has_row_limit(sql: &str) -> bool {
    ROW_LIMIT.is_match(sql)
}

/// Append a trailing clause ahead of a final `;` terminator and any
/// trailing line comments.
pub fn append_clause(sql: &str, clause: &str) -> String {
    let split = STATEMENT_TAIL.find(sql).map_or(sql.len(), |m| m.start());
    let (body, tail) = sql.split_at(split);
    format!("{body}{clause}{tail}")
}
