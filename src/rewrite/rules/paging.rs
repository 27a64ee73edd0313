//! Paging and row-limit rules

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::rewrite::traits::*;
use crate::text::{append_clause, has_row_limit};

static OFFSET_FETCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\s+OFFSET\s+(\d+)\s+ROWS?\s+FETCH\s+(?:NEXT|FIRST)\s+(\d+)\s+ROWS?\s+ONLY",
    )
    .expect("valid OFFSET/FETCH pattern")
});

static SELECT_TOP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bSELECT\s+(?P<distinct>DISTINCT\s+)?TOP\s*(?:\(\s*(?P<paren>\d+)\s*\)\s*|(?P<count>\d+)\s+)",
    )
    .expect("valid SELECT TOP pattern")
});

/// `OFFSET n ROWS FETCH NEXT m ROWS ONLY` → ` OFFSET n LIMIT m`.
pub struct OffsetFetch;

impl RewriteRule for OffsetFetch {
    fn id(&self) -> &'static str {
        "offset_fetch"
    }

    fn apply(&self, sql: &str, _ctx: &RewriteContext<'_>) -> String {
        OFFSET_FETCH
            .replace_all(sql, " OFFSET ${1} LIMIT ${2}")
            .into_owned()
    }
}

/// Removes `TOP n` from `SELECT` and moves the limit to a trailing
/// ` LIMIT n`.
///
/// The count is read from the original query, since earlier stages may
/// have reshaped the text around it. No `LIMIT` is appended when the
/// statement already has an `OFFSET` or `LIMIT`.
pub struct TopToLimit;

impl TopToLimit {
    /// The `TOP` count of the first `SELECT TOP` in `sql`.
    pub fn top_count(sql: &str) -> Option<&str> {
        let caps = SELECT_TOP.captures(sql)?;
        caps.name("paren")
            .or_else(|| caps.name("count"))
            .map(|m| m.as_str())
    }
}

impl RewriteRule for TopToLimit {
    fn id(&self) -> &'static str {
        "top_to_limit"
    }

    fn apply(&self, sql: &str, ctx: &RewriteContext<'_>) -> String {
        let stripped = SELECT_TOP.replace_all(sql, |caps: &Captures<'_>| {
            format!("SELECT {}", caps.name("distinct").map_or("", |m| m.as_str()))
        });

        match Self::top_count(ctx.original) {
            Some(count) if !has_row_limit(&stripped) => {
                append_clause(&stripped, &format!(" LIMIT {}", count))
            }
            _ => stripped.into_owned(),
        }
    }
}
