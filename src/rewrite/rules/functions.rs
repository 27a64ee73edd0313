//! Function call equivalents

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::traits::*;

static NEWID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bNEWID\s*\(\s*\)").expect("valid NEWID pattern"));

static DATENAME_MONTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bDATENAME\s*\(\s*MONTH\s*,\s*([^)]+?)\s*\)").expect("valid DATENAME pattern")
});

static MONTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bMONTH\s*\(([^)]+)\)").expect("valid MONTH pattern"));

static CONVERT_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bCONVERT\s*\(\s*VARCHAR\s*\(\s*10\s*\)\s*,\s*([^,)]+?)\s*\)")
        .expect("valid CONVERT pattern")
});

static LEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bLEN\s*\(").expect("valid LEN pattern"));

static ISNULL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bISNULL\s*\(").expect("valid ISNULL pattern"));

/// `NEWID()` → `RANDOM()`.
pub struct RandomFunction;

impl RewriteRule for RandomFunction {
    fn id(&self) -> &'static str {
        "random_function"
    }

    fn apply(&self, sql: &str, _ctx: &RewriteContext<'_>) -> String {
        NEWID.replace_all(sql, "RANDOM()").into_owned()
    }
}

/// Month extraction and `VARCHAR(10)` date formatting.
///
/// - `DATENAME(MONTH, x)` → `TO_CHAR(x, 'Month')`
/// - `MONTH(x)` → `EXTRACT(MONTH FROM x)`
/// - `CONVERT(VARCHAR(10), x)` → `TO_CHAR(x, 'YYYY-MM-DD')`
pub struct DateFunctions;

impl RewriteRule for DateFunctions {
    fn id(&self) -> &'static str {
        "date_functions"
    }

    fn apply(&self, sql: &str, _ctx: &RewriteContext<'_>) -> String {
        // A match can swallow a nested call in its argument, e.g.
        // `MONTH(MAX(MONTH(d)))`. Repeat until no call is left; every pass
        // removes at least one.
        let mut current = sql.to_string();
        loop {
            let next = rewrite_date_calls(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

fn rewrite_date_calls(sql: &str) -> String {
    let sql = DATENAME_MONTH.replace_all(sql, "TO_CHAR(${1}, 'Month')");
    let sql = MONTH.replace_all(&sql, "EXTRACT(MONTH FROM ${1})");
    CONVERT_DATE
        .replace_all(&sql, "TO_CHAR(${1}, 'YYYY-MM-DD')")
        .into_owned()
}

/// `LEN(` → `LENGTH(`, `ISNULL(` → `COALESCE(`.
pub struct ScalarRenames;

impl RewriteRule for ScalarRenames {
    fn id(&self) -> &'static str {
        "scalar_renames"
    }

    fn apply(&self, sql: &str, _ctx: &RewriteContext<'_>) -> String {
        let sql = LEN.replace_all(sql, "LENGTH(");
        ISNULL.replace_all(&sql, "COALESCE(").into_owned()
    }
}
