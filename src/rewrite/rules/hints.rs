//! Table hint removal

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::traits::*;

static TABLE_HINT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+WITH\s*\([^)]+\)").expect("valid table hint pattern"));

/// Drops `WITH (NOLOCK)`-style table hints. LIMIT-style dialects have no
/// equivalent and reject the syntax.
pub struct StripTableHints;

impl RewriteRule for StripTableHints {
    fn id(&self) -> &'static str {
        "strip_table_hints"
    }

    fn apply(&self, sql: &str, _ctx: &RewriteContext<'_>) -> String {
        TABLE_HINT.replace_all(sql, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::rules::{apply_rule, assert_idempotent};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_single_hint() {
        assert_eq!(
            apply_rule(&StripTableHints, "SELECT * FROM orders WITH (NOLOCK) WHERE id = 1"),
            "SELECT * FROM orders WHERE id = 1"
        );
    }

    #[test]
    fn test_strips_hint_list_case_insensitive() {
        assert_eq!(
            apply_rule(
                &StripTableHints,
                "SELECT * FROM a with(readuncommitted, rowlock) JOIN b WITH (NOLOCK) ON a.id = b.id"
            ),
            "SELECT * FROM a JOIN b ON a.id = b.id"
        );
    }

    #[test]
    fn test_keeps_common_table_expressions() {
        let sql = "WITH recent AS (SELECT * FROM t) SELECT * FROM recent";
        assert_eq!(apply_rule(&StripTableHints, sql), sql);
    }

    #[test]
    fn test_idempotent() {
        assert_idempotent(&StripTableHints, "SELECT * FROM t WITH (NOLOCK), u WITH (READPAST)");
    }
}
