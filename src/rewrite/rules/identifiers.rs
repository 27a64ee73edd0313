//! Bracket identifier quoting

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rewrite::traits::*;

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\[([^\[\]"]+)\]"#).expect("valid bracket identifier pattern"));

/// `[name]` → `"name"`.
///
/// Bracketed text that already contains a `"` is left alone, so `[[x]]`
/// becomes `["x"]` and stays that way.
pub struct BracketIdentifiers;

impl RewriteRule for BracketIdentifiers {
    fn id(&self) -> &'static str {
        "bracket_identifiers"
    }

    fn apply(&self, sql: &str, _ctx: &RewriteContext<'_>) -> String {
        BRACKETED.replace_all(sql, "\"${1}\"").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::rules::{apply_rule, assert_idempotent};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quotes_table_and_columns() {
        assert_eq!(
            apply_rule(&BracketIdentifiers, "SELECT [u].[First Name] FROM [dbo].[Users] [u]"),
            r#"SELECT "u"."First Name" FROM "dbo"."Users" "u""#
        );
    }

    #[test]
    fn test_leaves_unquoted_text() {
        let sql = "SELECT id FROM users";
        assert_eq!(apply_rule(&BracketIdentifiers, sql), sql);
    }

    #[test]
    fn test_empty_brackets_untouched() {
        assert_eq!(apply_rule(&BracketIdentifiers, "SELECT [] FROM t"), "SELECT [] FROM t");
    }

    #[test]
    fn test_idempotent() {
        assert_idempotent(&BracketIdentifiers, "SELECT [a], [b c] FROM [t]");
        assert_idempotent(&BracketIdentifiers, "SELECT [[x]] FROM t");
    }

    #[test]
    fn test_nested_brackets_quote_inner_only() {
        assert_eq!(apply_rule(&BracketIdentifiers, "SELECT [[x]] FROM t"), r#"SELECT ["x"] FROM t"#);
    }
}
