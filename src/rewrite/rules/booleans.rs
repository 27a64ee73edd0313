//! Boolean literal normalization
//!
//! Integer comparisons against boolean columns are a type error in
//! PostgreSQL. Columns are recognized by name: a quoted identifier
//! containing one of the configured fragments is treated as boolean.

use regex::Regex;

use crate::error::{ShiftError, ShiftResult};
use crate::rewrite::traits::*;

/// Column name fragments treated as boolean when none are configured.
pub const DEFAULT_BOOLEAN_COLUMNS: &[&str] = &[
    "is_breached",
    "active",
    "enabled",
    "disabled",
    "deleted",
    "archived",
    "published",
    "verified",
    "approved",
];

/// `"active" = 1` → `"active" = true`, `"t"."deleted" = 0` → `"t"."deleted" = false`.
///
/// Only double-quoted identifiers are considered, so this stage expects
/// bracket identifiers to have been normalized already.
pub struct BooleanLiterals {
    patterns: Option<(Regex, Regex)>,
}

impl BooleanLiterals {
    pub fn new<I, S>(fragments: I) -> ShiftResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        if fragments.iter().any(|f| f.trim().is_empty()) {
            return Err(ShiftError::config("boolean column fragment must not be empty"));
        }

        let patterns = if fragments.is_empty() {
            None
        } else {
            let alternation = fragments
                .iter()
                .map(|f| regex::escape(f.trim()))
                .collect::<Vec<_>>()
                .join("|");
            let column = format!(
                r#""[^"]+"\."[^"]*(?:{alt})[^"]*"|"[^"]*(?:{alt})[^"]*""#,
                alt = alternation
            );
            let build = |value: &str| {
                Regex::new(&format!(r"(?i)({})\s*=\s*{}(\s|[),;]|$)", column, value))
                    .map_err(|e| ShiftError::config(format!("boolean column pattern: {}", e)))
            };
            Some((build("1")?, build("0")?))
        };

        Ok(Self { patterns })
    }
}

impl Default for BooleanLiterals {
    fn default() -> Self {
        Self::new(DEFAULT_BOOLEAN_COLUMNS.iter().copied())
            .expect("default boolean column fragments compile")
    }
}

impl RewriteRule for BooleanLiterals {
    fn id(&self) -> &'static str {
        "boolean_literals"
    }

    fn apply(&self, sql: &str, _ctx: &RewriteContext<'_>) -> String {
        let Some((truthy, falsy)) = &self.patterns else {
            return sql.to_string();
        };
        let sql = truthy.replace_all(sql, "${1} = true${2}");
        falsy.replace_all(&sql, "${1} = false${2}").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::rules::{apply_rule, assert_idempotent};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_column() {
        let rule = BooleanLiterals::default();
        assert_eq!(
            apply_rule(&rule, r#"SELECT * FROM "users" WHERE "active" = 1"#),
            r#"SELECT * FROM "users" WHERE "active" = true"#
        );
    }

    #[test]
    fn test_qualified_column_false() {
        let rule = BooleanLiterals::default();
        assert_eq!(
            apply_rule(&rule, r#"WHERE "u"."is_deleted"=0 AND "u"."IsApproved" = 1"#),
            r#"WHERE "u"."is_deleted" = false AND "u"."IsApproved" = true"#
        );
    }

    #[test]
    fn test_case_when_branches() {
        let rule = BooleanLiterals::default();
        assert_eq!(
            apply_rule(
                &rule,
                r#"SUM(CASE WHEN "enabled" = 1 THEN 1 ELSE 0 END), CASE WHEN "archived" = 0 THEN 0 END"#
            ),
            r#"SUM(CASE WHEN "enabled" = true THEN 1 ELSE 0 END), CASE WHEN "archived" = false THEN 0 END"#
        );
    }

    #[test]
    fn test_unrelated_columns_untouched() {
        let rule = BooleanLiterals::default();
        let sql = r#"WHERE "count" = 1 AND "status" = 0 AND active = 1"#;
        assert_eq!(apply_rule(&rule, sql), sql);
    }

    #[test]
    fn test_other_numbers_untouched() {
        let rule = BooleanLiterals::default();
        let sql = r#"WHERE "active" = 10 OR "deleted" = 01"#;
        assert_eq!(apply_rule(&rule, sql), sql);
    }

    #[test]
    fn test_decimals_untouched() {
        let rule = BooleanLiterals::default();
        let sql = r#"WHERE "active" = 1.5 OR "deleted" = 0.25"#;
        assert_eq!(apply_rule(&rule, sql), sql);
    }

    #[test]
    fn test_keeps_following_delimiter() {
        let rule = BooleanLiterals::default();
        assert_eq!(
            apply_rule(&rule, r#"IIF("active"=1, 'y', 'n'), ("deleted" = 0);"#),
            r#"IIF("active" = true, 'y', 'n'), ("deleted" = false);"#
        );
    }

    #[test]
    fn test_custom_fragments() {
        let rule = BooleanLiterals::new(["is_vip"]).unwrap();
        assert_eq!(
            apply_rule(&rule, r#"WHERE "is_vip" = 1 AND "active" = 1"#),
            r#"WHERE "is_vip" = true AND "active" = 1"#
        );
    }

    #[test]
    fn test_fragments_are_literal_text() {
        let rule = BooleanLiterals::new(["a.b"]).unwrap();
        let sql = r#"WHERE "axb" = 1"#;
        assert_eq!(apply_rule(&rule, sql), sql);
    }

    #[test]
    fn test_no_fragments_is_noop() {
        let rule = BooleanLiterals::new(Vec::<String>::new()).unwrap();
        let sql = r#"WHERE "active" = 1"#;
        assert_eq!(apply_rule(&rule, sql), sql);
    }

    #[test]
    fn test_empty_fragment_rejected() {
        assert!(matches!(
            BooleanLiterals::new(["active", " "]),
            Err(ShiftError::Config(_))
        ));
    }

    #[test]
    fn test_idempotent() {
        assert_idempotent(
            &BooleanLiterals::default(),
            r#"WHERE "active" = 1 AND "t"."deleted" = 0"#,
        );
    }
}
