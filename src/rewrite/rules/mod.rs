//! Rewrite rule implementations

mod booleans;
mod concat;
mod functions;
mod hints;
mod identifiers;
mod paging;

pub use booleans::{BooleanLiterals, DEFAULT_BOOLEAN_COLUMNS};
pub use concat::LiteralConcat;
pub use functions::{DateFunctions, RandomFunction, ScalarRenames};
pub use hints::StripTableHints;
pub use identifiers::BracketIdentifiers;
pub use paging::{OffsetFetch, TopToLimit};

#[cfg(test)]
pub(crate) fn apply_rule(rule: &dyn super::RewriteRule, sql: &str) -> String {
    rule.apply(sql, &super::RewriteContext::new(sql))
}

/// Applying the rule to its own output is a no-op.
#[cfg(test)]
pub(crate) fn assert_idempotent(rule: &dyn super::RewriteRule, sql: &str) {
    let ctx = super::RewriteContext::new(sql);
    let once = rule.apply(sql, &ctx);
    let twice = rule.apply(&once, &ctx);
    pretty_assertions::assert_eq!(once, twice, "rule '{}' is not idempotent", rule.id());
}
