//! Dialect-aware clause generators.
//!
//! For callers assembling a query programmatically. Each function takes a
//! loosely formatted dialect identifier and resolves it with
//! [`Dialect::resolve`], so unknown or absent identifiers get the source
//! dialect's syntax.
//!
//! ```
//! use sqlshift::clauses::{paging, top_clause};
//!
//! let sql = format!("SELECT {}* FROM users ORDER BY id{}", top_clause(Some("mysql"), 5), paging(Some("mysql"), 20, 10));
//! assert_eq!(sql, "SELECT * FROM users ORDER BY id OFFSET 20 LIMIT 10");
//! ```

mod traits;
pub mod sql;

pub use traits::*;

use crate::dialect::Dialect;

/// `ORDER BY` expression that shuffles rows, or `"1"` for `DISTINCT` queries.
pub fn order_by_random(dialect: Option<&str>, has_distinct: bool) -> String {
    Dialect::resolve(dialect).generator().order_by_random(has_distinct)
}

/// Paging clause (with a leading space) for the dialect.
pub fn paging(dialect: Option<&str>, offset: i64, page_size: i64) -> String {
    Dialect::resolve(dialect).generator().paging(offset, page_size)
}

/// `"TOP <count> "` for the source dialect, empty for LIMIT-style dialects.
pub fn top_clause(dialect: Option<&str>, count: i64) -> String {
    Dialect::resolve(dialect).generator().top(count)
}

/// Append ` LIMIT <count>` for LIMIT-style dialects when `sql` has no
/// `LIMIT`/`OFFSET` yet. The source dialect returns `sql` unchanged.
pub fn append_limit_if_absent(sql: &str, dialect: Option<&str>, count: i64) -> String {
    Dialect::resolve(dialect).generator().append_limit(sql, count)
}
