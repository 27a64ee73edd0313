//! # sqlshift: T-SQL to LIMIT-style SQL
//!
//! Rule-based, parser-free translation of T-SQL-flavoured queries into
//! PostgreSQL-flavoured SQL, plus dialect-aware clause builders for callers
//! that assemble queries themselves.
//!
//! ## Quick Example
//!
//! ```
//! let sql = sqlshift::translate("SELECT TOP 5 * FROM [Users] WITH (NOLOCK) WHERE [active] = 1");
//! assert_eq!(sql, "SELECT * FROM \"Users\" WHERE \"active\" = true LIMIT 5");
//!
//! assert_eq!(sqlshift::paging(Some("sqlite"), 20, 10), " OFFSET 20 LIMIT 10");
//! ```
//!
//! ## Rewrites
//!
//! | T-SQL                                   | Output                         |
//! |-----------------------------------------|--------------------------------|
//! | `WITH (NOLOCK)`                         | removed                        |
//! | `[name]`                                | `"name"`                       |
//! | `NEWID()`                               | `RANDOM()`                     |
//! | `OFFSET n ROWS FETCH NEXT m ROWS ONLY`  | `OFFSET n LIMIT m`             |
//! | `SELECT TOP n ...`                      | `SELECT ... LIMIT n`           |
//! | `DATENAME(MONTH, x)`                    | `TO_CHAR(x, 'Month')`          |
//! | `MONTH(x)`                              | `EXTRACT(MONTH FROM x)`        |
//! | `CONVERT(VARCHAR(10), x)`               | `TO_CHAR(x, 'YYYY-MM-DD')`     |
//! | `LEN(` / `ISNULL(`                      | `LENGTH(` / `COALESCE(`        |
//! | `'a' + 'b'`                             | `'a' \|\| 'b'`                 |
//! | `"active" = 1`                          | `"active" = true`              |
//!
//! Unknown dialect identifiers never fail: they select the T-SQL syntax.

pub mod clauses;
pub mod config;
pub mod dialect;
pub mod error;
pub mod rewrite;
mod text;

pub use clauses::{append_limit_if_absent, order_by_random, paging, top_clause};

use once_cell::sync::Lazy;

static STANDARD: Lazy<rewrite::Translator> = Lazy::new(rewrite::Translator::new);

pub mod prelude {
    pub use crate::clauses::{
        ClauseGenerator, append_limit_if_absent, order_by_random, paging, top_clause,
    };
    pub use crate::config::{BooleanConfig, TranslatorConfig};
    pub use crate::dialect::Dialect;
    pub use crate::error::*;
    pub use crate::rewrite::{RewriteContext, RewriteRule, RulePipeline, Translator};
    pub use crate::{translate, translate_opt};
}

/// Translate a T-SQL query with the standard rules.
///
/// # Example
///
/// ```
/// use sqlshift::translate;
///
/// assert_eq!(translate("SELECT LEN([name]) FROM [t]"), "SELECT LENGTH(\"name\") FROM \"t\"");
/// assert_eq!(translate(""), "");
/// ```
pub fn translate(query: &str) -> String {
    STANDARD.translate(query)
}

/// [`translate`] for possibly absent input. `None` stays `None`.
pub fn translate_opt(query: Option<&str>) -> Option<String> {
    query.map(translate)
}
