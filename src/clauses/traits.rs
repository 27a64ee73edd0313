//! Clause generator trait.

use crate::text::{append_clause, has_row_limit};

/// Sort key used instead of a random ordering when the query is `DISTINCT`.
/// Every supported engine rejects `ORDER BY <random>` next to `SELECT DISTINCT`.
pub const DISTINCT_SORT_KEY: &str = "1";

/// Trait for dialect-specific clause generation.
///
/// The provided methods describe a LIMIT-style dialect; the source dialect
/// overrides them.
pub trait ClauseGenerator: Send + Sync {
    /// Function call producing a random value per row.
    fn random_function(&self) -> &'static str;

    /// Expression for `ORDER BY` that shuffles rows.
    fn order_by_random(&self, has_distinct: bool) -> String {
        if has_distinct {
            DISTINCT_SORT_KEY.to_string()
        } else {
            self.random_function().to_string()
        }
    }

    /// Paging clause with a leading space. Values are not validated.
    fn paging(&self, offset: i64, page_size: i64) -> String {
        format!(" OFFSET {} LIMIT {}", offset, page_size)
    }

    /// Row-limiting prefix spliced right after `SELECT `.
    fn top(&self, _count: i64) -> String {
        String::new()
    }

    /// Append ` LIMIT <count>` unless the statement already limits rows.
    fn append_limit(&self, sql: &str, count: i64) -> String {
        if has_row_limit(sql) {
            sql.to_string()
        } else {
            append_clause(sql, &format!(" LIMIT {}", count))
        }
    }
}
