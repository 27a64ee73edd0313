use super::super::traits::ClauseGenerator;

pub struct SqlServerGenerator;

impl ClauseGenerator for SqlServerGenerator {
    fn random_function(&self) -> &'static str {
        "NEWID()"
    }

    fn paging(&self, offset: i64, page_size: i64) -> String {
        // T-SQL needs an ORDER BY for OFFSET/FETCH; the caller supplies it.
        format!(" OFFSET {} ROWS FETCH NEXT {} ROWS ONLY", offset, page_size)
    }

    fn top(&self, count: i64) -> String {
        format!("TOP {} ", count)
    }

    fn append_limit(&self, sql: &str, _count: i64) -> String {
        // Row limits are expressed with TOP or FETCH, already in the statement.
        sql.to_string()
    }
}
