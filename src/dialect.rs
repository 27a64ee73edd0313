//! Dialect identification.
//!
//! Callers hand us loosely formatted identifiers (`"PostgreSQL"`,
//! `"Postgre Sql"`, `"sqlite3"`, ...). [`Dialect::resolve`] maps them onto a
//! closed set and falls back to [`Dialect::SqlServer`], the source dialect,
//! for anything it does not recognize. The fallback is intentional.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clauses::ClauseGenerator;
use crate::clauses::sql::mysql::MysqlGenerator;
use crate::clauses::sql::postgres::PostgresGenerator;
use crate::clauses::sql::sqlite::SqliteGenerator;
use crate::clauses::sql::sqlserver::SqlServerGenerator;
use crate::error::ShiftError;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// T-SQL-like source dialect. Also the fallback for unknown input.
    #[default]
    SqlServer,
    Postgres,
    MySql,
    Sqlite,
}

impl Dialect {
    pub const ALL: [Dialect; 4] = [
        Dialect::SqlServer,
        Dialect::Postgres,
        Dialect::MySql,
        Dialect::Sqlite,
    ];

    /// Resolve an identifier permissively. Unknown or absent input selects
    /// the source dialect.
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::lookup).unwrap_or_default()
    }

    /// Look up an identifier, returning `None` when it is not recognized.
    pub fn lookup(name: &str) -> Option<Self> {
        match normalize(name).as_str() {
            "postgres" | "postgresql" | "pg" | "pgsql" => Some(Dialect::Postgres),
            "mysql" | "mariadb" => Some(Dialect::MySql),
            "sqlite" | "sqlite3" => Some(Dialect::Sqlite),
            "sqlserver" | "mssql" | "tsql" => Some(Dialect::SqlServer),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::SqlServer => "sqlserver",
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
            Dialect::Sqlite => "sqlite",
        }
    }

    /// Whether the dialect limits rows with trailing `OFFSET`/`LIMIT`
    /// instead of a leading `TOP`.
    pub fn is_limit_style(&self) -> bool {
        !matches!(self, Dialect::SqlServer)
    }

    pub fn generator(&self) -> &'static dyn ClauseGenerator {
        match self {
            Dialect::SqlServer => &SqlServerGenerator,
            Dialect::Postgres => &PostgresGenerator,
            Dialect::MySql => &MysqlGenerator,
            Dialect::Sqlite => &SqliteGenerator,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Strict parse. Use [`Dialect::resolve`] for the permissive fallback.
impl FromStr for Dialect {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ShiftError::unknown_dialect(s))
    }
}

/// Lowercase and drop separators so `"Postgre Sql"` and `"postgre-sql"`
/// compare equal to `"postgresql"`.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '_' | '.'))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgres_aliases() {
        for name in ["postgres", "POSTGRESQL", "Postgre Sql", "postgre-sql", "pg", "PgSQL"] {
            assert_eq!(Dialect::resolve(Some(name)), Dialect::Postgres, "{name}");
        }
    }

    #[test]
    fn test_other_families() {
        assert_eq!(Dialect::resolve(Some("MySQL")), Dialect::MySql);
        assert_eq!(Dialect::resolve(Some("mariadb")), Dialect::MySql);
        assert_eq!(Dialect::resolve(Some("SQLite")), Dialect::Sqlite);
        assert_eq!(Dialect::resolve(Some("sqlite3")), Dialect::Sqlite);
        assert_eq!(Dialect::resolve(Some("SQL Server")), Dialect::SqlServer);
        assert_eq!(Dialect::resolve(Some("mssql")), Dialect::SqlServer);
    }

    #[test]
    fn test_unknown_falls_back_to_source() {
        assert_eq!(Dialect::resolve(Some("oracle")), Dialect::SqlServer);
        assert_eq!(Dialect::resolve(Some("")), Dialect::SqlServer);
        assert_eq!(Dialect::resolve(None), Dialect::SqlServer);
    }

    #[test]
    fn test_strict_parse() {
        assert_eq!("sqlite".parse::<Dialect>().unwrap(), Dialect::Sqlite);
        let err = "oracle".parse::<Dialect>().unwrap_err();
        assert!(matches!(err, ShiftError::UnknownDialect(ref s) if s == "oracle"));
    }

    #[test]
    fn test_limit_style() {
        assert!(!Dialect::SqlServer.is_limit_style());
        assert!(Dialect::Postgres.is_limit_style());
        assert!(Dialect::MySql.is_limit_style());
        assert!(Dialect::Sqlite.is_limit_style());
    }

    #[test]
    fn test_display_round_trips_through_lookup() {
        for dialect in Dialect::ALL {
            assert_eq!(Dialect::lookup(&dialect.to_string()), Some(dialect));
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Dialect::MySql).unwrap();
        assert_eq!(json, "\"mysql\"");
        let back: Dialect = serde_json::from_str("\"sqlserver\"").unwrap();
        assert_eq!(back, Dialect::SqlServer);
    }
}
