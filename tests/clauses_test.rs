use pretty_assertions::assert_eq;
use sqlshift::prelude::*;

#[test]
fn test_order_by_random() {
    assert_eq!(order_by_random(Some("postgres"), true), "1");
    assert_eq!(order_by_random(Some("postgres"), false), "RANDOM()");
    assert_ne!(
        order_by_random(Some("mysql"), false),
        order_by_random(Some("postgres"), false)
    );
    assert_eq!(order_by_random(Some("informix"), false), "NEWID()");
    assert_eq!(order_by_random(None, false), order_by_random(Some("sqlserver"), false));
}

#[test]
fn test_paging() {
    assert_eq!(paging(Some("sqlite"), 20, 10), " OFFSET 20 LIMIT 10");
    assert_eq!(
        paging(Some("sqlserver"), 20, 10),
        " OFFSET 20 ROWS FETCH NEXT 10 ROWS ONLY"
    );
}

#[test]
fn test_append_limit_if_absent() {
    assert!(append_limit_if_absent("SELECT * FROM t", Some("mysql"), 5).ends_with("LIMIT 5"));
    assert_eq!(
        append_limit_if_absent("SELECT * FROM t LIMIT 5", Some("mysql"), 5),
        "SELECT * FROM t LIMIT 5"
    );
    assert_eq!(
        append_limit_if_absent("SELECT * FROM t; -- nightly export", Some("sqlite"), 100),
        "SELECT * FROM t LIMIT 100; -- nightly export"
    );
}

#[test]
fn test_assembled_query_per_dialect() {
    let build = |dialect: &str| {
        let sql = format!(
            "SELECT {}id FROM items ORDER BY {}",
            top_clause(Some(dialect), 10),
            order_by_random(Some(dialect), false)
        );
        append_limit_if_absent(&sql, Some(dialect), 10)
    };

    assert_eq!(build("SQL Server"), "SELECT TOP 10 id FROM items ORDER BY NEWID()");
    assert_eq!(build("Postgre Sql"), "SELECT id FROM items ORDER BY RANDOM() LIMIT 10");
    assert_eq!(build("MySQL"), "SELECT id FROM items ORDER BY RAND() LIMIT 10");
    assert_eq!(build("SQLite"), "SELECT id FROM items ORDER BY RANDOM() LIMIT 10");
}

#[test]
fn test_typed_generators_match_string_api() {
    for dialect in Dialect::ALL {
        let name = dialect.to_string();
        let generator = dialect.generator();
        assert_eq!(generator.paging(5, 7), paging(Some(name.as_str()), 5, 7));
        assert_eq!(generator.top(3), top_clause(Some(name.as_str()), 3));
        assert_eq!(generator.order_by_random(false), order_by_random(Some(name.as_str()), false));
        assert_eq!(generator.top(3).is_empty(), dialect.is_limit_style());
    }
}
