#![allow(dead_code)]

use duckdb::types::{TimeUnit, Value};
use duckdb::{params_from_iter, Connection, Row};
use oxide_sql_parts::SqlValue;

const FIXTURE: &str = "
    CREATE TABLE teams (id BIGINT, title VARCHAR);
    CREATE TABLE users (id BIGINT, name VARCHAR, active BOOLEAN, team_id BIGINT);
    CREATE TABLE events (id BIGINT, starts_at TIMESTAMP, ends_at TIMESTAMP);
    INSERT INTO teams VALUES (10, 'red'), (20, 'blue');
    INSERT INTO users VALUES
        (1, 'ann', TRUE, 10),
        (2, 'bob', FALSE, 10),
        (3, 'cid', TRUE, 20),
        (4, 'dee', TRUE, NULL);
    INSERT INTO events VALUES
        (1, '2020-01-01 00:00:00', '2020-01-31 00:00:00'),
        (2, '2020-03-01 00:00:00', '2020-03-31 00:00:00'),
        (3, '2020-02-10 00:00:00', NULL),
        (4, NULL, NULL),
        (5, '2020-01-20 00:00:00', '2020-02-05 00:00:00');
";

/// Opens an in-memory database with the `teams`, `users` and `events`
/// fixture.
pub fn connection() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to open DuckDB");
    conn.execute_batch(FIXTURE)
        .expect("Failed to load test fixture");
    conn
}

pub fn to_duckdb(value: &SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Bool(b) => Value::Boolean(*b),
        SqlValue::Int(n) => Value::BigInt(*n),
        SqlValue::Text(s) => Value::Text(s.clone()),
        SqlValue::Timestamp(ts) => Value::Timestamp(TimeUnit::Microsecond, ts.timestamp_micros()),
    }
}

fn query_rows<T, F>(conn: &Connection, sql: &str, params: &[SqlValue], read: F) -> Vec<T>
where
    F: FnMut(&Row<'_>) -> duckdb::Result<T>,
{
    let mut stmt = conn
        .prepare(sql)
        .unwrap_or_else(|e| panic!("Failed to prepare: {sql}\nError: {e:?}"));
    let bound = params_from_iter(params.iter().map(to_duckdb));
    let rows = stmt
        .query_map(bound, read)
        .unwrap_or_else(|e| panic!("Failed to run: {sql}\nError: {e:?}"));
    rows.collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| panic!("Failed to read rows: {sql}\nError: {e:?}"))
}

/// Runs `sql` and returns the first column of every row.
pub fn query_ids(conn: &Connection, sql: &str, params: &[SqlValue]) -> Vec<i64> {
    query_rows(conn, sql, params, |row| row.get(0))
}

/// Runs `sql` and returns the first two columns of every row.
pub fn query_pairs(conn: &Connection, sql: &str, params: &[SqlValue]) -> Vec<(i64, i64)> {
    query_rows(conn, sql, params, |row| Ok((row.get(0)?, row.get(1)?)))
}
