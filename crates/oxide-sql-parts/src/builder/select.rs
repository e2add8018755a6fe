//! SELECT statement assembler.
//!
//! Clauses are collected as fragments and rendered in a fixed order:
//! WITH, SELECT, FROM, joins, WHERE, GROUP BY, ORDER BY, LIMIT. Empty
//! clauses are left out entirely. No validation is done; a statement
//! without a FROM target simply renders without one.

use std::borrow::Cow;

use tracing::trace;

use super::fragment::{separated, Fragment};
use super::value::SqlValue;

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderDirection {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl OrderDirection {
    /// Returns the SQL keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A SELECT statement under construction.
///
/// Methods take `&mut self` and return it, so calls can be chained or issued
/// one at a time. Building does not consume the statement and can be
/// repeated.
#[derive(Debug, Clone, Default)]
pub struct Select {
    from: Option<Fragment>,
    columns: Vec<Fragment>,
    joins: Vec<Fragment>,
    where_clause: Vec<Fragment>,
    group_by: Vec<Fragment>,
    order_by: Vec<Fragment>,
    with: Vec<Fragment>,
    limit: u64,
}

impl Select {
    /// Creates an empty SELECT statement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a SELECT statement reading from `table`.
    #[must_use]
    pub fn from_table(table: Fragment) -> Self {
        Self {
            from: Some(table),
            ..Self::default()
        }
    }

    /// Sets the FROM target, replacing any previous one.
    pub fn from(&mut self, table: Fragment) -> &mut Self {
        self.from = Some(table);
        self
    }

    /// Adds items to the select list.
    pub fn select(&mut self, items: impl IntoIterator<Item = Fragment>) -> &mut Self {
        self.columns.extend(items);
        self
    }

    /// Adds a `LEFT JOIN table ON on`.
    pub fn left_join(&mut self, table: Fragment, on: Fragment) -> &mut Self {
        self.push_join("LEFT JOIN ", table, on)
    }

    /// Adds an `INNER JOIN table ON on`.
    pub fn inner_join(&mut self, table: Fragment, on: Fragment) -> &mut Self {
        self.push_join("INNER JOIN ", table, on)
    }

    fn push_join(&mut self, kind: &'static str, table: Fragment, on: Fragment) -> &mut Self {
        self.joins.push(Fragment::sequence([
            Fragment::text(kind),
            table,
            Fragment::text(" ON "),
            on,
        ]));
        self
    }

    /// Adds WHERE predicates. All predicates are joined with AND.
    pub fn where_clause(&mut self, predicates: impl IntoIterator<Item = Fragment>) -> &mut Self {
        self.where_clause.extend(predicates);
        self
    }

    /// Adds GROUP BY expressions.
    pub fn group_by(&mut self, exprs: impl IntoIterator<Item = Fragment>) -> &mut Self {
        self.group_by.extend(exprs);
        self
    }

    /// Adds an ORDER BY expression.
    pub fn order_by(&mut self, expr: Fragment, dir: OrderDirection) -> &mut Self {
        self.order_by
            .push(expr.append([Fragment::byte(b' '), Fragment::text(dir.as_str())]));
        self
    }

    /// Sets the LIMIT. Zero removes it.
    pub fn limit(&mut self, n: u64) -> &mut Self {
        self.limit = n;
        self
    }

    /// Adds a common table expression: `name AS (body)`.
    pub fn with(&mut self, body: Fragment, name: Fragment) -> &mut Self {
        self.with.push(Fragment::sequence([
            name,
            Fragment::text(" AS ("),
            body,
            Fragment::byte(b')'),
        ]));
        self
    }

    /// Adds a recursive common table expression: `RECURSIVE name AS (body)`.
    pub fn with_recursive(&mut self, body: Fragment, name: &str) -> &mut Self {
        self.with.push(Fragment::sequence([
            Fragment::text(format!("RECURSIVE {name} AS (")),
            body,
            Fragment::byte(b')'),
        ]));
        self
    }

    /// Returns the whole statement as one fragment.
    #[must_use]
    pub fn to_fragment(&self) -> Fragment {
        let mut parts = vec![];

        if !self.with.is_empty() {
            parts.push(Fragment::text("WITH "));
            parts.extend(separated(self.with.iter().cloned(), Cow::Borrowed(", ")));
            parts.push(Fragment::byte(b' '));
        }

        parts.push(Fragment::text("SELECT "));
        parts.extend(separated(self.columns.iter().cloned(), Cow::Borrowed(", ")));

        if let Some(from) = &self.from {
            parts.push(Fragment::text(" FROM "));
            parts.push(from.clone());
        }

        for join in &self.joins {
            parts.push(Fragment::byte(b' '));
            parts.push(join.clone());
        }

        push_clause(&mut parts, " WHERE ", &self.where_clause, " AND ");
        push_clause(&mut parts, " GROUP BY ", &self.group_by, ", ");
        push_clause(&mut parts, " ORDER BY ", &self.order_by, ", ");

        if self.limit != 0 {
            parts.push(Fragment::text(format!(" LIMIT {}", self.limit)));
        }

        Fragment::sequence(parts)
    }

    /// Returns the statement wrapped in parentheses, for use as a subquery.
    #[must_use]
    pub fn as_subquery(&self) -> Fragment {
        Fragment::sequence([
            Fragment::byte(b'('),
            self.to_fragment(),
            Fragment::byte(b')'),
        ])
    }

    /// Builds the SELECT statement and returns SQL with parameters.
    #[must_use]
    pub fn build(&self) -> (String, Vec<SqlValue>) {
        let (sql, params) = self.to_fragment().build();
        trace!(sql = %sql, params = params.len(), "Built SELECT statement");
        (sql, params)
    }

    /// Builds the SELECT statement and returns only the SQL string.
    #[must_use]
    pub fn build_sql(&self) -> String {
        self.to_fragment().sql()
    }
}

fn push_clause(
    parts: &mut Vec<Fragment>,
    keyword: &'static str,
    items: &[Fragment],
    separator: &'static str,
) {
    if items.is_empty() {
        return;
    }
    parts.push(Fragment::text(keyword));
    parts.extend(separated(items.iter().cloned(), Cow::Borrowed(separator)));
}

/// Combines two statements: `(lhs) UNION (rhs)`.
#[must_use]
pub fn union(lhs: &Select, rhs: &Select) -> Fragment {
    Fragment::sequence([
        lhs.as_subquery(),
        Fragment::text(" UNION "),
        rhs.as_subquery(),
    ])
}
