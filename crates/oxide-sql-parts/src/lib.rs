//! # oxide-sql-parts
//!
//! Composable SQL fragments and a SELECT assembler.
//!
//! This crate provides:
//! - An immutable fragment tree that renders to SQL text plus the values
//!   bound to its `?` placeholders, in order
//! - Operators, function wrappers and literal helpers built on that tree
//! - A clause-ordered SELECT assembler with CTE, join and UNION support
//!
//! It only produces `(sql, params)`. Executing the statement is left to the
//! caller's database driver.
//!
//! ## Building a statement
//!
//! ```rust
//! use oxide_sql_parts::{all, count, field, params, table, OrderDirection, Select};
//!
//! let mut query = Select::from_table(table("orders"));
//! query
//!     .select([field("status"), count(all())])
//!     .where_clause([field("region").in_list(params(["eu", "us"]))])
//!     .group_by([field("status")])
//!     .order_by(field("status"), OrderDirection::Desc)
//!     .limit(10);
//!
//! let (sql, params) = query.build();
//! assert_eq!(
//!     sql,
//!     "SELECT status, COUNT(*) FROM orders WHERE region IN (?, ?) \
//!      GROUP BY status ORDER BY status DESC LIMIT 10"
//! );
//! assert_eq!(params.len(), 2);
//! ```
//!
//! ## Literals versus parameters
//!
//! [`value`] inlines a literal and does not escape text. [`param`] binds the
//! value instead and is the safe choice for user input:
//!
//! ```rust
//! use oxide_sql_parts::{field, param, SqlValue};
//!
//! let user_input = "'; DROP TABLE users; --";
//! let (sql, params) = field("name").eq(param(user_input)).build();
//!
//! assert_eq!(sql, "name = ?");
//! assert_eq!(params, vec![SqlValue::Text(String::from(user_input))]);
//! ```

pub mod builder;
pub mod error;

pub use builder::*;
pub use error::{BuildError, Result};
