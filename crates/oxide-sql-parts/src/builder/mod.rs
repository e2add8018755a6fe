//! Composable SQL fragments and the SELECT assembler.
//!
//! Fragments are built bottom-up from identifiers, literals and placeholders,
//! combined with operators and function wrappers, then attached to a
//! [`Select`].
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_parts::builder::{field, param_int, table, Select, SqlValue};
//!
//! let mut query = Select::from_table(table("users"));
//! query
//!     .select([field("id"), field("name")])
//!     .where_clause([field("active").eq(param_int(1))]);
//!
//! let (sql, params) = query.build();
//! assert_eq!(sql, "SELECT id, name FROM users WHERE active = ?");
//! assert_eq!(params, vec![SqlValue::Int(1)]);
//! ```

mod expr;
mod fragment;
mod func;
mod literal;
mod select;
pub mod value;
mod values;

pub use expr::{and, join, list, or, xor};
pub use fragment::Fragment;
pub use func::{
    average, case_when, concat, cond, count, date_overlaps, date_overlaps_at, distinct, exists,
    json_extract, max, min, sql_if, table_fields, to_base64,
};
pub use literal::{
    alias, all, field, field_ns, null, param, param_bool, param_bools, param_int, param_ints,
    param_str, param_strs, params, sql_false, sql_true, table, try_value, value, value_bool,
    value_int, value_str, value_time,
};
pub use select::{union, OrderDirection, Select};
pub use value::{SqlValue, ToSqlValue};
pub use values::ValuesBuilder;
