//! SQL values and parameter handling.
//!
//! Values bound to placeholders travel alongside the SQL text. Only a few of
//! them also have an inline literal form.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};

/// Format used for inline timestamp literals.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A SQL value that can be bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
    /// Timestamp value, second precision when inlined.
    Timestamp(DateTime<Utc>),
}

impl SqlValue {
    /// Returns the name of the value's kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "NULL",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
        }
    }

    /// Returns the SQL representation for inline use.
    ///
    /// Text is wrapped in single quotes as is. Nothing is escaped, so only
    /// inline text that is known to be safe; bind everything else with a
    /// placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnsupportedLiteral`] for `NULL`.
    pub fn to_sql_literal(&self) -> Result<String> {
        match self {
            Self::Bool(true) => Ok(String::from("TRUE")),
            Self::Bool(false) => Ok(String::from("FALSE")),
            Self::Int(n) => Ok(n.to_string()),
            Self::Text(s) => Ok(format!("'{s}'")),
            Self::Timestamp(ts) => Ok(format!("'{}'", ts.format(TIMESTAMP_FORMAT))),
            Self::Null => Err(BuildError::UnsupportedLiteral { kind: self.kind() }),
        }
    }

    /// Returns the parameter placeholder.
    #[must_use]
    pub const fn placeholder() -> &'static str {
        "?"
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Bool(self)
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Int(self)
    }
}

macro_rules! impl_to_sql_value_int {
    ($($ty:ty),*) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::Int(i64::from(self))
                }
            }
        )*
    };
}

impl_to_sql_value_int!(i32, i16, i8, u32, u16, u8);

impl ToSqlValue for String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(String::from(self))
    }
}

impl ToSqlValue for &String {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl ToSqlValue for DateTime<Utc> {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Timestamp(self)
    }
}

/// Naive timestamps are taken to be UTC.
impl ToSqlValue for NaiveDateTime {
    fn to_sql_value(self) -> SqlValue {
        SqlValue::Timestamp(self.and_utc())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}
