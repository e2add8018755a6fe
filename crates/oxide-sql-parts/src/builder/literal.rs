//! Identifiers, inline literals and bound parameters.

use std::borrow::Cow;
use std::panic::Location;

use chrono::{DateTime, Utc};
use tracing::error;

use super::fragment::Fragment;
use super::value::{SqlValue, ToSqlValue};
use crate::error::Result;

/// `*`
#[must_use]
pub const fn all() -> Fragment {
    Fragment::Text(Cow::Borrowed("*"))
}

/// `NULL`
#[must_use]
pub const fn null() -> Fragment {
    Fragment::Text(Cow::Borrowed("NULL"))
}

/// `TRUE`
#[must_use]
pub const fn sql_true() -> Fragment {
    Fragment::Text(Cow::Borrowed("TRUE"))
}

/// `FALSE`
#[must_use]
pub const fn sql_false() -> Fragment {
    Fragment::Text(Cow::Borrowed("FALSE"))
}

/// Creates an inline literal from a value.
///
/// Text is quoted but not escaped. Prefer [`param`] for anything that comes
/// from outside the program.
///
/// # Panics
///
/// Panics if the value has no literal form (`NULL`). The panic is reported at
/// the caller's location. Use [`try_value`] to get an error instead.
#[must_use]
#[track_caller]
pub fn value<T: ToSqlValue>(v: T) -> Fragment {
    match try_value(v) {
        Ok(fragment) => fragment,
        Err(err) => {
            let caller = Location::caller();
            error!(error = %err, caller = %caller, "Refusing to inline value");
            panic!("{err}");
        }
    }
}

/// Creates an inline literal from a value.
///
/// # Errors
///
/// Returns [`crate::BuildError::UnsupportedLiteral`] if the value has no
/// literal form.
pub fn try_value<T: ToSqlValue>(v: T) -> Result<Fragment> {
    let value = v.to_sql_value();
    match value {
        SqlValue::Bool(b) => Ok(value_bool(b)),
        other => other.to_sql_literal().map(Fragment::text),
    }
}

/// Creates a quoted text literal: `'v'`.
#[must_use]
pub fn value_str(v: &str) -> Fragment {
    Fragment::text(format!("'{v}'"))
}

/// Creates an integer literal.
#[must_use]
pub fn value_int(v: i64) -> Fragment {
    Fragment::text(v.to_string())
}

/// Creates a quoted timestamp literal: `'YYYY-MM-DD HH:MM:SS'`.
#[must_use]
pub fn value_time(v: DateTime<Utc>) -> Fragment {
    Fragment::text(format!("'{}'", v.format(super::value::TIMESTAMP_FORMAT)))
}

/// Creates `TRUE` or `FALSE`.
#[must_use]
pub const fn value_bool(v: bool) -> Fragment {
    if v {
        sql_true()
    } else {
        sql_false()
    }
}

/// A table name, emitted verbatim.
#[must_use]
pub fn table(name: impl Into<Cow<'static, str>>) -> Fragment {
    Fragment::text(name)
}

/// A field name, emitted verbatim.
#[must_use]
pub fn field(name: impl Into<Cow<'static, str>>) -> Fragment {
    Fragment::text(name)
}

/// A namespaced field: `namespace.field`.
#[must_use]
pub fn field_ns(
    namespace: impl Into<Cow<'static, str>>,
    name: impl Into<Cow<'static, str>>,
) -> Fragment {
    Fragment::sequence([
        Fragment::text(namespace),
        Fragment::byte(b'.'),
        Fragment::text(name),
    ])
}

/// An alias reference, emitted verbatim.
#[must_use]
pub fn alias(name: impl Into<Cow<'static, str>>) -> Fragment {
    Fragment::text(name)
}

/// Creates a placeholder bound to any supported value.
#[must_use]
pub fn param<T: ToSqlValue>(v: T) -> Fragment {
    Fragment::placeholder(v.to_sql_value())
}

/// Creates a placeholder bound to a boolean.
#[must_use]
pub const fn param_bool(v: bool) -> Fragment {
    Fragment::placeholder(SqlValue::Bool(v))
}

/// Creates a placeholder bound to an integer.
#[must_use]
pub const fn param_int(v: i64) -> Fragment {
    Fragment::placeholder(SqlValue::Int(v))
}

/// Creates a placeholder bound to a string.
#[must_use]
pub fn param_str(v: &str) -> Fragment {
    Fragment::placeholder(SqlValue::Text(String::from(v)))
}

/// One placeholder per boolean, in order.
#[must_use]
pub fn param_bools(vs: &[bool]) -> Vec<Fragment> {
    vs.iter().copied().map(param_bool).collect()
}

/// One placeholder per integer, in order.
#[must_use]
pub fn param_ints(vs: &[i64]) -> Vec<Fragment> {
    vs.iter().copied().map(param_int).collect()
}

/// One placeholder per string, in order.
#[must_use]
pub fn param_strs<S: AsRef<str>>(vs: &[S]) -> Vec<Fragment> {
    vs.iter().map(|v| param_str(v.as_ref())).collect()
}

/// One placeholder per value, in order.
#[must_use]
pub fn params<T: ToSqlValue>(vs: impl IntoIterator<Item = T>) -> Vec<Fragment> {
    vs.into_iter().map(param).collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::error::BuildError;

    fn sqls(parts: &[Fragment]) -> Vec<(String, Vec<SqlValue>)> {
        parts.iter().map(Fragment::build).collect()
    }

    #[test]
    fn test_constants() {
        assert_eq!(all().sql(), "*");
        assert_eq!(null().sql(), "NULL");
        assert_eq!(sql_true().sql(), "TRUE");
        assert_eq!(sql_false().sql(), "FALSE");
    }

    #[test]
    fn test_value() {
        assert_eq!(value("string").sql(), "'string'");
        assert_eq!(value(123).sql(), "123");
        assert_eq!(value(-123).sql(), "-123");
        let ts = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(value(ts).sql(), "'2001-02-03 04:05:06'");
        assert_eq!(value(true).sql(), "TRUE");
        assert_eq!(value(false).sql(), "FALSE");
        assert!(value(1).params().is_empty());
    }

    #[test]
    #[should_panic(expected = "Unsupported literal type: NULL")]
    fn test_value_null_panics() {
        let _ = value(SqlValue::Null);
    }

    #[test]
    #[should_panic(expected = "Unsupported literal type")]
    fn test_value_none_panics() {
        let _ = value(None::<i64>);
    }

    #[test]
    fn test_try_value() {
        assert_eq!(try_value(7).unwrap().sql(), "7");
        assert_eq!(
            try_value(None::<&str>).unwrap_err(),
            BuildError::UnsupportedLiteral { kind: "NULL" }
        );
    }

    #[test]
    fn test_typed_values() {
        assert_eq!(value_str("string").sql(), "'string'");
        assert_eq!(value_int(123).sql(), "123");
        assert_eq!(value_int(-123).sql(), "-123");
        let ts = Utc.with_ymd_and_hms(2001, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(value_time(ts).sql(), "'2001-02-03 04:05:06'");
        assert_eq!(value_bool(true).sql(), "TRUE");
        assert_eq!(value_bool(false).sql(), "FALSE");
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(table("table_name").sql(), "table_name");
        assert_eq!(field("field_name").sql(), "field_name");
        assert_eq!(alias("alias_name").sql(), "alias_name");
        assert_eq!(
            field_ns("namespace_name", "field_name").sql(),
            "namespace_name.field_name"
        );
        assert_eq!(field(String::from("owned")).sql(), "owned");
    }

    #[test]
    fn test_param() {
        assert_eq!(
            param(123).build(),
            (String::from("?"), vec![SqlValue::Int(123)])
        );
        assert_eq!(
            param("string").build(),
            (String::from("?"), vec![SqlValue::Text(String::from("string"))])
        );
        assert_eq!(
            param(true).build(),
            (String::from("?"), vec![SqlValue::Bool(true)])
        );
        assert_eq!(
            param(None::<i64>).build(),
            (String::from("?"), vec![SqlValue::Null])
        );
    }

    #[test]
    fn test_typed_params() {
        assert_eq!(param_bool(false).params(), vec![SqlValue::Bool(false)]);
        assert_eq!(param_int(123).params(), vec![SqlValue::Int(123)]);
        assert_eq!(
            param_str("string").params(),
            vec![SqlValue::Text(String::from("string"))]
        );
    }

    #[test]
    fn test_batch_params() {
        assert_eq!(
            sqls(&param_bools(&[true, false])),
            sqls(&[param_bool(true), param_bool(false)])
        );
        assert_eq!(
            sqls(&param_ints(&[123, -123])),
            sqls(&[param_int(123), param_int(-123)])
        );
        assert_eq!(
            sqls(&param_strs(&["string_1", "string_2"])),
            sqls(&[param_str("string_1"), param_str("string_2")])
        );
    }

    #[test]
    fn test_mixed_params() {
        let ps = params([
            true.to_sql_value(),
            123_i64.to_sql_value(),
            "string_1".to_sql_value(),
        ]);
        assert_eq!(
            sqls(&ps),
            sqls(&[param_bool(true), param_int(123), param_str("string_1")])
        );
    }
}
