//! SQL function wrappers and grouping helpers.
//!
//! Function names follow MySQL (`TO_BASE64`, `JSON_EXTRACT`, `IF`).

use std::borrow::Cow;
use std::iter;

use chrono::{DateTime, Utc};

use super::expr::{and, or};
use super::fragment::{separated, Fragment};
use super::literal::{null, param};
use super::select::Select;

/// `open ++ args ++ close`, with `args` joined by `", "`.
fn wrap(
    open: &'static str,
    args: impl IntoIterator<Item = Fragment>,
    close: &'static str,
) -> Fragment {
    Fragment::sequence(
        iter::once(Fragment::text(open))
            .chain(separated(args, Cow::Borrowed(", ")))
            .chain(iter::once(Fragment::text(close))),
    )
}

/// Wraps a condition in parentheses.
#[must_use]
pub fn cond(v: Fragment) -> Fragment {
    Fragment::sequence([Fragment::byte(b'('), v, Fragment::byte(b')')])
}

/// `MIN(v)`
#[must_use]
pub fn min(v: Fragment) -> Fragment {
    wrap("MIN(", [v], ")")
}

/// `MAX(v)`
#[must_use]
pub fn max(v: Fragment) -> Fragment {
    wrap("MAX(", [v], ")")
}

/// `COUNT(v)`
#[must_use]
pub fn count(v: Fragment) -> Fragment {
    wrap("COUNT(", [v], ")")
}

/// `DISTINCT(v)`
#[must_use]
pub fn distinct(v: Fragment) -> Fragment {
    wrap("DISTINCT(", [v], ")")
}

/// Average rounded to two decimals: `CAST(AVG(v) AS DECIMAL(7,2))`.
#[must_use]
pub fn average(v: Fragment) -> Fragment {
    wrap("CAST(AVG(", [v], ") AS DECIMAL(7,2))")
}

/// `TO_BASE64(v)`
#[must_use]
pub fn to_base64(v: Fragment) -> Fragment {
    wrap("TO_BASE64(", [v], ")")
}

/// `CONCAT(a, b, ...)`
#[must_use]
pub fn concat(vs: impl IntoIterator<Item = Fragment>) -> Fragment {
    wrap("CONCAT(", vs, ")")
}

/// `JSON_EXTRACT(doc, path)`
#[must_use]
pub fn json_extract(doc: Fragment, path: Fragment) -> Fragment {
    wrap("JSON_EXTRACT(", [doc, path], ")")
}

/// `IF(cond, then, otherwise)`
#[must_use]
pub fn sql_if(cond: Fragment, then: Fragment, otherwise: Fragment) -> Fragment {
    wrap("IF(", [cond, then, otherwise], ")")
}

/// `CASE WHEN cond THEN then ELSE otherwise END`
#[must_use]
pub fn case_when(cond: Fragment, then: Fragment, otherwise: Fragment) -> Fragment {
    Fragment::sequence([
        Fragment::text("CASE WHEN "),
        cond,
        Fragment::text(" THEN "),
        then,
        Fragment::text(" ELSE "),
        otherwise,
        Fragment::text(" END"),
    ])
}

/// `EXISTS(<query>)`
#[must_use]
pub fn exists(query: &Select) -> Fragment {
    Fragment::sequence([Fragment::text("EXISTS"), query.as_subquery()])
}

/// A table with a column list: `name(a, b, ...)`.
#[must_use]
pub fn table_fields(
    name: impl Into<Cow<'static, str>>,
    fields: impl IntoIterator<Item = Fragment>,
) -> Fragment {
    Fragment::sequence(
        iter::once(Fragment::text(name))
            .chain(iter::once(Fragment::byte(b'(')))
            .chain(separated(fields, Cow::Borrowed(", ")))
            .chain(iter::once(Fragment::byte(b')'))),
    )
}

/// Matches rows whose `[live_start, live_end]` interval overlaps
/// `[cmp_start, cmp_end]`.
///
/// A NULL live bound counts as open-ended and always matches. A comparison
/// bound at or before the Unix epoch is replaced with the current time.
#[must_use]
pub fn date_overlaps(
    live_start: Fragment,
    live_end: Fragment,
    cmp_start: DateTime<Utc>,
    cmp_end: DateTime<Utc>,
) -> Fragment {
    date_overlaps_at(live_start, live_end, cmp_start, cmp_end, Utc::now())
}

/// Like [`date_overlaps`], with unset comparison bounds replaced by `now`.
#[must_use]
pub fn date_overlaps_at(
    live_start: Fragment,
    live_end: Fragment,
    cmp_start: DateTime<Utc>,
    cmp_end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Fragment {
    let or_now = |ts: DateTime<Utc>| if ts.timestamp() <= 0 { now } else { ts };
    cond(or(
        or(live_start.clone().is(null()), live_end.clone().is(null())),
        and(
            param(or_now(cmp_start)).lt_eq(live_end),
            param(or_now(cmp_end)).gt_eq(live_start),
        ),
    ))
}
