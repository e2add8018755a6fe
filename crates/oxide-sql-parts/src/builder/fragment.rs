//! The fragment tree and its rendering.
//!
//! A [`Fragment`] renders to SQL text plus the values bound to the `?`
//! placeholders in that text. Fragments never change once built: appending
//! returns a new fragment whose sequence shares the existing children.

use std::borrow::Cow;
use std::fmt;
use std::iter;
use std::sync::Arc;

use super::value::SqlValue;

/// An immutable piece of SQL.
///
/// The set of variants is closed. Everything else in the builder is made of
/// these four.
#[derive(Debug, Clone)]
pub enum Fragment {
    /// A single raw character, used for punctuation.
    Byte(u8),
    /// Raw SQL text emitted verbatim.
    Text(Cow<'static, str>),
    /// A `?` marker bound to one value.
    Placeholder(SqlValue),
    /// Children rendered one after another.
    Sequence(Arc<[Fragment]>),
}

impl Fragment {
    /// Creates a single-character fragment.
    #[must_use]
    pub const fn byte(b: u8) -> Self {
        Self::Byte(b)
    }

    /// Creates a raw text fragment.
    ///
    /// **Warning**: the text is emitted as is. Never pass user input here.
    #[must_use]
    pub fn text(sql: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(sql.into())
    }

    /// Creates a placeholder bound to `value`.
    #[must_use]
    pub const fn placeholder(value: SqlValue) -> Self {
        Self::Placeholder(value)
    }

    /// Creates a sequence of fragments.
    #[must_use]
    pub fn sequence(parts: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(parts.into_iter().collect())
    }

    /// Creates a fragment that renders to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::Sequence(Arc::from(Vec::new()))
    }

    /// Returns true if the fragment renders no text and binds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Byte(_) | Self::Placeholder(_) => false,
            Self::Text(s) => s.is_empty(),
            Self::Sequence(children) => children.iter().all(Self::is_empty),
        }
    }

    /// Returns a new fragment with `parts` rendered after this one.
    ///
    /// A sequence is extended by copying its child handles, so fragments
    /// derived earlier from `self` are left untouched.
    #[must_use]
    pub fn append(self, parts: impl IntoIterator<Item = Self>) -> Self {
        match self {
            Self::Sequence(children) => {
                Self::Sequence(children.iter().cloned().chain(parts).collect())
            }
            other => Self::Sequence(iter::once(other).chain(parts).collect()),
        }
    }

    /// Renders the fragment and returns the SQL and parameters.
    #[must_use]
    pub fn build(&self) -> (String, Vec<SqlValue>) {
        let mut sql = String::new();
        let mut params = vec![];
        self.write_to(&mut sql, &mut params);
        (sql, params)
    }

    /// Returns only the SQL text.
    #[must_use]
    pub fn sql(&self) -> String {
        self.to_string()
    }

    /// Returns only the bound parameters, in placeholder order.
    #[must_use]
    pub fn params(&self) -> Vec<SqlValue> {
        let mut params = vec![];
        self.collect_params(&mut params);
        params
    }

    fn write_to(&self, sql: &mut String, params: &mut Vec<SqlValue>) {
        match self {
            Self::Byte(b) => sql.push(char::from(*b)),
            Self::Text(s) => sql.push_str(s),
            Self::Placeholder(value) => {
                sql.push_str(SqlValue::placeholder());
                params.push(value.clone());
            }
            Self::Sequence(children) => {
                for child in children.iter() {
                    child.write_to(sql, params);
                }
            }
        }
    }

    fn collect_params(&self, params: &mut Vec<SqlValue>) {
        match self {
            Self::Byte(_) | Self::Text(_) => {}
            Self::Placeholder(value) => params.push(value.clone()),
            Self::Sequence(children) => {
                for child in children.iter() {
                    child.collect_params(params);
                }
            }
        }
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Byte(b) => write!(f, "{}", char::from(*b)),
            Self::Text(s) => f.write_str(s),
            Self::Placeholder(_) => f.write_str(SqlValue::placeholder()),
            Self::Sequence(children) => children
                .iter()
                .try_for_each(|child| fmt::Display::fmt(child, f)),
        }
    }
}

/// Interleaves `separator` between `parts`.
pub(crate) fn separated<I>(parts: I, separator: Cow<'static, str>) -> impl Iterator<Item = Fragment>
where
    I: IntoIterator<Item = Fragment>,
{
    parts.into_iter().enumerate().flat_map(move |(i, part)| {
        let sep = (i != 0).then(|| Fragment::Text(separator.clone()));
        sep.into_iter().chain(iter::once(part))
    })
}
