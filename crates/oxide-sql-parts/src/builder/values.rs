//! Incremental `VALUES (..), (..)` lists.

use std::borrow::Cow;
use std::iter;

use super::fragment::{separated, Fragment};
use super::value::SqlValue;

/// Accumulates rows for a `VALUES` list.
#[derive(Debug, Clone, Default)]
pub struct ValuesBuilder {
    rows: Vec<Fragment>,
}

impl ValuesBuilder {
    /// Creates an empty VALUES list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one parenthesised row.
    pub fn append(&mut self, row: impl IntoIterator<Item = Fragment>) -> &mut Self {
        self.rows.push(Fragment::sequence(
            iter::once(Fragment::byte(b'('))
                .chain(separated(row, Cow::Borrowed(", ")))
                .chain(iter::once(Fragment::byte(b')'))),
        ));
        self
    }

    /// Returns the number of rows appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows have been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the list as one fragment.
    #[must_use]
    pub fn to_fragment(&self) -> Fragment {
        Fragment::sequence(
            iter::once(Fragment::text("VALUES "))
                .chain(separated(self.rows.iter().cloned(), Cow::Borrowed(", "))),
        )
    }

    /// Builds the list and returns SQL with parameters.
    #[must_use]
    pub fn build(&self) -> (String, Vec<SqlValue>) {
        self.to_fragment().build()
    }
}
