//! Operators over fragments.
//!
//! Every operator consumes its operands and returns `left ++ op ++ right`.
//! The free functions [`and`], [`or`] and [`xor`] render exactly like the
//! method forms.

use std::borrow::Cow;
use std::iter;
use std::ops::{Add, Sub};

use super::fragment::{separated, Fragment};

impl Fragment {
    fn binary(self, op: &'static str, rhs: Self) -> Self {
        self.append([Self::text(op), rhs])
    }

    /// Appends ` AS name`.
    #[must_use]
    pub fn alias(self, name: &str) -> Self {
        self.append([Self::text(format!(" AS {name}"))])
    }

    /// Creates an equality expression.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn eq(self, rhs: Self) -> Self {
        self.binary(" = ", rhs)
    }

    /// Creates an inequality expression.
    #[must_use]
    pub fn not_eq(self, rhs: Self) -> Self {
        self.binary(" != ", rhs)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, rhs: Self) -> Self {
        self.binary(" < ", rhs)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, rhs: Self) -> Self {
        self.binary(" <= ", rhs)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, rhs: Self) -> Self {
        self.binary(" > ", rhs)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, rhs: Self) -> Self {
        self.binary(" >= ", rhs)
    }

    /// Creates an IS expression.
    #[must_use]
    pub fn is(self, rhs: Self) -> Self {
        self.binary(" IS ", rhs)
    }

    /// Creates an IS NOT expression.
    #[must_use]
    pub fn is_not(self, rhs: Self) -> Self {
        self.binary(" IS NOT ", rhs)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, rhs: Self) -> Self {
        self.binary(" AND ", rhs)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, rhs: Self) -> Self {
        self.binary(" OR ", rhs)
    }

    /// Creates an XOR expression.
    #[must_use]
    pub fn xor(self, rhs: Self) -> Self {
        self.binary(" XOR ", rhs)
    }

    /// Creates an IN expression.
    ///
    /// With no candidates this renders `IN (NULL)`, which is valid SQL and
    /// never true.
    #[must_use]
    pub fn in_list(self, candidates: impl IntoIterator<Item = Self>) -> Self {
        let mut candidates = candidates.into_iter().peekable();
        if candidates.peek().is_none() {
            return self.append([Self::text(" IN (NULL)")]);
        }
        self.append(
            iter::once(Self::text(" IN ("))
                .chain(separated(candidates, Cow::Borrowed(", ")))
                .chain(iter::once(Self::byte(b')'))),
        )
    }

    /// Creates a NOT IN expression.
    #[must_use]
    pub fn not_in_list(self, candidates: impl IntoIterator<Item = Self>) -> Self {
        self.append([Self::text(" NOT")]).in_list(candidates)
    }
}

impl Add for Fragment {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.binary(" + ", rhs)
    }
}

impl Sub for Fragment {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.binary(" - ", rhs)
    }
}

/// Creates `lhs AND rhs`.
#[must_use]
pub fn and(lhs: Fragment, rhs: Fragment) -> Fragment {
    Fragment::sequence([lhs, Fragment::text(" AND "), rhs])
}

/// Creates `lhs OR rhs`.
#[must_use]
pub fn or(lhs: Fragment, rhs: Fragment) -> Fragment {
    Fragment::sequence([lhs, Fragment::text(" OR "), rhs])
}

/// Creates `lhs XOR rhs`.
#[must_use]
pub fn xor(lhs: Fragment, rhs: Fragment) -> Fragment {
    Fragment::sequence([lhs, Fragment::text(" XOR "), rhs])
}

/// Joins fragments with `", "`.
#[must_use]
pub fn list(parts: impl IntoIterator<Item = Fragment>) -> Fragment {
    join(parts, ", ")
}

/// Joins fragments with an arbitrary separator.
#[must_use]
pub fn join(
    parts: impl IntoIterator<Item = Fragment>,
    separator: impl Into<Cow<'static, str>>,
) -> Fragment {
    Fragment::sequence(separated(parts, separator.into()))
}
