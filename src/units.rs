use std::{
    fmt::{Debug, Display},
    iter::Sum,
    num::ParseIntError,
    ops::AddAssign,
    str::FromStr,
};

use thiserror::Error;
use tracing::warn;

/// Represents a number of cars sold.
///
/// Sales figures in the input often carry thousands separators (`"1,000"`),
/// so the [`FromStr`] implementation strips commas before parsing.
#[derive(Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Units(u64);

impl Units {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for Units {
    fn from(n: u64) -> Self {
        Self(n)
    }
}

impl Debug for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Why a sales figure could not be parsed as [`Units`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseUnitsError {
    #[error("expected only digits and commas")]
    NotDigits,
    #[error(transparent)]
    Int(#[from] ParseIntError),
}

impl FromStr for Units {
    type Err = ParseUnitsError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let digits = s.trim().replace(',', "");
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseUnitsError::NotDigits);
        }
        Ok(Self(digits.parse()?))
    }
}

/// Addition saturates at `u64::MAX` rather than overflowing.
impl AddAssign for Units {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.checked_add(rhs.0).unwrap_or_else(|| {
            warn!("sales total overflowed, capping at {}", u64::MAX);
            u64::MAX
        });
    }
}

impl Sum for Units {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |mut acc, n| {
            acc += n;
            acc
        })
    }
}

impl<'a> Sum<&'a Units> for Units {
    fn sum<I: Iterator<Item = &'a Units>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
