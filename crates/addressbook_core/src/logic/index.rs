//! One-based display index into the filtered person list.

use std::fmt::{Display, Formatter};

/// Position of a person as shown to the user.
///
/// Stored zero-based; rendered and parsed one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index {
    zero_based: usize,
}

impl Index {
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    /// Returns `None` for `0`.
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based
            .checked_sub(1)
            .map(|zero_based| Self { zero_based })
    }

    pub fn zero_based(self) -> usize {
        self.zero_based
    }

    pub fn one_based(self) -> usize {
        self.zero_based + 1
    }
}

impl Display for Index {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
