//! Variable labels for the moment recursion.

use std::fmt;

use crate::error::MomentError;

/// One occurrence of a random variable in a product: `Y1` or `Y2`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum Label {
    /// The first variable, `Y1` (label 1).
    First,
    /// The second variable, `Y2` (label 2).
    Second,
}

impl TryFrom<i64> for Label {
    type Error = MomentError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Label::First),
            2 => Ok(Label::Second),
            other => Err(MomentError::UnsupportedLabel(other)),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::First => write!(f, "1"),
            Label::Second => write!(f, "2"),
        }
    }
}

/// Builds the multiset for `E[Y1^a Y2^b]`: `a` copies of label 1 followed by
/// `b` copies of label 2.
#[must_use]
pub fn labels_for(a: u32, b: u32) -> Vec<Label> {
    std::iter::repeat(Label::First)
        .take(a as usize)
        .chain(std::iter::repeat(Label::Second).take(b as usize))
        .collect()
}

/// Counts the occurrences of each label: `(#1, #2)`.
#[must_use]
pub fn label_counts(labels: &[Label]) -> (u32, u32) {
    labels.iter().fold((0, 0), |(a, b), l| match l {
        Label::First => (a + 1, b),
        Label::Second => (a, b + 1),
    })
}
