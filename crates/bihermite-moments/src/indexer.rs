//! Exponent-indexed joint moments `mu_{a,b} = E[Y1^a Y2^b]`.

use crate::engine::MomentEngine;
use crate::error::{MomentError, Result};
use crate::label::labels_for;
use crate::value::Value;

impl MomentEngine<'_> {
    /// Computes `E[Y1^a Y2^b]` through the pairing recursion.
    pub fn joint_moment(&mut self, a: u32, b: u32) -> Value {
        self.moment_of(&labels_for(a, b))
    }
}

/// Validates a caller-supplied index.
///
/// # Errors
///
/// Returns [`MomentError::InvalidIndex`] for negative values or values that
/// do not fit in a `u32`.
pub fn checked_index(name: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| MomentError::InvalidIndex { name, value })
}
