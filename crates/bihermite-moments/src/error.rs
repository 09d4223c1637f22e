//! Error types for moment and Hermite computations.

use bihermite_integers::ParseRationalError;
use thiserror::Error;

/// Errors that can occur while configuring a session or computing a moment
/// or Hermite polynomial.
///
/// Every check runs before any recursion starts, so a failed call never
/// produces a partial value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MomentError {
    /// A degree or exponent index is negative or too large.
    #[error("index {name} = {value} is invalid; indices must be non-negative and fit in 32 bits")]
    InvalidIndex {
        /// Parameter name (`a`, `b`, `n` or `m`).
        name: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// A computation was requested before base moments were set.
    #[error("base moments have not been set for this session")]
    MissingBaseMoments,

    /// A base moment is neither a rational literal nor a symbol.
    #[error("malformed base moment {name}: {reason}")]
    MalformedBaseMoment {
        /// Which base moment (`mu20`, `mu02` or `mu11`).
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A symbol name is not an identifier.
    #[error("'{0}' is not a valid symbol name")]
    InvalidSymbol(String),

    /// A numeric literal failed to parse.
    #[error(transparent)]
    InvalidRational(#[from] ParseRationalError),

    /// A raw label other than 1 or 2.
    #[error("unsupported moment label {0}; labels must be 1 or 2")]
    UnsupportedLabel(i64),

    /// The total order exceeds the session limit.
    #[error("moment order {order} exceeds the configured limit of {limit}")]
    OrderLimitExceeded {
        /// Total order requested.
        order: u64,
        /// The configured maximum.
        limit: u32,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MomentError>;
