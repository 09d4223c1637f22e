//! # bihermite
//!
//! Exact moments of a centred bivariate Gaussian and bivariate Hermite
//! polynomials, numerically or symbolically.
//!
//! ## Features
//!
//! - **Pairing Recursion**: Wick/Isserlis expansion of `E[Y1^a Y2^b]` into
//!   the second moments `mu20`, `mu02`, `mu11`
//! - **Hermite Polynomials**: `H_{n,m}(y1, y2)` as the real part of the
//!   complex binomial expansion, resolved or with placeholder moments
//! - **Exact Arithmetic**: arbitrary precision rationals throughout; floats
//!   only on request
//! - **Symbolic Values**: canonical sparse polynomials over named symbols
//!
//! ## Quick Start
//!
//! ```rust
//! use bihermite::prelude::*;
//!
//! let mut session = MomentSession::default();
//! session.set_base_moments(BaseMoments::parse("2/3", "2/3", "-1/3").unwrap());
//!
//! let third = Value::parse("1/3").unwrap();
//! let h = session.hermite(1, 1, &third, &third, true).unwrap();
//! assert_eq!(h.to_rational(), Some(Rational::from_i64(4, 9)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use bihermite_integers as integers;
pub use bihermite_moments as moments;
pub use bihermite_poly as poly;
pub use bihermite_rings as rings;

/// Prelude module for convenient imports.
///
/// Symbols are created through [`Value::symbol`](bihermite_moments::Value::symbol),
/// which reports bad names as [`MomentError::InvalidSymbol`](bihermite_moments::MomentError::InvalidSymbol).
pub mod prelude {
    pub use bihermite_integers::{Integer, Rational};
    pub use bihermite_moments::{
        BaseMoments, Label, MomentEngine, MomentError, MomentSession, SessionConfig, Value,
    };
    pub use bihermite_poly::SparsePoly;
    pub use bihermite_rings::{Ring, Q};
}
