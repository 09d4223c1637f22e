//! # bihermite-moments
//!
//! Joint moments of a centred bivariate Gaussian and the bivariate Hermite
//! polynomials built from them.
//!
//! This crate provides:
//! - The pairing recursion `E[X1 ... Xk]` over labels `Y1`/`Y2`
//!   ([`MomentEngine::moment_of`])
//! - Exponent-indexed moments `mu_{a,b} = E[Y1^a Y2^b]`
//!   ([`MomentEngine::joint_moment`])
//! - `H_{n,m}(y1, y2)` from the complex binomial expansion, fully resolved
//!   or with placeholder moments ([`MomentEngine::hermite`])
//! - Sessions that own the base moments `mu20`, `mu02`, `mu11`
//!   ([`MomentSession`])
//!
//! Every quantity is a [`Value`]: an exact polynomial over named symbols
//! with rational coefficients. Numeric base moments give constant values;
//! symbolic ones give polynomials in `mu20`, `mu02` and `mu11`.
//!
//! ## Example
//!
//! ```
//! use bihermite_moments::{BaseMoments, MomentSession, Value};
//!
//! let session = MomentSession::with_base_moments(BaseMoments::symbolic());
//! let y1 = Value::symbol("y1").unwrap();
//! let y2 = Value::symbol("y2").unwrap();
//!
//! let h = session.hermite(1, 1, &y1, &y2, true).unwrap();
//! assert_eq!(h.to_string(), "y1*y2 - mu11");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod engine;
pub mod error;
pub mod hermite;
pub mod indexer;
pub mod label;
pub mod session;
pub mod value;

#[cfg(test)]
mod proptests;

pub use config::{BaseMoments, SessionConfig};
pub use engine::MomentEngine;
pub use error::{MomentError, Result};
pub use hermite::{hermite_terms, parse_placeholder, placeholder_name, HermiteTerm};
pub use label::Label;
pub use session::MomentSession;
pub use value::Value;
