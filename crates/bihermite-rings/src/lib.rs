//! # bihermite-rings
//!
//! Algebraic structures for bihermite.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `CommutativeRing`, `OrderedRing`
//! - The field of rationals `Q`, the coefficient ring of every moment
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  ├── CommutativeRing
//!  └── OrderedRing
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod rationals;
pub mod traits;

pub use rationals::Q;
pub use traits::{CommutativeRing, OrderedRing, Ring};
