//! # bihermite-poly
//!
//! Sparse multivariate polynomial arithmetic over named symbols.
//!
//! This crate provides:
//! - Named indeterminates (`Symbol`)
//! - Sparse power products (`Monomial`) with graded lexicographic order
//! - Sparse multivariate polynomials (`SparsePoly`) kept in canonical
//!   expanded form, with simultaneous substitution
//!
//! Canonical form means structural equality is mathematical equality, which
//! is what lets symbolic moments be compared exactly.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod monomial;
pub mod sparse;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use monomial::Monomial;
pub use sparse::SparsePoly;
pub use symbol::Symbol;
