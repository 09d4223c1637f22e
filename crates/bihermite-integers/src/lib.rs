//! # bihermite-integers
//!
//! Exact integer and rational arithmetic for bihermite.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`) with binomial coefficients
//! - Arbitrary precision rationals (`Rational`) with parsing and a
//!   display-only floating point approximation
//!
//! Moments and Hermite coefficients grow quickly with the order, so nothing
//! here is allowed to overflow or round.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::{ParseRationalError, Rational};
