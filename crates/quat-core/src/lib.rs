//! Quaternion algebra over f64.
//!
//! A quaternion q = w + xi + yj + zk is a plain `Copy` value. Addition,
//! subtraction, negation and the Hamilton product are exposed through the
//! `std::ops` traits; everything else is an inherent method. Multiplication
//! is not commutative: ij = k but ji = -k.
//!
//! The only failure is division by zero: [`Quaternion::inverse`],
//! [`Quaternion::divide`] and [`Quaternion::normalise`] return
//! [`QuatError::DivisionByZero`] when handed the zero quaternion.
//!
//! Zero I/O. Pure math with no opinions about where the numbers come from.

pub mod constants;
pub mod error;
pub mod format;
pub mod quaternion;

pub use constants::{EPSILON, I, J, K, ONE, ZERO};
pub use error::{QuatError, Result};
pub use format::QFormat;
pub use quaternion::{Imaginary, Quaternion};
