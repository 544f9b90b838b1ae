use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::constants::{self, EPSILON};
use crate::error::{QuatError, Result};

/// Quaternion w + xi + yj + zk over f64.
///
/// A plain value: every operation takes `self` by copy and returns a fresh
/// quaternion. Equality is exact component equality; use the `approx` traits
/// for anything routed through division or square roots.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Imaginary (vector) part of a quaternion.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Imaginary {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    pub const ZERO: Self = constants::ZERO;
    pub const ONE: Self = constants::ONE;
    pub const I: Self = constants::I;
    pub const J: Self = constants::J;
    pub const K: Self = constants::K;

    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// True when every component equals zero. `-0.0` counts as zero.
    pub fn is_zero(self) -> bool {
        self.w == 0.0 && self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// Component-wise scaling by a real number.
    pub fn scale(self, a: f64) -> Self {
        Self {
            w: a * self.w,
            x: a * self.x,
            y: a * self.y,
            z: a * self.z,
        }
    }

    /// w² + x² + y² + z²
    pub fn squared_norm(self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length of the quaternion as a 4-vector.
    pub fn norm(self) -> f64 {
        self.squared_norm().sqrt()
    }

    /// Hamilton product `self * rhs`. Not commutative.
    pub fn multiply(self, rhs: Self) -> Self {
        Self {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }

    /// (w, -x, -y, -z)
    pub fn conjugate(self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Multiplicative inverse: conjugate scaled by 1 / |q|².
    ///
    /// Fails with [`QuatError::DivisionByZero`] for the zero quaternion. The
    /// check is exact; tiny nonzero inputs never error, but once |q|² underflows
    /// to zero the result holds infinite and NaN components.
    pub fn inverse(self) -> Result<Self> {
        if self.is_zero() {
            tracing::debug!("inverse of zero quaternion requested");
            return Err(QuatError::DivisionByZero);
        }
        Ok(self.conjugate().scale(1.0 / self.squared_norm()))
    }

    /// Right division `self * rhs⁻¹`. Fails when `rhs` is zero.
    pub fn divide(self, rhs: Self) -> Result<Self> {
        Ok(self.multiply(rhs.inverse()?))
    }

    /// Scale to unit norm. Fails for the zero quaternion.
    pub fn normalise(self) -> Result<Self> {
        if self.is_zero() {
            tracing::debug!("normalisation of zero quaternion requested");
            return Err(QuatError::DivisionByZero);
        }
        Ok(self.scale(1.0 / self.norm()))
    }

    /// Real (scalar) part.
    pub fn re(self) -> f64 {
        self.w
    }

    /// Imaginary (vector) part.
    pub fn im(self) -> Imaginary {
        Imaginary {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Convert to [w, x, y, z].
    pub fn to_array(self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Create from [w, x, y, z].
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(arr: [f64; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            w: self.w + rhs.w,
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            w: -self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Hamilton product (quaternion multiplication).
impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(rhs);
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, a: f64) -> Self {
        self.scale(a)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        q.scale(self)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Quaternion {
    fn default_max_ulps() -> u32 {
        4
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps)
            && self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
