use crate::quaternion::Quaternion;

/// Additive identity: 0 + 0i + 0j + 0k
pub const ZERO: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 0.0);

/// Multiplicative identity: 1 + 0i + 0j + 0k
pub const ONE: Quaternion = Quaternion::new(1.0, 0.0, 0.0, 0.0);

/// Unit imaginary basis element i
pub const I: Quaternion = Quaternion::new(0.0, 1.0, 0.0, 0.0);

/// Unit imaginary basis element j
pub const J: Quaternion = Quaternion::new(0.0, 0.0, 1.0, 0.0);

/// Unit imaginary basis element k
pub const K: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

/// Default tolerance for approximate quaternion comparison
pub const EPSILON: f64 = 1e-10;
