//! Text rendering of quaternions.
//!
//! Four layouts are supported, selected by [`QFormat`]:
//!
//! ```text
//! Ijk   0+1i+2j+3k
//! Row   (0, 1, 2, 3)
//! Col   [0]
//!       [1]
//!       [2]
//!       [3]
//! Json  { w: 0, x: 1, y: 2, z: 3 }
//! ```
//!
//! `Json` is a debug layout with bare keys, not parseable JSON.

use std::fmt;
use std::str::FromStr;

use crate::error::QuatError;
use crate::quaternion::Quaternion;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QFormat {
    #[default]
    Ijk,
    Row,
    Col,
    Json,
}

impl QFormat {
    pub fn name(self) -> &'static str {
        match self {
            QFormat::Ijk => "ijk",
            QFormat::Row => "row",
            QFormat::Col => "col",
            QFormat::Json => "json",
        }
    }
}

impl FromStr for QFormat {
    type Err = QuatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ijk" => Ok(QFormat::Ijk),
            "row" => Ok(QFormat::Row),
            "col" => Ok(QFormat::Col),
            "json" => Ok(QFormat::Json),
            _ => Err(QuatError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for QFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render a single component.
///
/// Without a precision this is the shortest round-trip decimal, switching to
/// exponent form (`1e+21`, `1e-7`) when the magnitude is at least 1e21 or
/// below 1e-6. `-0` collapses to `0` and infinities are spelled out.
fn component(v: f64, precision: Option<usize>) -> String {
    if v == f64::INFINITY {
        return "Infinity".to_string();
    }
    if v == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    // Collapses -0 to 0.
    let v = if v == 0.0 { 0.0 } else { v };
    if let Some(p) = precision {
        return format!("{v:.p$}");
    }
    let magnitude = v.abs();
    if v != 0.0 && (magnitude >= 1e21 || magnitude < 1e-6) {
        let s = format!("{v:e}");
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        }
    } else {
        v.to_string()
    }
}

impl Quaternion {
    /// Write `self` in the given layout to any formatter.
    pub fn render(self, format: QFormat, f: &mut impl fmt::Write) -> fmt::Result {
        self.render_with_precision(format, None, f)
    }

    fn render_with_precision(
        self,
        format: QFormat,
        precision: Option<usize>,
        f: &mut impl fmt::Write,
    ) -> fmt::Result {
        let (w, x, y, z) = (
            component(self.w, precision),
            component(self.x, precision),
            component(self.y, precision),
            component(self.z, precision),
        );
        match format {
            QFormat::Ijk => write!(f, "{w}+{x}i+{y}j+{z}k"),
            QFormat::Row => write!(f, "({w}, {x}, {y}, {z})"),
            QFormat::Col => write!(f, "[{w}]\n[{x}]\n[{y}]\n[{z}]"),
            QFormat::Json => write!(f, "{{ w: {w}, x: {x}, y: {y}, z: {z} }}"),
        }
    }

    /// Render to a new string in the given layout.
    pub fn to_string_with(self, format: QFormat) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(format, &mut out);
        out
    }
}

/// Renders in the `Ijk` layout. A precision (`{:.2}`) applies to every
/// component; other flags are ignored.
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_with_precision(QFormat::Ijk, f.precision(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ONE, ZERO};

    const Q: Quaternion = Quaternion::new(0.0, 1.0, 2.0, 3.0);

    #[test]
    fn test_ijk() {
        assert_eq!(Q.to_string_with(QFormat::Ijk), "0+1i+2j+3k");
    }

    #[test]
    fn test_row() {
        assert_eq!(Q.to_string_with(QFormat::Row), "(0, 1, 2, 3)");
    }

    #[test]
    fn test_col() {
        assert_eq!(Q.to_string_with(QFormat::Col), "[0]\n[1]\n[2]\n[3]");
    }

    #[test]
    fn test_json() {
        assert_eq!(
            Q.to_string_with(QFormat::Json),
            "{ w: 0, x: 1, y: 2, z: 3 }"
        );
    }

    #[test]
    fn test_display_is_ijk() {
        assert_eq!(Q.to_string(), "0+1i+2j+3k");
        assert_eq!(format!("{ONE}"), "1+0i+0j+0k");
    }

    #[test]
    fn test_negative_and_fractional_components() {
        let q = Quaternion::new(-38.0, 0.5, -0.25, 16.0);
        assert_eq!(q.to_string_with(QFormat::Ijk), "-38+0.5i+-0.25j+16k");
        assert_eq!(q.to_string_with(QFormat::Row), "(-38, 0.5, -0.25, 16)");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        assert_eq!(
            ZERO.conjugate().to_string_with(QFormat::Row),
            "(0, 0, 0, 0)"
        );
    }

    #[test]
    fn test_non_finite_components() {
        let q = Quaternion::new(f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 1.0);
        assert_eq!(
            q.to_string_with(QFormat::Json),
            "{ w: Infinity, x: -Infinity, y: NaN, z: 1 }"
        );
    }

    #[test]
    fn test_exponent_form_at_extreme_magnitudes() {
        let q = Quaternion::new(1e21, 1e-7, 123.456, -2.5e-8);
        assert_eq!(
            q.to_string_with(QFormat::Row),
            "(1e+21, 1e-7, 123.456, -2.5e-8)"
        );
        let max = Quaternion::new(f64::MAX, 1e20, 1e-6, 0.0);
        assert_eq!(
            max.to_string_with(QFormat::Row),
            "(1.7976931348623157e+308, 100000000000000000000, 0.000001, 0)"
        );
    }

    #[test]
    fn test_display_precision() {
        let q = Quaternion::new(1.0 / 3.0, 2.0, -0.5, -0.0);
        assert_eq!(format!("{q:.2}"), "0.33+2.00i+-0.50j+0.00k");
        assert_eq!(format!("{q}"), q.to_string_with(QFormat::Ijk));
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("ijk".parse::<QFormat>(), Ok(QFormat::Ijk));
        assert_eq!("ROW".parse::<QFormat>(), Ok(QFormat::Row));
        assert_eq!(" Col ".parse::<QFormat>(), Ok(QFormat::Col));
        assert_eq!("json".parse::<QFormat>(), Ok(QFormat::Json));
        assert_eq!(
            "polar".parse::<QFormat>(),
            Err(QuatError::UnknownFormat("polar".to_string()))
        );
    }

    #[test]
    fn test_format_name_roundtrip() {
        for format in [QFormat::Ijk, QFormat::Row, QFormat::Col, QFormat::Json] {
            assert_eq!(format.to_string().parse::<QFormat>(), Ok(format));
        }
    }
}
