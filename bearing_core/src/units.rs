//! # Unit Types
//!
//! Type-safe wrappers for angles. Every bearing capacity formula is written
//! in degrees but `f64` trigonometry works in radians, so the conversion is
//! pinned down here once instead of being repeated as `* PI / 180.0` inside
//! each formula.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::units::{Degrees, FrictionAngle, Radians};
//!
//! let right = Degrees(90.0);
//! let rad: Radians = right.into();
//! assert!((rad.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! // Friction angles are always stored as a magnitude
//! let phi = FrictionAngle::new(-30.0);
//! assert_eq!(phi.degrees(), 30.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul};

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl Degrees {
    /// Sine of the angle
    pub fn sin(self) -> f64 {
        Radians::from(self).0.sin()
    }

    /// Cosine of the angle
    pub fn cos(self) -> f64 {
        Radians::from(self).0.cos()
    }

    /// Tangent of the angle
    pub fn tan(self) -> f64 {
        Radians::from(self).0.tan()
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Mul<f64> for Degrees {
    type Output = Degrees;
    fn mul(self, rhs: f64) -> Degrees {
        Degrees(self.0 * rhs)
    }
}

impl Div<f64> for Degrees {
    type Output = Degrees;
    fn div(self, rhs: f64) -> Degrees {
        Degrees(self.0 / rhs)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

// ============================================================================
// Friction Angle
// ============================================================================

/// Soil angle of internal friction φ.
///
/// Construction takes the absolute value so a sign slip at the caller cannot
/// produce physically meaningless factors. The upper end is not bounded:
/// angles approaching 90° drive `tan φ` to infinity and the resulting factors
/// are returned as-is.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct FrictionAngle(Degrees);

impl FrictionAngle {
    /// Create a friction angle from a value in degrees (sign is discarded)
    pub fn new(degrees: f64) -> Self {
        FrictionAngle(Degrees(degrees.abs()))
    }

    /// The angle in degrees
    pub fn degrees(self) -> f64 {
        self.0 .0
    }

    /// The angle as a [`Degrees`] value, for trigonometry
    pub fn as_degrees(self) -> Degrees {
        self.0
    }

    /// φ = 0, where cot φ is undefined and Nc falls back to a limit value
    pub fn is_zero(self) -> bool {
        self.degrees() == 0.0
    }
}

impl From<f64> for FrictionAngle {
    fn from(degrees: f64) -> Self {
        FrictionAngle::new(degrees)
    }
}

impl From<FrictionAngle> for f64 {
    fn from(phi: FrictionAngle) -> Self {
        phi.degrees()
    }
}

impl From<Degrees> for FrictionAngle {
    fn from(deg: Degrees) -> Self {
        FrictionAngle::new(deg.0)
    }
}

impl fmt::Display for FrictionAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "φ = {}", self.0)
    }
}
