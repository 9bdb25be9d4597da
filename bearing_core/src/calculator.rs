//! # Factor Calculator
//!
//! Evaluates the bearing capacity factors Nc, Nq and Nγ for a friction angle.
//! Every function here is pure: the same method and angle always give
//! bit-identical results, and nothing is cached or shared between calls.
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::calculator::{compute, list_methods};
//!
//! assert!(list_methods().contains(&"Meyerhof"));
//!
//! let factors = compute("Meyerhof", 30.0).unwrap();
//! assert_eq!(factors.nq, 18.40);
//! assert_eq!(factors.nc, 30.14);
//! assert_eq!(factors.ngamma, 15.67);
//!
//! assert!(compute("Prandtl", 30.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::CalcResult;
use crate::methods::formulas::{
    nc_from_nq, ngamma_ec7, ngamma_hansen, ngamma_meyerhof, ngamma_terzaghi, ngamma_vesic,
    nq_reissner, nq_terzaghi,
};
use crate::methods::{BearingMethod, METHOD_NAMES};
use crate::units::FrictionAngle;

/// Bearing capacity factors, each rounded to two decimal places.
///
/// ## JSON Example
///
/// ```json
/// { "Nc": 30.14, "Nq": 18.4, "Ngamma": 15.67 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    /// Cohesion factor
    #[serde(rename = "Nc")]
    pub nc: f64,
    /// Surcharge factor
    #[serde(rename = "Nq")]
    pub nq: f64,
    /// Unit weight factor
    #[serde(rename = "Ngamma")]
    pub ngamma: f64,
}

impl FactorResult {
    /// Round raw factors to the reported precision
    fn rounded(nc: f64, nq: f64, ngamma: f64) -> Self {
        FactorResult {
            nc: round2(nc),
            nq: round2(nq),
            ngamma: round2(ngamma),
        }
    }

    /// The factors as an (Nc, Nq, Nγ) tuple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.nc, self.nq, self.ngamma)
    }

    /// False when an angle near 90° pushed any factor to infinity or NaN
    pub fn is_finite(&self) -> bool {
        self.nc.is_finite() && self.nq.is_finite() && self.ngamma.is_finite()
    }
}

/// Factors for one method, used when comparing methods at the same angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodFactors {
    pub method: BearingMethod,
    #[serde(flatten)]
    pub factors: FactorResult,
}

/// One row of a factor table: the (normalized) angle and its factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Friction angle in degrees
    pub phi_deg: f64,
    #[serde(flatten)]
    pub factors: FactorResult,
}

/// Round half away from zero to two decimals.
///
/// Non-finite values pass through. Negative zero (e.g. from `Nq` landing a
/// hair under 1.0 at φ = 0) comes back as `0.0`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

impl BearingMethod {
    /// Evaluate this method's factors at the given friction angle.
    pub fn factors(&self, angle: impl Into<FrictionAngle>) -> FactorResult {
        let phi = angle.into();

        let nq = if self.uses_reissner_nq() {
            nq_reissner(phi)
        } else {
            nq_terzaghi(phi)
        };
        trace!(method = %self, phi = phi.degrees(), nq, "surcharge factor");

        let nc = nc_from_nq(nq, phi, self.nc_at_zero());

        let ngamma = match self {
            BearingMethod::Terzaghi => ngamma_terzaghi(nq, phi),
            BearingMethod::Meyerhof => ngamma_meyerhof(nq, phi),
            BearingMethod::Vesic => ngamma_vesic(nq, phi),
            BearingMethod::Hansen => ngamma_hansen(nq, phi),
            BearingMethod::Ec7 => ngamma_ec7(nq, phi),
        };

        let result = FactorResult::rounded(nc, nq, ngamma);
        debug!(
            method = %self,
            phi = phi.degrees(),
            nc = result.nc,
            nq = result.nq,
            ngamma = result.ngamma,
            "computed bearing capacity factors"
        );
        result
    }
}

/// Supported method identifiers, for validating caller input.
pub fn list_methods() -> &'static [&'static str] {
    &METHOD_NAMES
}

/// Compute the factors for a method given by name.
///
/// The sign of `angle` is discarded. The only failure is an unrecognized
/// method name; degenerate angles produce extreme or non-finite factors
/// rather than an error.
pub fn compute(method: &str, angle: f64) -> CalcResult<FactorResult> {
    let method: BearingMethod = method.parse()?;
    Ok(method.factors(angle))
}

/// Factors for every method at one angle, in canonical order.
pub fn compute_all(angle: f64) -> Vec<MethodFactors> {
    BearingMethod::ALL
        .iter()
        .map(|&method| MethodFactors {
            method,
            factors: method.factors(angle),
        })
        .collect()
}

/// Factors for one method over a sequence of angles.
pub fn factor_table<I>(method: BearingMethod, angles: I) -> Vec<TableRow>
where
    I: IntoIterator<Item = f64>,
{
    angles
        .into_iter()
        .map(|angle| {
            let phi = FrictionAngle::new(angle);
            TableRow {
                phi_deg: phi.degrees(),
                factors: method.factors(phi),
            }
        })
        .collect()
}
