//! # Bearing Capacity Formulas
//!
//! Unrounded closed-form expressions for Nq, Nc and Nγ. Every function takes
//! the friction angle in degrees and does its own conversion through
//! [`Degrees`], so callers never touch radians.
//!
//! Nothing here guards against degenerate angles. As φ → 90° `tan φ` blows up
//! and the factors overflow to infinity (or NaN where two infinities meet);
//! those values are passed through untouched.

use crate::units::{Degrees, FrictionAngle};

/// 45° + φ/2, the inclination of the passive wedge boundary
fn wedge_angle(phi: FrictionAngle) -> Degrees {
    Degrees(45.0) + phi.as_degrees() / 2.0
}

// ============================================================================
// Surcharge factor Nq
// ============================================================================

/// Prandtl-Reissner surcharge factor, shared by Meyerhof, Vesic, Hansen and EC7.
///
/// `Nq = e^(π tan φ) · tan²(45° + φ/2)`
pub fn nq_reissner(phi: FrictionAngle) -> f64 {
    let exponential = (std::f64::consts::PI * phi.as_degrees().tan()).exp();
    exponential * wedge_angle(phi).tan().powi(2)
}

/// Terzaghi's surcharge factor (log-spiral with a rough base).
///
/// `Nq = [e^(π(0.75 − φ/360) tan φ)]² / (2 cos²(45° + φ/2))`
pub fn nq_terzaghi(phi: FrictionAngle) -> f64 {
    let exponent = std::f64::consts::PI * (0.75 - phi.degrees() / 360.0) * phi.as_degrees().tan();
    let numerator = exponent.exp().powi(2);
    let denominator = 2.0 * wedge_angle(phi).cos().powi(2);
    numerator / denominator
}

// ============================================================================
// Cohesion factor Nc
// ============================================================================

/// Cohesion factor `Nc = (Nq − 1) cot φ`.
///
/// cot φ is undefined at φ = 0, so the method's limiting value is returned
/// there instead. Nq and Nγ get no such treatment.
pub fn nc_from_nq(nq: f64, phi: FrictionAngle, nc_at_zero: f64) -> f64 {
    if phi.is_zero() {
        nc_at_zero
    } else {
        (nq - 1.0) / phi.as_degrees().tan()
    }
}

// ============================================================================
// Unit weight factor Nγ
// ============================================================================

/// `Nγ = 2(Nq + 1) tan φ / (1 + 0.4 sin 4φ)`
pub fn ngamma_terzaghi(nq: f64, phi: FrictionAngle) -> f64 {
    let phi = phi.as_degrees();
    2.0 * (nq + 1.0) * phi.tan() / (1.0 + 0.4 * (phi * 4.0).sin())
}

/// `Nγ = (Nq − 1) tan(1.4φ)`
pub fn ngamma_meyerhof(nq: f64, phi: FrictionAngle) -> f64 {
    (nq - 1.0) * (phi.as_degrees() * 1.4).tan()
}

/// `Nγ = 2(Nq + 1) tan φ`
pub fn ngamma_vesic(nq: f64, phi: FrictionAngle) -> f64 {
    2.0 * (nq + 1.0) * phi.as_degrees().tan()
}

/// `Nγ = 1.5(Nq − 1) tan φ`
pub fn ngamma_hansen(nq: f64, phi: FrictionAngle) -> f64 {
    1.5 * (nq - 1.0) * phi.as_degrees().tan()
}

/// `Nγ = 2(Nq − 1) tan φ`
pub fn ngamma_ec7(nq: f64, phi: FrictionAngle) -> f64 {
    2.0 * (nq - 1.0) * phi.as_degrees().tan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn phi(deg: f64) -> FrictionAngle {
        FrictionAngle::new(deg)
    }

    #[test]
    fn test_nq_reissner_textbook_values() {
        // Vesic (1973) table: φ = 30° → 18.40, φ = 40° → 64.20
        assert_abs_diff_eq!(nq_reissner(phi(30.0)), 18.40, epsilon = 0.01);
        assert_abs_diff_eq!(nq_reissner(phi(40.0)), 64.20, epsilon = 0.01);
    }

    #[test]
    fn test_nq_at_zero_is_one() {
        assert_abs_diff_eq!(nq_reissner(phi(0.0)), 1.0, epsilon = 1e-12);
        // e^(0)² / (2 · cos² 45°) = 1 / (2 · 0.5)
        assert_abs_diff_eq!(nq_terzaghi(phi(0.0)), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nq_terzaghi() {
        assert_abs_diff_eq!(nq_terzaghi(phi(20.0)), 7.44, epsilon = 0.01);
        assert_abs_diff_eq!(nq_terzaghi(phi(30.0)), 22.46, epsilon = 0.01);
    }

    #[test]
    fn test_nc_limit_at_zero() {
        assert_eq!(nc_from_nq(1.0, phi(0.0), 5.14), 5.14);
        assert_eq!(nc_from_nq(1.0, phi(0.0), 5.71), 5.71);
    }

    #[test]
    fn test_nc_uses_cotangent() {
        let nq = nq_reissner(phi(30.0));
        let expected = (nq - 1.0) * 3.0_f64.sqrt();
        assert_abs_diff_eq!(nc_from_nq(nq, phi(30.0), 5.14), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_ngamma_formulas_vanish_at_zero() {
        let p = phi(0.0);
        assert_abs_diff_eq!(ngamma_terzaghi(1.0, p), 0.0);
        assert_abs_diff_eq!(ngamma_meyerhof(1.0, p), 0.0);
        assert_abs_diff_eq!(ngamma_vesic(1.0, p), 0.0);
        assert_abs_diff_eq!(ngamma_hansen(1.0, p), 0.0);
        assert_abs_diff_eq!(ngamma_ec7(1.0, p), 0.0);
    }

    #[test]
    fn test_ngamma_ratios() {
        let p = phi(35.0);
        let nq = nq_reissner(p);
        // Hansen and EC7 differ only by the 1.5 vs 2 multiplier
        assert_abs_diff_eq!(ngamma_ec7(nq, p) / ngamma_hansen(nq, p), 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_near_vertical_angle_is_not_clamped() {
        let nq = nq_reissner(phi(90.0));
        assert!(nq.abs() > 1e10 || !nq.is_finite());
    }
}
