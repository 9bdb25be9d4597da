//! Plain-text rendering of results for the terminal.

use bearing_core::{BearingMethod, FactorResult, FrictionAngle, MethodFactors, MethodMetadata, TableRow};

const RULE: &str = "═══════════════════════════════════════";

/// Format a factor for display; non-finite values are spelled out.
fn fmt_factor(value: f64) -> String {
    if value.is_finite() {
        format!("{:.2}", value)
    } else if value.is_nan() {
        "undefined".to_string()
    } else if value > 0.0 {
        "+inf".to_string()
    } else {
        "-inf".to_string()
    }
}

/// Result banner for a single method.
pub fn factors(method: &str, phi: FrictionAngle, result: &FactorResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", RULE));
    out.push_str("  BEARING CAPACITY FACTORS\n");
    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!("  Method: {}\n", method));
    out.push_str(&format!("  Angle:  {}\n", phi));
    out.push('\n');
    out.push_str(&format!("  Nc = {}\n", fmt_factor(result.nc)));
    out.push_str(&format!("  Nq = {}\n", fmt_factor(result.nq)));
    out.push_str(&format!("  Nγ = {}\n", fmt_factor(result.ngamma)));
    if !result.is_finite() {
        out.push('\n');
        out.push_str("  Note: φ is at or near 90°, factors are degenerate\n");
    }
    out.push_str(&format!("{}\n", RULE));
    out
}

/// Side-by-side factors for every method at one angle.
pub fn comparison(phi: FrictionAngle, all: &[MethodFactors]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Bearing capacity factors at {}\n", phi));
    out.push('\n');
    out.push_str(&format!("{:<10} {:>10} {:>10} {:>10}\n", "Method", "Nc", "Nq", "Nγ"));
    out.push_str(&format!("{}\n", "-".repeat(43)));
    for entry in all {
        out.push_str(&format!(
            "{:<10} {:>10} {:>10} {:>10}\n",
            entry.method.name(),
            fmt_factor(entry.factors.nc),
            fmt_factor(entry.factors.nq),
            fmt_factor(entry.factors.ngamma),
        ));
    }
    out
}

/// One method tabulated over a range of angles.
pub fn table(method: BearingMethod, rows: &[TableRow]) -> String {
    let mut out = String::new();
    let meta = method.metadata();
    out.push_str(&format!("{} ({})\n", meta.display_name, meta.reference.short_form()));
    out.push('\n');
    out.push_str(&format!("{:>8} {:>10} {:>10} {:>10}\n", "φ (°)", "Nc", "Nq", "Nγ"));
    out.push_str(&format!("{}\n", "-".repeat(41)));
    for row in rows {
        out.push_str(&format!(
            "{:>8.2} {:>10} {:>10} {:>10}\n",
            row.phi_deg,
            fmt_factor(row.factors.nc),
            fmt_factor(row.factors.nq),
            fmt_factor(row.factors.ngamma),
        ));
    }
    out
}

/// Method names with their references and Nγ expressions.
pub fn method_list(all: &[MethodMetadata]) -> String {
    let mut out = String::new();
    for meta in all {
        out.push_str(&format!("{:<10} {}\n", meta.method.name(), meta.reference.citation()));
        out.push_str(&format!("{:<10} Nγ = {}\n", "", meta.ngamma_formula));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bearing_core::{compute, compute_all, factor_table};

    #[test]
    fn test_fmt_factor() {
        assert_eq!(fmt_factor(18.4), "18.40");
        assert_eq!(fmt_factor(f64::INFINITY), "+inf");
        assert_eq!(fmt_factor(f64::NEG_INFINITY), "-inf");
        assert_eq!(fmt_factor(f64::NAN), "undefined");
    }

    #[test]
    fn test_factors_output() {
        let result = compute("Meyerhof", 30.0).unwrap();
        let text = factors("Meyerhof", FrictionAngle::new(-30.0), &result);
        assert!(text.contains("Angle:  φ = 30°"));
        assert!(text.contains("Nc = 30.14"));
        assert!(text.contains("Nq = 18.40"));
        assert!(text.contains("Nγ = 15.67"));
        assert!(!text.contains("degenerate"));
    }

    #[test]
    fn test_comparison_has_all_methods() {
        let text = comparison(FrictionAngle::new(30.0), &compute_all(30.0));
        assert!(text.starts_with("Bearing capacity factors at φ = 30°"));
        for method in BearingMethod::ALL {
            assert!(text.contains(method.name()));
        }
    }

    #[test]
    fn test_table_rows() {
        let rows = factor_table(BearingMethod::Ec7, [0.0, 10.0]);
        let text = table(BearingMethod::Ec7, &rows);
        assert!(text.starts_with("Eurocode 7 (EN 1997-1:2004)"));
        assert!(text.contains("5.14"));
    }
}
