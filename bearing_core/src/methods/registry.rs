//! # Method Registry
//!
//! Metadata for each bearing capacity method: where it comes from and which
//! expression it uses for each factor. Used for reports, the `bearing methods`
//! listing, and the generated markdown reference.
//!
//! ## Usage
//!
//! ```rust
//! use bearing_core::methods::BearingMethod;
//!
//! let meta = BearingMethod::Meyerhof.metadata();
//! println!("{}: Nγ = {}", meta.display_name, meta.ngamma_formula);
//! println!("Source: {}", meta.reference.citation());
//! ```

use serde::Serialize;

use super::BearingMethod;

// ============================================================================
// Literature References
// ============================================================================

/// Source publication or design code for a method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum CodeReference {
    /// Journal paper, bulletin or book
    Publication {
        author: &'static str,
        year: u16,
        title: &'static str,
    },
    /// Eurocode part and annex
    Eurocode {
        standard: &'static str,
        annex: &'static str,
    },
}

impl CodeReference {
    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Publication { author, year, title } => {
                format!("{} ({}), {}", author, year, title)
            }
            CodeReference::Eurocode { standard, annex } => {
                format!("{} Annex {}", standard, annex)
            }
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> String {
        match self {
            CodeReference::Publication { author, year, .. } => format!("{} {}", author, year),
            CodeReference::Eurocode { standard, .. } => (*standard).to_string(),
        }
    }
}

// ============================================================================
// Method Metadata
// ============================================================================

const NQ_REISSNER: &str = "e^(π·tan φ) · tan²(45° + φ/2)";
const NQ_TERZAGHI: &str = "[e^(π(0.75 − φ/360)·tan φ)]² / (2·cos²(45° + φ/2))";
const NC_COT: &str = "(Nq − 1)·cot φ";

/// Everything needed to describe a method in a report.
#[derive(Debug, Clone, Serialize)]
pub struct MethodMetadata {
    /// The method this describes
    pub method: BearingMethod,
    /// Human-readable name (e.g., "Brinch Hansen")
    pub display_name: &'static str,
    /// Source reference
    pub reference: CodeReference,
    /// Nq expression in plain text
    pub nq_formula: &'static str,
    /// Nc expression in plain text (valid for φ > 0)
    pub nc_formula: &'static str,
    /// Nγ expression in plain text
    pub ngamma_formula: &'static str,
    /// Nc used at φ = 0
    pub nc_at_zero: f64,
    /// Notes on the method's assumptions
    pub notes: &'static str,
}

impl BearingMethod {
    /// Full metadata for this method
    pub fn metadata(&self) -> MethodMetadata {
        let nq_formula = if self.uses_reissner_nq() { NQ_REISSNER } else { NQ_TERZAGHI };

        let (display_name, reference, ngamma_formula, notes) = match self {
            BearingMethod::Terzaghi => (
                "Terzaghi",
                CodeReference::Publication {
                    author: "Terzaghi, K.",
                    year: 1943,
                    title: "Theoretical Soil Mechanics",
                },
                "2(Nq + 1)·tan φ / (1 + 0.4·sin 4φ)",
                "Strip footing, rough base, general shear failure",
            ),
            BearingMethod::Meyerhof => (
                "Meyerhof",
                CodeReference::Publication {
                    author: "Meyerhof, G.G.",
                    year: 1963,
                    title: "Some recent research on the bearing capacity of foundations",
                },
                "(Nq − 1)·tan(1.4φ)",
                "Includes shear resistance of soil above footing level",
            ),
            BearingMethod::Vesic => (
                "Vesic",
                CodeReference::Publication {
                    author: "Vesic, A.S.",
                    year: 1973,
                    title: "Analysis of ultimate loads of shallow foundations",
                },
                "2(Nq + 1)·tan φ",
                "Smooth base assumption for Nγ",
            ),
            BearingMethod::Hansen => (
                "Brinch Hansen",
                CodeReference::Publication {
                    author: "Hansen, J.B.",
                    year: 1970,
                    title: "A revised and extended formula for bearing capacity",
                },
                "1.5(Nq − 1)·tan φ",
                "Conservative Nγ, widely used with depth and inclination factors",
            ),
            BearingMethod::Ec7 => (
                "Eurocode 7",
                CodeReference::Eurocode {
                    standard: "EN 1997-1:2004",
                    annex: "D",
                },
                "2(Nq − 1)·tan φ",
                "Drained conditions, rough base",
            ),
        };

        MethodMetadata {
            method: *self,
            display_name,
            reference,
            nq_formula,
            nc_formula: NC_COT,
            ngamma_formula,
            nc_at_zero: self.nc_at_zero(),
            notes,
        }
    }
}

/// Metadata for every method, in canonical order
pub fn all_metadata() -> Vec<MethodMetadata> {
    BearingMethod::ALL.iter().map(|m| m.metadata()).collect()
}

// ============================================================================
// Documentation Output
// ============================================================================

/// Generate a markdown reference of all methods and their formulas.
pub fn generate_methods_markdown() -> String {
    let mut output = String::with_capacity(4_000);

    output.push_str(
        r#"# Bearing Capacity Factor Methods

All angles in degrees. Factors are rounded to two decimal places.
At φ = 0 the cotangent in Nc is undefined and the limit value is used instead.

| Method | Nq | Nc | Nc (φ = 0) | Nγ | Reference |
|--------|----|----|------------|----|-----------|
"#,
    );

    for meta in all_metadata() {
        output.push_str(&format!(
            "| {} | `{}` | `{}` | {:.2} | `{}` | {} |\n",
            meta.display_name,
            meta.nq_formula,
            meta.nc_formula,
            meta.nc_at_zero,
            meta.ngamma_formula,
            meta.reference.citation(),
        ));
    }

    output.push_str("\n## Notes\n\n");
    for meta in all_metadata() {
        output.push_str(&format!("- **{}**: {}\n", meta.display_name, meta.notes));
    }

    output
}
