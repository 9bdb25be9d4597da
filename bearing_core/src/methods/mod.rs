//! # Bearing Capacity Methods
//!
//! The five classical methods for shallow foundation bearing capacity
//! factors. All of them follow the same three steps (Nq from φ, Nc from Nq,
//! Nγ from Nq and φ) and differ only in which expression is used at each step.
//!
//! ## Modules
//!
//! - [`formulas`] - The unrounded closed-form expressions
//! - [`registry`] - Method metadata (references, formulas) and documentation output
//!
//! ## Example
//!
//! ```rust
//! use bearing_core::methods::BearingMethod;
//!
//! let method: BearingMethod = "EC7".parse().unwrap();
//! assert_eq!(method, BearingMethod::Ec7);
//! assert_eq!(method.name(), "EC7");
//! assert!("ec7".parse::<BearingMethod>().is_err());
//! ```

pub mod formulas;
pub mod registry;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalcError;

pub use registry::{generate_methods_markdown, CodeReference, MethodMetadata};

/// Canonical method identifiers, in the same order as [`BearingMethod::ALL`].
pub const METHOD_NAMES: [&str; 5] = ["Terzaghi", "Meyerhof", "Vesic", "Hansen", "EC7"];

/// A bearing capacity factor method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BearingMethod {
    /// Terzaghi (1943), general shear failure with a rough footing base
    Terzaghi,
    /// Meyerhof (1963)
    Meyerhof,
    /// Vesic (1973)
    Vesic,
    /// Brinch Hansen (1970)
    Hansen,
    /// Eurocode 7, EN 1997-1 Annex D
    #[serde(rename = "EC7")]
    Ec7,
}

impl BearingMethod {
    /// Every method, in canonical order
    pub const ALL: [BearingMethod; 5] = [
        BearingMethod::Terzaghi,
        BearingMethod::Meyerhof,
        BearingMethod::Vesic,
        BearingMethod::Hansen,
        BearingMethod::Ec7,
    ];

    /// Canonical identifier, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            BearingMethod::Terzaghi => "Terzaghi",
            BearingMethod::Meyerhof => "Meyerhof",
            BearingMethod::Vesic => "Vesic",
            BearingMethod::Hansen => "Hansen",
            BearingMethod::Ec7 => "EC7",
        }
    }

    /// Nc returned at φ = 0, where `(Nq − 1) cot φ` is undefined.
    ///
    /// These are the textbook limits as φ → 0: 5.7 for Terzaghi's rough base
    /// and 2 + π ≈ 5.14 (Prandtl) for the others.
    pub fn nc_at_zero(&self) -> f64 {
        match self {
            BearingMethod::Terzaghi => 5.71,
            BearingMethod::Meyerhof
            | BearingMethod::Vesic
            | BearingMethod::Hansen
            | BearingMethod::Ec7 => 5.14,
        }
    }

    /// Whether this method uses the Prandtl-Reissner Nq expression
    pub fn uses_reissner_nq(&self) -> bool {
        !matches!(self, BearingMethod::Terzaghi)
    }
}

impl fmt::Display for BearingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BearingMethod {
    type Err = CalcError;

    /// Exact, case-sensitive match against [`METHOD_NAMES`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BearingMethod::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| CalcError::unknown_method(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_table() {
        let names: Vec<&str> = BearingMethod::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names, METHOD_NAMES);
    }

    #[test]
    fn test_parse_all_names() {
        for method in BearingMethod::ALL {
            assert_eq!(method.name().parse::<BearingMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("terzaghi".parse::<BearingMethod>().is_err());
        assert!("Ec7".parse::<BearingMethod>().is_err());
        assert!(" Vesic".parse::<BearingMethod>().is_err());
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Prandtl".parse::<BearingMethod>().unwrap_err();
        assert!(matches!(err, CalcError::UnknownMethod { ref method, .. } if method == "Prandtl"));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&BearingMethod::Ec7).unwrap();
        assert_eq!(json, "\"EC7\"");
        let method: BearingMethod = serde_json::from_str("\"Hansen\"").unwrap();
        assert_eq!(method, BearingMethod::Hansen);
    }

    #[test]
    fn test_nc_limits() {
        assert_eq!(BearingMethod::Terzaghi.nc_at_zero(), 5.71);
        for method in &BearingMethod::ALL[1..] {
            assert_eq!(method.nc_at_zero(), 5.14);
        }
    }
}
