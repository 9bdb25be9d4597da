//! # bearing_core - Bearing Capacity Factor Engine
//!
//! `bearing_core` computes the shallow foundation bearing capacity factors
//! Nc, Nq and Nγ from a soil friction angle using five classical methods:
//! Terzaghi, Meyerhof, Vesic, Hansen and Eurocode 7.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions; the method table is a compile-time constant
//! - **JSON-First**: Results and errors implement Serialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No clamping**: Degenerate angles yield extreme or non-finite factors, not errors
//!
//! ## Quick Start
//!
//! ```rust
//! use bearing_core::{compute, BearingMethod};
//!
//! // By name, as a request handler would
//! let factors = compute("Vesic", 35.0).unwrap();
//! assert_eq!(factors.nq, 33.30);
//!
//! // Or typed
//! let factors = BearingMethod::Terzaghi.factors(0.0);
//! assert_eq!(factors.nc, 5.71);
//!
//! // Serialize to JSON for transmission
//! let json = serde_json::to_string(&factors).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - Factor evaluation, method listing, comparison and tables
//! - [`methods`] - Method definitions, formulas and metadata
//! - [`units`] - Angle wrappers
//! - [`errors`] - Structured error types

pub mod calculator;
pub mod errors;
pub mod methods;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculator::{compute, compute_all, factor_table, list_methods, FactorResult, MethodFactors, TableRow};
pub use errors::{CalcError, CalcResult};
pub use methods::{BearingMethod, MethodMetadata};
pub use units::FrictionAngle;
