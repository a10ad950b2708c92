//! # Workflows Module
//!
//! The user-facing entry points of the library.
//!
//! - [`evaluate()`] - the full assembly evaluation pipeline: input validation,
//!   compatibility gate, geometric scoring, and verdict synthesis, with the
//!   error boundary that folds internal faults into `ok = false` verdicts.
//! - [`quick_check()`] - the lightweight snap test used by callers that only
//!   know an inter-part distance.
//!
//! Callers source part descriptors from a catalog (their own or
//! [`crate::core::catalog::PartCatalog`]) and placements from their input
//! layer; workflows never perform I/O.

pub mod evaluate;
pub mod quick;

pub use evaluate::{evaluate, evaluate_with_config};
pub use quick::quick_check;
