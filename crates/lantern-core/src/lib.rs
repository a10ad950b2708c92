//! # Lantern Assembly Core Library
//!
//! A validation and scoring library for joining the parts of a traditional
//! thousand-corner lantern model. Given two part descriptors and a user's
//! proposed spatial placement of each, it decides whether the joint is
//! structurally legal, grades the attempt against the ideal joint, and
//! produces human-readable feedback and improvement suggestions.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models
//!   ([`PartDescriptor`](core::models::part::PartDescriptor),
//!   [`Placement`](core::models::placement::Placement),
//!   [`AssemblyVerdict`](core::models::verdict::AssemblyVerdict)), static
//!   label tables, geometry utilities, and the part catalog collaborator.
//!
//! - **[`engine`]: The Logic Core.** The four pure evaluation stages —
//!   compatibility gate, position scorer, rotation scorer, and verdict
//!   synthesizer — together with the engine configuration and error types.
//!   Every stage is an independent function with no state across calls.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   [`workflows::evaluate()`] composes the stages into one evaluation
//!   pipeline and owns the error boundary: callers always receive a
//!   structured verdict, never a panic or an error value.

pub mod core;
pub mod engine;
pub mod workflows;
