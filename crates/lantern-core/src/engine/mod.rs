//! # Engine Module
//!
//! The four pure evaluation stages that grade one joint attempt, composed in
//! sequence by the workflow layer:
//!
//! - **Compatibility Gate** ([`compatibility`]) - type-level legality check
//! - **Position Scorer** ([`position`]) - spatial-error metric around the ideal joint distance
//! - **Rotation Scorer** ([`rotation`]) - shortest-arc angular-error metric
//! - **Verdict Synthesizer** ([`synthesis`]) - difficulty-weighted aggregation, feedback, and suggestions
//!
//! Plus the supporting types:
//!
//! - **Configuration** ([`config`]) - the explicit clamp flag for the final score
//! - **Error Handling** ([`error`]) - faults reportable at the pipeline boundary
//!
//! Every stage is a stateless function over plain values. None of them
//! performs I/O, and none of them can fail: input validation happens once in
//! the workflow before the stages run.

pub mod compatibility;
pub mod config;
pub mod error;
pub mod position;
pub mod rotation;
pub mod synthesis;
