//! MFL evaluation engine
//!
//! This module provides the core execution logic:
//! - [`engine`]: [`engine::SyntaxTree`], the program driver
//! - [`errors`]: Runtime error types
//! - `expressions`: per-node evaluation
//! - [`ops`]: operator semantics on evaluated operands
//!
//! # Execution Model
//!
//! Evaluation is a synchronous tree walk. Top-level statements share one
//! global environment owned by the driver; `let` bodies run in a branched copy
//! of the environment that is dropped when the body returns.

pub mod engine;
pub mod errors;
mod expressions;
pub mod ops;
