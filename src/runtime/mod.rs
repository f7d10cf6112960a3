//! Runtime data model
//!
//! - [`value`]: tagged runtime values (`Int`, `Real`, `Bool`)
//! - [`environment`]: identifier → value bindings with snapshot-and-extend scoping

pub mod environment;
pub mod value;

pub use environment::Environment;
pub use value::Value;
