pub mod binary;
pub mod unary;

// Operators work on already-evaluated operands; node traversal lives in
// `interpreter::expressions`.
pub(crate) use binary::{evaluate_binary, evaluate_relational};
pub(crate) use unary::evaluate_unary;
