//! Runtime error types for the MFL interpreter
//!
//! This module defines [`EvalError`], which represents all errors that can occur
//! during evaluation (as opposed to syntax errors). Every variant carries the
//! line of the node where the failure originated.
//!
//! All runtime errors are fatal: they stop the program run and propagate
//! unchanged to the caller of [`crate::interpreter::engine::SyntaxTree::run`].

use thiserror::Error;

pub type EvalResult<T> = Result<T, EvalError>;

/// Runtime errors that can occur during evaluation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Operator applied to operands of the wrong or mismatched type
    #[error("type mismatch at line {line}: {message}")]
    TypeMismatch { message: String, line: usize },

    /// Operation that makes no sense for otherwise well-typed operands
    #[error("invalid operation at line {line}: {message}")]
    InvalidOperation { message: String, line: usize },

    /// Division or modulus by zero
    #[error("arithmetic error at line {line}: {message}")]
    ArithmeticError { message: String, line: usize },

    #[error("unbound identifier '{name}' at line {line}")]
    UnboundIdentifier { name: String, line: usize },

    /// Literal text that does not parse as its numeric kind
    #[error("malformed literal '{text}' at line {line}")]
    MalformedLiteral { text: String, line: usize },
}

/// Fieldless mirror of [`EvalError`] for callers that only care about the category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    InvalidOperation,
    ArithmeticError,
    UnboundIdentifier,
    MalformedLiteral,
}

impl EvalError {
    pub fn type_mismatch(message: impl Into<String>, line: usize) -> Self {
        EvalError::TypeMismatch {
            message: message.into(),
            line,
        }
    }

    pub fn invalid_operation(message: impl Into<String>, line: usize) -> Self {
        EvalError::InvalidOperation {
            message: message.into(),
            line,
        }
    }

    pub fn division_by_zero(line: usize) -> Self {
        EvalError::ArithmeticError {
            message: "division by zero".to_string(),
            line,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            EvalError::TypeMismatch { line, .. }
            | EvalError::InvalidOperation { line, .. }
            | EvalError::ArithmeticError { line, .. }
            | EvalError::UnboundIdentifier { line, .. }
            | EvalError::MalformedLiteral { line, .. } => *line,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            EvalError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
            EvalError::ArithmeticError { .. } => ErrorKind::ArithmeticError,
            EvalError::UnboundIdentifier { .. } => ErrorKind::UnboundIdentifier,
            EvalError::MalformedLiteral { .. } => ErrorKind::MalformedLiteral,
        }
    }
}
