//! Runtime value representation
//!
//! Values are tagged and copied by value. There is no implicit conversion
//! between [`Value::Int`] and [`Value::Real`]: every operator matches on both
//! tags and rejects mixed numeric operands.
//!
//! # Value Types
//!
//! - [`Value::Int`]: 32-bit signed integer, wrapping on overflow
//! - [`Value::Real`]: IEEE-754 double
//! - [`Value::Bool`]: boolean

use std::fmt;

/// Runtime values in the interpreter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i32),
    Real(f64),
    Bool(bool),
}

impl Value {
    /// Name of the variant, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Real(_) => "real",
            Value::Bool(_) => "bool",
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Real(_))
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the real value, returns None if not a Real
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Get the boolean value, returns None if not a Bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // Debug keeps the fractional part of whole reals (`6.0`, not `6`)
            Value::Real(r) => write!(f, "{:?}", r),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}
