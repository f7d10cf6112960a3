//! Binary and relational operator evaluation
//!
//! Operands arrive already evaluated (left before right, no short-circuiting).
//! Integer arithmetic wraps at 32 bits; real arithmetic is plain IEEE-754.

use crate::interpreter::errors::{EvalError, EvalResult};
use crate::parser::ast::{BinOp, RelOp};
use crate::runtime::Value;
use tracing::debug;

/// Both operands as the same numeric variant
enum Numbers {
    Ints(i32, i32),
    Reals(f64, f64),
}

/// Reject non-numeric and mixed numeric operands.
fn same_numbers(left: Value, right: Value, what: &str, line: usize) -> EvalResult<Numbers> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Numbers::Ints(a, b)),
        (Value::Real(a), Value::Real(b)) => Ok(Numbers::Reals(a, b)),
        (Value::Int(_), Value::Real(_)) | (Value::Real(_), Value::Int(_)) => {
            Err(EvalError::type_mismatch("mixed numeric types", line))
        }
        _ => Err(EvalError::type_mismatch(
            format!(
                "{} on non-numeric operands ({}, {})",
                what,
                left.type_name(),
                right.type_name()
            ),
            line,
        )),
    }
}

pub(crate) fn evaluate_binary(
    op: BinOp,
    left: Value,
    right: Value,
    line: usize,
) -> EvalResult<Value> {
    let result = match op {
        BinOp::And => logical_op(left, right, line, |a, b| a && b),
        BinOp::Or => logical_op(left, right, line, |a, b| a || b),
        BinOp::Add => arithmetic_op(
            op,
            left,
            right,
            line,
            |a, b| Some(a.wrapping_add(b)),
            Some(|a, b| a + b),
        ),
        BinOp::Sub => arithmetic_op(
            op,
            left,
            right,
            line,
            |a, b| Some(a.wrapping_sub(b)),
            Some(|a, b| a - b),
        ),
        BinOp::Mul => arithmetic_op(
            op,
            left,
            right,
            line,
            |a, b| Some(a.wrapping_mul(b)),
            Some(|a, b| a * b),
        ),
        BinOp::Div => arithmetic_op(
            op,
            left,
            right,
            line,
            |a, b| (b != 0).then(|| a.wrapping_div(b)),
            Some(|a, b| a / b),
        ),
        BinOp::Mod => arithmetic_op(
            op,
            left,
            right,
            line,
            |a, b| (b != 0).then(|| a.wrapping_rem(b)),
            None,
        ),
    };
    if let Err(err) = &result {
        debug!(%err, op = op.symbol(), "binary operator failed");
    }
    result
}

fn logical_op(
    left: Value,
    right: Value,
    line: usize,
    apply: fn(bool, bool) -> bool,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(apply(a, b))),
        _ => Err(EvalError::type_mismatch(
            "boolean operator on non-boolean operand",
            line,
        )),
    }
}

/// `int_op` returns `None` for a zero divisor; `real_op` is `None` when the
/// operator has no real form.
fn arithmetic_op(
    op: BinOp,
    left: Value,
    right: Value,
    line: usize,
    int_op: fn(i32, i32) -> Option<i32>,
    real_op: Option<fn(f64, f64) -> f64>,
) -> EvalResult<Value> {
    match same_numbers(left, right, "arithmetic operator", line)? {
        Numbers::Ints(a, b) => int_op(a, b)
            .map(Value::Int)
            .ok_or_else(|| EvalError::division_by_zero(line)),
        Numbers::Reals(a, b) => match real_op {
            Some(apply) => Ok(Value::Real(apply(a, b))),
            None => Err(EvalError::invalid_operation(
                format!("'{}' is not defined on real operands", op.symbol()),
                line,
            )),
        },
    }
}

pub(crate) fn evaluate_relational(
    op: RelOp,
    left: Value,
    right: Value,
    line: usize,
) -> EvalResult<Value> {
    let result = match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => match op {
            RelOp::Eq => Ok(Value::Bool(a == b)),
            RelOp::Ne => Ok(Value::Bool(a != b)),
            _ => Err(EvalError::invalid_operation(
                format!("'{}' is not defined on boolean operands", op.symbol()),
                line,
            )),
        },
        _ => same_numbers(left, right, "relational operator", line).map(|numbers| {
            let (a, b) = match numbers {
                Numbers::Ints(a, b) => (f64::from(a), f64::from(b)),
                Numbers::Reals(a, b) => (a, b),
            };
            Value::Bool(compare(op, a, b))
        }),
    };
    if let Err(err) = &result {
        debug!(%err, op = op.symbol(), "relational operator failed");
    }
    result
}

#[inline]
fn compare(op: RelOp, a: f64, b: f64) -> bool {
    match op {
        RelOp::Lt => a < b,
        RelOp::Le => a <= b,
        RelOp::Gt => a > b,
        RelOp::Ge => a >= b,
        RelOp::Eq => a == b,
        RelOp::Ne => a != b,
    }
}
