//! Unary operator evaluation

use crate::interpreter::errors::{EvalError, EvalResult};
use crate::parser::ast::UnOp;
use crate::runtime::Value;
use tracing::debug;

pub(crate) fn evaluate_unary(op: UnOp, operand: Value, line: usize) -> EvalResult<Value> {
    let result = match (op, operand) {
        (UnOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnOp::Not, other) => Err(EvalError::type_mismatch(
            format!("'not' on non-boolean operand ({})", other.type_name()),
            line,
        )),
        (UnOp::Neg, Value::Int(n)) => Ok(Value::Int(n.wrapping_neg())),
        (UnOp::Neg, Value::Real(r)) => Ok(Value::Real(-r)),
        (UnOp::Neg, other) => Err(EvalError::type_mismatch(
            format!("'-' on non-numeric operand ({})", other.type_name()),
            line,
        )),
    };
    if let Err(err) = &result {
        debug!(%err, op = op.symbol(), "unary operator failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::errors::ErrorKind;

    #[test]
    fn test_not() {
        assert_eq!(evaluate_unary(UnOp::Not, Value::Bool(true), 1), Ok(Value::Bool(false)));
        assert_eq!(
            evaluate_unary(UnOp::Not, Value::Int(0), 1).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_negation_keeps_variant() {
        assert_eq!(evaluate_unary(UnOp::Neg, Value::Int(3), 1), Ok(Value::Int(-3)));
        assert_eq!(evaluate_unary(UnOp::Neg, Value::Real(2.5), 1), Ok(Value::Real(-2.5)));
        assert_eq!(
            evaluate_unary(UnOp::Neg, Value::Int(i32::MIN), 1),
            Ok(Value::Int(i32::MIN))
        );
        assert_eq!(
            evaluate_unary(UnOp::Neg, Value::Bool(true), 1).unwrap_err().kind(),
            ErrorKind::TypeMismatch
        );
    }
}
