//! Node evaluation
//!
//! Each [`AstNode`] evaluates against an [`Environment`] to a [`Value`]:
//!
//! - `val` binds its value in the environment it is given (the program's
//!   global environment at top level)
//! - `let` evaluates its bound expression in the caller's environment, then its
//!   body in a branch of that environment extended with the new binding; the
//!   caller's environment is never touched
//! - operators evaluate both operands, left first, and delegate to [`super::ops`]
//! - literals convert their token text; identifiers are looked up
//!
//! Failures are returned as they are created and never reinterpreted by
//! enclosing nodes.

use crate::interpreter::errors::{EvalError, EvalResult};
use crate::interpreter::ops;
use crate::parser::ast::AstNode;
use crate::parser::lexer::{Token, TokenKind};
use crate::runtime::{Environment, Value};
use tracing::debug;

impl AstNode {
    /// Evaluate this node and return its value
    pub fn evaluate(&self, env: &mut Environment) -> EvalResult<Value> {
        match self {
            AstNode::ValDecl { name, expr, .. } => {
                let value = expr.evaluate(env)?;
                env.bind(name.as_str(), value);
                Ok(value)
            }

            AstNode::Let {
                name, bound, body, ..
            } => {
                let value = bound.evaluate(env)?;
                let mut scope = env.branch();
                scope.bind(name.as_str(), value);
                body.evaluate(&mut scope)
            }

            AstNode::BinaryOp {
                op,
                left,
                right,
                line,
            } => {
                let left = left.evaluate(env)?;
                let right = right.evaluate(env)?;
                ops::evaluate_binary(*op, left, right, *line)
            }

            AstNode::RelationalOp {
                op,
                left,
                right,
                line,
            } => {
                let left = left.evaluate(env)?;
                let right = right.evaluate(env)?;
                ops::evaluate_relational(*op, left, right, *line)
            }

            AstNode::UnaryOp { op, operand, line } => {
                let value = operand.evaluate(env)?;
                ops::evaluate_unary(*op, value, *line)
            }

            AstNode::Literal(tok) => literal_value(tok),

            AstNode::Ident(tok) => env.lookup(&tok.text).ok_or_else(|| {
                let err = EvalError::UnboundIdentifier {
                    name: tok.text.clone(),
                    line: tok.line,
                };
                debug!(%err, "lookup failed");
                err
            }),
        }
    }
}

fn literal_value(tok: &Token) -> EvalResult<Value> {
    let value = match tok.kind {
        TokenKind::Int if is_int_numeral(&tok.text) => tok.text.parse().ok().map(Value::Int),
        TokenKind::Real if is_real_numeral(&tok.text) => tok.text.parse().ok().map(Value::Real),
        TokenKind::True => Some(Value::Bool(true)),
        TokenKind::False => Some(Value::Bool(false)),
        _ => None,
    };

    value.ok_or_else(|| {
        let err = EvalError::MalformedLiteral {
            text: tok.text.clone(),
            line: tok.line,
        };
        debug!(%err, kind = %tok.kind, "literal conversion failed");
        err
    })
}

/// `digits`
fn is_int_numeral(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// `digits "." digits` or `"." digits`
fn is_real_numeral(text: &str) -> bool {
    text.split_once('.').is_some_and(|(whole, fraction)| {
        whole.bytes().all(|b| b.is_ascii_digit()) && is_int_numeral(fraction)
    })
}
