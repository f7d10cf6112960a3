//! # Introduction
//!
//! MFL is a small expression language: integers, reals and booleans, the usual
//! arithmetic, relational and boolean operators, lexically scoped `let`
//! bindings and global `val` declarations. This crate parses MFL source into an
//! AST and evaluates it with a tree-walking interpreter.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → SyntaxTree::run → Value
//! ```
//!
//! 1. [`parser`]: tokenises the source and builds the AST by recursive descent.
//! 2. [`interpreter`]: evaluates the AST; [`interpreter::engine::SyntaxTree`]
//!    owns the program and its global environment.
//! 3. [`runtime`]: tagged [`runtime::Value`]s and the
//!    [`runtime::Environment`] that binds names to them.
//!
//! ## Example
//!
//! ```
//! let value = mfl::run("val x := 3 + 5 * 2; let y := 4 in x - y;").unwrap();
//! assert_eq!(value, Some(mfl::runtime::Value::Int(9)));
//! ```
//!
//! ## Typing
//!
//! Values are dynamically tagged and never converted implicitly: `1 + 1.0` is a
//! type mismatch, `mod` is integer-only, and booleans only support `=`/`!=`
//! among the relational operators. Integers are 32-bit and wrap on overflow.

pub mod interpreter;
pub mod parser;
pub mod runtime;

use interpreter::engine::SyntaxTree;
use interpreter::errors::EvalError;
use parser::parse::{ParseError, Parser};
use runtime::Value;
use thiserror::Error;

/// Any failure from source text to result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// Source line the failure is attributed to
    pub fn line(&self) -> usize {
        match self {
            Error::Syntax(err) => err.line(),
            Error::Eval(err) => err.line(),
        }
    }
}

/// Parse `source` into a runnable tree with an empty environment.
pub fn parse(source: &str) -> Result<SyntaxTree, ParseError> {
    Parser::new(source)?.parse()
}

/// Parse and run `source`, returning the value of its last statement.
pub fn run(source: &str) -> Result<Option<Value>, Error> {
    let mut tree = parse(source)?;
    Ok(tree.run()?)
}
