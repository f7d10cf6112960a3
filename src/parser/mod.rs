//! MFL source code parser
//!
//! This module transforms MFL source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: The [`parse::Parser`] struct, its cursor helpers and errors
//! - `expressions`: The grammar's non-terminals, one method each
//! - [`ast`]: AST node definitions and printers
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser over a fixed operator-precedence
//! grammar. No external parser generator dependencies.

pub mod ast;
mod expressions;
pub mod lexer;
pub mod parse;
