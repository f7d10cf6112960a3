// AST (Abstract Syntax Tree) definitions for the MFL interpreter

use crate::parser::lexer::Token;
use std::fmt;
use std::fmt::Write as _;

/// Arithmetic and boolean binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    // Logical
    And,
    Or,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "mod",
            BinOp::And => "and",
            BinOp::Or => "or",
        }
    }
}

/// Relational operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl RelOp {
    pub fn symbol(self) -> &'static str {
        match self {
            RelOp::Lt => "<",
            RelOp::Le => "<=",
            RelOp::Gt => ">",
            RelOp::Ge => ">=",
            RelOp::Eq => "=",
            RelOp::Ne => "!=",
        }
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg, // -x
    Not, // not x
}

impl UnOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Not => "not",
        }
    }
}

/// Expression and declaration nodes.
///
/// Every node owns its children; the tree is built once by the parser and never
/// mutated afterwards. `line` is the source line that was current when the
/// parser finished building the node.
#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// `val name := expr` (top-level, binds globally)
    ValDecl {
        name: String,
        expr: Box<AstNode>,
        line: usize,
    },

    /// `let name := bound in body`
    Let {
        name: String,
        bound: Box<AstNode>,
        body: Box<AstNode>,
        line: usize,
    },

    BinaryOp {
        op: BinOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        line: usize,
    },

    RelationalOp {
        op: RelOp,
        left: Box<AstNode>,
        right: Box<AstNode>,
        line: usize,
    },

    UnaryOp {
        op: UnOp,
        operand: Box<AstNode>,
        line: usize,
    },

    /// INT, REAL, TRUE or FALSE token
    Literal(Token),

    /// Identifier reference
    Ident(Token),
}

impl AstNode {
    pub fn line(&self) -> usize {
        match self {
            AstNode::ValDecl { line, .. }
            | AstNode::Let { line, .. }
            | AstNode::BinaryOp { line, .. }
            | AstNode::RelationalOp { line, .. }
            | AstNode::UnaryOp { line, .. } => *line,
            AstNode::Literal(tok) | AstNode::Ident(tok) => tok.line,
        }
    }

    /// Render this subtree as an indented debugging tree.
    pub fn display_subtree(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_subtree(&mut out, indent);
        out
    }

    pub(crate) fn write_subtree(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        match self {
            AstNode::ValDecl { name, expr, .. } => {
                let _ = writeln!(out, "{}Val({} :=)", pad, name);
                expr.write_subtree(out, indent + 1);
            }
            AstNode::Let {
                name, bound, body, ..
            } => {
                let _ = writeln!(out, "{}Let", pad);
                let _ = writeln!(out, "{}  name: {}", pad, name);
                let _ = writeln!(out, "{}  value:", pad);
                bound.write_subtree(out, indent + 2);
                let _ = writeln!(out, "{}  in:", pad);
                body.write_subtree(out, indent + 2);
            }
            AstNode::BinaryOp {
                op, left, right, ..
            } => {
                let _ = writeln!(out, "{}BinOp({})", pad, op.symbol());
                left.write_subtree(out, indent + 1);
                right.write_subtree(out, indent + 1);
            }
            AstNode::RelationalOp {
                op, left, right, ..
            } => {
                let _ = writeln!(out, "{}RelOp({})", pad, op.symbol());
                left.write_subtree(out, indent + 1);
                right.write_subtree(out, indent + 1);
            }
            AstNode::UnaryOp { op, operand, .. } => {
                let _ = writeln!(out, "{}UnaryOp({})", pad, op.symbol());
                operand.write_subtree(out, indent + 1);
            }
            AstNode::Literal(tok) => {
                let _ = writeln!(out, "{}Literal({})", pad, tok.text);
            }
            AstNode::Ident(tok) => {
                let _ = writeln!(out, "{}Ident({})", pad, tok.text);
            }
        }
    }
}

/// Fully parenthesised MFL source for the node.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::ValDecl { name, expr, .. } => write!(f, "val {} := {}", name, expr),
            AstNode::Let {
                name, bound, body, ..
            } => write!(f, "(let {} := {} in {})", name, bound, body),
            AstNode::BinaryOp {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op.symbol(), right),
            AstNode::RelationalOp {
                op, left, right, ..
            } => write!(f, "({} {} {})", left, op.symbol(), right),
            AstNode::UnaryOp {
                op: UnOp::Neg,
                operand,
                ..
            } => write!(f, "(-{})", operand),
            AstNode::UnaryOp {
                op: UnOp::Not,
                operand,
                ..
            } => write!(f, "(not {})", operand),
            AstNode::Literal(tok) | AstNode::Ident(tok) => write!(f, "{}", tok.text),
        }
    }
}

/// Program root: the ordered top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<AstNode>,
    pub line: usize,
}

impl Program {
    pub fn new(statements: Vec<AstNode>, line: usize) -> Self {
        Self { statements, line }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn display_subtree(&self, indent: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}Prog", "  ".repeat(indent));
        for stmt in &self.statements {
            stmt.write_subtree(&mut out, indent + 1);
        }
        out
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{};", stmt)?;
        }
        Ok(())
    }
}
