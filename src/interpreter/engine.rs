// Program driver for the MFL interpreter

use crate::interpreter::errors::EvalResult;
use crate::parser::ast::Program;
use crate::runtime::{Environment, Value};
use tracing::debug;

/// A parsed program together with the environment it runs in.
///
/// The environment is owned exclusively by the tree, so independent trees can
/// be run on separate threads without any locking.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    root: Program,
    env: Environment,
}

impl SyntaxTree {
    /// Create a tree with a fresh, empty environment
    pub fn new(root: Program) -> Self {
        Self::with_environment(root, Environment::new())
    }

    pub fn with_environment(root: Program, env: Environment) -> Self {
        SyntaxTree { root, env }
    }

    pub fn root(&self) -> &Program {
        &self.root
    }

    /// The global environment; holds every `val` bound so far.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn set_environment(&mut self, env: Environment) {
        self.env = env;
    }

    /// Run every top-level statement in order against the global environment.
    ///
    /// Returns the value of the last statement (for a `val`, the value it
    /// bound), or `None` for a program with no statements. Stops at the first
    /// failure.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(statements = self.root.statements.len())
    )]
    pub fn run(&mut self) -> EvalResult<Option<Value>> {
        let mut last = None;

        for stmt in &self.root.statements {
            let value = stmt.evaluate(&mut self.env)?;
            debug!(line = stmt.line(), %value, "statement evaluated");
            last = Some(value);
        }

        Ok(last)
    }

    /// Indented debugging view of the whole tree
    pub fn print_tree(&self) -> String {
        if self.root.is_empty() {
            "EMPTY TREE\n".to_string()
        } else {
            self.root.display_subtree(0)
        }
    }
}
