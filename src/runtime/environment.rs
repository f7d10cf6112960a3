//! Name bindings for evaluation
//!
//! An [`Environment`] is a flat map from identifier to [`Value`]. There is no
//! parent chain: a `let` scope is a full snapshot of the enclosing environment
//! ([`Environment::branch`]) with one binding added or overwritten, so anything
//! bound in the snapshot disappears when the snapshot is dropped. Top-level
//! `val` declarations use [`Environment::bind`] on the program's own
//! environment and persist for the rest of the run.

use super::value::Value;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).copied()
    }

    /// Bind `name` in place, replacing any existing binding.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Independent copy that can be extended without affecting `self`.
    pub fn branch(&self) -> Environment {
        self.clone()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_lookup() {
        let mut env = Environment::new();
        assert!(env.is_empty());
        assert_eq!(env.lookup("x"), None);

        env.bind("x", Value::Int(3));
        assert_eq!(env.lookup("x"), Some(Value::Int(3)));

        env.bind("x", Value::Bool(true));
        assert_eq!(env.lookup("x"), Some(Value::Bool(true)));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_branch_is_independent() {
        let mut outer = Environment::new();
        outer.bind("x", Value::Int(5));

        let mut inner = outer.branch();
        inner.bind("x", Value::Int(3));
        inner.bind("y", Value::Real(1.5));

        assert_eq!(inner.lookup("x"), Some(Value::Int(3)));
        assert_eq!(outer.lookup("x"), Some(Value::Int(5)));
        assert!(!outer.contains("y"));

        // Later global updates do not leak into an existing branch
        outer.bind("z", Value::Int(1));
        assert!(!inner.contains("z"));
    }

    #[test]
    fn test_names_sorted() {
        let mut env = Environment::new();
        env.bind("b", Value::Int(1));
        env.bind("a", Value::Int(2));
        env.bind("c", Value::Int(3));
        assert_eq!(env.names(), vec!["a", "b", "c"]);
    }
}
