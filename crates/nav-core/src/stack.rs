//! History stack of resolved route instances
//!
//! The stack records visited routes bottom-to-top, bottom being the first
//! entered. It is seeded with a root instance and is never empty afterwards:
//! the bottom entry is the session's first screen and cannot be popped.

use crate::error::NavError;
use crate::params::ParamMap;
use crate::registry::RoutePath;
use serde::{Deserialize, Serialize};

/// A resolved leaf route bound to concrete parameter values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInstance {
    /// Fully-qualified leaf path
    pub path: RoutePath,
    /// Bound parameter values
    pub params: ParamMap,
}

impl RouteInstance {
    /// Bind parameter values to a leaf path
    ///
    /// Callers are expected to have validated `params` against the leaf's
    /// declared slots first.
    pub fn new(path: RoutePath, params: ParamMap) -> Self {
        Self { path, params }
    }
}

/// A history entry: a route instance plus a unique key
///
/// The key gives presentation layers a stable identity per visit, so two
/// visits to the same route are distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The resolved route
    pub instance: RouteInstance,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Wrap an instance with a fresh key
    pub fn new(instance: RouteInstance) -> Self {
        Self {
            instance,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Ordered record of visited routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStack {
    entries: Vec<StackEntry>,
}

impl HistoryStack {
    /// Create a stack seeded with its root instance
    pub fn new(root: RouteInstance) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a new instance onto the top
    pub fn push(&mut self, instance: RouteInstance) {
        self.entries.push(StackEntry::new(instance));
    }

    /// Remove and return the top instance
    ///
    /// Fails with [`NavError::EmptyHistory`] when only the root entry
    /// remains, leaving the stack unchanged.
    pub fn pop(&mut self) -> Result<RouteInstance, NavError> {
        if self.entries.len() == 1 {
            return Err(NavError::EmptyHistory);
        }
        let entry = self.entries.pop().expect("stack is never empty");
        Ok(entry.instance)
    }

    /// Replace the top instance without changing the stack depth
    pub fn replace_top(&mut self, instance: RouteInstance) {
        let last = self.entries.last_mut().expect("stack is never empty");
        *last = StackEntry::new(instance);
    }

    /// The current (top) instance
    pub fn peek(&self) -> &RouteInstance {
        &self.entries.last().expect("stack is never empty").instance
    }

    /// The current entry, including its key
    pub fn peek_entry(&self) -> &StackEntry {
        self.entries.last().expect("stack is never empty")
    }

    /// Number of entries, always at least 1
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// True when there is an entry beneath the current one
    pub fn can_pop(&self) -> bool {
        self.entries.len() > 1
    }

    /// Drop everything above the root entry
    pub fn pop_to_root(&mut self) {
        self.entries.truncate(1);
    }

    /// All entries, bottom to top
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(path: &str) -> RouteInstance {
        RouteInstance::new(RoutePath::from(path), ParamMap::new())
    }

    #[test]
    fn test_push_pop_peek() {
        let mut stack = HistoryStack::new(instance("Auth.EmailLogIn"));
        assert_eq!(stack.depth(), 1);
        assert!(!stack.can_pop());

        stack.push(instance("Auth.EmailSignUp"));
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.peek().path.as_str(), "Auth.EmailSignUp");

        let popped = stack.pop().unwrap();
        assert_eq!(popped.path.as_str(), "Auth.EmailSignUp");
        assert_eq!(stack.peek().path.as_str(), "Auth.EmailLogIn");
    }

    #[test]
    fn test_pop_at_root_fails_and_preserves_stack() {
        let mut stack = HistoryStack::new(instance("Auth.EmailLogIn"));
        assert_eq!(stack.pop(), Err(NavError::EmptyHistory));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.peek().path.as_str(), "Auth.EmailLogIn");
    }

    #[test]
    fn test_replace_top_keeps_depth() {
        let mut stack = HistoryStack::new(instance("Auth.EmailLogIn"));
        stack.replace_top(instance("Auth.EmailSignUp"));
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.peek().path.as_str(), "Auth.EmailSignUp");
    }

    #[test]
    fn test_pop_to_root() {
        let mut stack = HistoryStack::new(instance("Auth.EmailLogIn"));
        stack.push(instance("Auth.EmailSignUp"));
        stack.push(instance("App.Home"));
        stack.pop_to_root();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.peek().path.as_str(), "Auth.EmailLogIn");
    }

    #[test]
    fn test_entries_have_unique_keys() {
        let mut stack = HistoryStack::new(instance("Auth.EmailLogIn"));
        stack.push(instance("Auth.EmailLogIn"));
        let entries = stack.entries();
        assert_ne!(entries[0].key, entries[1].key);
        assert_eq!(entries[0].instance, entries[1].instance);
    }

    #[test]
    fn test_stack_serialization() {
        let mut stack = HistoryStack::new(instance("Auth.EmailLogIn"));
        stack.push(instance("App.Home"));
        let json = serde_json::to_string(&stack).unwrap();
        let parsed: HistoryStack = serde_json::from_str(&json).unwrap();
        assert_eq!(stack, parsed);
    }
}
