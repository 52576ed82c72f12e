//! Error types for the navigation core
//!
//! Every error here is a local validation failure: a mistake in the route
//! declarations or a caller misuse. None are transient or retryable, and
//! none are recovered from silently — misrouting is surfaced to the caller
//! of the offending operation.

use crate::params::ParamError;
use crate::registry::RoutePath;
use thiserror::Error;

/// Navigation error types
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavError {
    /// A route was registered twice at the same fully-qualified path
    #[error("Route already registered: {0}")]
    DuplicateRoute(RoutePath),

    /// A route was registered under a missing or non-graph parent
    #[error("Cannot register {path}: parent {parent} is not a registered graph")]
    InvalidParent {
        /// The path being registered
        path: RoutePath,
        /// Its immediate parent path
        parent: RoutePath,
    },

    /// The requested path names no registered route
    #[error("Unknown route: {0}")]
    UnknownRoute(RoutePath),

    /// Start resolution was requested on a leaf route
    #[error("Route {0} is not a graph")]
    NotAGraph(RoutePath),

    /// Supplied parameters do not match the target's declared slots
    #[error("Parameter mismatch: {0}")]
    ParameterMismatch(#[from] ParamError),

    /// Attempt to pop the last remaining history entry
    #[error("History is at its first entry and cannot be popped")]
    EmptyHistory,
}

/// Result type for navigation operations
pub type Result<T> = std::result::Result<T, NavError>;
