//! Hierarchical navigation core
//!
//! This crate provides a front-end-agnostic routing engine with:
//! - A route registry declaring a tree of identifiers, where some nodes are
//!   sub-graphs with their own start destination
//! - Typed route parameters validated at navigation time
//! - An explicit history stack with back-navigation
//! - A navigator that resolves requests against the registry and notifies
//!   observers of the current route
//!
//! The registry is built during a registration phase and sealed before
//! navigation begins; everything afterwards is read-only lookup. All
//! operations are synchronous, single-owner state transitions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod navigator;
pub mod params;
pub mod registry;
pub mod stack;

pub use error::{NavError, Result};
pub use navigator::{NavigationObserver, Navigator, StackPolicy};
pub use params::{validate_params, ParamError, ParamMap, ParamSlot, ParamType, ParamValue};
pub use registry::{RegistryBuilder, RouteKind, RouteNode, RoutePath, RouteRegistry};
pub use stack::{HistoryStack, RouteInstance, StackEntry};
