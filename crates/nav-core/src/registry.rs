//! Route tree declaration and lookup
//!
//! Routes are declared on a [`RegistryBuilder`] during the registration
//! phase. [`RegistryBuilder::seal`] validates the tree and produces the
//! immutable [`RouteRegistry`] used for every lookup afterwards, so a
//! registry in the hands of a navigator can never change underneath it.

use crate::error::NavError;
use crate::params::ParamSlot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Fully-qualified route identifier, root to node
///
/// Displayed and stored in dotted form, e.g. `Auth.EmailLogIn`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutePath(String);

impl RoutePath {
    /// Create a path from its dotted form
    pub fn new(path: impl Into<String>) -> Self {
        RoutePath(path.into())
    }

    /// The dotted form of this path
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier segments from root to node
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The node's own identifier (last segment)
    pub fn id(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// Parent path, or `None` for a root-level route
    pub fn parent(&self) -> Option<RoutePath> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| RoutePath(parent.to_string()))
    }

    /// The path of a child identifier under this one
    pub fn child(&self, id: &str) -> RoutePath {
        RoutePath(format!("{}.{}", self.0, id))
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RoutePath {
    fn from(path: &str) -> Self {
        RoutePath(path.to_string())
    }
}

impl From<String> for RoutePath {
    fn from(path: String) -> Self {
        RoutePath(path)
    }
}

/// Kind of a route node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteKind {
    /// Directly renderable destination with no children
    Leaf,
    /// Named scope with child routes and a designated start child
    Graph {
        /// Identifier of the child entered by default
        start: String,
    },
}

/// A declared route
///
/// The node's identifier lives in the path it is registered under; the node
/// itself carries only its parameter slots and its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Declared parameter slots, in order
    pub params: Vec<ParamSlot>,
    /// Leaf or graph
    pub kind: RouteKind,
}

impl RouteNode {
    /// A leaf route with no parameters
    pub fn leaf() -> Self {
        Self {
            params: Vec::new(),
            kind: RouteKind::Leaf,
        }
    }

    /// A leaf route with the given parameter slots
    pub fn leaf_with_params(params: Vec<ParamSlot>) -> Self {
        Self {
            params,
            kind: RouteKind::Leaf,
        }
    }

    /// A graph route with the given start-child identifier
    pub fn graph(start: impl Into<String>) -> Self {
        Self {
            params: Vec::new(),
            kind: RouteKind::Graph {
                start: start.into(),
            },
        }
    }

    /// True if this node is a graph
    pub fn is_graph(&self) -> bool {
        matches!(self.kind, RouteKind::Graph { .. })
    }
}

/// Mutable route-tree builder for the registration phase
///
/// Parents must be registered before their children, which keeps the tree
/// acyclic by construction.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    nodes: HashMap<RoutePath, RouteNode>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node at a fully-qualified path
    ///
    /// Fails with [`NavError::DuplicateRoute`] if the path is taken, and
    /// [`NavError::InvalidParent`] if the parent is unregistered or a leaf.
    pub fn register(
        &mut self,
        path: impl Into<RoutePath>,
        node: RouteNode,
    ) -> Result<(), NavError> {
        let path = path.into();

        if self.nodes.contains_key(&path) {
            return Err(NavError::DuplicateRoute(path));
        }

        if let Some(parent) = path.parent() {
            match self.nodes.get(&parent) {
                Some(parent_node) if parent_node.is_graph() => {}
                _ => return Err(NavError::InvalidParent { path, parent }),
            }
        }

        debug!(route = %path, graph = node.is_graph(), "registered route");
        self.nodes.insert(path, node);
        Ok(())
    }

    /// Validate the tree and close the registration phase
    ///
    /// Every graph's start-child identifier must name a registered child;
    /// a broken start chain is reported as [`NavError::UnknownRoute`] for
    /// the missing start path.
    pub fn seal(self) -> Result<RouteRegistry, NavError> {
        for (path, node) in &self.nodes {
            if let RouteKind::Graph { start } = &node.kind {
                let start_path = path.child(start);
                if !self.nodes.contains_key(&start_path) {
                    return Err(NavError::UnknownRoute(start_path));
                }
            }
        }

        debug!(routes = self.nodes.len(), "registry sealed");
        Ok(RouteRegistry { nodes: self.nodes })
    }
}

/// Immutable route tree, produced by [`RegistryBuilder::seal`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRegistry {
    nodes: HashMap<RoutePath, RouteNode>,
}

impl RouteRegistry {
    /// The node at `path`
    pub fn lookup(&self, path: &RoutePath) -> Result<&RouteNode, NavError> {
        self.nodes
            .get(path)
            .ok_or_else(|| NavError::UnknownRoute(path.clone()))
    }

    /// The leaf path a graph resolves to when entered
    ///
    /// Descends nested start children until a non-graph node is reached.
    /// Deterministic and idempotent: the registry cannot change after
    /// sealing, so repeated calls yield the same leaf.
    pub fn resolve_start(&self, graph_path: &RoutePath) -> Result<RoutePath, NavError> {
        let node = self.lookup(graph_path)?;
        let mut current = match &node.kind {
            RouteKind::Leaf => return Err(NavError::NotAGraph(graph_path.clone())),
            RouteKind::Graph { start } => graph_path.child(start),
        };

        loop {
            match &self.lookup(&current)?.kind {
                RouteKind::Leaf => return Ok(current),
                RouteKind::Graph { start } => current = current.child(start),
            }
        }
    }

    /// Number of registered routes
    pub fn route_count(&self) -> usize {
        self.nodes.len()
    }
}
