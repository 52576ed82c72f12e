//! The routing engine
//!
//! A [`Navigator`] resolves requested routes against a sealed registry,
//! validates their parameters, mutates the session's history stack, and
//! notifies observers of the current route after every successful
//! transition. All calls are synchronous; a host dispatching interaction
//! events concurrently must serialize them before calling in.

use crate::error::NavError;
use crate::params::{validate_params, ParamMap};
use crate::registry::{RouteKind, RoutePath, RouteRegistry};
use crate::stack::{HistoryStack, RouteInstance};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[cfg(test)]
use mockall::automock;

/// How `navigate` grows the history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackPolicy {
    /// Every navigation pushes a new entry
    #[default]
    Append,
    /// Every navigation replaces the current entry
    ///
    /// Leaves the stack depth unchanged, for hosts that never want
    /// sibling screens to accumulate back-history.
    ReplaceTop,
}

/// Observer notified synchronously after every successful transition
///
/// Presentation layers implement this to re-render whenever the current
/// route changes; plain closures can be registered through
/// [`Navigator::on_change_fn`].
#[cfg_attr(test, automock)]
pub trait NavigationObserver {
    /// Called with the new current route
    fn route_changed(&self, current: &RouteInstance);
}

struct FnObserver<F>(F);

impl<F: Fn(&RouteInstance)> NavigationObserver for FnObserver<F> {
    fn route_changed(&self, current: &RouteInstance) {
        (self.0)(current)
    }
}

/// Routing engine over an immutable registry and a session history stack
///
/// Owns its stack exclusively for the life of the navigation session.
pub struct Navigator {
    registry: RouteRegistry,
    stack: HistoryStack,
    policy: StackPolicy,
    observers: Vec<Box<dyn NavigationObserver>>,
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("registry", &self.registry)
            .field("stack", &self.stack)
            .field("policy", &self.policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Navigator {
    /// Start a navigation session at the root graph's start leaf
    ///
    /// The history stack is seeded with exactly that instance, carrying no
    /// parameters. Fails with [`NavError::ParameterMismatch`] if the start
    /// leaf declares required slots, since there is nothing to bind them to.
    pub fn initialize(
        registry: RouteRegistry,
        root_graph: impl Into<RoutePath>,
        policy: StackPolicy,
    ) -> Result<Self, NavError> {
        let root_graph = root_graph.into();
        let start = registry.resolve_start(&root_graph)?;

        let params = ParamMap::new();
        validate_params(&registry.lookup(&start)?.params, &params)?;

        let instance = RouteInstance::new(start, params);
        debug!(route = %instance.path, ?policy, "navigation session initialized");

        Ok(Self {
            registry,
            stack: HistoryStack::new(instance),
            policy,
            observers: Vec::new(),
        })
    }

    /// Register an observer fired after every successful transition
    pub fn on_change(&mut self, observer: impl NavigationObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Register a closure fired after every successful transition
    pub fn on_change_fn(&mut self, f: impl Fn(&RouteInstance) + 'static) {
        self.observers.push(Box::new(FnObserver(f)));
    }

    /// The current route instance; never fails
    pub fn current(&self) -> &RouteInstance {
        self.stack.peek()
    }

    /// The stack-growth policy in effect
    pub fn policy(&self) -> StackPolicy {
        self.policy
    }

    /// Read access to the session's history stack
    pub fn stack(&self) -> &HistoryStack {
        &self.stack
    }

    /// Route to `target` with the given parameters
    ///
    /// A graph target resolves to its start leaf first, mirroring nested
    /// graph semantics. Parameters are validated against the resolved
    /// leaf's declared slots. On success the new instance is pushed (or
    /// replaces the top, per policy) and returned; a failed call leaves
    /// the stack untouched.
    pub fn navigate(
        &mut self,
        target: impl Into<RoutePath>,
        params: ParamMap,
    ) -> Result<RouteInstance, NavError> {
        let target = target.into();

        let leaf = match self.registry.lookup(&target)?.kind {
            RouteKind::Graph { .. } => self.registry.resolve_start(&target)?,
            RouteKind::Leaf => target,
        };

        if let Err(err) = validate_params(&self.registry.lookup(&leaf)?.params, &params) {
            warn!(route = %leaf, %err, "navigation rejected");
            return Err(err.into());
        }

        let instance = RouteInstance::new(leaf, params);
        match self.policy {
            StackPolicy::Append => self.stack.push(instance.clone()),
            StackPolicy::ReplaceTop => self.stack.replace_top(instance.clone()),
        }

        debug!(route = %instance.path, depth = self.stack.depth(), "navigated");
        self.notify();
        Ok(instance)
    }

    /// Remove and return the current entry, revealing the one beneath
    ///
    /// Fails with [`NavError::EmptyHistory`] on a single-entry stack: the
    /// bottom entry is the session's first screen and there is nothing to
    /// go back to.
    pub fn pop_back_stack(&mut self) -> Result<RouteInstance, NavError> {
        let popped = self.stack.pop()?;
        debug!(route = %self.stack.peek().path, "popped back");
        self.notify();
        Ok(popped)
    }

    /// Collapse the stack to its first entry and return the new current
    ///
    /// Observers fire only if the stack actually shrank.
    pub fn pop_to_root(&mut self) -> &RouteInstance {
        if self.stack.can_pop() {
            self.stack.pop_to_root();
            debug!(route = %self.stack.peek().path, "popped to root");
            self.notify();
        }
        self.current()
    }

    fn notify(&self) {
        let current = self.stack.peek();
        for observer in &self.observers {
            observer.route_changed(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{ParamSlot, ParamType, ParamValue};
    use crate::registry::{RegistryBuilder, RouteNode};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn demo_registry() -> RouteRegistry {
        let mut builder = RegistryBuilder::new();
        builder.register("Auth", RouteNode::graph("EmailLogIn")).unwrap();
        builder.register("Auth.EmailLogIn", RouteNode::leaf()).unwrap();
        builder.register("Auth.EmailSignUp", RouteNode::leaf()).unwrap();
        builder.register("App", RouteNode::graph("Home")).unwrap();
        builder
            .register(
                "App.Home",
                RouteNode::leaf_with_params(vec![ParamSlot::new("name", ParamType::String)]),
            )
            .unwrap();
        builder.seal().unwrap()
    }

    fn name_params(name: &str) -> ParamMap {
        ParamMap::from([("name".to_string(), ParamValue::from(name))])
    }

    #[test]
    fn test_initialize_resolves_root_start_leaf() {
        let nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        assert_eq!(nav.current().path.as_str(), "Auth.EmailLogIn");
        assert!(nav.current().params.is_empty());
        assert_eq!(nav.stack().depth(), 1);
    }

    #[test]
    fn test_initialize_fails_when_start_leaf_requires_params() {
        let err = Navigator::initialize(demo_registry(), "App", StackPolicy::Append).unwrap_err();
        assert!(matches!(err, NavError::ParameterMismatch(_)));
    }

    #[test]
    fn test_navigate_appends_entry() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        nav.navigate("Auth.EmailSignUp", ParamMap::new()).unwrap();
        assert_eq!(nav.current().path.as_str(), "Auth.EmailSignUp");
        assert_eq!(nav.stack().depth(), 2);
    }

    #[test]
    fn test_navigate_replace_top_keeps_depth() {
        let mut nav =
            Navigator::initialize(demo_registry(), "Auth", StackPolicy::ReplaceTop).unwrap();
        nav.navigate("Auth.EmailSignUp", ParamMap::new()).unwrap();
        assert_eq!(nav.current().path.as_str(), "Auth.EmailSignUp");
        assert_eq!(nav.stack().depth(), 1);
    }

    #[test]
    fn test_navigate_with_params() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        let instance = nav.navigate("App.Home", name_params("Old User")).unwrap();
        assert_eq!(instance.path.as_str(), "App.Home");
        assert_eq!(
            instance.params.get("name"),
            Some(&ParamValue::from("Old User"))
        );
        assert_eq!(nav.current(), &instance);
    }

    #[test]
    fn test_navigate_to_graph_resolves_start_leaf() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        let instance = nav.navigate("App", name_params("Old User")).unwrap();
        assert_eq!(instance.path.as_str(), "App.Home");
    }

    #[test]
    fn test_navigate_to_graph_without_required_params_fails() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        let err = nav.navigate("App", ParamMap::new()).unwrap_err();
        assert!(matches!(err, NavError::ParameterMismatch(_)));
        // Stack untouched by the failed call
        assert_eq!(nav.current().path.as_str(), "Auth.EmailLogIn");
        assert_eq!(nav.stack().depth(), 1);
    }

    #[test]
    fn test_navigate_unknown_route_fails() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        let err = nav.navigate("Unknown.Path", ParamMap::new()).unwrap_err();
        assert_eq!(err, NavError::UnknownRoute(RoutePath::from("Unknown.Path")));
        assert_eq!(nav.stack().depth(), 1);
    }

    #[test]
    fn test_pop_restores_prior_route() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        let before = nav.current().clone();
        nav.navigate("Auth.EmailSignUp", ParamMap::new()).unwrap();

        let popped = nav.pop_back_stack().unwrap();
        assert_eq!(popped.path.as_str(), "Auth.EmailSignUp");
        assert_eq!(nav.current(), &before);
    }

    #[test]
    fn test_pop_at_root_fails() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        assert_eq!(nav.pop_back_stack(), Err(NavError::EmptyHistory));
        assert_eq!(nav.stack().depth(), 1);
    }

    #[test]
    fn test_pop_to_root_collapses_stack() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        nav.navigate("Auth.EmailSignUp", ParamMap::new()).unwrap();
        nav.navigate("App.Home", name_params("Old User")).unwrap();

        let current = nav.pop_to_root().clone();
        assert_eq!(current.path.as_str(), "Auth.EmailLogIn");
        assert_eq!(nav.stack().depth(), 1);
    }

    #[test]
    fn test_observer_fires_on_navigate_and_pop() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        nav.on_change_fn(move |current| {
            sink.borrow_mut().push(current.path.as_str().to_string());
        });

        nav.navigate("Auth.EmailSignUp", ParamMap::new()).unwrap();
        nav.pop_back_stack().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["Auth.EmailSignUp".to_string(), "Auth.EmailLogIn".to_string()]
        );
    }

    #[test]
    fn test_observer_not_fired_on_failed_navigation() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        let mut mock = MockNavigationObserver::new();
        mock.expect_route_changed().times(0);
        nav.on_change(mock);

        assert!(nav.navigate("Unknown.Path", ParamMap::new()).is_err());
        assert!(nav.pop_back_stack().is_err());
    }

    #[test]
    fn test_mock_observer_sees_new_route() {
        let mut nav = Navigator::initialize(demo_registry(), "Auth", StackPolicy::Append).unwrap();
        let mut mock = MockNavigationObserver::new();
        mock.expect_route_changed()
            .withf(|current| current.path.as_str() == "Auth.EmailSignUp")
            .times(1)
            .return_const(());
        nav.on_change(mock);

        nav.navigate("Auth.EmailSignUp", ParamMap::new()).unwrap();
    }
}
