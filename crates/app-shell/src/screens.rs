//! The demo route tree and screen view models
//!
//! Declares the demo's Auth/App graphs and maps each resolved route
//! instance to a renderable screen: a title plus its tap targets.
//! Rendering itself is left to the front end.

use nav_core::{
    NavError, ParamSlot, ParamType, ParamValue, RegistryBuilder, RouteInstance, RouteNode,
    RouteRegistry,
};
use serde::Serialize;

/// Fully-qualified paths of the demo route tree
pub mod paths {
    /// Auth graph, the session's root graph
    pub const AUTH: &str = "Auth";
    /// Log-in screen, the Auth graph's start destination
    pub const EMAIL_LOG_IN: &str = "Auth.EmailLogIn";
    /// Sign-up screen
    pub const EMAIL_SIGN_UP: &str = "Auth.EmailSignUp";
    /// App graph
    pub const APP: &str = "App";
    /// Home screen; greets the `name` it was navigated with
    pub const HOME: &str = "App.Home";
}

/// Build and seal the demo route tree
///
/// Graph `Auth` starts at `EmailLogIn` and also contains `EmailSignUp`;
/// graph `App` starts at `Home`, which requires a string `name`.
pub fn demo_registry() -> Result<RouteRegistry, NavError> {
    let mut builder = RegistryBuilder::new();
    builder.register(paths::AUTH, RouteNode::graph("EmailLogIn"))?;
    builder.register(paths::EMAIL_LOG_IN, RouteNode::leaf())?;
    builder.register(paths::EMAIL_SIGN_UP, RouteNode::leaf())?;
    builder.register(paths::APP, RouteNode::graph("Home"))?;
    builder.register(
        paths::HOME,
        RouteNode::leaf_with_params(vec![ParamSlot::new("name", ParamType::String)]),
    )?;
    builder.seal()
}

/// Navigation action behind a tap target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum TapAction {
    /// Switch to the sign-up screen
    GoToSignUp,
    /// Switch to the log-in screen
    GoToLogIn,
    /// Finish auth and enter the app as the given user
    AuthSuccess {
        /// Name forwarded to the Home screen
        name: String,
    },
}

/// A tappable label on a screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TapTarget {
    /// Label drawn for the target
    pub label: String,
    /// Action dispatched when tapped
    pub action: TapAction,
}

impl TapTarget {
    fn new(label: impl Into<String>, action: TapAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// View model for the currently displayed screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// Screen title
    pub title: String,
    /// Tap targets drawn below the title
    pub taps: Vec<TapTarget>,
}

impl Screen {
    /// Build the screen for a resolved route instance
    pub fn for_instance(instance: &RouteInstance) -> Self {
        match instance.path.as_str() {
            paths::EMAIL_LOG_IN => Screen {
                title: "Email LogIn Screen".to_string(),
                taps: vec![
                    // the "SingUp" label typo is intentional
                    TapTarget::new("Email SingUp", TapAction::GoToSignUp),
                    TapTarget::new(
                        "Auth Success",
                        TapAction::AuthSuccess {
                            name: "Old User".to_string(),
                        },
                    ),
                ],
            },
            paths::EMAIL_SIGN_UP => Screen {
                title: "Email SignUp Screen".to_string(),
                taps: vec![
                    TapTarget::new("Email LogIn", TapAction::GoToLogIn),
                    TapTarget::new(
                        "Auth Success",
                        TapAction::AuthSuccess {
                            name: "New User".to_string(),
                        },
                    ),
                ],
            },
            paths::HOME => {
                let name = match instance.params.get("name") {
                    Some(ParamValue::String(name)) => name.as_str(),
                    _ => "",
                };
                Screen {
                    title: "Home Screen".to_string(),
                    taps: vec![TapTarget::new(format!("Hello {name}"), TapAction::GoToLogIn)],
                }
            }
            other => Screen {
                title: format!("Unknown screen: {other}"),
                taps: Vec::new(),
            },
        }
    }
}
