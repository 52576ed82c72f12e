//! Click-handler wiring between screens and the navigator
//!
//! Sibling screens replace each other instead of stacking, so the shell
//! runs its navigator with the `ReplaceTop` policy rather than popping
//! before every navigate.

use crate::screens::{self, paths, Screen, TapAction};
use nav_core::{NavError, Navigator, ParamMap, ParamValue, RouteInstance, StackPolicy};

/// The demo application: a navigator plus the screen wiring
pub struct AppShell {
    navigator: Navigator,
}

impl AppShell {
    /// Build the demo route tree and start a session in the Auth graph
    pub fn new() -> Result<Self, NavError> {
        let registry = screens::demo_registry()?;
        let navigator = Navigator::initialize(registry, paths::AUTH, StackPolicy::ReplaceTop)?;
        Ok(Self { navigator })
    }

    /// The screen currently on display
    pub fn screen(&self) -> Screen {
        Screen::for_instance(self.navigator.current())
    }

    /// The navigator, for registering observers or direct inspection
    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Dispatch a tap target to its navigation call
    pub fn tap(&mut self, action: &TapAction) -> Result<RouteInstance, NavError> {
        match action {
            TapAction::GoToSignUp => self.navigator.navigate(paths::EMAIL_SIGN_UP, ParamMap::new()),
            TapAction::GoToLogIn => self.navigator.navigate(paths::EMAIL_LOG_IN, ParamMap::new()),
            TapAction::AuthSuccess { name } => {
                let params =
                    ParamMap::from([("name".to_string(), ParamValue::String(name.clone()))]);
                self.navigator.navigate(paths::HOME, params)
            }
        }
    }

    /// Back gesture; reports whether anything was popped
    pub fn back(&mut self) -> bool {
        self.navigator.pop_back_stack().is_ok()
    }
}
