//! Demonstration shell for the navigation core
//!
//! A three-screen flow on top of `nav-core`: an Auth graph with log-in and
//! sign-up screens, and an App graph whose Home screen greets the user it
//! was navigated with. The shell supplies what the core deliberately
//! leaves out: screen view models and the tap handlers that call into the
//! navigator.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod screens;
pub mod shell;

pub use screens::{demo_registry, paths, Screen, TapAction, TapTarget};
pub use shell::AppShell;
