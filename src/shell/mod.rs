//! Tabshell orchestration layer.
//!
//! `BrowserShell` translates UI intent into registry mutations and
//! embedded-view commands, and keeps the address bar, tab strip, and
//! navigation buttons in sync with the active view. The collaborators
//! (view factory, chrome handles) are constructor-injected traits so
//! tests can substitute fakes.

pub mod browser_shell;
pub mod intent;

pub use browser_shell::{BrowserShell, EmbeddedView, ShellChrome, ViewFactory};
