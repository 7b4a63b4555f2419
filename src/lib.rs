//! Tabshell — a minimal multi-tab desktop browser shell.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod config;
pub mod managers;
pub mod shell;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
