//! Tabshell UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The toolbar (tab strip, address bar, nav buttons) is injected into
//! every page as JS; communication between the Rust shell and the
//! toolbar uses wry IPC.

pub mod webview_app;
