// Tabshell shell configuration.
// One configurable default page; the search endpoint takes the
// percent-encoded query appended directly after it.

use serde::{Deserialize, Serialize};

/// Configuration for the browser shell: default page, search endpoint,
/// placeholder tab title, and host window dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Page loaded into every new tab and by the Home button.
    pub home_url: String,
    /// Search URL prefix; the encoded query is appended as-is.
    pub search_endpoint: String,
    /// Tab title shown until the view reports its first title.
    pub new_tab_title: String,
    /// Logical width of the host window.
    pub window_width: f64,
    /// Logical height of the host window.
    pub window_height: f64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            home_url: "https://www.google.com".to_string(),
            search_endpoint: "https://www.google.com/search?q=".to_string(),
            new_tab_title: "New Tab".to_string(),
            window_width: 1440.0,
            window_height: 900.0,
        }
    }
}
