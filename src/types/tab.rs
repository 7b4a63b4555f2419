use serde::{Deserialize, Serialize};

/// Represents one browsing session: an address, a title, and the
/// loading state of its embedded view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub loading: bool,
    pub created_at: i64,
}
