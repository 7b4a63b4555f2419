use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Trait defining the tab registry interface.
pub trait TabRegistryTrait {
    fn create_tab(&mut self, default_title: &str, default_url: &str) -> String;
    fn remove_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn activate_tab(&mut self, tab_id: &str) -> Result<&Tab, TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_active_tab(&self) -> Option<&Tab>;
    fn active_tab_id(&self) -> Option<&str>;
    fn get_all_tabs(&self) -> Vec<&Tab>;
    fn tab_count(&self) -> usize;
    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError>;
    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError>;
    fn set_loading(&mut self, tab_id: &str, loading: bool) -> Result<(), TabError>;
}

/// In-memory ordered collection of tabs plus the active tab id.
///
/// The registry has no UI knowledge and no activation policy: `remove_tab`
/// clears the active id when the removed tab held it, and the caller is
/// expected to follow up with `activate_tab` or `create_tab`. The
/// one-active-iff-non-empty invariant therefore holds after every
/// shell-level operation, not after a bare removal.
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }
}

impl Default for TabRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TabRegistryTrait for TabRegistry {
    /// Create a new tab with the given defaults, appended at the end of
    /// the insertion order. Returns the new tab's ID. Never fails.
    fn create_tab(&mut self, default_title: &str, default_url: &str) -> String {
        let id = Uuid::new_v4().to_string();
        let tab = Tab {
            id: id.clone(),
            url: default_url.to_string(),
            title: default_title.to_string(),
            loading: false,
            created_at: Self::now(),
        };
        self.tabs.push(tab);
        id
    }

    /// Remove a tab. Clears the active id if the removed tab was active;
    /// picking a replacement is the caller's job.
    fn remove_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let tab_idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.tabs.remove(tab_idx);
        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = None;
        }
        Ok(())
    }

    /// Mark the given tab as active and return its record.
    fn activate_tab(&mut self, tab_id: &str) -> Result<&Tab, TabError> {
        let tab_idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.active_tab_id = Some(tab_id.to_string());
        Ok(&self.tabs[tab_idx])
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn active_tab_id(&self) -> Option<&str> {
        self.active_tab_id.as_deref()
    }

    /// All tabs in insertion order.
    fn get_all_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().collect()
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn update_tab_title(&mut self, tab_id: &str, title: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.title = title.to_string();
        Ok(())
    }

    fn update_tab_url(&mut self, tab_id: &str, url: &str) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.url = url.to_string();
        Ok(())
    }

    fn set_loading(&mut self, tab_id: &str, loading: bool) -> Result<(), TabError> {
        let tab = self
            .tabs
            .iter_mut()
            .find(|t| t.id == tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        tab.loading = loading;
        Ok(())
    }
}
