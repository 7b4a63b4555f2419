use std::collections::{HashMap, HashSet};

use crate::config::ShellConfig;
use crate::managers::tab_registry::{TabRegistry, TabRegistryTrait};
use crate::types::errors::TabError;
use crate::types::tab::Tab;

use super::intent;

/// The embedded web content view bound to one tab.
///
/// Implementations wrap whatever actually renders pages; the shell only
/// issues commands and reads navigation capability. Dropping the value
/// must release the underlying view's resources.
pub trait EmbeddedView {
    fn load_address(&mut self, url: &str);
    fn reload(&mut self);
    fn go_back(&mut self);
    fn go_forward(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    fn current_address(&self) -> String;
    /// Whether the view is ready to report its address and history state.
    fn is_ready(&self) -> bool;
    fn set_visible(&mut self, visible: bool);
}

/// Creates one embedded view per tab, bound to its initial URL.
pub trait ViewFactory {
    type View: EmbeddedView;
    fn create_view(&mut self, tab_id: &str, url: &str) -> Self::View;
}

/// The UI handles the shell drives: address bar, tab strip, nav buttons.
pub trait ShellChrome {
    fn set_address_bar(&mut self, url: &str);
    fn set_tab_title(&mut self, tab_id: &str, title: &str);
    fn set_nav_buttons(&mut self, can_go_back: bool, can_go_forward: bool);
    fn refresh_tabs(&mut self, tabs: &[&Tab], active_tab_id: Option<&str>);
}

/// Orchestrates tab lifecycle and navigation for one browser window.
///
/// Owns the registry, one embedded view per tab, and the injected chrome
/// handles. All methods run on the single UI thread; notifications from
/// the views arrive through the `on_*` methods in arrival order.
pub struct BrowserShell<F: ViewFactory, C: ShellChrome> {
    config: ShellConfig,
    registry: TabRegistry,
    views: HashMap<String, F::View>,
    factory: F,
    chrome: C,
    /// Tabs whose nav-button refresh is deferred until the view is ready.
    pending_nav_refresh: HashSet<String>,
}

impl<F: ViewFactory, C: ShellChrome> BrowserShell<F, C> {
    pub fn new(config: ShellConfig, factory: F, chrome: C) -> Self {
        Self {
            config,
            registry: TabRegistry::new(),
            views: HashMap::new(),
            factory,
            chrome,
            pending_nav_refresh: HashSet::new(),
        }
    }

    /// Open a new tab on the home page and activate it.
    /// Returns the new tab's ID.
    pub fn new_tab(&mut self) -> String {
        let id = self
            .registry
            .create_tab(&self.config.new_tab_title, &self.config.home_url);
        let view = self.factory.create_view(&id, &self.config.home_url);
        self.views.insert(id.clone(), view);
        let _ = self.activate_tab(&id);
        id
    }

    /// Close a tab, destroying its embedded view. If it was the active
    /// tab: activate the most-recently-inserted survivor, or open a
    /// fresh tab when none remain — the registry is never left empty
    /// while the shell runs. Unknown ids are a silent no-op.
    pub fn close_tab(&mut self, tab_id: &str) {
        let was_active = self.registry.active_tab_id() == Some(tab_id);
        if self.registry.remove_tab(tab_id).is_err() {
            return;
        }
        // Dropping the view tears down the underlying web content.
        self.views.remove(tab_id);
        self.pending_nav_refresh.remove(tab_id);

        if was_active {
            let fallback = self.registry.get_all_tabs().last().map(|t| t.id.clone());
            match fallback {
                Some(id) => {
                    let _ = self.activate_tab(&id);
                }
                None => {
                    self.new_tab();
                }
            }
        } else {
            self.refresh_tab_strip();
        }
    }

    /// Activate a tab: hide the previously active pair, show the
    /// requested one, and resync the address bar. The nav-button refresh
    /// is deferred until the view reports readiness rather than blocking.
    pub fn activate_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let previous = self.registry.active_tab_id().map(|s| s.to_string());
        let _ = self.registry.activate_tab(tab_id)?;

        if let Some(prev_id) = previous {
            if prev_id != tab_id {
                if let Some(view) = self.views.get_mut(&prev_id) {
                    view.set_visible(false);
                }
            }
        }

        if let Some(view) = self.views.get_mut(tab_id) {
            view.set_visible(true);
            let address = view.current_address();
            let ready = view.is_ready();
            let nav = (view.can_go_back(), view.can_go_forward());
            self.chrome.set_address_bar(&address);
            if ready {
                self.chrome.set_nav_buttons(nav.0, nav.1);
            } else {
                self.pending_nav_refresh.insert(tab_id.to_string());
            }
        }

        self.refresh_tab_strip();
        Ok(())
    }

    /// Resolve address-bar input (URL vs. search query) and load it into
    /// the active view. No validation beyond the dot heuristic; the view
    /// surfaces load failures itself.
    pub fn navigate(&mut self, input: &str) {
        let url = intent::resolve_input(input, &self.config);
        if let Some(view) = self.active_view_mut() {
            view.load_address(&url);
        }
    }

    /// Load the configured home page into the active view.
    pub fn go_home(&mut self) {
        let url = self.config.home_url.clone();
        if let Some(view) = self.active_view_mut() {
            view.load_address(&url);
        }
    }

    pub fn go_back(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.go_back();
        }
    }

    pub fn go_forward(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.go_forward();
        }
    }

    pub fn reload(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.reload();
        }
    }

    /// A view reported a new page title: store it and refresh that tab's
    /// label. Never touches the address bar.
    pub fn on_title_changed(&mut self, tab_id: &str, title: &str) {
        if self.registry.update_tab_title(tab_id, title).is_err() {
            return;
        }
        self.chrome.set_tab_title(tab_id, title);
    }

    /// A view started loading a page.
    pub fn on_load_started(&mut self, tab_id: &str) {
        let _ = self.registry.set_loading(tab_id, true);
    }

    /// A view finished a navigation: record its current address, and if
    /// the tab is active, resync the address bar and nav buttons.
    pub fn on_load_finished(&mut self, tab_id: &str) {
        let state = self
            .views
            .get(tab_id)
            .map(|v| (v.current_address(), v.can_go_back(), v.can_go_forward()));
        let (address, can_back, can_forward) = match state {
            Some(s) => s,
            None => return,
        };
        let _ = self.registry.update_tab_url(tab_id, &address);
        let _ = self.registry.set_loading(tab_id, false);
        if self.registry.active_tab_id() == Some(tab_id) {
            self.chrome.set_address_bar(&address);
            self.chrome.set_nav_buttons(can_back, can_forward);
        }
    }

    /// A view became ready for interaction: perform the nav-button
    /// refresh deferred by an earlier activation, if one is pending.
    pub fn on_view_ready(&mut self, tab_id: &str) {
        if !self.pending_nav_refresh.remove(tab_id) {
            return;
        }
        if self.registry.active_tab_id() != Some(tab_id) {
            return;
        }
        let state = self
            .views
            .get(tab_id)
            .map(|v| (v.current_address(), v.can_go_back(), v.can_go_forward()));
        if let Some((address, can_back, can_forward)) = state {
            self.chrome.set_address_bar(&address);
            self.chrome.set_nav_buttons(can_back, can_forward);
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.registry.active_tab_id()
    }

    pub fn view(&self, tab_id: &str) -> Option<&F::View> {
        self.views.get(tab_id)
    }

    pub fn view_mut(&mut self, tab_id: &str) -> Option<&mut F::View> {
        self.views.get_mut(tab_id)
    }

    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    pub fn chrome_mut(&mut self) -> &mut C {
        &mut self.chrome
    }

    pub fn factory_mut(&mut self) -> &mut F {
        &mut self.factory
    }

    fn active_view_mut(&mut self) -> Option<&mut F::View> {
        let id = self.registry.active_tab_id()?.to_string();
        self.views.get_mut(&id)
    }

    fn refresh_tab_strip(&mut self) {
        let tabs = self.registry.get_all_tabs();
        self.chrome.refresh_tabs(&tabs, self.registry.active_tab_id());
    }
}
