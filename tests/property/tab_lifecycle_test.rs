//! Property-based tests for the shell-level tab lifecycle.
//!
//! For any sequence of new-tab, close-tab, and activate-tab operations,
//! the shell maintains the registry invariants: exactly one active tab
//! iff the registry is non-empty (and it never empties after the first
//! tab), ids stay pairwise distinct, and the set of live embedded views
//! exactly matches the set of registered tabs (no view leaks on close).

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use proptest::prelude::*;
use tabshell::config::ShellConfig;
use tabshell::managers::tab_registry::TabRegistryTrait;
use tabshell::shell::{BrowserShell, EmbeddedView, ShellChrome, ViewFactory};
use tabshell::types::tab::Tab;

// ─── Minimal fakes ───

struct NullView {
    id: String,
    url: String,
    alive: Rc<RefCell<HashSet<String>>>,
}

impl Drop for NullView {
    fn drop(&mut self) {
        self.alive.borrow_mut().remove(&self.id);
    }
}

impl EmbeddedView for NullView {
    fn load_address(&mut self, url: &str) {
        self.url = url.to_string();
    }
    fn reload(&mut self) {}
    fn go_back(&mut self) {}
    fn go_forward(&mut self) {}
    fn can_go_back(&self) -> bool {
        false
    }
    fn can_go_forward(&self) -> bool {
        false
    }
    fn current_address(&self) -> String {
        self.url.clone()
    }
    fn is_ready(&self) -> bool {
        true
    }
    fn set_visible(&mut self, _visible: bool) {}
}

struct NullFactory {
    alive: Rc<RefCell<HashSet<String>>>,
}

impl ViewFactory for NullFactory {
    type View = NullView;

    fn create_view(&mut self, tab_id: &str, url: &str) -> NullView {
        self.alive.borrow_mut().insert(tab_id.to_string());
        NullView {
            id: tab_id.to_string(),
            url: url.to_string(),
            alive: self.alive.clone(),
        }
    }
}

struct NullChrome;

impl ShellChrome for NullChrome {
    fn set_address_bar(&mut self, _url: &str) {}
    fn set_tab_title(&mut self, _tab_id: &str, _title: &str) {}
    fn set_nav_buttons(&mut self, _can_go_back: bool, _can_go_forward: bool) {}
    fn refresh_tabs(&mut self, _tabs: &[&Tab], _active_tab_id: Option<&str>) {}
}

/// Operations the property exercises against the shell.
#[derive(Debug, Clone)]
enum ShellOp {
    Create,
    Close(usize),    // index into the current tab order
    Activate(usize), // index into the current tab order
}

fn arb_shell_ops() -> impl Strategy<Value = Vec<ShellOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(ShellOp::Create),
            3 => (0..20usize).prop_map(ShellOp::Close),
            2 => (0..20usize).prop_map(ShellOp::Activate),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn shell_lifecycle_invariants(ops in arb_shell_ops()) {
        let alive = Rc::new(RefCell::new(HashSet::new()));
        let factory = NullFactory { alive: alive.clone() };
        let mut shell = BrowserShell::new(ShellConfig::default(), factory, NullChrome);
        let mut seen_ids: HashSet<String> = HashSet::new();

        let first = shell.new_tab();
        seen_ids.insert(first);

        for op in &ops {
            match op {
                ShellOp::Create => {
                    let id = shell.new_tab();
                    // Ids are never reused, even across closed tabs.
                    prop_assert!(seen_ids.insert(id));
                }
                ShellOp::Close(idx) => {
                    let order: Vec<String> = shell
                        .registry()
                        .get_all_tabs()
                        .iter()
                        .map(|t| t.id.clone())
                        .collect();
                    let pick = order[idx % order.len()].clone();
                    let was_last = order.len() == 1;
                    shell.close_tab(&pick);
                    if was_last {
                        // The replacement tab carries a fresh id.
                        let replacement = shell.active_tab_id().unwrap().to_string();
                        prop_assert!(seen_ids.insert(replacement));
                    }
                }
                ShellOp::Activate(idx) => {
                    let order: Vec<String> = shell
                        .registry()
                        .get_all_tabs()
                        .iter()
                        .map(|t| t.id.clone())
                        .collect();
                    let pick = order[idx % order.len()].clone();
                    shell.activate_tab(&pick).unwrap();
                    prop_assert_eq!(shell.active_tab_id(), Some(pick.as_str()));
                }
            }

            // Never empty while the shell runs.
            prop_assert!(shell.registry().tab_count() >= 1);

            // Exactly one active tab, and it is present in the registry.
            let active = shell.active_tab_id().map(|s| s.to_string());
            prop_assert!(active.is_some());
            prop_assert!(shell.registry().get_active_tab().is_some());

            // Live views exactly match registered tabs: nothing leaked,
            // nothing destroyed early.
            let registered: HashSet<String> = shell
                .registry()
                .get_all_tabs()
                .iter()
                .map(|t| t.id.clone())
                .collect();
            prop_assert_eq!(&*alive.borrow(), &registered);
        }
    }
}
