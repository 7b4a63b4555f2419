//! Tabshell — a minimal multi-tab desktop browser shell.
//!
//! Entry point: with the `gui` feature, opens the wry/tao browser window.
//! When built without `gui`, runs a console demo that drives the shell
//! core with in-process fake views.

#[cfg(feature = "gui")]
fn main() {
    tabshell::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("Tabshell v{} — demo mode (build with --features gui for the browser window)", env!("CARGO_PKG_VERSION"));

    demo_registry();
    demo_intent();
    demo_shell();

    println!();
    println!("Demo complete.");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_registry() {
    use tabshell::managers::tab_registry::{TabRegistry, TabRegistryTrait};
    section("Tab Registry");

    let mut registry = TabRegistry::new();
    let a = registry.create_tab("New Tab", "https://www.google.com");
    let b = registry.create_tab("New Tab", "https://www.google.com");
    let _ = registry.activate_tab(&b);
    println!("  created {} tabs, active: {}", registry.tab_count(), short(&b));
    let _ = registry.update_tab_title(&a, "Example Domain");
    println!(
        "  tab {} titled: {}",
        short(&a),
        registry.get_tab(&a).map(|t| t.title.as_str()).unwrap_or("?")
    );
}

#[cfg(not(feature = "gui"))]
fn demo_intent() {
    use tabshell::config::ShellConfig;
    use tabshell::shell::intent::resolve_input;
    section("Navigation Intent");

    let config = ShellConfig::default();
    for input in ["example.com", "http://example.com", "rust borrow checker"] {
        println!("  {:24} -> {}", input, resolve_input(input, &config));
    }
}

#[cfg(not(feature = "gui"))]
fn demo_shell() {
    use tabshell::config::ShellConfig;
    use tabshell::managers::tab_registry::TabRegistryTrait;
    use tabshell::shell::{BrowserShell, EmbeddedView, ShellChrome, ViewFactory};
    use tabshell::types::tab::Tab;

    section("Browser Shell");

    struct ConsoleView {
        label: String,
        url: String,
    }

    impl EmbeddedView for ConsoleView {
        fn load_address(&mut self, url: &str) {
            println!("  view[{}] load {}", self.label, url);
            self.url = url.to_string();
        }
        fn reload(&mut self) {
            println!("  view[{}] reload", self.label);
        }
        fn go_back(&mut self) {
            println!("  view[{}] back", self.label);
        }
        fn go_forward(&mut self) {
            println!("  view[{}] forward", self.label);
        }
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
        fn set_visible(&mut self, visible: bool) {
            if visible {
                println!("  view[{}] shown", self.label);
            }
        }
    }

    struct ConsoleFactory;

    impl ViewFactory for ConsoleFactory {
        type View = ConsoleView;
        fn create_view(&mut self, tab_id: &str, url: &str) -> ConsoleView {
            ConsoleView {
                label: short(tab_id),
                url: url.to_string(),
            }
        }
    }

    struct ConsoleChrome;

    impl ShellChrome for ConsoleChrome {
        fn set_address_bar(&mut self, url: &str) {
            println!("  address bar: {}", url);
        }
        fn set_tab_title(&mut self, tab_id: &str, title: &str) {
            println!("  tab {} label: {}", short(tab_id), title);
        }
        fn set_nav_buttons(&mut self, can_go_back: bool, can_go_forward: bool) {
            println!("  nav buttons: back={} forward={}", can_go_back, can_go_forward);
        }
        fn refresh_tabs(&mut self, tabs: &[&Tab], _active_tab_id: Option<&str>) {
            println!("  tab strip: {} tab(s)", tabs.len());
        }
    }

    let mut shell = BrowserShell::new(ShellConfig::default(), ConsoleFactory, ConsoleChrome);
    let first = shell.new_tab();
    shell.navigate("example.com");
    let second = shell.new_tab();
    shell.navigate("rust borrow checker");
    shell.on_title_changed(&second, "rust borrow checker - Search");
    shell.close_tab(&second);
    println!(
        "  after close: {} tab(s), active {}",
        shell.registry().tab_count(),
        short(shell.active_tab_id().unwrap_or("?"))
    );
    assert_eq!(shell.active_tab_id(), Some(first.as_str()));
}

#[cfg(not(feature = "gui"))]
fn short(id: &str) -> String {
    id.chars().take(8).collect()
}
