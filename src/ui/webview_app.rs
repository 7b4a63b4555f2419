//! WebView-based browser chrome using `wry` + `tao`.
//!
//! Architecture:
//! - `with_initialization_script(TOOLBAR_JS)` injects the toolbar on every
//!   page; the toolbar reports `ui_ready`, `load_started`, and `page_state`
//!   and submits tab/navigation commands over `window.ipc.postMessage()`.
//! - wry exposes one WebView per window here, so the chrome multiplexes it:
//!   each tab's `MuxView` queues commands against the shared WebView, and
//!   switching tabs restores the stored address of the newly active tab.
//! - The event loop drains queued view commands and chrome scripts into
//!   `UserEvent`s dispatched through the `EventLoopProxy`.

use std::sync::{Arc, Mutex};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use crate::config::ShellConfig;
use crate::shell::{intent, BrowserShell, EmbeddedView, ShellChrome, ViewFactory};
use crate::types::tab::Tab;

#[derive(Debug)]
enum UserEvent {
    LoadUrl(String),
    EvalScript(String),
}

/// Command queued by a `MuxView` against the shared WebView.
#[derive(Debug)]
enum ViewCmd {
    Load(String),
    Reload,
    Back,
    Forward,
}

/// One tab's slot on the shared WebView. Holds the tab's last known
/// address and history capability, reported back by the toolbar; the
/// shell only ever commands the active tab's view, so all queued
/// commands target the page currently on screen.
pub struct MuxView {
    url: String,
    ready: bool,
    can_back: bool,
    can_forward: bool,
    cmds: Arc<Mutex<Vec<ViewCmd>>>,
}

impl MuxView {
    fn push(&self, cmd: ViewCmd) {
        if let Ok(mut q) = self.cmds.lock() {
            q.push(cmd);
        }
    }

    /// Apply a `page_state` report from the toolbar.
    fn apply_page_state(&mut self, url: &str, can_back: bool, can_forward: bool) {
        self.url = url.to_string();
        self.ready = true;
        self.can_back = can_back;
        self.can_forward = can_forward;
    }
}

impl EmbeddedView for MuxView {
    fn load_address(&mut self, url: &str) {
        self.url = url.to_string();
        self.ready = false;
        self.push(ViewCmd::Load(url.to_string()));
    }

    fn reload(&mut self) {
        self.push(ViewCmd::Reload);
    }

    fn go_back(&mut self) {
        self.push(ViewCmd::Back);
    }

    fn go_forward(&mut self) {
        self.push(ViewCmd::Forward);
    }

    fn can_go_back(&self) -> bool {
        self.can_back
    }

    fn can_go_forward(&self) -> bool {
        self.can_forward
    }

    fn current_address(&self) -> String {
        self.url.clone()
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_visible(&mut self, visible: bool) {
        // Showing a tab restores its page on the shared WebView;
        // hiding needs no action. The view is not ready again until the
        // restored page posts its state.
        if visible {
            self.ready = false;
            self.push(ViewCmd::Load(self.url.clone()));
        }
    }
}

/// Creates `MuxView`s sharing one command queue.
pub struct MuxFactory {
    cmds: Arc<Mutex<Vec<ViewCmd>>>,
}

impl MuxFactory {
    fn new() -> Self {
        Self {
            cmds: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn take_commands(&mut self) -> Vec<ViewCmd> {
        match self.cmds.lock() {
            Ok(mut q) => std::mem::take(&mut *q),
            Err(_) => Vec::new(),
        }
    }
}

impl ViewFactory for MuxFactory {
    type View = MuxView;

    fn create_view(&mut self, _tab_id: &str, url: &str) -> MuxView {
        MuxView {
            url: url.to_string(),
            ready: false,
            can_back: false,
            can_forward: false,
            cmds: self.cmds.clone(),
        }
    }
}

/// Drives the injected toolbar by queueing `__ts_*` JS calls.
pub struct ScriptChrome {
    scripts: Vec<String>,
}

impl ScriptChrome {
    fn new() -> Self {
        Self {
            scripts: Vec::new(),
        }
    }

    fn take_scripts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.scripts)
    }
}

impl ShellChrome for ScriptChrome {
    fn set_address_bar(&mut self, url: &str) {
        self.scripts.push(format!(
            "if(window.__ts_setUrl)__ts_setUrl({})",
            serde_json::json!(url)
        ));
    }

    fn set_tab_title(&mut self, tab_id: &str, title: &str) {
        self.scripts.push(format!(
            "if(window.__ts_setTabTitle)__ts_setTabTitle({},{})",
            serde_json::json!(tab_id),
            serde_json::json!(title)
        ));
    }

    fn set_nav_buttons(&mut self, can_go_back: bool, can_go_forward: bool) {
        self.scripts.push(format!(
            "if(window.__ts_setNavState)__ts_setNavState({},{})",
            can_go_back, can_go_forward
        ));
    }

    fn refresh_tabs(&mut self, tabs: &[&Tab], active_tab_id: Option<&str>) {
        let tabs: Vec<serde_json::Value> = tabs
            .iter()
            .map(|t| serde_json::json!({"id": t.id, "title": t.title, "url": t.url}))
            .collect();
        self.scripts.push(format!(
            "if(window.__ts_updateTabs)__ts_updateTabs({})",
            serde_json::json!({"tabs": tabs, "activeId": active_tab_id.unwrap_or("")})
        ));
    }
}

type Shell = BrowserShell<MuxFactory, ScriptChrome>;

struct BrowserState {
    shell: Shell,
}

const TOOLBAR_JS: &str = include_str!("../../resources/ui/toolbar.js");

// ─── IPC handler ───

fn handle_ipc(state: &mut BrowserState, message: &str) -> Vec<UserEvent> {
    let msg: serde_json::Value = match serde_json::from_str(message) {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };
    let cmd = match msg.get("cmd").and_then(|v| v.as_str()) {
        Some(c) => c,
        None => return Vec::new(),
    };
    let active_id = state.shell.active_tab_id().map(|s| s.to_string());

    match cmd {
        "ui_ready" => {
            // Toolbar just loaded on a page — resync it from shell state.
            if let Some(id) = &active_id {
                state.shell.on_view_ready(id);
            }
            let mut events = drain(state);
            events.push(UserEvent::EvalScript(build_toolbar_sync(&state.shell)));
            return events;
        }

        "load_started" => {
            if let Some(id) = &active_id {
                state.shell.on_load_started(id);
            }
        }

        "page_state" => {
            // The page on screen belongs to the active tab.
            if let Some(id) = &active_id {
                let url = msg.get("url").and_then(|v| v.as_str()).unwrap_or("");
                let can_back = msg.get("canBack").and_then(|v| v.as_bool()).unwrap_or(false);
                let can_forward = msg.get("canFwd").and_then(|v| v.as_bool()).unwrap_or(false);
                if let Some(view) = state.shell.view_mut(id) {
                    view.apply_page_state(url, can_back, can_forward);
                }
                state.shell.on_view_ready(id);
                state.shell.on_load_finished(id);

                let title = msg.get("title").and_then(|v| v.as_str()).unwrap_or("");
                if title.is_empty() {
                    let label = intent::host_label(url);
                    state.shell.on_title_changed(id, &label);
                } else {
                    state.shell.on_title_changed(id, title);
                }
            }
        }

        "new_tab" => {
            state.shell.new_tab();
        }

        "close_tab" => {
            if let Some(id) = msg.get("id").and_then(|v| v.as_str()) {
                state.shell.close_tab(id);
            }
        }

        "switch_tab" => {
            if let Some(id) = msg.get("id").and_then(|v| v.as_str()) {
                let _ = state.shell.activate_tab(id);
            }
        }

        "navigate" => {
            let input = msg.get("input").and_then(|v| v.as_str()).unwrap_or("");
            state.shell.navigate(input);
        }

        "back" => state.shell.go_back(),
        "forward" => state.shell.go_forward(),
        "reload" => state.shell.reload(),
        "home" => state.shell.go_home(),

        _ => {}
    }

    drain(state)
}

/// Convert queued view commands and chrome scripts into user events.
fn drain(state: &mut BrowserState) -> Vec<UserEvent> {
    let mut events = Vec::new();
    for cmd in state.shell.factory_mut().take_commands() {
        events.push(match cmd {
            ViewCmd::Load(url) => UserEvent::LoadUrl(url),
            ViewCmd::Reload => UserEvent::EvalScript("location.reload()".into()),
            ViewCmd::Back => UserEvent::EvalScript("history.back()".into()),
            ViewCmd::Forward => UserEvent::EvalScript("history.forward()".into()),
        });
    }
    for script in state.shell.chrome_mut().take_scripts() {
        events.push(UserEvent::EvalScript(script));
    }
    events
}

/// Full toolbar resync: tab strip, address bar, nav buttons.
fn build_toolbar_sync(shell: &Shell) -> String {
    use crate::managers::tab_registry::TabRegistryTrait;
    let tabs: Vec<serde_json::Value> = shell
        .registry()
        .get_all_tabs()
        .iter()
        .map(|t| serde_json::json!({"id": t.id, "title": t.title, "url": t.url}))
        .collect();
    let active_id = shell.active_tab_id().unwrap_or("").to_string();
    let (url, can_back, can_forward) = shell
        .active_tab_id()
        .and_then(|id| shell.view(id))
        .map(|v| (v.current_address(), v.can_go_back(), v.can_go_forward()))
        .unwrap_or_default();
    format!(
        "if(window.__ts_updateTabs)__ts_updateTabs({});if(window.__ts_setUrl)__ts_setUrl({});if(window.__ts_setNavState)__ts_setNavState({},{})",
        serde_json::json!({"tabs": tabs, "activeId": active_id}),
        serde_json::json!(url),
        can_back,
        can_forward
    )
}

// ─── Main entry point ───

pub fn run() {
    let config = ShellConfig::default();
    let home_url = config.home_url.clone();
    let width = config.window_width;
    let height = config.window_height;

    let mut shell = Shell::new(config, MuxFactory::new(), ScriptChrome::new());
    shell.new_tab();
    // The initial page is given to the WebView directly below.
    let _ = shell.factory_mut().take_commands();
    let _ = shell.chrome_mut().take_scripts();

    let state = Arc::new(Mutex::new(BrowserState { shell }));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("Tabshell")
        .with_inner_size(tao::dpi::LogicalSize::new(width, height))
        .build(&event_loop)
        .expect("Failed to create window");

    let ipc_state = state.clone();
    let ipc_proxy = proxy.clone();
    let nw_proxy = proxy.clone();

    let builder = WebViewBuilder::new()
        .with_initialization_script(TOOLBAR_JS)
        .with_url(&home_url)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            eprintln!("[IPC] {}", &body[..body.len().min(200)]);
            let mut s = ipc_state.lock().unwrap();
            for event in handle_ipc(&mut s, body) {
                let _ = ipc_proxy.send_event(event);
            }
        })
        .with_new_window_req_handler(move |url, _features| {
            // Popups open in the current tab instead of a new window.
            eprintln!("[NW] {}", url);
            if url.starts_with("http://") || url.starts_with("https://") {
                let _ = nw_proxy.send_event(UserEvent::LoadUrl(url));
            }
            wry::NewWindowResponse::Deny
        })
        .with_devtools(cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window.default_vbox().expect("Failed to get GTK vbox");
        builder.build_gtk(vbox).expect("Failed to create WebView")
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder.build(&window).expect("Failed to create WebView");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(user_event) => match user_event {
                UserEvent::LoadUrl(url) => {
                    eprintln!("[LOAD] {}", url);
                    let _ = webview.load_url(&url);
                }
                UserEvent::EvalScript(js) => {
                    let _ = webview.evaluate_script(&js);
                }
            },

            _ => {}
        }
    });
}
