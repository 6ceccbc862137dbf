//! WebAssembly entry point and platform-specific code.

use crate::{AppConfig, MainPane, Workspace};
use granule_core::storage::LocalStorage;
use std::cell::RefCell;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

thread_local! {
    static WORKSPACE: RefCell<Option<Workspace<LocalStorage>>> = const { RefCell::new(None) };
}

/// Initialize logging and restore the workspace from `localStorage`.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("Logger already initialized: {e}").into());
    }

    log::info!("Starting Granule CRM (WASM)");

    let storage = match LocalStorage::new() {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            log::error!("Persistent storage unavailable: {e}");
            return;
        }
    };

    let workspace = Workspace::load(&AppConfig::default(), storage);
    log::info!("Initial pane: {:?}", workspace.main_pane());
    WORKSPACE.with(|slot| *slot.borrow_mut() = Some(workspace));
}

/// URL the host should load in the embedded frame, if any.
#[wasm_bindgen]
pub fn embedded_app_url() -> Option<String> {
    WORKSPACE.with(|slot| match slot.borrow().as_ref().map(Workspace::main_pane) {
        Some(MainPane::Embedded { url, .. }) => Some(url.to_string()),
        _ => None,
    })
}

/// Sidebar click on a pinned app. Returns whether the embedded frame changed.
#[wasm_bindgen]
pub fn open_app(name: &str) -> bool {
    WORKSPACE.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(workspace) = slot.as_mut() else {
            return false;
        };
        let outcome = workspace.open_app(name, &crate::BrowserOpener);
        log::debug!("open_app({name}) -> {outcome:?}");
        matches!(outcome, granule_core::LaunchOutcome::Embedded)
    })
}

/// Pin an app from the apps menu.
#[wasm_bindgen]
pub fn pin_app(name: &str) -> bool {
    WORKSPACE.with(|slot| {
        slot.borrow_mut()
            .as_mut()
            .is_some_and(|workspace| workspace.shortcuts_mut().pin(name))
    })
}

/// Remove an app from the sidebar.
#[wasm_bindgen]
pub fn unpin_app(name: &str) -> bool {
    WORKSPACE.with(|slot| {
        slot.borrow_mut()
            .as_mut()
            .is_some_and(|workspace| workspace.shortcuts_mut().unpin(name))
    })
}

/// Sign in from the login form. Returns the error message on failure.
#[wasm_bindgen]
pub fn sign_in(email: &str, password: &str) -> Result<(), JsValue> {
    with_workspace(|workspace| {
        workspace
            .session_mut()
            .sign_in(email, password)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

#[wasm_bindgen]
pub fn sign_out() -> Result<(), JsValue> {
    with_workspace(|workspace| {
        workspace
            .session_mut()
            .sign_out()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Settings form: change the display name.
#[wasm_bindgen]
pub fn update_profile(full_name: &str) -> Result<(), JsValue> {
    with_workspace(|workspace| {
        workspace
            .session_mut()
            .update_profile(full_name)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

/// Base navigation click, by page title.
#[wasm_bindgen]
pub fn navigate(title: &str) -> bool {
    with_workspace(|workspace| Ok(workspace.navigate_to(title))).unwrap_or(false)
}

/// Close the embedded app.
#[wasm_bindgen]
pub fn close_app() -> bool {
    with_workspace(|workspace| Ok(workspace.close_app())).unwrap_or(false)
}

/// What the content area shows, as JSON.
#[wasm_bindgen]
pub fn main_pane() -> Option<String> {
    WORKSPACE.with(|slot| {
        slot.borrow()
            .as_ref()
            .map(|workspace| workspace.main_pane().to_json().to_string())
    })
}

/// Sidebar rows as a JSON array.
#[wasm_bindgen]
pub fn sidebar() -> Option<String> {
    WORKSPACE.with(|slot| {
        slot.borrow().as_ref().map(|workspace| {
            let items: Vec<_> = workspace.sidebar().iter().map(|item| item.to_json()).collect();
            serde_json::Value::Array(items).to_string()
        })
    })
}

fn with_workspace<T>(
    f: impl FnOnce(&mut Workspace<LocalStorage>) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    WORKSPACE.with(|slot| match slot.borrow_mut().as_mut() {
        Some(workspace) => f(workspace),
        None => Err(JsValue::from_str("workspace not started")),
    })
}
