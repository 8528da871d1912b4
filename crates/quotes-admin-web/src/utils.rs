use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;
use futures::{
    Future,
    future::{AbortHandle, abortable},
};
use futures_signals::signal::{Mutable, Signal};
use quotes_admin_lib::{config::Config, dialog::Dialog};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Window;

thread_local! {
    static WINDOW: Window = web_sys::window().unwrap_throw();
    static CONFIG: std::cell::RefCell<Config> = std::cell::RefCell::new(Config::default());
}

pub struct AsyncState {
    id: usize,
    handle: AbortHandle,
}

impl AsyncState {
    fn new(handle: AbortHandle) -> Self {
        static ID: AtomicUsize = AtomicUsize::new(0);
        let id = ID.fetch_add(1, Ordering::SeqCst);

        Self { id, handle }
    }
}

/// Runs one future at a time on the browser event loop; loading again
/// aborts the previous future.
pub struct AsyncLoader {
    loading: Mutable<Option<AsyncState>>,
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading: Mutable::new(None),
        }
    }

    pub fn replace(&self, value: Option<AsyncState>) {
        let mut loading = self.loading.lock_mut();
        if let Some(state) = loading.as_mut() {
            state.handle.abort();
        }
        *loading = value;
    }

    pub fn load<F>(&self, fut: F)
    where
        F: Future<Output = ()> + 'static,
    {
        let (fut, handle) = abortable(fut);

        let state = AsyncState::new(handle);
        let id = state.id;

        self.replace(Some(state));

        let loading = self.loading.clone();

        spawn_local(async move {
            match fut.await {
                Ok(()) => {
                    let mut loading = loading.lock_mut();

                    if let Some(current_id) = loading.as_ref().map(|x| x.id) {
                        if current_id == id {
                            *loading = None;
                        }
                    }
                }
                Err(e) => {
                    debug!("task aborted: {}", e);
                }
            }
        });
    }

    pub fn is_loading(&self) -> impl Signal<Item = bool> + use<> {
        self.loading.signal_ref(|x| x.is_some())
    }
}

/// Reads `window.__QUOTES_ADMIN_CONFIG__` when the host page provides one.
fn injected_config() -> Result<Option<Config>, anyhow::Error> {
    let val = js_sys::eval("window.__QUOTES_ADMIN_CONFIG__")
        .map_err(|e| anyhow!("error reading config: {:?}", e))?;
    if val.is_undefined() || val.is_null() {
        return Ok(None);
    }

    let raw: String = js_sys::JSON::stringify(&val)
        .map_err(|e| anyhow!("error serializing config: {:?}", e))?
        .into();

    Ok(Some(Config::from_json(&raw)?))
}

pub fn initialize_config() {
    let mut config = match injected_config() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            warn!("{e}, using defaults");
            Config::default()
        }
    };

    // the http client needs an absolute url
    if config.api_url.starts_with('/') {
        match window().location().origin() {
            Ok(origin) => config.api_url = format!("{}{}", origin, config.api_url),
            Err(e) => error!("error reading origin: {:?}", e),
        }
    }

    info!("using api at {}", config.api_url);
    CONFIG.with(|c| *c.borrow_mut() = config);
}

pub fn config() -> Config {
    CONFIG.with(|c| c.borrow().clone())
}

pub fn window() -> Window {
    WINDOW.with(|s| s.clone())
}

pub struct BrowserDialog;

impl Dialog for BrowserDialog {
    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        if let Err(e) = window().alert_with_message(message) {
            error!("error showing alert: {:?}", e);
        }
    }
}
