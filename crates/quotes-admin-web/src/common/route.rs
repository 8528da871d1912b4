use dominator::routing;
use futures_signals::signal::{Signal, SignalExt};
use wasm_bindgen::prelude::*;
use web_sys::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Categories,
    Quotes,
    NotFound,
}

impl Route {
    pub fn from_path(pathname: &str) -> Self {
        let mut paths = pathname.split('/').collect::<Vec<_>>();
        paths.retain(|path| !path.is_empty());

        match paths.as_slice() {
            [] => Route::Dashboard,
            ["categories"] => Route::Categories,
            ["quotes"] => Route::Quotes,
            _ => Route::NotFound,
        }
    }

    pub fn signal() -> impl Signal<Item = Self> {
        routing::url()
            .signal_ref(|url| Url::new(url).unwrap_throw())
            .map(|url| Route::from_path(&url.pathname()))
            .dedupe()
    }

    pub fn url(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Categories => "/categories".to_string(),
            Route::Quotes => "/quotes".to_string(),
            Route::NotFound => "/notfound".to_string(),
        }
    }
}
