#[macro_use]
extern crate log;

mod app;
mod categories;
mod common;
mod dashboard;
mod quotes;
mod uploader;
mod utils;

use app::App;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub async fn main_js() -> Result<(), JsValue> {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    utils::initialize_config();

    dominator::append_dom(&dominator::body(), App::render(App::new(utils::config())));

    Ok(())
}
