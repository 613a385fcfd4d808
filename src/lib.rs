#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod overlay;
mod page;
mod scheduler;

pub use events::{bind_number_dragger, NumberDragger};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mipcalc-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::add_listener(&document, "DOMContentLoaded", move |_| run(&doc));
    } else {
        run(&document);
    }
    Ok(())
}

fn run(document: &web::Document) {
    if let Err(e) = page::init(document) {
        log::error!("init error: {:?}", e);
    }
}
