mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let Some(root) = utils::dom::document().and_then(|d| d.get_element_by_id(config::MOUNT_ID))
    else {
        utils::log::error(&format!("Missing #{} element", config::MOUNT_ID));
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
