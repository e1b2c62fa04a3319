//! Клиентская часть админ-консоли магазина: контекст запросов, состояние
//! списков и общие компоненты страниц.

pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn init() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("admin console initialized");
}
