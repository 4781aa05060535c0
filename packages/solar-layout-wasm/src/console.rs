use wasm_bindgen::prelude::*;

// Binding for console.log so the layout entry points can report progress.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

// The console_log macro lives in lib.rs so there is a single definition.
