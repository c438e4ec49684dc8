//! Minimal page that boots the backdrop on the `#bg` canvas with the
//! default configuration.

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    starglow_web::backdrop_start("bg", "")
}
