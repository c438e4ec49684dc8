//! requestAnimationFrame loop, the backdrop's only clock.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Run `frame` once per display refresh, forever. The closure receives the
/// rAF high-resolution timestamp in milliseconds.
///
/// The callback has to reschedule itself, so it lives in an
/// `Rc<RefCell<Option<..>>>` it can reach from inside its own body.
pub fn start_frame_loop(mut frame: impl FnMut(f64) + 'static) -> Result<(), JsValue> {
    let f: FrameClosure = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now_ms: f64| {
        frame(now_ms);
        request_frame(&f);
    }) as Box<dyn FnMut(f64)>));

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref())?;
    Ok(())
}

fn request_frame(f: &FrameClosure) {
    if let Some(window) = web_sys::window() {
        let _ = window.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
