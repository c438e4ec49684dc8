//! Document and window listeners feeding the backdrop: pointer movement
//! into the input queue, viewport resizes into a canvas refit.

use starglow::InputEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MouseEvent, Window};

/// Forward mousemove coordinates (with the event timestamp, which drives
/// the trail throttle) and mouseleave into the input queue.
pub fn install_pointer_listeners(
    document: &Document,
    push: impl Fn(InputEvent) + Clone + 'static,
) -> Result<(), JsValue> {
    let mousemove = {
        let push = push.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            push(InputEvent::PointerMove {
                x: event.client_x() as f32,
                y: event.client_y() as f32,
                at_ms: event.time_stamp(),
            });
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    document.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
    mousemove.forget();

    let mouseleave = Closure::wrap(Box::new(move |_: MouseEvent| {
        push(InputEvent::PointerLeave);
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mouseleave", mouseleave.as_ref().unchecked_ref())?;
    mouseleave.forget();

    Ok(())
}

/// Call `on_resize` whenever the window changes size.
pub fn install_resize_listener(
    window: &Window,
    on_resize: impl Fn() + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move || on_resize()) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
