//! Hover effect binder.
//!
//! One registration pass tags everything already on the page, then two
//! delegated listeners on the document handle the rest at event time:
//! elements added later are tagged lazily on their first mouseover, so no
//! mutation observer is needed.

use starglow::InputEvent;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

/// Text content that glows on hover.
pub const TEXT_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, nav a";
/// Card-like containers that get a box glow.
pub const CARD_SELECTOR: &str = ".edu-card, .timeline-item, .achievement-card";
/// Elements the cursor halo reacts to by enlarging.
pub const INTERACTIVE_SELECTOR: &str = "a, button, .btn, .edu-card, .timeline-item, .achievement-card";

/// Tag every currently matching element with its presentation class.
pub fn apply_initial_classes(document: &Document) -> Result<(), JsValue> {
    add_class_to_matches(document, TEXT_SELECTOR, "glow-hover")?;
    add_class_to_matches(document, CARD_SELECTOR, "card-glow")
}

fn add_class_to_matches(document: &Document, selector: &str, class: &str) -> Result<(), JsValue> {
    let nodes = document.query_selector_all(selector)?;
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                element.class_list().add_1(class)?;
            }
        }
    }
    Ok(())
}

/// Install the delegated mouseover/mouseout listeners. Interactive matches
/// are forwarded to the input queue through `push` so the core can flip
/// the glow halo between its normal and enlarged states.
pub fn install(
    document: &Document,
    push: impl Fn(InputEvent) + Clone + 'static,
) -> Result<(), JsValue> {
    let over = {
        let push = push.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let Some(target) = event_target(&event) else {
                return;
            };
            // Lazy registration for content added after page load.
            if let Some(element) = matched(&target, TEXT_SELECTOR) {
                let _ = element.class_list().add_1("glow-hover");
            }
            if let Some(element) = matched(&target, CARD_SELECTOR) {
                let _ = element.class_list().add_1("card-glow");
            }
            if matched(&target, INTERACTIVE_SELECTOR).is_some() {
                push(InputEvent::HoverEnter);
            }
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    document.add_event_listener_with_callback("mouseover", over.as_ref().unchecked_ref())?;
    over.forget();

    let out = Closure::wrap(Box::new(move |event: MouseEvent| {
        let Some(target) = event_target(&event) else {
            return;
        };
        if matched(&target, INTERACTIVE_SELECTOR).is_some() {
            push(InputEvent::HoverExit);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mouseout", out.as_ref().unchecked_ref())?;
    out.forget();

    Ok(())
}

fn event_target(event: &MouseEvent) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Nearest ancestor (or the element itself) matching `selector`, so events
/// targeting children of an interactive container still count.
fn matched(target: &Element, selector: &str) -> Option<Element> {
    target.closest(selector).ok().flatten()
}
