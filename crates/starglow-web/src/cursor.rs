//! DOM sink for the pointer effects: one glow halo element plus one
//! short-lived element per trail particle, kept in sync with the core's
//! state after every frame.

use std::collections::{HashMap, HashSet};

use starglow::{BackdropConfig, GlowState, TrailParticle};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Inline style of the glow halo. Size and position are driven per frame;
/// the transition eases the 30px/60px hover resize.
const GLOW_CSS: &str = "\
position: fixed;\
width: 30px;\
height: 30px;\
border-radius: 50%;\
background: radial-gradient(circle, rgba(110, 234, 255, 0.8), rgba(110, 234, 255, 0.2), transparent);\
pointer-events: none;\
transform: translate(-50%, -50%);\
z-index: 9999;\
transition: width 0.2s, height 0.2s, opacity 0.2s;\
opacity: 0;";

/// Stylesheet injected once: hover highlighting plus the trail fade-out.
/// The fade-out animation is purely visual; particle removal is owned by
/// the core's frame clock, not by the animation ending.
const STYLE_RULES: &str = "
.glow-hover {
  transition: all 0.3s ease;
}

.glow-hover:hover {
  text-shadow: 0 0 20px rgba(110, 234, 255, 0.8),
               0 0 30px rgba(110, 234, 255, 0.6),
               0 0 40px rgba(110, 234, 255, 0.4);
  transform: scale(1.02);
}

.card-glow:hover {
  box-shadow: 0 0 30px rgba(110, 234, 255, 0.6),
              0 0 50px rgba(110, 234, 255, 0.4),
              inset 0 0 20px rgba(110, 234, 255, 0.2);
  border-color: #6eeaff !important;
}

.cursor-trail {
  position: fixed;
  width: 10px;
  height: 10px;
  border-radius: 50%;
  background: rgba(110, 234, 255, 0.6);
  pointer-events: none;
  animation: starglow-fade-out 0.5s ease-out forwards;
  z-index: 9998;
}

@keyframes starglow-fade-out {
  to {
    opacity: 0;
    transform: scale(2);
  }
}
";

pub struct CursorLayer {
    document: Document,
    body: HtmlElement,
    glow: HtmlElement,
    trail_nodes: HashMap<u64, HtmlElement>,
    glow_size: f32,
    glow_size_hover: f32,
}

impl CursorLayer {
    pub fn new(document: &Document, config: &BackdropConfig) -> Result<Self, JsValue> {
        inject_styles(document)?;

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no document body"))?;

        let glow = document.create_element("div")?.dyn_into::<HtmlElement>()?;
        glow.set_id("cursor-glow");
        glow.style().set_css_text(GLOW_CSS);
        body.append_child(&glow)?;

        Ok(Self {
            document: document.clone(),
            body,
            glow,
            trail_nodes: HashMap::new(),
            glow_size: config.glow_size,
            glow_size_hover: config.glow_size_hover,
        })
    }

    /// Reflect the core's pointer state in the DOM: reposition the glow
    /// and diff the trail list against the live elements by particle id.
    pub fn sync(&mut self, glow: &GlowState, trail: &[TrailParticle]) -> Result<(), JsValue> {
        let style = self.glow.style();
        style.set_property("left", &format!("{}px", glow.pos.x))?;
        style.set_property("top", &format!("{}px", glow.pos.y))?;
        style.set_property("opacity", if glow.visible { "1" } else { "0" })?;
        let size = if glow.enlarged {
            self.glow_size_hover
        } else {
            self.glow_size
        };
        style.set_property("width", &format!("{}px", size))?;
        style.set_property("height", &format!("{}px", size))?;

        for particle in trail {
            if !self.trail_nodes.contains_key(&particle.id) {
                let node = self.spawn_trail_node(particle)?;
                self.trail_nodes.insert(particle.id, node);
            }
        }

        let live: HashSet<u64> = trail.iter().map(|p| p.id).collect();
        self.trail_nodes.retain(|id, node| {
            let keep = live.contains(id);
            if !keep {
                node.remove();
            }
            keep
        });

        Ok(())
    }

    fn spawn_trail_node(&self, particle: &TrailParticle) -> Result<HtmlElement, JsValue> {
        let node = self
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()?;
        node.set_class_name("cursor-trail");
        let style = node.style();
        style.set_property("left", &format!("{}px", particle.pos.x))?;
        style.set_property("top", &format!("{}px", particle.pos.y))?;
        self.body.append_child(&node)?;
        Ok(node)
    }
}

fn inject_styles(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(STYLE_RULES));
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no document head"))?;
    head.append_child(&style)?;
    Ok(())
}
