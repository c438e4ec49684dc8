//! Cursor-following effects: the glow halo state machine and the throttled
//! trail emitter.
//!
//! The core owns the state only; a host-side sink (DOM elements in the web
//! crate) reads [`GlowState`] and the trail list after each frame and
//! reflects them on screen.

use glam::Vec2;

use crate::api::config::BackdropConfig;
use crate::core::time::Throttle;
use crate::input::queue::InputEvent;

/// The single glow halo following the pointer.
/// `enlarged` flips while the pointer is over an interactive element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowState {
    pub pos: Vec2,
    pub visible: bool,
    pub enlarged: bool,
}

/// One ephemeral trail marker. `id` is unique for the life of the backdrop
/// so sinks can diff the list between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailParticle {
    pub id: u64,
    pub pos: Vec2,
    pub born_ms: f64,
}

/// Pointer state and trail emission. Event-driven: `handle` runs per input
/// event, while `prune_trail` runs on the frame clock so expiry needs no
/// per-particle timers.
pub struct PointerFx {
    glow: GlowState,
    trail: Vec<TrailParticle>,
    throttle: Throttle,
    lifetime_ms: f64,
    max_trail: usize,
    next_id: u64,
}

impl PointerFx {
    pub fn new(config: &BackdropConfig) -> Self {
        Self {
            glow: GlowState {
                pos: Vec2::ZERO,
                visible: false,
                enlarged: false,
            },
            trail: Vec::with_capacity(config.max_trail),
            throttle: Throttle::new(config.trail_interval_ms),
            lifetime_ms: config.trail_lifetime_ms,
            max_trail: config.max_trail,
            next_id: 1,
        }
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerMove { x, y, at_ms } => {
                self.glow.pos = Vec2::new(x, y);
                self.glow.visible = true;
                self.emit_trail(at_ms);
            }
            InputEvent::PointerLeave => self.glow.visible = false,
            InputEvent::HoverEnter => self.glow.enlarged = true,
            InputEvent::HoverExit => self.glow.enlarged = false,
        }
    }

    /// Emit a trail particle at the current glow position when the
    /// throttle allows it and the cap is not reached.
    fn emit_trail(&mut self, at_ms: f64) {
        if self.trail.len() >= self.max_trail || !self.throttle.ready(at_ms) {
            return;
        }
        self.trail.push(TrailParticle {
            id: self.next_id,
            pos: self.glow.pos,
            born_ms: at_ms,
        });
        self.next_id += 1;
    }

    /// Remove every trail particle that has lived out its lifetime.
    /// Runs once per frame on the same clock as the star field.
    pub fn prune_trail(&mut self, now_ms: f64) {
        let lifetime = self.lifetime_ms;
        self.trail.retain(|p| now_ms - p.born_ms < lifetime);
    }

    pub fn glow(&self) -> &GlowState {
        &self.glow
    }

    pub fn trail(&self) -> &[TrailParticle] {
        &self.trail
    }
}
