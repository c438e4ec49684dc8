//! The orchestrating object owning all backdrop state.
//!
//! One [`Backdrop::tick`] call corresponds to one rendered frame. The host
//! drives it from its display-sync callback and pushes pointer events into
//! an [`InputQueue`] between frames; nothing here blocks or reschedules.

use glam::Vec2;

use crate::api::config::BackdropConfig;
use crate::core::rng::Rng;
use crate::input::queue::InputQueue;
use crate::render::surface::{Rgba, Surface};
use crate::systems::pointer::PointerFx;
use crate::systems::shooting::ShootingStars;
use crate::systems::starfield::StarField;

/// All animation state behind the backdrop: star field, shooting stars,
/// pointer effects and the RNG feeding them.
pub struct Backdrop {
    config: BackdropConfig,
    width: f32,
    height: f32,
    rng: Rng,
    stars: StarField,
    streaks: ShootingStars,
    pointer: PointerFx,
}

impl Backdrop {
    /// Build the backdrop for a `width` x `height` surface. The seed makes
    /// every random parameter reproducible; hosts that want variety pass
    /// the wall clock. A `config.seed` takes precedence.
    pub fn new(config: BackdropConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Rng::new(config.seed.unwrap_or(seed));
        let stars = StarField::new(config.star_count, width, height, &mut rng);
        let mut streaks = ShootingStars::new(&config);
        // The sky starts with one streak already in flight.
        streaks.spawn_one(Vec2::new(width, height), &mut rng);
        let pointer = PointerFx::new(&config);

        log::debug!(
            "backdrop initialized: {} stars on {}x{}",
            stars.len(),
            width,
            height
        );

        Self {
            config,
            width,
            height,
            rng,
            stars,
            streaks,
            pointer,
        }
    }

    /// Run one frame: consume input, expire trail particles, fade the
    /// surface, then update and draw each particle system in order.
    ///
    /// While either dimension is zero every draw call is skipped; state
    /// keeps advancing so the animation resumes seamlessly once the
    /// surface gains a size.
    pub fn tick(&mut self, surface: &mut impl Surface, input: &mut InputQueue, now_ms: f64) {
        for event in input.drain() {
            self.pointer.handle(&event);
        }
        self.pointer.prune_trail(now_ms);

        let bounds = Vec2::new(self.width, self.height);
        let drawable = self.width > 0.0 && self.height > 0.0;

        if drawable {
            surface.fade(Rgba::BLACK.with_alpha(self.config.fade_alpha));
        }

        self.stars.tick();
        if drawable {
            self.stars.draw(surface);
        }

        self.streaks.tick(bounds);
        if drawable {
            self.streaks.draw(surface);
        }
        self.streaks.maybe_spawn(bounds, &mut self.rng);
    }

    /// Adopt new surface dimensions. Existing particles are untouched;
    /// stars that end up outside a smaller surface simply stop being
    /// visible until the surface grows again.
    pub fn resize(&mut self, width: f32, height: f32) {
        log::debug!("backdrop resized to {}x{}", width, height);
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &BackdropConfig {
        &self.config
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn streaks(&self) -> &ShootingStars {
        &self.streaks
    }

    pub fn pointer(&self) -> &PointerFx {
        &self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::queue::InputEvent;
    use crate::render::record::{DrawOp, RecordingSurface};

    fn backdrop() -> Backdrop {
        Backdrop::new(BackdropConfig::default(), 800.0, 600.0, 42)
    }

    #[test]
    fn starts_with_one_streak_in_flight() {
        let b = backdrop();
        assert_eq!(b.streaks().len(), 1);
    }

    #[test]
    fn frame_draws_fade_then_stars_then_streaks() {
        let mut b = backdrop();
        let mut surface = RecordingSurface::new();
        let mut input = InputQueue::new();
        b.tick(&mut surface, &mut input, 0.0);

        assert!(matches!(surface.ops[0], DrawOp::Fade { .. }));
        let fades = surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Fade { .. }))
            .count();
        assert_eq!(fades, 1);
        assert_eq!(surface.circles().count(), 200);
        // All circles precede all gradient lines.
        let last_circle = surface
            .ops
            .iter()
            .rposition(|op| matches!(op, DrawOp::Circle { .. }))
            .unwrap();
        let first_line = surface
            .ops
            .iter()
            .position(|op| matches!(op, DrawOp::GradientLine { .. }));
        if let Some(first_line) = first_line {
            assert!(last_circle < first_line);
        }
    }

    #[test]
    fn zero_sized_surface_draws_nothing() {
        let mut b = Backdrop::new(BackdropConfig::default(), 0.0, 0.0, 42);
        let mut surface = RecordingSurface::new();
        let mut input = InputQueue::new();
        b.tick(&mut surface, &mut input, 0.0);
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn state_still_advances_while_unsized() {
        let mut b = Backdrop::new(BackdropConfig::default(), 0.0, 0.0, 42);
        let before: Vec<f32> = b.stars().stars().iter().map(|s| s.opacity).collect();
        let mut surface = RecordingSurface::new();
        let mut input = InputQueue::new();
        b.tick(&mut surface, &mut input, 0.0);
        let after: Vec<f32> = b.stars().stars().iter().map(|s| s.opacity).collect();
        assert_ne!(before, after);
    }

    #[test]
    fn resize_preserves_star_positions() {
        let mut b = backdrop();
        let before: Vec<_> = b.stars().stars().to_vec();
        b.resize(400.0, 300.0);

        let mut surface = RecordingSurface::new();
        let mut input = InputQueue::new();
        b.tick(&mut surface, &mut input, 0.0);

        assert_eq!(b.stars().len(), before.len());
        for (old, new) in before.iter().zip(b.stars().stars()) {
            assert_eq!(old.pos, new.pos, "resize must not reposition stars");
        }
        // Some stars now live outside the smaller bounds and stay there.
        assert!(b
            .stars()
            .stars()
            .iter()
            .any(|s| s.pos.x > 400.0 || s.pos.y > 300.0));
    }

    #[test]
    fn fixed_seed_reproduces_first_frame() {
        let mut a = backdrop();
        let mut b = backdrop();
        let mut surface_a = RecordingSurface::new();
        let mut surface_b = RecordingSurface::new();
        let mut input_a = InputQueue::new();
        let mut input_b = InputQueue::new();
        for now in [0.0, 16.0, 32.0] {
            a.tick(&mut surface_a, &mut input_a, now);
            b.tick(&mut surface_b, &mut input_b, now);
        }
        assert_eq!(surface_a.ops, surface_b.ops);
    }

    #[test]
    fn config_seed_overrides_host_seed() {
        let config = BackdropConfig {
            seed: Some(99),
            ..BackdropConfig::default()
        };
        let a = Backdrop::new(config.clone(), 800.0, 600.0, 1);
        let b = Backdrop::new(config, 800.0, 600.0, 2);
        assert_eq!(a.stars().stars(), b.stars().stars());
    }

    #[test]
    fn pointer_events_flow_through_tick() {
        let mut b = backdrop();
        let mut surface = RecordingSurface::new();
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerMove {
            x: 12.0,
            y: 34.0,
            at_ms: 5.0,
        });
        b.tick(&mut surface, &mut input, 5.0);
        assert!(b.pointer().glow().visible);
        assert_eq!(b.pointer().trail().len(), 1);

        // The trail particle expires through the frame clock.
        b.tick(&mut surface, &mut input, 600.0);
        assert!(b.pointer().trail().is_empty());
    }
}
