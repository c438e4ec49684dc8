//! Shooting stars: transient streaks spawned stochastically, sliding
//! down-right at a fixed 45° slant while their opacity decays.

use glam::Vec2;

use crate::api::config::BackdropConfig;
use crate::core::rng::Rng;
use crate::render::surface::{GradientStop, Rgba, Surface};

/// Mid-gradient tint of the streak tail.
const PALE_BLUE: Rgba = Rgba::new(200, 220, 255, 1.0);

/// Unit heading for the fixed 45° down-right slant: cos and sin of pi/4.
fn heading() -> Vec2 {
    Vec2::splat(std::f32::consts::FRAC_1_SQRT_2)
}

/// One streak. Length and speed are fixed at spawn; position advances and
/// opacity decays every frame until removal.
#[derive(Debug, Clone, PartialEq)]
pub struct ShootingStar {
    pub pos: Vec2,
    pub length: f32,
    pub speed: f32,
    pub opacity: f32,
}

impl ShootingStar {
    /// Advance one frame. Returns false once the streak has faded out or
    /// left the surface through the right or bottom edge.
    fn tick(&mut self, bounds: Vec2, decay: f32) -> bool {
        self.pos += heading() * self.speed;
        self.opacity -= decay;
        !(self.pos.x > bounds.x || self.pos.y > bounds.y || self.opacity <= 0.0)
    }

    /// Trailing end of the streak, behind the head along the slant.
    pub fn tail(&self) -> Vec2 {
        self.pos - heading() * self.length
    }
}

/// Owner of the active streaks. The population is explicitly capped:
/// spawn attempts at capacity are dropped.
pub struct ShootingStars {
    active: Vec<ShootingStar>,
    spawn_chance: f32,
    length_range: (f32, f32),
    speed_range: (f32, f32),
    decay: f32,
    width: f32,
    max_active: usize,
    spawned: u64,
}

impl ShootingStars {
    pub fn new(config: &BackdropConfig) -> Self {
        Self {
            active: Vec::with_capacity(config.max_streaks.min(64)),
            spawn_chance: config.spawn_chance,
            length_range: config.streak_length,
            speed_range: config.streak_speed,
            decay: config.streak_decay,
            width: config.streak_width,
            max_active: config.max_streaks,
            spawned: 0,
        }
    }

    /// Spawn one streak at a random position in the upper half of the
    /// surface, fully opaque. Dropped silently when the cap is reached.
    pub fn spawn_one(&mut self, bounds: Vec2, rng: &mut Rng) {
        if self.active.len() >= self.max_active {
            return;
        }
        self.active.push(ShootingStar {
            pos: Vec2::new(rng.range(0.0, bounds.x), rng.range(0.0, bounds.y * 0.5)),
            length: rng.range(self.length_range.0, self.length_range.1),
            speed: rng.range(self.speed_range.0, self.speed_range.1),
            opacity: 1.0,
        });
        self.spawned += 1;
    }

    /// One Bernoulli trial per rendered frame, not per unit of wall-clock
    /// time, so the effective spawn rate follows the display refresh rate.
    /// Known quirk of the effect, kept on purpose.
    pub fn maybe_spawn(&mut self, bounds: Vec2, rng: &mut Rng) {
        if rng.chance(self.spawn_chance) {
            self.spawn_one(bounds, rng);
        }
    }

    /// Advance all streaks and remove the expired ones in the same pass.
    pub fn tick(&mut self, bounds: Vec2) {
        let decay = self.decay;
        self.active.retain_mut(|s| s.tick(bounds, decay));
    }

    /// Draw each streak as a stroked line from head to tail with a
    /// three-stop gradient fading from white through pale blue to nothing.
    pub fn draw(&self, surface: &mut impl Surface) {
        for s in &self.active {
            let stops = [
                GradientStop {
                    offset: 0.0,
                    color: Rgba::WHITE.with_alpha(s.opacity),
                },
                GradientStop {
                    offset: 0.5,
                    color: PALE_BLUE.with_alpha(s.opacity * 0.5),
                },
                GradientStop {
                    offset: 1.0,
                    color: Rgba::WHITE.with_alpha(0.0),
                },
            ];
            surface.stroke_gradient_line(s.pos, s.tail(), self.width, &stops);
        }
    }

    pub fn active(&self) -> &[ShootingStar] {
        &self.active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Total number of streaks spawned since construction.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn spawner() -> ShootingStars {
        ShootingStars::new(&BackdropConfig::default())
    }

    #[test]
    fn spawn_lands_in_upper_half() {
        let mut rng = Rng::new(42);
        let mut s = spawner();
        for _ in 0..200 {
            s.spawn_one(BOUNDS, &mut rng);
        }
        let n = s.len();
        for star in s.active().iter().take(n) {
            assert!(star.pos.x >= 0.0 && star.pos.x < BOUNDS.x);
            assert!(star.pos.y >= 0.0 && star.pos.y < BOUNDS.y * 0.5);
            assert!(star.length >= 40.0 && star.length < 120.0);
            assert!(star.speed >= 2.0 && star.speed < 5.0);
            assert_eq!(star.opacity, 1.0);
        }
    }

    #[test]
    fn opacity_strictly_decreases_until_removal() {
        let mut rng = Rng::new(7);
        let mut s = spawner();
        s.spawn_one(BOUNDS, &mut rng);
        let mut last = s.active()[0].opacity;
        while !s.is_empty() {
            s.tick(BOUNDS);
            if let Some(star) = s.active().first() {
                assert!(star.opacity < last, "opacity must decrease every tick");
                last = star.opacity;
            }
        }
    }

    #[test]
    fn removed_same_tick_it_crosses_right_edge() {
        let mut s = spawner();
        s.active.push(ShootingStar {
            pos: Vec2::new(BOUNDS.x - 0.1, 100.0),
            length: 50.0,
            speed: 3.0,
            opacity: 1.0,
        });
        s.tick(BOUNDS);
        assert!(s.is_empty(), "streak past the right edge must be gone");
    }

    #[test]
    fn removed_same_tick_it_crosses_bottom_edge() {
        let mut s = spawner();
        s.active.push(ShootingStar {
            pos: Vec2::new(100.0, BOUNDS.y - 0.1),
            length: 50.0,
            speed: 3.0,
            opacity: 1.0,
        });
        s.tick(BOUNDS);
        assert!(s.is_empty(), "streak past the bottom edge must be gone");
    }

    #[test]
    fn removed_once_faded_out() {
        let mut s = spawner();
        s.active.push(ShootingStar {
            pos: Vec2::new(10.0, 10.0),
            length: 50.0,
            speed: 0.0,
            opacity: 0.004,
        });
        s.tick(BOUNDS);
        assert!(s.is_empty(), "fully faded streak must be gone");
    }

    #[test]
    fn cap_limits_active_population() {
        let mut rng = Rng::new(9);
        let config = BackdropConfig {
            max_streaks: 5,
            ..BackdropConfig::default()
        };
        let mut s = ShootingStars::new(&config);
        for _ in 0..50 {
            s.spawn_one(BOUNDS, &mut rng);
        }
        assert_eq!(s.len(), 5);
        assert_eq!(s.spawned(), 5);
    }

    #[test]
    fn spawn_rate_matches_probability() {
        let mut rng = Rng::new(2024);
        let config = BackdropConfig {
            max_streaks: 100_000,
            ..BackdropConfig::default()
        };
        let mut s = ShootingStars::new(&config);
        const TICKS: u64 = 100_000;
        for _ in 0..TICKS {
            s.tick(BOUNDS);
            s.maybe_spawn(BOUNDS, &mut rng);
        }
        // p = 0.005 over 100k trials: expect 500, sd ~22. Allow ~6 sigma.
        let spawned = s.spawned();
        assert!(
            (350..=650).contains(&spawned),
            "spawned {} streaks, expected about 500",
            spawned
        );
    }

    #[test]
    fn draw_emits_one_gradient_line_per_streak() {
        use crate::render::record::RecordingSurface;
        let mut rng = Rng::new(5);
        let mut s = spawner();
        for _ in 0..3 {
            s.spawn_one(BOUNDS, &mut rng);
        }
        let mut surface = RecordingSurface::new();
        s.draw(&mut surface);
        assert_eq!(surface.gradient_lines().count(), 3);
    }

    #[test]
    fn tail_lies_up_left_of_head() {
        let star = ShootingStar {
            pos: Vec2::new(100.0, 100.0),
            length: 50.0,
            speed: 3.0,
            opacity: 1.0,
        };
        let tail = star.tail();
        assert!(tail.x < star.pos.x);
        assert!(tail.y < star.pos.y);
        // 45° slant: both offsets equal.
        assert!((star.pos.x - tail.x - (star.pos.y - tail.y)).abs() < 1e-4);
    }
}
