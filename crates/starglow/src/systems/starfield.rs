//! Twinkling starfield: a fixed population of point particles whose
//! opacity ping-pongs between a floor and full brightness.

use glam::Vec2;

use crate::core::rng::Rng;
use crate::render::surface::{Rgba, Surface};

/// Opacity at which a shrinking star turns around.
const TWINKLE_FLOOR: f32 = 0.2;
/// Opacity at which a growing star turns around.
const TWINKLE_CEIL: f32 = 1.0;

/// A single twinkling star. Position and radius are fixed for life;
/// only opacity and its direction change.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub twinkle_speed: f32,
    pub growing: bool,
}

impl Star {
    /// Advance the twinkle by one frame. The direction flips when a bound
    /// is reached; the value itself is not clamped, so a single-step
    /// overshoot past either bound is possible and expected.
    fn tick(&mut self) {
        if self.growing {
            self.opacity += self.twinkle_speed;
            if self.opacity >= TWINKLE_CEIL {
                self.growing = false;
            }
        } else {
            self.opacity -= self.twinkle_speed;
            if self.opacity <= TWINKLE_FLOOR {
                self.growing = true;
            }
        }
    }
}

/// The fixed-size collection of stars. Created once; stars are never added
/// or removed afterwards, and a surface resize does not reposition them.
pub struct StarField {
    stars: Vec<Star>,
}

impl StarField {
    /// Scatter `count` stars uniformly across `width` x `height`.
    pub fn new(count: usize, width: f32, height: f32, rng: &mut Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
                radius: rng.range(0.5, 2.0),
                opacity: rng.next_f32(),
                twinkle_speed: rng.range(0.01, 0.03),
                growing: rng.coin_flip(),
            })
            .collect();
        Self { stars }
    }

    /// Advance every star's twinkle by one frame.
    pub fn tick(&mut self) {
        for star in &mut self.stars {
            star.tick();
        }
    }

    /// Draw every star as a white filled circle with alpha = opacity.
    pub fn draw(&self, surface: &mut impl Surface) {
        for star in &self.stars {
            surface.fill_circle(star.pos, star.radius, Rgba::WHITE.with_alpha(star.opacity));
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
