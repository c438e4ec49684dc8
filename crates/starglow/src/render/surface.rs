//! Render surface abstraction.
//!
//! The core emits a small vocabulary of draw calls against this trait and
//! never touches a platform API directly. The web crate implements it on a
//! Canvas2D context; [`crate::render::record::RecordingSurface`] implements
//! it headlessly for tests.

use glam::Vec2;

/// An RGB color with a fractional alpha, matching the `rgba(r, g, b, a)`
/// notation the drawing backends consume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 1.0);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 1.0);

    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// One stop of a linear gradient, offset in [0, 1] along the stroked line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}

/// The drawing contract between the animation core and a platform backend.
///
/// Coordinates are surface units with the origin at the top-left, x growing
/// right and y growing down. Backends must tolerate alpha values slightly
/// above 1.0 (twinkle overshoot) by saturating.
pub trait Surface {
    /// Paint a translucent overlay across the whole surface. Called once
    /// per frame instead of a clear, so previous frames bleed through and
    /// produce the trail-fade effect.
    fn fade(&mut self, color: Rgba);

    /// Fill a circle (a star).
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line from `from` to `to` with a linear gradient
    /// running between the endpoints.
    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, width: f32, stops: &[GradientStop]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Rgba::new(200, 220, 255, 1.0).with_alpha(0.5);
        assert_eq!((c.r, c.g, c.b), (200, 220, 255));
        assert_eq!(c.a, 0.5);
    }
}
