//! Headless surface that records draw calls instead of rasterizing.
//! Serves as the software fallback backend and as the assertion point for
//! draw-order tests.

use glam::Vec2;

use super::surface::{GradientStop, Rgba, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fade {
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    GradientLine {
        from: Vec2,
        to: Vec2,
        width: f32,
        stops: Vec<GradientStop>,
    },
}

/// Surface implementation that appends every call to `ops`.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded calls (typically between frames in a test).
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
    }

    pub fn gradient_lines(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::GradientLine { .. }))
    }
}

impl Surface for RecordingSurface {
    fn fade(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Fade { color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, width: f32, stops: &[GradientStop]) {
        self.ops.push(DrawOp::GradientLine {
            from,
            to,
            width,
            stops: stops.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut s = RecordingSurface::new();
        s.fade(Rgba::BLACK.with_alpha(0.1));
        s.fill_circle(Vec2::new(1.0, 2.0), 0.5, Rgba::WHITE);
        assert_eq!(s.ops.len(), 2);
        assert!(matches!(s.ops[0], DrawOp::Fade { .. }));
        assert!(matches!(s.ops[1], DrawOp::Circle { .. }));
    }

    #[test]
    fn clear_empties_ops() {
        let mut s = RecordingSurface::new();
        s.fade(Rgba::BLACK.with_alpha(0.1));
        s.clear();
        assert!(s.ops.is_empty());
    }
}
