//! Canvas2D implementation of the core's render surface.

use glam::Vec2;
use starglow::{GradientStop, Rgba, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

/// A viewport-sized 2D canvas the backdrop paints onto.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

fn css(color: Rgba) -> String {
    // Twinkle overshoot can push alpha slightly past 1; saturate here.
    format!(
        "rgba({}, {}, {}, {})",
        color.r,
        color.g,
        color.b,
        color.a.clamp(0.0, 1.0)
    )
}

impl CanvasSurface {
    /// Look up the canvas by element id and grab its 2D context.
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no canvas element #{id}")))?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d canvas context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Resize the canvas bitmap to the window's inner size.
    /// Returns the new dimensions.
    pub fn fit_to_viewport(&self, window: &Window) -> (f32, f32) {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        (width as f32, height as f32)
    }
}

impl Surface for CanvasSurface {
    fn fade(&mut self, color: Rgba) {
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(&css(color)));
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(&css(color)));
        self.ctx.fill();
    }

    fn stroke_gradient_line(&mut self, from: Vec2, to: Vec2, width: f32, stops: &[GradientStop]) {
        let gradient = self.ctx.create_linear_gradient(
            from.x as f64,
            from.y as f64,
            to.x as f64,
            to.y as f64,
        );
        for stop in stops {
            let _ = gradient.add_color_stop(stop.offset, &css(stop.color));
        }
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        let paint: JsValue = gradient.into();
        #[allow(deprecated)]
        self.ctx.set_stroke_style(&paint);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
