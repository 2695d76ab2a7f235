use glam::Vec2;
use plotter_core::{Shadow, Stroke, Surface, TextStyle};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!(format!("get_context error: {:?}", e)))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        ctx.set_stroke_style_str(stroke.color);
        ctx.set_line_width(stroke.width as f64);
        ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &'static str, shadow: Shadow) {
        let ctx = &self.ctx;
        // Shadow settings must not leak into the next frame's grid lines.
        ctx.save();
        ctx.begin_path();
        if let Err(e) = ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU) {
            log::warn!("[canvas] arc error: {:?}", e);
        } else {
            ctx.set_fill_style_str(color);
            ctx.set_shadow_color(shadow.color);
            ctx.set_shadow_blur(shadow.blur as f64);
            ctx.fill();
        }
        ctx.restore();
    }

    fn text(&mut self, at: Vec2, text: &str, style: TextStyle) {
        let ctx = &self.ctx;
        ctx.set_font(style.font);
        ctx.set_fill_style_str(style.color);
        ctx.set_text_align(style.align.as_css());
        ctx.set_text_baseline(style.baseline.as_css());
        _ = ctx.fill_text(text, at.x as f64, at.y as f64);
    }
}
