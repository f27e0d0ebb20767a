use glam::Vec2;
use lightfan_core::{Color, FrameSize, Surface, TextAlign, TextStyle};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] over a canvas 2D context. Sizes are canvas backing pixels.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    line_width: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext error: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        let line_width = web::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        Ok(Self {
            canvas,
            ctx,
            line_width,
        })
    }

    #[allow(deprecated)]
    fn set_stroke(&self, color: Color) {
        self.ctx.set_stroke_style(&JsValue::from_str(&color.css()));
    }

    #[allow(deprecated)]
    fn set_fill(&self, color: Color) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.css()));
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> FrameSize {
        FrameSize::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self, color: Color) {
        self.set_fill(color);
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.set_line_width(self.line_width);
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        self.set_stroke(color);
        self.ctx.begin_path();
        self.ctx.move_to(a.x as f64, a.y as f64);
        self.ctx.line_to(b.x as f64, b.y as f64);
        self.ctx.stroke();
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.set_fill(color);
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn draw_text(&mut self, text: &str, position: Vec2, style: &TextStyle) {
        self.set_fill(style.color);
        self.ctx
            .set_font(&format!("{}px {}", style.size_px, style.family));
        match style.align {
            TextAlign::CenterTop => self.ctx.set_text_align("center"),
            TextAlign::TopLeft => self.ctx.set_text_align("left"),
        }
        self.ctx.set_text_baseline("top");
        _ = self
            .ctx
            .fill_text(text, position.x as f64, position.y as f64);
    }
}
