//! Drawing seam between the scene and a platform surface.
//!
//! The scene only ever speaks in lines, circles and text. Front-ends implement
//! [`Surface`] on top of a 2D canvas context or a GPU line batch.

use glam::Vec2;

/// 8-bit RGBA color, matching the 0..255 channel values of the palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Normalized `[r, g, b, a]` in 0..1.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// CSS `rgba(...)` string for canvas style setters.
    pub fn css(self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Horizontally centered on the anchor, top edge at the anchor.
    CenterTop,
    TopLeft,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub family: &'static str,
    pub align: TextAlign,
    pub color: Color,
}

/// Drawable area in surface units (pixels on both front-ends).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

impl FrameSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Largest wall radius that stays on screen: half the shorter side.
    #[inline]
    pub fn max_visible_radius(&self) -> f32 {
        self.width.min(self.height) / 2.0
    }
}

pub trait Surface {
    fn size(&self) -> FrameSize;
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn draw_text(&mut self, text: &str, position: Vec2, style: &TextStyle);
}
