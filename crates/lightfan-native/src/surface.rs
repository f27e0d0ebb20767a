use glam::Vec2;
use lightfan_core::{Color, FrameSize, Surface, TextStyle};
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

/// CPU-side line list rebuilt every frame and uploaded in one write.
///
/// Text has no glyph path here; the last string drawn becomes the window title.
pub struct LineBatch {
    size: FrameSize,
    clear: Color,
    vertices: Vec<LineVertex>,
    title: String,
    title_dirty: bool,
}

impl LineBatch {
    pub fn new(size: FrameSize) -> Self {
        Self {
            size,
            clear: Color::rgb(0, 0, 0),
            vertices: Vec::new(),
            title: String::new(),
            title_dirty: false,
        }
    }

    pub fn set_size(&mut self, size: FrameSize) {
        self.size = size;
    }

    #[inline]
    pub fn vertices(&self) -> &[LineVertex] {
        &self.vertices
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear
    }

    /// New title since the last call, if the drawn text changed.
    pub fn take_title(&mut self) -> Option<&str> {
        if self.title_dirty {
            self.title_dirty = false;
            Some(&self.title)
        } else {
            None
        }
    }

    fn push_line(&mut self, a: Vec2, b: Vec2, color: [f32; 4]) {
        self.vertices.push(LineVertex {
            pos: a.to_array(),
            color,
        });
        self.vertices.push(LineVertex {
            pos: b.to_array(),
            color,
        });
    }
}

impl Surface for LineBatch {
    fn size(&self) -> FrameSize {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.clear = color;
        self.vertices.clear();
    }

    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Color) {
        self.push_line(a, b, color.to_f32_array());
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let color = color.to_f32_array();
        let steps = ((radius * TAU).ceil() as usize).clamp(8, 128);
        let mut prev = center + Vec2::new(radius, 0.0);
        for i in 1..=steps {
            let next = center + Vec2::from_angle(i as f32 / steps as f32 * TAU) * radius;
            self.push_line(prev, next, color);
            prev = next;
        }
    }

    fn draw_text(&mut self, text: &str, _position: Vec2, _style: &TextStyle) {
        if self.title != text {
            self.title.clear();
            self.title.push_str(text);
            self.title_dirty = true;
        }
    }
}
