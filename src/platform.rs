use macroquad::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Platform {
    pub rect: Rect,
    /// Used when the platform sprite is unavailable
    pub color: Color,
}

impl Platform {
    pub fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            color,
        }
    }
}
