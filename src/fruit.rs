use macroquad::prelude::*;

use crate::config::sections;

pub const FRUIT_FRAMES: u32 = 4;

#[derive(Clone, Debug)]
pub struct Fruit {
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    pub float_phase: f32,
    pub float_offset: f32,
    pub animation_frame: u32,
    pub animation_timer: u32,
    cfg: sections::Fruit,
}

impl Fruit {
    pub fn new(pos: Vec2, size: Vec2, float_phase: f32, cfg: sections::Fruit) -> Self {
        Self {
            pos,
            size,
            collected: false,
            float_phase,
            float_offset: 0.0,
            animation_frame: 0,
            animation_timer: 0,
            cfg,
        }
    }

    pub fn update(&mut self) {
        if self.collected {
            return;
        }

        self.float_phase += self.cfg.float_speed;
        self.float_offset = self.float_phase.sin() * self.cfg.float_distance;

        self.animation_timer += 1;
        if self.animation_timer >= self.cfg.frame_ticks {
            self.animation_timer = 0;
            self.animation_frame = (self.animation_frame + 1) % FRUIT_FRAMES;
        }
    }

    /// Where the sprite goes, bob included.
    pub fn draw_pos(&self) -> Vec2 {
        vec2(self.pos.x, self.pos.y + self.float_offset)
    }

    /// The hitbox is smaller than the sprite and bobs with it.
    pub fn rect(&self) -> Rect {
        let pad = self.cfg.hitbox_padding;
        let pos = self.draw_pos();
        Rect::new(
            pos.x + pad,
            pos.y + pad,
            self.size.x - 2.0 * pad,
            self.size.y - 2.0 * pad,
        )
    }

    /// Returns false if the fruit was already taken.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }

        self.collected = true;
        true
    }
}
