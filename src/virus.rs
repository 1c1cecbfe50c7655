use macroquad::prelude::*;

use crate::config::sections;

pub const VIRUS_FRAMES: u32 = 4;

/// A virus patrolling between two x coordinates. It hurts the
/// player on contact and can't be defeated.
#[derive(Clone, Debug)]
pub struct Virus {
    pub pos: Vec2,
    pub size: Vec2,
    pub left_bound: f32,
    pub right_bound: f32,
    /// Either 1.0 (right) or -1.0 (left)
    pub direction: f32,
    pub speed: f32,
    pub animation_frame: u32,
    pub animation_timer: u32,
    pub hit: bool,
    /// Counted in animation frames, not ticks
    pub hit_timer: u32,
    cfg: sections::Virus,
}

impl Virus {
    pub fn new(pos: Vec2, size: Vec2, left_bound: f32, right_bound: f32, cfg: sections::Virus) -> Self {
        let (left_bound, right_bound) = (left_bound.min(right_bound), left_bound.max(right_bound));

        Self {
            pos: vec2(pos.x.clamp(left_bound, right_bound), pos.y),
            size,
            left_bound,
            right_bound,
            direction: 1.0,
            speed: cfg.speed,
            animation_frame: 0,
            animation_timer: 0,
            hit: false,
            hit_timer: 0,
            cfg,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn flip_x(&self) -> bool {
        self.direction < 0.0
    }

    pub fn update(&mut self) {
        self.pos.x += self.speed * self.direction;

        if self.pos.x <= self.left_bound {
            self.pos.x = self.left_bound;
            self.direction = -self.direction;
        } else if self.pos.x >= self.right_bound {
            self.pos.x = self.right_bound;
            self.direction = -self.direction;
        }

        self.animation_timer += 1;
        if self.animation_timer < self.cfg.frame_ticks {
            return;
        }
        self.animation_timer = 0;
        self.animation_frame = (self.animation_frame + 1) % VIRUS_FRAMES;

        if self.hit {
            self.hit_timer += 1;
            if self.hit_timer > self.cfg.hit_frames {
                self.hit = false;
                self.hit_timer = 0;
            }
        }
    }

    /// Plays the hit animation from the start.
    pub fn strike(&mut self) {
        self.hit = true;
        self.hit_timer = 0;
    }
}
