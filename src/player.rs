use macroquad::prelude::*;

use crate::config::sections;
use crate::platform::Platform;

/// Horizontal tolerance on each side of a platform when landing on it.
pub const LANDING_INSET: f32 = 5.0;
/// Horizontal tolerance on each side of a platform when bumping into it from below.
pub const CEILING_INSET: f32 = 10.0;
/// How far above a platform's bottom edge the player's head may be to bump into it.
pub const CEILING_REACH: f32 = 5.0;

pub const WALK_THRESHOLD: f32 = 0.1;
pub const AIRBORNE_THRESHOLD: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAnim {
    Idle,
    Walk,
    Jump,
    Fall,
    Hit,
}

impl PlayerAnim {
    pub const ALL: [PlayerAnim; 5] = [
        PlayerAnim::Idle,
        PlayerAnim::Walk,
        PlayerAnim::Jump,
        PlayerAnim::Fall,
        PlayerAnim::Hit,
    ];

    pub fn frame_count(self) -> u32 {
        match self {
            PlayerAnim::Idle => 11,
            PlayerAnim::Walk => 12,
            PlayerAnim::Jump => 5,
            PlayerAnim::Fall => 1,
            PlayerAnim::Hit => 5,
        }
    }

    /// Ticks between two animation frames.
    pub fn frame_ticks(self) -> u32 {
        match self {
            PlayerAnim::Walk => 5,
            PlayerAnim::Jump => 3,
            PlayerAnim::Hit => 6,
            PlayerAnim::Idle | PlayerAnim::Fall => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    Left,
    Right,
}

/// The micro robot. Position is the top-left corner of its box.
#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    pub hp: i32,
    pub hit_timer: u32,
    pub anim: PlayerAnim,
    pub facing: Facing,
    pub animation_frame: u32,
    pub animation_timer: u32,
    cfg: sections::Player,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2, cfg: sections::Player) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
            hp: cfg.max_hp,
            hit_timer: 0,
            anim: PlayerAnim::Idle,
            facing: Facing::Right,
            animation_frame: 0,
            animation_timer: 0,
            cfg,
        }
    }

    pub fn max_hp(&self) -> i32 {
        self.cfg.max_hp
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    pub fn is_invulnerable(&self) -> bool {
        self.hit_timer > 0
    }

    /// Whether the hit outline is visible this tick.
    pub fn is_blinking(&self) -> bool {
        self.hit_timer > 0 && (self.hit_timer / 2) % 2 == 0
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Advances the player by one tick: gravity, collisions, timers
    /// and animation.
    pub fn update(&mut self, platforms: &[Platform], world: &sections::World) {
        if !self.on_ground {
            self.vel.y += world.gravity;
        }
        self.pos += self.vel;
        self.on_ground = false;

        let floor_y = world.floor_y();
        if self.pos.y >= floor_y {
            self.pos.y = floor_y;
            self.vel.y = 0.0;
            self.on_ground = true;
        }

        self.resolve_platforms(platforms);

        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        }
        if self.pos.x > world.width - self.size.x {
            self.pos.x = world.width - self.size.x;
        }

        self.hit_timer = self.hit_timer.saturating_sub(1);

        self.derive_anim();
        self.animate();
    }

    fn resolve_platforms(&mut self, platforms: &[Platform]) {
        for platform in platforms {
            let plat = platform.rect;
            let me = self.rect();

            let lands = self.vel.y >= 0.0
                && me.bottom() >= plat.top()
                && me.bottom() <= plat.center().y
                && me.right() > plat.left() + LANDING_INSET
                && me.left() < plat.right() - LANDING_INSET;
            if lands {
                self.pos.y = plat.top() - self.size.y;
                self.vel.y = 0.0;
                self.on_ground = true;
                break;
            }

            let bumps = self.vel.y < 0.0
                && me.top() >= plat.bottom() - CEILING_REACH
                && me.top() < plat.bottom()
                && me.right() > plat.left() + CEILING_INSET
                && me.left() < plat.right() - CEILING_INSET;
            if bumps {
                self.pos.y = plat.bottom();
                self.vel.y = 0.0;
            }
        }
    }

    fn derive_anim(&mut self) {
        if self.anim == PlayerAnim::Hit {
            return;
        }

        if !self.on_ground {
            if self.vel.y < -AIRBORNE_THRESHOLD {
                self.anim = PlayerAnim::Jump;
            } else if self.vel.y > AIRBORNE_THRESHOLD {
                self.anim = PlayerAnim::Fall;
            }
        } else if self.vel.x.abs() > WALK_THRESHOLD {
            self.anim = PlayerAnim::Walk;
        } else {
            self.anim = PlayerAnim::Idle;
        }
    }

    fn animate(&mut self) {
        self.animation_timer += 1;
        if self.animation_timer < self.anim.frame_ticks() {
            return;
        }
        self.animation_timer = 0;

        match self.anim {
            PlayerAnim::Fall => self.animation_frame = 0,
            PlayerAnim::Hit => {
                if self.animation_frame + 1 < PlayerAnim::Hit.frame_count() {
                    self.animation_frame += 1;
                } else {
                    self.anim = PlayerAnim::Idle;
                    self.animation_frame = 0;
                }
            }
            anim => self.animation_frame = (self.animation_frame + 1) % anim.frame_count(),
        }
    }

    /// The frame to draw. The stored frame may belong to the previous
    /// animation until the next advance, so it is wrapped here.
    pub fn sprite_frame(&self) -> (PlayerAnim, Facing, usize) {
        let frame = self.animation_frame % self.anim.frame_count();
        (self.anim, self.facing, frame as usize)
    }

    pub fn move_left(&mut self) {
        self.vel.x = -self.cfg.speed;
        self.facing = Facing::Left;
    }

    pub fn move_right(&mut self) {
        self.vel.x = self.cfg.speed;
        self.facing = Facing::Right;
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }

    /// Returns true if the player actually took off.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }

        self.vel.y = self.cfg.jump_strength;
        self.on_ground = false;
        self.anim = PlayerAnim::Jump;
        self.animation_frame = 0;

        true
    }

    /// Returns true if the hit went through. Hits during the
    /// invulnerability window or after death are ignored.
    pub fn take_damage(&mut self) -> bool {
        if self.is_invulnerable() || self.is_dead() {
            return false;
        }

        self.hp -= 1;
        self.hit_timer = self.cfg.hit_cooldown;
        self.anim = PlayerAnim::Hit;
        self.animation_frame = 0;

        true
    }
}
