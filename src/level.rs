use macroquad::prelude::*;

use crate::config::{sections, GameCfg};
use crate::fruit::Fruit;
use crate::platform::Platform;
use crate::player::Player;
use crate::virus::Virus;

/// Distance between a platform's top and the virus patrolling it.
pub const VIRUS_LIFT: f32 = 55.0;

#[derive(Debug, Clone, Copy)]
pub struct PlatformDef {
    pub rect: Rect,
    pub color: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct VirusDef {
    pub pos: Vec2,
    pub left_bound: f32,
    pub right_bound: f32,
}

#[derive(Debug, Clone)]
pub struct LevelDef {
    pub player_spawn: Vec2,
    pub platforms: Vec<PlatformDef>,
    pub viruses: Vec<VirusDef>,
    pub fruits: Vec<Vec2>,
}

/// Sprite dimensions of the moving entities, known after loading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySizes {
    pub player: Vec2,
    pub virus: Vec2,
    pub fruit: Vec2,
}

mod palette {
    pub const BROWN: u32 = 0xa52a2a;
    pub const PERU: u32 = 0xcd853f;
    pub const CHOCOLATE: u32 = 0xd2691e;
    pub const DARK_OLIVE_GREEN: u32 = 0x556b2f;
    pub const SIENNA: u32 = 0xa0522d;
}

impl LevelDef {
    /// The one and only level: a staircase of eight platforms with
    /// a virus on each of the lower five and a banana above each step.
    pub fn outbreak(world: &sections::World) -> Self {
        use palette::*;

        let h = world.height;
        let platform = |x: f32, y: f32, w: f32, color: u32| PlatformDef {
            rect: Rect::new(x, h - y, w, 20.0),
            color,
        };
        let virus = |x: f32, y: f32, left_bound: f32, right_bound: f32| VirusDef {
            pos: vec2(x, h - y - VIRUS_LIFT),
            left_bound,
            right_bound,
        };

        LevelDef {
            player_spawn: vec2(50.0, h - 300.0),
            platforms: vec![
                platform(100.0, 150.0, 100.0, BROWN),
                platform(300.0, 200.0, 100.0, PERU),
                platform(500.0, 250.0, 100.0, CHOCOLATE),
                platform(200.0, 300.0, 100.0, DARK_OLIVE_GREEN),
                platform(400.0, 350.0, 100.0, BROWN),
                platform(600.0, 400.0, 100.0, PERU),
                platform(150.0, 450.0, 150.0, SIENNA),
                platform(400.0, 500.0, 150.0, CHOCOLATE),
            ],
            viruses: vec![
                virus(150.0, 150.0, 100.0, 200.0),
                virus(350.0, 200.0, 300.0, 400.0),
                virus(550.0, 250.0, 500.0, 600.0),
                virus(250.0, 300.0, 200.0, 300.0),
                virus(450.0, 350.0, 400.0, 500.0),
            ],
            fruits: vec![
                vec2(140.0, h - 80.0),
                vec2(340.0, h - 130.0),
                vec2(540.0, h - 180.0),
                vec2(240.0, h - 230.0),
                vec2(440.0, h - 280.0),
                vec2(640.0, h - 330.0),
                vec2(225.0, h - 380.0),
                vec2(475.0, h - 430.0),
            ],
        }
    }
}

/// A running level. Entities are never removed: collected fruits
/// just stay flagged.
#[derive(Debug, Clone)]
pub struct Level {
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub viruses: Vec<Virus>,
    pub fruits: Vec<Fruit>,
}

impl Level {
    /// `float_phase` provides the starting bob phase for each fruit.
    pub fn spawn(
        def: &LevelDef,
        sizes: &EntitySizes,
        cfg: &GameCfg,
        mut float_phase: impl FnMut() -> f32,
    ) -> Self {
        let player = Player::new(def.player_spawn, sizes.player, cfg.player);
        let platforms = def
            .platforms
            .iter()
            .map(|p| Platform::new(p.rect.x, p.rect.y, p.rect.w, p.rect.h, Color::from_hex(p.color)))
            .collect();
        let viruses = def
            .viruses
            .iter()
            .map(|v| Virus::new(v.pos, sizes.virus, v.left_bound, v.right_bound, cfg.virus))
            .collect();
        let fruits = def
            .fruits
            .iter()
            .map(|pos| Fruit::new(*pos, sizes.fruit, float_phase(), cfg.fruit))
            .collect();

        Level {
            player,
            platforms,
            viruses,
            fruits,
        }
    }

    pub fn collected_count(&self) -> usize {
        self.fruits.iter().filter(|f| f.collected).count()
    }
}
