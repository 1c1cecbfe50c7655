mod common;

use macroquad::prelude::*;
use nanovirus_outbreak::platform::Platform;
use nanovirus_outbreak::player::PlayerAnim;

use crate::common::{player_at, run_tests, world, TestCase};

fn platform() -> Platform {
    Platform::new(100.0, 300.0, 100.0, 20.0, BROWN)
}

#[derive(Clone, Copy)]
struct LandingTest {
    name: &'static str,
    start: Vec2,
    start_vel: Vec2,
    ticks: usize,
    expected_y: f32,
    expected_on_ground: bool,
}

impl TestCase for LandingTest {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self) -> bool {
        let platforms = [platform()];
        let mut player = player_at(self.start);
        player.vel = self.start_vel;

        for _ in 0..self.ticks {
            player.update(&platforms, &world());
        }

        println!("pos={} vel={} on_ground={}", player.pos, player.vel, player.on_ground);
        player.pos.y == self.expected_y && player.on_ground == self.expected_on_ground
    }
}

#[test]
fn landing() {
    run_tests([
        LandingTest {
            name: "fall onto platform",
            start: vec2(120.0, 250.0),
            start_vel: Vec2::ZERO,
            ticks: 40,
            expected_y: 268.0,
            expected_on_ground: true,
        },
        LandingTest {
            name: "fall onto floor",
            start: vec2(20.0, 300.0),
            start_vel: Vec2::ZERO,
            ticks: 60,
            expected_y: 400.0,
            expected_on_ground: true,
        },
        LandingTest {
            name: "edge inside the inset misses the platform",
            start: vec2(70.0, 250.0),
            start_vel: Vec2::ZERO,
            ticks: 60,
            expected_y: 400.0,
            expected_on_ground: true,
        },
        LandingTest {
            name: "edge past the inset lands",
            start: vec2(74.0, 250.0),
            start_vel: Vec2::ZERO,
            ticks: 40,
            expected_y: 268.0,
            expected_on_ground: true,
        },
        LandingTest {
            name: "fast ascent skips the ceiling window",
            start: vec2(120.0, 335.0),
            start_vel: vec2(0.0, -12.0),
            ticks: 2,
            expected_y: 312.5,
            expected_on_ground: false,
        },
    ]);
}

#[derive(Clone, Copy)]
struct AnimTest {
    name: &'static str,
    start: Vec2,
    start_vel: Vec2,
    start_frame: u32,
    on_ground: bool,
    walking: bool,
    ticks: usize,
    expected_anim: PlayerAnim,
    /// Ticks (counted from 1) on which the frame changed
    expected_advances: &'static [usize],
    expected_frame: u32,
}

impl TestCase for AnimTest {
    fn name(&self) -> &'static str {
        self.name
    }

    fn check(&self) -> bool {
        let mut player = player_at(self.start);
        player.vel = self.start_vel;
        player.on_ground = self.on_ground;
        player.animation_frame = self.start_frame;

        let mut advances = Vec::new();
        for tick in 1..=self.ticks {
            if self.walking {
                player.move_right();
            }
            let frame = player.animation_frame;
            player.update(&[], &world());
            if player.animation_frame != frame {
                advances.push(tick);
            }
        }

        println!(
            "anim={:?} frame={} advances={advances:?}",
            player.anim, player.animation_frame
        );
        player.anim == self.expected_anim
            && advances == self.expected_advances
            && player.animation_frame == self.expected_frame
    }
}

#[test]
fn animation_timing() {
    run_tests([
        AnimTest {
            name: "idle every 4 ticks",
            start: vec2(50.0, 400.0),
            start_vel: Vec2::ZERO,
            start_frame: 0,
            on_ground: true,
            walking: false,
            ticks: 16,
            expected_anim: PlayerAnim::Idle,
            expected_advances: &[4, 8, 12, 16],
            expected_frame: 4,
        },
        AnimTest {
            name: "walk every 5 ticks",
            start: vec2(50.0, 400.0),
            start_vel: Vec2::ZERO,
            start_frame: 0,
            on_ground: true,
            walking: true,
            ticks: 20,
            expected_anim: PlayerAnim::Walk,
            expected_advances: &[5, 10, 15, 20],
            expected_frame: 4,
        },
        AnimTest {
            name: "jump every 3 ticks",
            start: vec2(50.0, 300.0),
            start_vel: vec2(0.0, -12.0),
            start_frame: 0,
            on_ground: false,
            walking: false,
            ticks: 12,
            expected_anim: PlayerAnim::Jump,
            expected_advances: &[3, 6, 9, 12],
            expected_frame: 4,
        },
        AnimTest {
            name: "fall holds its only frame",
            start: vec2(50.0, 100.0),
            start_vel: Vec2::ZERO,
            start_frame: 3,
            on_ground: false,
            walking: false,
            ticks: 20,
            expected_anim: PlayerAnim::Fall,
            expected_advances: &[4],
            expected_frame: 0,
        },
    ]);
}

#[test]
fn first_landing_wins() {
    let platforms = [
        Platform::new(100.0, 300.0, 100.0, 20.0, BROWN),
        Platform::new(100.0, 295.0, 100.0, 20.0, PINK),
    ];
    let mut player = player_at(vec2(120.0, 268.0));
    player.on_ground = true;

    player.update(&platforms, &world());

    assert_eq!(player.pos.y, 268.0);
    assert!(player.on_ground);
}

#[test]
fn ceiling_bump_then_landing() {
    let platforms = [
        Platform::new(100.0, 300.0, 100.0, 20.0, BROWN),
        Platform::new(100.0, 345.0, 100.0, 20.0, PINK),
    ];
    let mut player = player_at(vec2(120.0, 330.0));
    player.vel.y = -12.0;

    player.update(&platforms, &world());

    assert_eq!(player.pos.y, 313.0);
    assert_eq!(player.vel.y, 0.0);
    assert!(player.on_ground);
}

#[test]
fn resting_on_platform_is_stable() {
    let platforms = [platform()];
    let mut player = player_at(vec2(120.0, 268.0));
    player.on_ground = true;

    for _ in 0..120 {
        player.update(&platforms, &world());
        assert_eq!(player.pos.y, 268.0);
        assert_eq!(player.vel.y, 0.0);
        assert!(player.on_ground);
    }
}

#[test]
fn ceiling_bump_stops_ascent() {
    let platforms = [platform()];
    let mut player = player_at(vec2(120.0, 330.0));
    player.vel.y = -12.0;

    player.update(&platforms, &world());

    assert_eq!(player.pos.y, 320.0);
    assert_eq!(player.vel.y, 0.0);
    assert!(!player.on_ground);
}

#[test]
fn jump_from_floor() {
    let mut player = player_at(vec2(50.0, 400.0));
    player.update(&[], &world());
    assert!(player.on_ground);

    assert!(player.jump());
    assert_eq!(player.vel.y, -12.0);
    assert!(!player.on_ground);
    assert_eq!(player.anim, PlayerAnim::Jump);

    assert!(!player.jump(), "no double jump");

    player.update(&[], &world());
    assert_eq!(player.pos.y, 388.5);
    assert_eq!(player.anim, PlayerAnim::Jump);
}

#[test]
fn stays_inside_horizontal_bounds() {
    let mut player = player_at(vec2(10.0, 400.0));
    for _ in 0..10 {
        player.move_left();
        player.update(&[], &world());
    }
    assert_eq!(player.pos.x, 0.0);

    let mut player = player_at(vec2(760.0, 400.0));
    for _ in 0..10 {
        player.move_right();
        player.update(&[], &world());
    }
    assert_eq!(player.pos.x, 768.0);
}

#[test]
fn damage_is_debounced() {
    let mut player = player_at(vec2(50.0, 400.0));

    assert!(player.take_damage());
    assert_eq!(player.hp, 2);
    assert_eq!(player.anim, PlayerAnim::Hit);

    for _ in 0..59 {
        assert!(!player.take_damage());
        player.update(&[], &world());
    }
    assert_eq!(player.hp, 2);

    player.update(&[], &world());
    assert!(player.take_damage());
    assert_eq!(player.hp, 1);
}

#[test]
fn hp_stays_in_range() {
    let mut player = player_at(vec2(50.0, 400.0));

    for _ in 0..400 {
        player.take_damage();
        player.update(&[], &world());
        assert!((0..=player.max_hp()).contains(&player.hp));
    }
    assert!(player.is_dead());
}

#[test]
fn hit_animation_returns_to_idle() {
    let mut player = player_at(vec2(50.0, 400.0));
    player.update(&[], &world());
    player.take_damage();
    player.animation_timer = 0;

    // 5 frames, 6 ticks each
    for _ in 0..29 {
        player.update(&[], &world());
        assert_eq!(player.anim, PlayerAnim::Hit);
    }
    player.update(&[], &world());

    assert_eq!(player.anim, PlayerAnim::Idle);
    assert_eq!(player.animation_frame, 0);
}

#[test]
fn walking_and_blinking() {
    let mut player = player_at(vec2(50.0, 400.0));
    player.update(&[], &world());

    player.move_right();
    player.update(&[], &world());
    assert_eq!(player.anim, PlayerAnim::Walk);

    player.stop();
    player.update(&[], &world());
    assert_eq!(player.anim, PlayerAnim::Idle);

    player.take_damage();
    assert!(player.is_blinking());
    player.hit_timer = 58;
    assert!(!player.is_blinking());
    player.hit_timer = 0;
    assert!(!player.is_blinking());
}
