use lib_game::{AudioCue, InputModel};
use macroquad::prelude::*;
use nanovirus_outbreak::config::sections;
use nanovirus_outbreak::level::{EntitySizes, LevelDef};
use nanovirus_outbreak::player::Player;
use nanovirus_outbreak::{GameCfg, GameState, Session};

pub const START_BUTTON: Vec2 = Vec2::new(400.0, 300.0);
pub const SOUND_BUTTON: Vec2 = Vec2::new(400.0, 375.0);
pub const EXIT_BUTTON: Vec2 = Vec2::new(400.0, 445.0);

/// An interface for a test case. Every case is a small scene
/// that gets simulated and then checked.
pub trait TestCase {
    /// The name of the test to use in the test report.
    fn name(&self) -> &'static str;

    /// Run the test and return success of failure.
    /// If you have a super helpful problem to report that
    /// the calling code can't see -- print it to stdout.
    fn check(&self) -> bool;
}

#[allow(dead_code)]
pub fn run_tests<T: TestCase>(tests: impl IntoIterator<Item = T>) {
    for case in tests.into_iter() {
        println!("Running {:?}", case.name());
        if !case.check() {
            panic!("Test {:?} failed.", case.name());
        }
    }
}

/// Every entity is a 32x32 square.
#[allow(dead_code)]
pub fn sizes() -> EntitySizes {
    EntitySizes {
        player: vec2(32.0, 32.0),
        virus: vec2(32.0, 32.0),
        fruit: vec2(32.0, 32.0),
    }
}

#[allow(dead_code)]
pub fn world() -> sections::World {
    sections::World::default()
}

#[allow(dead_code)]
pub fn player_at(pos: Vec2) -> Player {
    Player::new(pos, sizes().player, sections::Player::default())
}

#[allow(dead_code)]
pub fn session() -> Session {
    let cfg = GameCfg::default();
    Session::new(cfg, sizes(), LevelDef::outbreak(&cfg.world))
}

/// A session that has already left the menu.
#[allow(dead_code)]
pub fn playing_session() -> Session {
    let mut session = session();
    session.on_mouse_down(START_BUTTON);
    assert_eq!(session.state(), GameState::Playing);
    session.take_audio_cues();

    session
}

#[allow(dead_code)]
pub fn tick(session: &mut Session, times: usize) {
    for _ in 0..times {
        session.update(&InputModel::idle());
    }
}

#[allow(dead_code)]
pub fn tick_with(session: &mut Session, input: InputModel, times: usize) {
    for _ in 0..times {
        session.update(&input);
    }
}

#[allow(dead_code)]
pub fn has_cue(cues: &[AudioCue], cue: AudioCue) -> bool {
    cues.contains(&cue)
}
