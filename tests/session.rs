mod common;

use lib_game::{AudioCue, InputModel};
use macroquad::prelude::*;
use nanovirus_outbreak::game::{MUSIC_BACK, SOUND_JUMP};
use nanovirus_outbreak::GameState;

use crate::common::{
    has_cue, playing_session, session, tick, tick_with, EXIT_BUTTON, SOUND_BUTTON, START_BUTTON,
};

#[test]
fn starts_in_menu_with_music() {
    let mut session = session();

    assert_eq!(session.state(), GameState::Menu);
    assert!(session.sound_enabled());
    assert_eq!(session.buttons().len(), 3);
    assert_eq!(session.take_audio_cues(), vec![AudioCue::PlayMusic(MUSIC_BACK)]);
    assert!(session.take_audio_cues().is_empty());
}

#[test]
fn menu_hover_follows_pointer() {
    let mut session = session();
    let input = InputModel {
        pointer: START_BUTTON,
        ..InputModel::idle()
    };

    session.update(&input);

    let hovered: Vec<bool> = session.buttons().iter().map(|b| b.hovered).collect();
    assert_eq!(hovered, vec![true, false, false]);
}

#[test]
fn start_button_begins_a_run() {
    let mut session = session();
    session.take_audio_cues();

    session.on_mouse_down(vec2(10.0, 10.0));
    assert_eq!(session.state(), GameState::Menu);

    session.on_mouse_down(START_BUTTON);

    assert_eq!(session.state(), GameState::Playing);
    assert_eq!(session.score(), 0);
    assert_eq!(session.total_fruits(), 8);
    let level = session.level().unwrap();
    assert_eq!(level.player.hp, 3);
    assert_eq!(level.platforms.len(), 8);
    assert_eq!(level.viruses.len(), 5);
    assert_eq!(level.collected_count(), 0);
    assert!(has_cue(&session.take_audio_cues(), AudioCue::PlayMusic(MUSIC_BACK)));
}

#[test]
fn sound_button_toggles_audio() {
    let mut session = session();
    session.take_audio_cues();

    session.on_mouse_down(SOUND_BUTTON);
    assert!(!session.sound_enabled());
    assert_eq!(session.take_audio_cues(), vec![AudioCue::StopMusic]);

    session.on_mouse_down(START_BUTTON);
    assert_eq!(session.state(), GameState::Playing);
    assert!(session.take_audio_cues().is_empty());

    let mut session = self::session();
    session.on_mouse_down(SOUND_BUTTON);
    session.on_mouse_down(SOUND_BUTTON);
    assert!(session.sound_enabled());
    assert!(has_cue(&session.take_audio_cues(), AudioCue::PlayMusic(MUSIC_BACK)));
}

#[test]
fn exit_button_requests_quit() {
    let mut session = session();
    assert!(!session.quit_requested());

    session.on_mouse_down(EXIT_BUTTON);

    assert!(session.quit_requested());
    assert_eq!(session.state(), GameState::Menu);
}

#[test]
fn jump_emits_sound() {
    let mut session = playing_session();
    tick(&mut session, 40);
    assert!(session.level().unwrap().player.on_ground);

    let jump = InputModel {
        jump_down: true,
        ..InputModel::idle()
    };
    tick_with(&mut session, jump, 1);

    assert_eq!(session.level().unwrap().player.vel.y, -12.0);
    assert_eq!(session.take_audio_cues(), vec![AudioCue::Effect(SOUND_JUMP)]);
}
