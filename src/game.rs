use lib_game::{AudioCue, InputModel, SoundKey};
use log::info;
use macroquad::prelude::*;

use crate::config::GameCfg;
use crate::level::{EntitySizes, Level, LevelDef};
use crate::ui::{menu_buttons, Button, ButtonAction};

pub const SOUND_JUMP: SoundKey = SoundKey("jump");
pub const SOUND_HIT: SoundKey = SoundKey("hit");
pub const SOUND_COLLECT: SoundKey = SoundKey("collect");
pub const MUSIC_BACK: SoundKey = SoundKey("back");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
    Victory,
}

/// Audio requests queued during a tick. Effects and music are
/// dropped while sound is disabled, stopping music never is.
#[derive(Debug, Clone)]
struct AudioQueue {
    enabled: bool,
    cues: Vec<AudioCue>,
}

impl AudioQueue {
    fn effect(&mut self, key: SoundKey) {
        if self.enabled {
            self.cues.push(AudioCue::Effect(key));
        }
    }

    fn play_music(&mut self, key: SoundKey) {
        if self.enabled {
            self.cues.push(AudioCue::PlayMusic(key));
        }
    }

    fn stop_music(&mut self) {
        self.cues.push(AudioCue::StopMusic);
    }
}

/// Everything one run of the game needs. The frame driver owns it
/// and feeds it input, events and ticks.
pub struct Session {
    cfg: GameCfg,
    sizes: EntitySizes,
    level_def: LevelDef,

    state: GameState,
    score: u32,
    total_fruits: u32,
    buttons: Vec<Button>,
    level: Option<Level>,
    audio: AudioQueue,
    quit_requested: bool,
}

impl Session {
    /// Starts at the menu with sound on and the background music playing.
    pub fn new(cfg: GameCfg, sizes: EntitySizes, level_def: LevelDef) -> Self {
        let mut session = Self {
            cfg,
            sizes,
            level_def,

            state: GameState::Menu,
            score: 0,
            total_fruits: 0,
            buttons: Vec::new(),
            level: None,
            audio: AudioQueue {
                enabled: true,
                cues: Vec::new(),
            },
            quit_requested: false,
        };
        session.init_menu();
        session.audio.play_music(MUSIC_BACK);

        session
    }

    pub fn init_menu(&mut self) {
        self.buttons = menu_buttons(&self.cfg.world);
    }

    pub fn init_game(&mut self) {
        let level = Level::spawn(&self.level_def, &self.sizes, &self.cfg, || {
            macroquad::rand::gen_range(0.0, std::f32::consts::TAU)
        });

        self.score = 0;
        self.total_fruits = level.fruits.len() as u32;
        self.level = Some(level);
    }

    pub fn update(&mut self, input: &InputModel) {
        match self.state {
            GameState::Menu => {
                for button in &mut self.buttons {
                    button.update(input.pointer);
                }
            }
            GameState::Playing => self.update_playing(input),
            GameState::GameOver | GameState::Victory => (),
        }
    }

    fn update_playing(&mut self, input: &InputModel) {
        let Some(level) = self.level.as_mut() else {
            return;
        };
        let player = &mut level.player;

        player.update(&level.platforms, &self.cfg.world);

        if input.left_movement_down {
            player.move_left();
        } else if input.right_movement_down {
            player.move_right();
        } else {
            player.stop();
        }

        if input.jump_down && player.jump() {
            self.audio.effect(SOUND_JUMP);
        }

        for virus in &mut level.viruses {
            virus.update();
            if player.rect().overlaps(&virus.rect()) && player.take_damage() {
                virus.strike();
                info!("Infected! HP left: {}", player.hp);
                self.audio.effect(SOUND_HIT);
            }
        }

        for fruit in level.fruits.iter_mut().filter(|f| !f.collected) {
            fruit.update();
            if player.rect().overlaps(&fruit.rect()) && fruit.collect() {
                self.score += 1;
                info!("Energy: {}/{}", self.score, self.total_fruits);
                self.audio.effect(SOUND_COLLECT);
            }
        }

        if player.is_dead() {
            info!("Game over");
            self.state = GameState::GameOver;
        } else if self.score >= self.total_fruits {
            info!("Victory with {} fruits collected", level.collected_count());
            self.state = GameState::Victory;
        }
    }

    pub fn on_mouse_down(&mut self, pos: Vec2) {
        if self.state != GameState::Menu {
            return;
        }

        let Some(action) = self
            .buttons
            .iter()
            .find(|b| b.is_clicked(pos))
            .map(|b| b.action)
        else {
            return;
        };

        match action {
            ButtonAction::Start => {
                info!("Starting the game");
                self.init_game();
                self.state = GameState::Playing;
                self.audio.play_music(MUSIC_BACK);
            }
            ButtonAction::Sound => {
                self.audio.enabled = !self.audio.enabled;
                info!("Sound {}", if self.audio.enabled { "on" } else { "off" });
                if self.audio.enabled {
                    self.audio.play_music(MUSIC_BACK);
                } else {
                    self.audio.stop_music();
                }
            }
            ButtonAction::Exit => {
                info!("Exit requested");
                self.quit_requested = true;
            }
        }
    }

    pub fn on_key_down(&mut self, key: KeyCode) {
        let finished = matches!(self.state, GameState::GameOver | GameState::Victory);
        if finished && key == KeyCode::Space {
            info!("Back to menu");
            self.state = GameState::Menu;
            self.init_menu();
        }
    }

    pub fn take_audio_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.audio.cues)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total_fruits(&self) -> u32 {
        self.total_fruits
    }

    pub fn sound_enabled(&self) -> bool {
        self.audio.enabled
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn cfg(&self) -> &GameCfg {
        &self.cfg
    }
}
