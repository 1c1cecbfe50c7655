mod input;
mod render;
mod sound_director;

pub mod sys;

pub use input::*;
pub use render::*;
pub use sound_director::*;

use log::{info, warn};
use macroquad::prelude::*;
use quad_dbg::Debug;

pub const GAME_TICKRATE: f32 = 1.0 / 60.0;

/// The trait containing all callbacks for the game,
/// that is run inside the App.
///
/// The application loop is structured as follows:
/// 1. Input capture
/// 2. Game::on_mouse_down and Game::on_key_down for this frame's events
/// 3. Game::update, but only on frames where a tick is due
/// 4. Game::draw
/// 5. Playing the audio cues from Game::take_audio_cues
pub trait Game: 'static {
    /// Size of the logical canvas the game draws into.
    fn view_size(&self) -> Vec2;

    /// Pointer button went down at `pos` (logical coordinates).
    fn on_mouse_down(&mut self, pos: Vec2);

    /// A key went down this frame.
    fn on_key_down(&mut self, key: KeyCode);

    /// One simulation tick.
    fn update(&mut self, input: &InputModel);

    fn draw(&self, sprites: &Sprites);

    /// Audio requested since the last call.
    fn take_audio_cues(&mut self) -> Vec<AudioCue>;

    /// Once this returns true, the app loop ends.
    fn should_quit(&self) -> bool;
}

/// Accumulates real frame time and hands out fixed ticks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ticker {
    accumelated_time: f32,
}

impl Ticker {
    pub fn new() -> Self {
        Self {
            accumelated_time: 0.0,
        }
    }

    /// Returns whether a simulation tick is due. A frame that lags
    /// behind by two or more ticks drops the backlog.
    pub fn advance(&mut self, real_dt: f32) -> bool {
        self.accumelated_time += real_dt;
        if self.accumelated_time >= 2.0 * GAME_TICKRATE {
            warn!(
                "LAG by {:.2}ms",
                (self.accumelated_time - 2.0 * GAME_TICKRATE) * 1000.0
            );
            self.accumelated_time = 0.0;
            true
        } else if self.accumelated_time >= GAME_TICKRATE {
            self.accumelated_time -= GAME_TICKRATE;
            true
        } else {
            false
        }
    }

    pub fn accumelated_time(&self) -> f32 {
        self.accumelated_time
    }
}

/// The app runs all the boilerplate code to make the game tick.
/// The following features are provided:
/// * Event dispatch
/// * Consistent tickrate timing
/// * Mapping the logical canvas onto the window
/// * Sound playing
/// * On-screen log overlay
pub struct App {
    fullscreen: bool,
    old_size: (u32, u32),

    ticker: Ticker,
    camera: Camera2D,
    pub sprites: Sprites,
    pub sound: SoundDirector,

    show_debug: bool,
}

impl App {
    pub fn new(conf: &Conf, asset_root: &str) -> Self {
        Self {
            fullscreen: conf.fullscreen,
            old_size: (conf.window_width as u32, conf.window_height as u32),

            ticker: Ticker::new(),
            camera: Camera2D::default(),
            sprites: Sprites::new(format!("{asset_root}/images")),
            sound: SoundDirector::new(),

            show_debug: false,
        }
    }

    /// Just runs the game. This is what you call after loading all the resources.
    /// Returns once the game asks to quit.
    pub async fn run<G: Game>(mut self, game: &mut G) {
        let mut debug = Debug::new();

        sys::done_loading();

        info!("Done loading");
        info!("lib-game version: {}", env!("CARGO_PKG_VERSION"));
        self.sprites.log_summary();

        loop {
            self.update_camera(game.view_size());

            let input = InputModel::capture(&self.camera);
            let do_tick = self.ticker.advance(get_frame_time());
            self.fullscreen_toggles(&input);
            if input.debug_toggle_requested {
                self.show_debug = !self.show_debug;
            }

            if let Some(pos) = input.click {
                game.on_mouse_down(pos);
            }
            for key in get_keys_pressed() {
                game.on_key_down(key);
            }
            if game.should_quit() {
                info!("Quitting");
                break;
            }

            if do_tick {
                game.update(&input);
            }

            set_camera(&self.camera);
            game.draw(&self.sprites);
            self.sound.run(game.take_audio_cues());

            debug.new_frame();
            if self.show_debug {
                debug.put_debug_text(&format!("FPS: {}", get_fps()), WHITE);
                debug.new_dbg_line();
                debug.draw_events();
            }

            next_frame().await
        }
    }

    fn fullscreen_toggles(&mut self, input: &InputModel) {
        if !input.fullscreen_toggle_requested {
            return;
        }

        // NOTE: macroquad does not update window config when it goes fullscreen
        set_fullscreen(!self.fullscreen);

        if self.fullscreen {
            macroquad::miniquad::window::set_window_size(self.old_size.0, self.old_size.1);
        }

        self.fullscreen = !self.fullscreen;
    }

    fn update_camera(&mut self, view: Vec2) {
        self.camera = Camera2D::from_display_rect(Rect {
            x: 0.0,
            y: 0.0,
            w: view.x,
            h: view.y,
        });
        self.camera.zoom.y *= -1.0;
    }
}
