use lib_game::{sys, App, AudioCue, Game, InputModel, SoundKey, Sprites};
use log::{error, info, warn};
use macroquad::prelude::*;
use nanovirus_outbreak::assets::Art;
use nanovirus_outbreak::game::{MUSIC_BACK, SOUND_COLLECT, SOUND_HIT, SOUND_JUMP};
use nanovirus_outbreak::level::LevelDef;
use nanovirus_outbreak::{render, GameCfg, Session};
use quad_dbg::init_on_screen_log;

static ASSET_ROOT: &str = "assets";

fn window_conf() -> Conf {
    Conf {
        window_title: "NanoVirus Outbreak".to_owned(),
        high_dpi: true,
        window_width: 800,
        window_height: 480,
        fullscreen: false,
        ..Default::default()
    }
}

struct Outbreak {
    session: Session,
    art: Art,
}

impl Game for Outbreak {
    fn view_size(&self) -> Vec2 {
        let world = &self.session.cfg().world;
        vec2(world.width, world.height)
    }

    fn on_mouse_down(&mut self, pos: Vec2) {
        self.session.on_mouse_down(pos);
    }

    fn on_key_down(&mut self, key: KeyCode) {
        self.session.on_key_down(key);
    }

    fn update(&mut self, input: &InputModel) {
        self.session.update(input);
    }

    fn draw(&self, sprites: &Sprites) {
        render::draw_session(&self.session, sprites, &self.art);
    }

    fn take_audio_cues(&mut self) -> Vec<AudioCue> {
        self.session.take_audio_cues()
    }

    fn should_quit(&self) -> bool {
        self.session.quit_requested()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        sys::panic_screen(&format!("Driver panicked:\n{}", info));
        hook(info);
    }));

    if let Err(e) = run().await {
        error!("{e:?}");
        sys::panic_screen(&format!("Driver exitted with error:\n{:?}", e));
    }
}

async fn run() -> anyhow::Result<()> {
    if let Err(e) = init_on_screen_log() {
        warn!("On-screen log unavailable: {e}");
    }
    log::set_max_level(log::STATIC_MAX_LEVEL);

    set_default_filter_mode(FilterMode::Nearest);

    info!("Project version: {}", env!("CARGO_PKG_VERSION"));

    let cfg = GameCfg::load().await?;
    let mut app = App::new(&window_conf(), ASSET_ROOT);

    let art = Art::load(&mut app.sprites).await?;
    let sizes = art.entity_sizes(&app.sprites);
    info!("Entity sizes: {sizes:?}");

    load_sounds(&mut app).await;

    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let level = LevelDef::outbreak(&cfg.world);
    let mut game = Outbreak {
        session: Session::new(cfg, sizes, level),
        art,
    };

    app.run(&mut game).await;

    Ok(())
}

async fn load_sounds(app: &mut App) {
    let effects: [(SoundKey, &str); 3] = [
        (SOUND_JUMP, "jump.wav"),
        (SOUND_HIT, "hit.wav"),
        (SOUND_COLLECT, "collect.wav"),
    ];
    for (key, file) in effects {
        app.sound
            .load_effect(key, &format!("{ASSET_ROOT}/sounds/{file}"))
            .await;
    }

    app.sound
        .load_music(MUSIC_BACK, &format!("{ASSET_ROOT}/music/back.ogg"))
        .await;
}
