use lib_game::{SpriteParams, Sprites};
use macroquad::prelude::*;

use crate::assets::Art;
use crate::fruit::Fruit;
use crate::game::{GameState, Session};
use crate::level::Level;
use crate::platform::Platform;
use crate::player::Player;
use crate::ui::Button;
use crate::virus::Virus;

static TITLE: &str = "NanoVirus Outbreak";
static SUBTITLE: &str = "Escape viruses and collect bananas!";
static GAMEOVER_TEXT: &str = "GAME OVER";
static GAMEOVER_HINT: &str = "The infection has spread!";
static VICTORY_TEXT: &str = "VICTORY!";
// Viruses can't actually be eliminated, only outrun
static VICTORY_HINT: &str = "All viruses eliminated!";
static RETURN_HINT: &str = "Press SPACE to return to menu";

const MENU_BACKGROUND: u32 = 0x1a1a2e;
const ACCENT: u32 = 0x00ff88;
const HINT_GRAY: u32 = 0xaaaaaa;
const BUTTON_IDLE: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 70.0 / 255.0, 1.0);
const BUTTON_HOVER: Color = Color::new(80.0 / 255.0, 80.0 / 255.0, 100.0 / 255.0, 1.0);
const BUTTON_BORDER: u32 = 0x646478;
const VICTORY_BACKGROUND: u32 = 0x00008b;
const CYAN: u32 = 0x00ffff;

#[derive(Clone, Copy, Debug)]
enum Anchor {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
}

fn draw_label(text: &str, anchor: Anchor, at: Vec2, font_size: u16, color: Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    let (x, y) = match anchor {
        Anchor::Center => {
            let center = get_text_center(text, None, font_size, 1.0, 0.0);
            (at.x - center.x, at.y - center.y)
        }
        Anchor::TopLeft => (at.x, at.y + dims.offset_y),
        Anchor::TopRight => (at.x - dims.width, at.y + dims.offset_y),
        Anchor::BottomLeft => (at.x, at.y - dims.height + dims.offset_y),
    };

    draw_text(text, x, y, font_size as f32, color);
}

fn draw_rect_outline(rect: Rect, thickness: f32, color: Color) {
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color);
}

pub fn draw_session(session: &Session, sprites: &Sprites, art: &Art) {
    clear_background(BLACK);

    match session.state() {
        GameState::Menu => draw_menu(session),
        GameState::Playing => {
            if let Some(level) = session.level() {
                draw_game(session, level, sprites, art);
            }
        }
        GameState::GameOver => draw_game_over(session),
        GameState::Victory => draw_victory(session),
    }
}

fn draw_menu(session: &Session) {
    let width = session.cfg().world.width;
    let height = session.cfg().world.height;
    let accent = Color::from_hex(ACCENT);
    let mid = width / 2.0;

    clear_background(Color::from_hex(MENU_BACKGROUND));

    draw_label(TITLE, Anchor::Center, vec2(mid + 3.0, 83.0), 60, BLACK);
    draw_label(TITLE, Anchor::Center, vec2(mid, 80.0), 60, accent);
    draw_label(SUBTITLE, Anchor::Center, vec2(mid, 160.0), 28, WHITE);

    for y in [190.0, 192.0] {
        draw_line(mid - 200.0, y, mid + 200.0, y, 1.0, accent);
    }

    let hint = Color::from_hex(HINT_GRAY);
    draw_label("Use ARROWS to move", Anchor::Center, vec2(mid, 220.0), 20, hint);
    draw_label("SPACE to jump", Anchor::Center, vec2(mid, 245.0), 20, hint);

    for button in session.buttons() {
        draw_button(button);
    }

    let sound_status = if session.sound_enabled() { "ON" } else { "OFF" };
    draw_label(
        &format!("Sound: {sound_status}"),
        Anchor::BottomLeft,
        vec2(15.0, height - 15.0),
        22,
        accent,
    );
}

fn draw_button(button: &Button) {
    let (fill, border) = if button.hovered {
        (BUTTON_HOVER, Color::from_hex(ACCENT))
    } else {
        (BUTTON_IDLE, Color::from_hex(BUTTON_BORDER))
    };
    let rect = button.rect;

    draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    draw_rect_outline(rect, 1.0, border);
    draw_label(button.label, Anchor::Center, rect.center(), 24, WHITE);
}

fn draw_game(session: &Session, level: &Level, sprites: &Sprites, art: &Art) {
    let world = &session.cfg().world;

    match art.background {
        Some(bg) => sprites.draw(
            bg,
            Vec2::ZERO,
            SpriteParams {
                dest_size: Some(vec2(world.width, world.height)),
                ..Default::default()
            },
        ),
        None => clear_background(Color::from_hex(MENU_BACKGROUND)),
    }

    for platform in &level.platforms {
        draw_platform(platform, sprites, art);
    }
    for fruit in &level.fruits {
        draw_fruit(fruit, sprites, art);
    }
    for virus in &level.viruses {
        draw_virus(virus, sprites, art);
    }
    draw_player(&level.player, sprites, art);

    draw_hud(session, &level.player);
}

fn draw_platform(platform: &Platform, sprites: &Sprites, art: &Art) {
    let rect = platform.rect;
    match art.platform {
        Some(key) => sprites.draw(
            key,
            rect.point(),
            SpriteParams {
                dest_size: Some(rect.size()),
                ..Default::default()
            },
        ),
        None => {
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, platform.color);
            draw_rect_outline(rect, 1.0, BLACK);
        }
    }
}

fn draw_fruit(fruit: &Fruit, sprites: &Sprites, art: &Art) {
    if fruit.collected {
        return;
    }

    let key = art.fruit[fruit.animation_frame as usize % art.fruit.len()];
    sprites.draw(key, fruit.draw_pos(), SpriteParams::default());
}

fn draw_virus(virus: &Virus, sprites: &Sprites, art: &Art) {
    let frames = if virus.hit {
        &art.virus.hit
    } else {
        &art.virus.idle
    };
    let key = frames[virus.animation_frame as usize % frames.len()];

    sprites.draw(
        key,
        virus.pos,
        SpriteParams {
            flip_x: virus.flip_x(),
            ..Default::default()
        },
    );
}

fn draw_player(player: &Player, sprites: &Sprites, art: &Art) {
    let (anim, facing, frame) = player.sprite_frame();
    sprites.draw(
        art.player.frame(anim, facing, frame),
        player.pos,
        SpriteParams::default(),
    );

    if player.is_blinking() {
        let rect = player.rect();
        draw_rect_outline(
            Rect::new(rect.x - 2.0, rect.y - 2.0, rect.w + 4.0, rect.h + 4.0),
            1.0,
            RED,
        );
    }
}

fn draw_hud(session: &Session, player: &Player) {
    let width = session.cfg().world.width;

    draw_label(
        &format!("HP: {}/{}", player.hp, player.max_hp()),
        Anchor::TopLeft,
        vec2(10.0, 10.0),
        30,
        WHITE,
    );
    draw_label(
        &format!("Energy: {}/{}", session.score(), session.total_fruits()),
        Anchor::TopRight,
        vec2(width - 10.0, 10.0),
        30,
        WHITE,
    );

    for i in 0..player.max_hp() {
        let color = if i < player.hp { RED } else { GRAY };
        draw_circle(30.0 + i as f32 * 40.0, 50.0, 12.0, color);
    }
}

fn draw_game_over(session: &Session) {
    let world = &session.cfg().world;
    let center = vec2(world.width / 2.0, world.height / 2.0);

    clear_background(BLACK);
    draw_label(GAMEOVER_TEXT, Anchor::Center, center - vec2(0.0, 50.0), 60, RED);
    draw_label(GAMEOVER_HINT, Anchor::Center, center + vec2(0.0, 20.0), 30, WHITE);
    draw_label(RETURN_HINT, Anchor::Center, center + vec2(0.0, 80.0), 25, WHITE);
}

fn draw_victory(session: &Session) {
    let world = &session.cfg().world;
    let center = vec2(world.width / 2.0, world.height / 2.0);

    clear_background(Color::from_hex(VICTORY_BACKGROUND));
    draw_label(VICTORY_TEXT, Anchor::Center, center - vec2(0.0, 50.0), 60, YELLOW);
    draw_label(VICTORY_HINT, Anchor::Center, center + vec2(0.0, 20.0), 30, WHITE);
    draw_label(
        &format!("Energy collected: {}/{}", session.score(), session.total_fruits()),
        Anchor::Center,
        center + vec2(0.0, 60.0),
        25,
        Color::from_hex(CYAN),
    );
    draw_label(RETURN_HINT, Anchor::Center, center + vec2(0.0, 100.0), 25, WHITE);
}
