use macroquad::prelude::*;

use crate::config::sections;

pub const BUTTON_WIDTH: f32 = 160.0;
pub const BUTTON_HEIGHT: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Start,
    Sound,
    Exit,
}

#[derive(Clone, Copy, Debug)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub action: ButtonAction,
    pub hovered: bool,
}

impl Button {
    pub fn new(rect: Rect, label: &'static str, action: ButtonAction) -> Self {
        Self {
            rect,
            label,
            action,
            hovered: false,
        }
    }

    pub fn update(&mut self, pointer: Vec2) {
        self.hovered = self.rect.contains(pointer);
    }

    pub fn is_clicked(&self, pos: Vec2) -> bool {
        self.rect.contains(pos)
    }
}

/// Start, Sound and Exit stacked in the lower half of the screen.
pub fn menu_buttons(world: &sections::World) -> Vec<Button> {
    let x = world.width / 2.0 - BUTTON_WIDTH / 2.0;
    [
        (280.0, "Start", ButtonAction::Start),
        (350.0, "Sound", ButtonAction::Sound),
        (420.0, "Exit", ButtonAction::Exit),
    ]
    .into_iter()
    .map(|(y, label, action)| {
        Button::new(Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT), label, action)
    })
    .collect()
}
