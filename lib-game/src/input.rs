use macroquad::prelude::*;

/// Snapshot of the player's input for one frame. Movement flags
/// are level-triggered (held keys), the rest are edge-triggered.
#[derive(Clone, Copy, Debug)]
pub struct InputModel {
    pub left_movement_down: bool,
    pub right_movement_down: bool,
    pub jump_down: bool,
    /// Pointer position in the game's logical coordinates
    pub pointer: Vec2,
    /// Set when the left mouse button went down this frame
    pub click: Option<Vec2>,
    pub fullscreen_toggle_requested: bool,
    pub debug_toggle_requested: bool,
}

impl InputModel {
    pub fn capture(camera: &Camera2D) -> Self {
        let (mx, my) = mouse_position();
        let pointer = camera.screen_to_world(vec2(mx, my));

        let left_movement_down = is_key_down(KeyCode::Left) || is_key_down(KeyCode::A);
        let right_movement_down = is_key_down(KeyCode::Right) || is_key_down(KeyCode::D);
        let jump_down = is_key_down(KeyCode::Space) || is_key_down(KeyCode::Up);
        let click = is_mouse_button_pressed(MouseButton::Left).then_some(pointer);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F11);
        let debug_toggle_requested =
            is_key_pressed(KeyCode::GraveAccent) || is_key_pressed(KeyCode::Apostrophe);

        Self {
            left_movement_down,
            right_movement_down,
            jump_down,
            pointer,
            click,
            fullscreen_toggle_requested,
            debug_toggle_requested,
        }
    }

    /// An input model with nothing pressed and the pointer
    /// parked at the origin.
    pub fn idle() -> Self {
        Self {
            left_movement_down: false,
            right_movement_down: false,
            jump_down: false,
            pointer: Vec2::ZERO,
            click: None,
            fullscreen_toggle_requested: false,
            debug_toggle_requested: false,
        }
    }
}

impl Default for InputModel {
    fn default() -> Self {
        InputModel::idle()
    }
}
