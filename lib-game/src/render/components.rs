use macroquad::prelude::*;

/// Handle to a texture stored in [crate::Sprites]. Handles are
/// resolved once while loading and stay valid for the app's lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct SpriteKey(pub(crate) u32);

/// How a sprite should be put on screen.
#[derive(Clone, Copy, Debug)]
pub struct SpriteParams {
    pub flip_x: bool,
    /// Stretch the texture to this size instead of its own
    pub dest_size: Option<Vec2>,
    pub tint: Color,
}

impl Default for SpriteParams {
    fn default() -> Self {
        Self {
            flip_x: false,
            dest_size: None,
            tint: WHITE,
        }
    }
}
