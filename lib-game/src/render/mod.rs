mod components;

use anyhow::Context;
use hashbrown::HashMap;
use log::{info, warn};
use macroquad::prelude::*;

pub use components::*;

/// Sprites is a simple texture storage. Textures are addressed by
/// their asset name (e.g. `player/idle/idle_1`), which is resolved
/// to `<root>/<name>.png`.
///
/// Names are only looked at during loading. After that the game
/// holds on to [SpriteKey]s.
pub struct Sprites {
    root: String,
    textures: Vec<Texture2D>,
    by_name: HashMap<String, SpriteKey>,
}

impl Sprites {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            textures: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    pub fn path_of(&self, name: &str) -> String {
        format!("{}/{name}.png", self.root)
    }

    /// Loads a texture that the game can't run without.
    pub async fn load(&mut self, name: &str) -> anyhow::Result<SpriteKey> {
        if let Some(key) = self.by_name.get(name) {
            return Ok(*key);
        }

        let path = self.path_of(name);
        let texture = load_texture(&path)
            .await
            .with_context(|| format!("loading sprite {name:?} from {path:?}"))?;
        texture.set_filter(FilterMode::Nearest);

        let key = SpriteKey(self.textures.len() as u32);
        self.textures.push(texture);
        self.by_name.insert(name.to_owned(), key);

        Ok(key)
    }

    /// Loads a texture that has a drawing fallback.
    pub async fn load_optional(&mut self, name: &str) -> Option<SpriteKey> {
        match self.load(name).await {
            Ok(key) => Some(key),
            Err(e) => {
                warn!("Optional sprite missing: {e:#}");
                None
            }
        }
    }

    pub async fn load_all<'a>(
        &mut self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> anyhow::Result<Vec<SpriteKey>> {
        let mut keys = Vec::new();
        for name in names {
            keys.push(self.load(name).await?);
        }

        Ok(keys)
    }

    pub fn size(&self, key: SpriteKey) -> Vec2 {
        let texture = &self.textures[key.0 as usize];
        vec2(texture.width(), texture.height())
    }

    pub fn draw(&self, key: SpriteKey, pos: Vec2, params: SpriteParams) {
        let texture = &self.textures[key.0 as usize];
        draw_texture_ex(
            texture,
            pos.x,
            pos.y,
            params.tint,
            DrawTextureParams {
                dest_size: params.dest_size,
                flip_x: params.flip_x,
                ..Default::default()
            },
        );
    }

    pub fn loaded_count(&self) -> usize {
        self.textures.len()
    }

    pub fn log_summary(&self) {
        info!("Sprites loaded: {}", self.loaded_count());
    }
}
