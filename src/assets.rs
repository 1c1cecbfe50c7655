use lib_game::{SpriteKey, Sprites};
use log::info;

use crate::fruit::FRUIT_FRAMES;
use crate::level::EntitySizes;
use crate::player::{Facing, PlayerAnim};
use crate::virus::VIRUS_FRAMES;

pub static PLATFORM_SPRITE: &str = "plataforms/plataform_on";
pub static BACKGROUND_SPRITE: &str = "other/fundinho";

/// Asset names of one player animation, in playback order.
pub fn player_frame_names(anim: PlayerAnim, facing: Facing) -> Vec<String> {
    let suffix = match facing {
        Facing::Right => "",
        Facing::Left => "_left",
    };
    let count = anim.frame_count();

    match anim {
        PlayerAnim::Idle => (1..=count)
            .map(|i| format!("player/idle/idle_{i}{suffix}"))
            .collect(),
        PlayerAnim::Walk => (1..=count)
            .map(|i| format!("player/run/run_{i}{suffix}"))
            .collect(),
        // The wall jump art faces the wall, so it is mirrored and played backwards
        PlayerAnim::Jump => {
            let mirrored = match facing {
                Facing::Right => "_left",
                Facing::Left => "",
            };
            (1..=count)
                .rev()
                .map(|i| format!("player/wall_jump/wall_jump{i}{mirrored}"))
                .collect()
        }
        PlayerAnim::Fall => vec![format!("player/fall/player_fall{suffix}")],
        PlayerAnim::Hit => (1..=count)
            .map(|i| format!("player/hit/hit_{i}{suffix}"))
            .collect(),
    }
}

pub fn virus_frame_names(hit: bool) -> Vec<String> {
    let kind = if hit { "hit" } else { "idle" };
    (1..=VIRUS_FRAMES)
        .map(|i| format!("virus/corona_{kind}{i}"))
        .collect()
}

pub fn fruit_frame_names() -> Vec<String> {
    (1..=FRUIT_FRAMES)
        .map(|i| format!("fruits/banana/banana_{i}"))
        .collect()
}

fn anim_index(anim: PlayerAnim) -> usize {
    match anim {
        PlayerAnim::Idle => 0,
        PlayerAnim::Walk => 1,
        PlayerAnim::Jump => 2,
        PlayerAnim::Fall => 3,
        PlayerAnim::Hit => 4,
    }
}

fn facing_index(facing: Facing) -> usize {
    match facing {
        Facing::Left => 0,
        Facing::Right => 1,
    }
}

/// {animation} x {facing} table of frame sequences.
pub struct PlayerSprites {
    table: [[Vec<SpriteKey>; 2]; 5],
}

impl PlayerSprites {
    pub fn frame(&self, anim: PlayerAnim, facing: Facing, frame: usize) -> SpriteKey {
        let frames = &self.table[anim_index(anim)][facing_index(facing)];
        frames[frame % frames.len()]
    }
}

pub struct VirusSprites {
    pub idle: Vec<SpriteKey>,
    pub hit: Vec<SpriteKey>,
}

/// Every sprite the game draws, resolved once at startup.
/// Entity sprites are required, scenery has a fallback.
pub struct Art {
    pub player: PlayerSprites,
    pub virus: VirusSprites,
    pub fruit: Vec<SpriteKey>,
    pub platform: Option<SpriteKey>,
    pub background: Option<SpriteKey>,
}

impl Art {
    pub async fn load(sprites: &mut Sprites) -> anyhow::Result<Self> {
        let mut table: [[Vec<SpriteKey>; 2]; 5] = Default::default();
        for anim in PlayerAnim::ALL {
            for facing in [Facing::Left, Facing::Right] {
                let names = player_frame_names(anim, facing);
                table[anim_index(anim)][facing_index(facing)] =
                    sprites.load_all(names.iter().map(String::as_str)).await?;
            }
        }
        info!("Player sprites ready");

        let idle = virus_frame_names(false);
        let hit = virus_frame_names(true);
        let virus = VirusSprites {
            idle: sprites.load_all(idle.iter().map(String::as_str)).await?,
            hit: sprites.load_all(hit.iter().map(String::as_str)).await?,
        };

        let fruit = fruit_frame_names();
        let fruit = sprites.load_all(fruit.iter().map(String::as_str)).await?;

        let platform = sprites.load_optional(PLATFORM_SPRITE).await;
        let background = sprites.load_optional(BACKGROUND_SPRITE).await;

        Ok(Art {
            player: PlayerSprites { table },
            virus,
            fruit,
            platform,
            background,
        })
    }

    /// Entity boxes come from the first frame of each entity.
    pub fn entity_sizes(&self, sprites: &Sprites) -> EntitySizes {
        EntitySizes {
            player: sprites.size(self.player.frame(PlayerAnim::Idle, Facing::Right, 0)),
            virus: sprites.size(self.virus.idle[0]),
            fruit: sprites.size(self.fruit[0]),
        }
    }
}
