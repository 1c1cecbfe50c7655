use anyhow::Context;
use log::{info, warn};

pub static CONFIG_PATH: &str = "assets/gamecfg.ron";

macro_rules! game_cfg {
    (
        $( $section_name:ident : $section_ty:ident {
            $( $field_name:ident : $field_ty:ty = $default:expr ),+ $(,)?
        } ),*
        $(,)?
    ) => {
        #[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize, serde::Serialize)]
        #[serde(default)]
        pub struct GameCfg {
            $( pub $section_name : sections::$section_ty ),+
        }

        pub mod sections {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
                #[serde(default)]
                pub struct $section_ty {
                    $( pub $field_name : $field_ty ),+
                }

                impl Default for $section_ty {
                    fn default() -> Self {
                        Self {
                            $( $field_name : $default ),+
                        }
                    }
                }
            )+
        }
    };
}

game_cfg! {
    world: World {
        width: f32 = 800.0,
        height: f32 = 480.0,
        floor_offset: f32 = 80.0,
        gravity: f32 = 0.5,
    },
    player: Player {
        speed: f32 = 4.0,
        jump_strength: f32 = -12.0,
        max_hp: i32 = 3,
        hit_cooldown: u32 = 60,
    },
    virus: Virus {
        speed: f32 = 1.5,
        frame_ticks: u32 = 8,
        hit_frames: u32 = 10,
    },
    fruit: Fruit {
        float_speed: f32 = 0.1,
        float_distance: f32 = 3.0,
        frame_ticks: u32 = 6,
        hitbox_padding: f32 = 4.0,
    },
}

impl sections::World {
    pub fn floor_y(&self) -> f32 {
        self.height - self.floor_offset
    }
}

impl GameCfg {
    pub fn from_ron(src: &str) -> anyhow::Result<Self> {
        let cfg = ron::from_str(src)?;
        Ok(cfg)
    }

    /// Reads the config file. A missing file means "use the defaults",
    /// a broken one is an error.
    pub async fn load() -> anyhow::Result<Self> {
        let src = match macroquad::file::load_string(CONFIG_PATH).await {
            Ok(x) => x,
            Err(e) => {
                warn!("No config at {CONFIG_PATH:?} ({e}), using defaults");
                return Ok(GameCfg::default());
            }
        };

        let cfg = Self::from_ron(&src).with_context(|| format!("parsing {CONFIG_PATH:?}"))?;
        info!("Loaded config from {CONFIG_PATH:?}");

        Ok(cfg)
    }
}
