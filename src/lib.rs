pub mod assets;
pub mod config;
pub mod fruit;
pub mod game;
pub mod level;
pub mod platform;
pub mod player;
pub mod render;
pub mod ui;
pub mod virus;

pub use config::GameCfg;
pub use game::{GameState, Session};
