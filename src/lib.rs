pub mod cli;
pub mod config;
pub mod core;
pub mod providers;
pub mod utils;

pub use config::{Config, PlayerDimensions};
pub use crate::core::{EmbedEngine, EngineError, Provider, ProviderReport};
pub use providers::{VimeoProvider, YouTubeProvider};
