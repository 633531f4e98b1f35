//! Fusion sprite index and selection relay.
//!
//! Sprites named `HEAD.BODY*.png` are indexed by their (head, body) pair and
//! served over HTTP. A websocket relay lets clients tell each other which
//! variant they picked for a pair. Selections are relayed live and never
//! stored.

pub mod cache;
pub mod config;
pub mod connection;
pub mod filename;
pub mod http;
pub mod index;
pub mod message;
pub mod relay;

use std::path::PathBuf;

use thiserror::Error;

pub use cache::SpriteCache;
pub use config::Config;
pub use filename::{FusionSprite, parse_sprite_filename};
pub use index::VariantIndex;
pub use message::{ClientMessage, ServerMessage};
pub use relay::{ClientId, Hub, Relay};

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("at most two sprite directories are supported, got {0}")]
    TooManySpriteDirs(usize),
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}
