//! Command line and environment configuration

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::SyncError;

const MAX_SPRITE_DIRS: usize = 2;

#[derive(Parser, Debug, Clone)]
#[command(name = "splice-sync")]
#[command(version, about = "Fusion sprite index over HTTP and a selection relay over websocket")]
pub struct Config {
    /// Address for the HTTP endpoints
    #[arg(long, env = "SPLICE_HTTP_ADDR", default_value = "0.0.0.0:8080")]
    pub http_addr: SocketAddr,

    /// Address for the websocket relay
    #[arg(long, env = "SPLICE_SOCKET_ADDR", default_value = "0.0.0.0:8081")]
    pub socket_addr: SocketAddr,

    /// Directory to index sprites from; give it at most twice
    #[arg(long = "sprite-dir", env = "SPLICE_SPRITE_DIRS", value_delimiter = ',')]
    pub sprite_dirs: Vec<PathBuf>,

    /// Asset bundle served at /fusion/pack
    #[arg(long, env = "SPLICE_PACK")]
    pub pack: Option<PathBuf>,

    /// Seconds before the sprite index is rebuilt
    #[arg(long, default_value_t = 300)]
    pub cache_ttl_secs: u64,
}

impl Config {
    pub fn validate(&self) -> Result<(), SyncError> {
        if self.sprite_dirs.len() > MAX_SPRITE_DIRS {
            return Err(SyncError::TooManySpriteDirs(self.sprite_dirs.len()));
        }
        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}
