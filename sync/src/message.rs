//! JSON frames exchanged over the relay socket

use serde::{Deserialize, Serialize};

/// Frames a client may send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientMessage {
    Ping,
    Identify,
    GetFusionVariants {
        head_id: u32,
        body_id: u32,
    },
    SelectFusionSprite {
        head_id: u32,
        body_id: u32,
        sprite_file: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        player_id: Option<String>,
    },
}

/// Frames the server sends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    Pong,
    Connected {
        server_version: String,
    },
    FusionVariants {
        head_id: u32,
        body_id: u32,
        variants: Vec<String>,
    },
    FusionSpriteSelected {
        head_id: u32,
        body_id: u32,
        sprite_file: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        player_id: Option<String>,
    },
}

impl ClientMessage {
    /// Parse one text frame; None for malformed or unknown frames
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}

impl ServerMessage {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
