//! Field condition kinds
//!
//! The mirror stores conditions by simulator id. These enums are the typed
//! view over those ids, for callers that want to branch on them.

use serde::{Deserialize, Serialize};
use splice_protocol::to_id;

/// Simulator id with any `move: ` / `ability: ` prefix removed
fn condition_id(s: &str) -> String {
    let clean = s
        .split_once(": ")
        .map(|(_, rest)| rest)
        .unwrap_or(s);
    to_id(clean)
}

fn lookup<T: Copy>(table: &[(&str, T)], s: &str) -> Option<T> {
    let id = condition_id(s);
    table.iter().find(|(key, _)| *key == id).map(|(_, v)| *v)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
    Snow,
    HarshSun,
    HeavyRain,
    StrongWinds,
}

impl Weather {
    const IDS: &'static [(&'static str, Weather)] = &[
        ("sunnyday", Weather::Sun),
        ("sun", Weather::Sun),
        ("raindance", Weather::Rain),
        ("rain", Weather::Rain),
        ("sandstorm", Weather::Sand),
        ("hail", Weather::Hail),
        ("snow", Weather::Snow),
        ("snowscape", Weather::Snow),
        ("desolateland", Weather::HarshSun),
        ("primordialsea", Weather::HeavyRain),
        ("deltastream", Weather::StrongWinds),
    ];

    /// Parse a simulator weather id or display name
    pub fn from_protocol(s: &str) -> Option<Self> {
        lookup(Self::IDS, s)
    }

    /// Simulator id
    pub fn id(&self) -> &'static str {
        Self::IDS
            .iter()
            .find(|(_, w)| w == self)
            .map(|(id, _)| *id)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Electric,
    Grassy,
    Misty,
    Psychic,
}

impl Terrain {
    const IDS: &'static [(&'static str, Terrain)] = &[
        ("electricterrain", Terrain::Electric),
        ("grassyterrain", Terrain::Grassy),
        ("mistyterrain", Terrain::Misty),
        ("psychicterrain", Terrain::Psychic),
    ];

    pub fn from_protocol(s: &str) -> Option<Self> {
        lookup(Self::IDS, s)
    }

    pub fn id(&self) -> &'static str {
        Self::IDS
            .iter()
            .find(|(_, t)| t == self)
            .map(|(id, _)| *id)
            .unwrap_or_default()
    }
}

/// Pseudo-weather that reshapes turn order or held items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    TrickRoom,
    MagicRoom,
    WonderRoom,
}

impl Room {
    const IDS: &'static [(&'static str, Room)] = &[
        ("trickroom", Room::TrickRoom),
        ("magicroom", Room::MagicRoom),
        ("wonderroom", Room::WonderRoom),
    ];

    /// None for pseudo-weather that is not a room (gravity, fairy lock, ...)
    pub fn from_protocol(s: &str) -> Option<Self> {
        lookup(Self::IDS, s)
    }

    pub fn id(&self) -> &'static str {
        Self::IDS
            .iter()
            .find(|(_, r)| r == self)
            .map(|(id, _)| *id)
            .unwrap_or_default()
    }
}
