//! Global field state

use serde::{Deserialize, Serialize};

use super::conditions::{Room, Terrain, Weather};

/// One field condition as the simulator reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldEffect {
    /// Simulator id, e.g. "raindance" or "trickroom"
    pub id: String,

    /// Remaining turns; None when the effect has no fixed duration
    pub turns_left: Option<u8>,
}

impl FieldEffect {
    pub fn new(id: impl Into<String>, turns_left: Option<u8>) -> Self {
        Self {
            id: id.into(),
            turns_left,
        }
    }
}

/// Global field state affecting all Pokemon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// Current weather condition
    pub weather: Option<FieldEffect>,

    /// Current terrain
    pub terrain: Option<FieldEffect>,

    /// Active rooms (Trick Room, Magic Room, Wonder Room)
    pub rooms: Vec<FieldEffect>,
}

impl FieldState {
    /// Create a new empty field state
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all field conditions
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Typed view of the current weather
    pub fn weather_kind(&self) -> Option<Weather> {
        self.weather
            .as_ref()
            .and_then(|w| Weather::from_protocol(&w.id))
    }

    /// Typed view of the current terrain
    pub fn terrain_kind(&self) -> Option<Terrain> {
        self.terrain
            .as_ref()
            .and_then(|t| Terrain::from_protocol(&t.id))
    }

    /// Whether the given room is up
    pub fn has_room(&self, room: Room) -> bool {
        self.rooms
            .iter()
            .any(|r| Room::from_protocol(&r.id) == Some(room))
    }

    /// Check if any field condition is active
    pub fn has_any_condition(&self) -> bool {
        self.weather.is_some() || self.terrain.is_some() || !self.rooms.is_empty()
    }
}
