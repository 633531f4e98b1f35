//! Move records

use serde::{Deserialize, Serialize};

use super::pokemon_type::Type;

/// Damage category of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MoveCategory {
    #[default]
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    /// Case-insensitive parse; anything unrecognized is Physical
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "special" => MoveCategory::Special,
            "status" => MoveCategory::Status,
            _ => MoveCategory::Physical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
            MoveCategory::Status => "Status",
        }
    }
}

/// A move as callers see it. Fields are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    id: String,
    name: String,
    #[serde(rename = "type")]
    move_type: Option<Type>,
    category: MoveCategory,
    power: Option<u16>,
    accuracy: Option<u8>,
    priority: i8,
}

impl MoveRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        move_type: Option<Type>,
        category: MoveCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            move_type,
            category,
            power: None,
            accuracy: None,
            priority: 0,
        }
    }

    pub fn with_power(mut self, power: Option<u16>) -> Self {
        self.power = power;
        self
    }

    pub fn with_accuracy(mut self, accuracy: Option<u8>) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = priority;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn move_type(&self) -> Option<Type> {
        self.move_type
    }

    pub fn category(&self) -> MoveCategory {
        self.category
    }

    pub fn power(&self) -> Option<u16> {
        self.power
    }

    /// None means the move never misses (or accuracy is unknown)
    pub fn accuracy(&self) -> Option<u8> {
        self.accuracy
    }

    pub fn priority(&self) -> i8 {
        self.priority
    }
}
