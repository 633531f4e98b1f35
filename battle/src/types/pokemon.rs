//! Pokemon records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::moves::MoveRecord;
use super::pokemon_type::Type;
use super::stats::{StatBlock, StatStages};
use super::status::Status;

/// A team member as callers see it
///
/// Created at import time. During a battle only the engine's mirror writes
/// to the battle-state fields (HP, stages, status, volatiles); callers read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    id: String,
    name: String,
    species: String,
    level: u8,
    types: Vec<Type>,
    base_stats: StatBlock,

    // === Battle state ===
    pub(crate) hp: u32,
    pub(crate) max_hp: u32,
    pub(crate) stages: StatStages,
    pub(crate) status: Option<Status>,
    pub(crate) fainted: bool,
    pub(crate) volatiles: BTreeMap<String, Value>,

    moves: Vec<MoveRecord>,
}

impl PokemonRecord {
    /// Create a record with an empty moveset, no types and full (zero) HP
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        species: impl Into<String>,
        level: u8,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            species: species.into(),
            level: level.clamp(1, 100),
            types: Vec::new(),
            base_stats: StatBlock::uniform(0),
            hp: 0,
            max_hp: 0,
            stages: StatStages::new(),
            status: None,
            fainted: false,
            volatiles: BTreeMap::new(),
            moves: Vec::new(),
        }
    }

    pub fn with_types(mut self, types: Vec<Type>) -> Self {
        self.types = types;
        self
    }

    pub fn with_base_stats(mut self, base_stats: StatBlock) -> Self {
        self.base_stats = base_stats;
        self
    }

    /// Set max HP and fill current HP to match
    pub fn with_max_hp(mut self, max_hp: u32) -> Self {
        self.max_hp = max_hp;
        self.hp = max_hp;
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveRecord>) -> Self {
        self.moves = moves;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name (nickname, or species when none was given)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> &str {
        &self.species
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn base_stats(&self) -> &StatBlock {
        &self.base_stats
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn stages(&self) -> &StatStages {
        &self.stages
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn fainted(&self) -> bool {
        self.fainted
    }

    pub fn volatiles(&self) -> &BTreeMap<String, Value> {
        &self.volatiles
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Get HP as percentage (0-100)
    pub fn hp_percent(&self) -> u32 {
        if self.max_hp == 0 {
            return 0;
        }
        let percent = u64::from(self.hp) * 100 / u64::from(self.max_hp);
        u32::try_from(percent).unwrap_or(u32::MAX)
    }

    /// Check if Pokemon is alive (not fainted)
    pub fn is_alive(&self) -> bool {
        !self.fainted && self.hp > 0
    }

    /// Whether the name or species matches the given simulator name
    pub fn answers_to(&self, name: &str) -> bool {
        let wanted = splice_protocol::to_id(name);
        !wanted.is_empty()
            && (splice_protocol::to_id(&self.name) == wanted
                || splice_protocol::to_id(&self.species) == wanted)
    }
}
