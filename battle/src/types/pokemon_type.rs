//! Elemental type tags

use serde::{Deserialize, Serialize};

/// Elemental type; discriminants index `NAMES`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    const NAMES: [(&'static str, Type); 18] = [
        ("Normal", Type::Normal),
        ("Fire", Type::Fire),
        ("Water", Type::Water),
        ("Electric", Type::Electric),
        ("Grass", Type::Grass),
        ("Ice", Type::Ice),
        ("Fighting", Type::Fighting),
        ("Poison", Type::Poison),
        ("Ground", Type::Ground),
        ("Flying", Type::Flying),
        ("Psychic", Type::Psychic),
        ("Bug", Type::Bug),
        ("Rock", Type::Rock),
        ("Ghost", Type::Ghost),
        ("Dragon", Type::Dragon),
        ("Dark", Type::Dark),
        ("Steel", Type::Steel),
        ("Fairy", Type::Fairy),
    ];

    pub fn all() -> impl Iterator<Item = Type> {
        Self::NAMES.iter().map(|(_, t)| *t)
    }

    /// Parse a type tag, ignoring case; unknown tags (`???`, `Shadow`) give None
    pub fn from_protocol(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, t)| *t)
    }

    pub fn as_str(&self) -> &'static str {
        Self::NAMES[*self as usize].0
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
