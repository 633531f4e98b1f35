//! Shared types for simulator log lines

use crate::ParseError;

/// Side of a battle as the simulator names it (p1, p2, p3, p4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SideId {
    P1,
    P2,
    P3,
    P4,
}

impl SideId {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "p1" => Some(SideId::P1),
            "p2" => Some(SideId::P2),
            "p3" => Some(SideId::P3),
            "p4" => Some(SideId::P4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SideId::P1 => "p1",
            SideId::P2 => "p2",
            SideId::P3 => "p3",
            SideId::P4 => "p4",
        }
    }

    /// Zero-based index of this side
    pub fn index(&self) -> usize {
        match self {
            SideId::P1 => 0,
            SideId::P2 => 1,
            SideId::P3 => 2,
            SideId::P4 => 3,
        }
    }

    /// The opposing side in a two-player battle
    pub fn foe(&self) -> Self {
        match self {
            SideId::P1 => SideId::P2,
            SideId::P2 => SideId::P1,
            SideId::P3 => SideId::P4,
            SideId::P4 => SideId::P3,
        }
    }
}

impl std::fmt::Display for SideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pokemon identifier in the form "POSITION: NAME" (e.g., "p1a: Pikachu")
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonRef {
    /// Side that owns this pokemon
    pub side: SideId,
    /// Position letter (a, b, c for active slots, or None if inactive)
    pub position: Option<char>,
    /// Pokemon's name/nickname
    pub name: String,
}

impl PokemonRef {
    /// Parse a pokemon ID string like "p1a: Pikachu" or "p1: Pikachu"
    pub fn parse(s: &str) -> Option<Self> {
        let (pos_part, name) = s.split_once(": ")?;
        let side = SideId::parse(pos_part.get(..2)?)?;
        let position = pos_part.chars().nth(2);

        Some(PokemonRef {
            side,
            position,
            name: name.to_string(),
        })
    }
}

/// Pokemon details string (species, level, gender, shiny, tera)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PokemonDetails {
    pub species: String,
    pub level: Option<u8>,
    pub gender: Option<char>,
    pub shiny: bool,
    pub tera_type: Option<String>,
}

impl PokemonDetails {
    /// Parse a details string like "Pikachu, L50, M, shiny"
    pub fn parse(s: &str) -> Self {
        let mut details = PokemonDetails::default();
        let mut parts = s.split(", ");

        if let Some(species) = parts.next() {
            details.species = species.to_string();
        }

        for part in parts {
            if let Some(level_str) = part.strip_prefix('L') {
                details.level = level_str.parse().ok();
            } else if part == "M" {
                details.gender = Some('M');
            } else if part == "F" {
                details.gender = Some('F');
            } else if part == "shiny" {
                details.shiny = true;
            } else if let Some(tera) = part.strip_prefix("tera:") {
                details.tera_type = Some(tera.to_string());
            }
        }

        details
    }
}

/// HP and status condition (e.g., "100/100", "50/100 slp", "0 fnt")
#[derive(Debug, Clone, PartialEq)]
pub struct HpStatus {
    /// Current HP (raw value or percentage depending on perspective)
    pub current: u32,
    /// Max HP (if known)
    pub max: Option<u32>,
    /// Status condition (slp, par, brn, psn, tox, frz, fnt)
    pub status: Option<String>,
}

impl HpStatus {
    /// Parse an HP status string like "100/100", "50/100 slp", or "0 fnt"
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let hp_part = parts.next()?;
        let status = parts.next().map(|s| s.to_string());

        if let Some((current_str, max_str)) = hp_part.split_once('/') {
            Some(HpStatus {
                current: current_str.parse().ok()?,
                max: Some(max_str.parse().ok()?),
                status,
            })
        } else {
            Some(HpStatus {
                current: hp_part.parse().ok()?,
                max: None,
                status,
            })
        }
    }

    /// HP as a 0-100 percentage, rounded up so a sliver never reads as zero
    pub fn percent(&self) -> u32 {
        match self.max {
            Some(0) => 0,
            Some(max) => {
                let percent = (u64::from(self.current) * 100).div_ceil(u64::from(max));
                u32::try_from(percent).unwrap_or(u32::MAX)
            }
            None => self.current,
        }
    }
}

/// Helper to parse a PokemonRef from message parts
pub fn parse_pokemon(parts: &[&str], index: usize) -> Result<PokemonRef, anyhow::Error> {
    parts
        .get(index)
        .and_then(|s| PokemonRef::parse(s))
        .ok_or_else(|| ParseError::MissingField("pokemon".to_string()).into())
}

/// Helper to parse PokemonDetails from message parts
pub fn parse_details(parts: &[&str], index: usize) -> PokemonDetails {
    parts
        .get(index)
        .map(|s| PokemonDetails::parse(s))
        .unwrap_or_default()
}

/// Helper to parse HpStatus from message parts
pub fn parse_hp_status(parts: &[&str], index: usize) -> Option<HpStatus> {
    parts.get(index).and_then(|s| HpStatus::parse(s))
}
