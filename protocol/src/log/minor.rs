//! Minor battle action parsers
//!
//! Secondary effects: damage, healing, status and field changes.

use super::ident::{parse_hp_status, parse_pokemon};
use super::LogLine;
use anyhow::Result;

/// Find a `[from] EFFECT` tag among trailing parts
fn parse_from(parts: &[&str], start: usize) -> Option<String> {
    parts
        .iter()
        .skip(start)
        .find_map(|part| part.strip_prefix("[from] "))
        .map(|s| s.to_string())
}

/// Parse |-damage|POKEMON|HP STATUS
pub fn parse_damage(parts: &[&str]) -> Result<LogLine> {
    let pokemon = parse_pokemon(parts, 2)?;
    let hp_status = parse_hp_status(parts, 3);
    let from = parse_from(parts, 4);

    Ok(LogLine::Damage {
        pokemon,
        hp_status,
        from,
    })
}

/// Parse |-heal|POKEMON|HP STATUS
pub fn parse_heal(parts: &[&str]) -> Result<LogLine> {
    let pokemon = parse_pokemon(parts, 2)?;
    let hp_status = parse_hp_status(parts, 3);
    let from = parse_from(parts, 4);

    Ok(LogLine::Heal {
        pokemon,
        hp_status,
        from,
    })
}

/// Parse |-status|POKEMON|STATUS
pub fn parse_status(parts: &[&str]) -> Result<LogLine> {
    let pokemon = parse_pokemon(parts, 2)?;
    let status = parts.get(3).unwrap_or(&"").to_string();

    Ok(LogLine::Status { pokemon, status })
}

/// Parse |-curestatus|POKEMON|STATUS
pub fn parse_curestatus(parts: &[&str]) -> Result<LogLine> {
    let pokemon = parse_pokemon(parts, 2)?;
    let status = parts.get(3).unwrap_or(&"").to_string();

    Ok(LogLine::CureStatus { pokemon, status })
}

/// Parse |-weather|WEATHER, optionally tagged [upkeep]
pub fn parse_weather(parts: &[&str]) -> Result<LogLine> {
    let weather = parts.get(2).unwrap_or(&"none").to_string();
    let upkeep = parts.iter().skip(3).any(|p| *p == "[upkeep]");

    Ok(LogLine::Weather { weather, upkeep })
}

/// Parse |-fieldstart|CONDITION
pub fn parse_fieldstart(parts: &[&str]) -> Result<LogLine> {
    let condition = parts.get(2).unwrap_or(&"").to_string();
    Ok(LogLine::FieldStart(condition))
}

/// Parse |-fieldend|CONDITION
pub fn parse_fieldend(parts: &[&str]) -> Result<LogLine> {
    let condition = parts.get(2).unwrap_or(&"").to_string();
    Ok(LogLine::FieldEnd(condition))
}
