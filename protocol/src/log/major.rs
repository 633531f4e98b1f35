//! Moves, entrances and faints

use anyhow::Result;

use super::LogLine;
use super::ident::{PokemonRef, parse_details, parse_hp_status, parse_pokemon};

/// `|move|POKEMON|MOVE|TARGET` followed by flags such as `[miss]`
pub fn parse_move(parts: &[&str]) -> Result<LogLine> {
    let pokemon = parse_pokemon(parts, 2)?;
    let move_name = parts.get(3).copied().unwrap_or_default().to_string();
    let target = parts.get(4).and_then(|s| PokemonRef::parse(s));
    let flags = parts.get(5..).unwrap_or_default();

    Ok(LogLine::Move {
        pokemon,
        move_name,
        target,
        miss: flags.contains(&"[miss]"),
        still: flags.contains(&"[still]"),
    })
}

/// `|switch|` or `|drag|` with `POKEMON|DETAILS|HP STATUS`
pub fn parse_entrance(parts: &[&str], dragged: bool) -> Result<LogLine> {
    let pokemon = parse_pokemon(parts, 2)?;
    let details = parse_details(parts, 3);
    let hp_status = parse_hp_status(parts, 4);

    Ok(if dragged {
        LogLine::Drag {
            pokemon,
            details,
            hp_status,
        }
    } else {
        LogLine::Switch {
            pokemon,
            details,
            hp_status,
        }
    })
}

pub fn parse_faint(parts: &[&str]) -> Result<LogLine> {
    Ok(LogLine::Faint(parse_pokemon(parts, 2)?))
}
