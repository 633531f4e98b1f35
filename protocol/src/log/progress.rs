//! Battle progress line parsers
//!
//! These lines track the flow of a battle rather than any one pokemon.

use super::LogLine;
use anyhow::Result;

/// Parse |start
pub fn parse_start(_parts: &[&str]) -> Result<LogLine> {
    Ok(LogLine::Start)
}

/// Parse |turn|NUMBER
pub fn parse_turn(parts: &[&str]) -> Result<LogLine> {
    let turn = parts
        .get(2)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| anyhow::anyhow!("Missing turn number"))?;

    Ok(LogLine::Turn(turn))
}

/// Parse |upkeep
pub fn parse_upkeep(_parts: &[&str]) -> Result<LogLine> {
    Ok(LogLine::Upkeep)
}

/// Parse |win|USER
pub fn parse_win(parts: &[&str]) -> Result<LogLine> {
    let user = parts.get(2).unwrap_or(&"").to_string();
    Ok(LogLine::Win(user))
}

/// Parse |tie
pub fn parse_tie(_parts: &[&str]) -> Result<LogLine> {
    Ok(LogLine::Tie)
}
