mod ident;
mod major;
mod minor;
mod progress;

pub use ident::{
    HpStatus, PokemonDetails, PokemonRef, SideId, parse_details, parse_hp_status, parse_pokemon,
};

use anyhow::Result;

/// One line of the simulator's battle log
#[derive(Debug, Clone, PartialEq)]
pub enum LogLine {
    // === Progress ===
    /// |start
    Start,

    /// |turn|NUMBER
    Turn(u32),

    /// |upkeep
    Upkeep,

    /// |win|USER
    Win(String),

    /// |tie
    Tie,

    // === Major actions ===
    /// |move|POKEMON|MOVE|TARGET
    Move {
        pokemon: PokemonRef,
        move_name: String,
        target: Option<PokemonRef>,
        miss: bool,
        still: bool,
    },

    /// |switch|POKEMON|DETAILS|HP STATUS
    Switch {
        pokemon: PokemonRef,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
    },

    /// |drag|POKEMON|DETAILS|HP STATUS
    Drag {
        pokemon: PokemonRef,
        details: PokemonDetails,
        hp_status: Option<HpStatus>,
    },

    /// |faint|POKEMON
    Faint(PokemonRef),

    // === Minor actions ===
    /// |-damage|POKEMON|HP STATUS
    Damage {
        pokemon: PokemonRef,
        hp_status: Option<HpStatus>,
        from: Option<String>,
    },

    /// |-heal|POKEMON|HP STATUS
    Heal {
        pokemon: PokemonRef,
        hp_status: Option<HpStatus>,
        from: Option<String>,
    },

    /// |-status|POKEMON|STATUS
    Status { pokemon: PokemonRef, status: String },

    /// |-curestatus|POKEMON|STATUS
    CureStatus { pokemon: PokemonRef, status: String },

    /// |-weather|WEATHER or |-weather|WEATHER|[upkeep]
    Weather { weather: String, upkeep: bool },

    /// |-fieldstart|CONDITION
    FieldStart(String),

    /// |-fieldend|CONDITION
    FieldEnd(String),

    /// Anything not interpreted above, kept verbatim
    Raw(String),
}

impl LogLine {
    /// The tag between the first two pipes, if the line has one
    pub fn tag(line: &str) -> Option<&str> {
        line.strip_prefix('|')?.split('|').next()
    }
}

/// Parse a block of log text into lines, skipping blanks
pub fn parse_log(text: &str) -> Result<Vec<LogLine>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_log_line)
        .collect()
}

/// Parse a single line of simulator output into a LogLine
pub fn parse_log_line(line: &str) -> Result<LogLine> {
    let line = line.trim();

    if !line.starts_with('|') {
        return Ok(LogLine::Raw(line.to_string()));
    }

    let parts: Vec<&str> = line.split('|').collect();

    match parts[1] {
        "start" => progress::parse_start(&parts),
        "turn" => progress::parse_turn(&parts),
        "upkeep" => progress::parse_upkeep(&parts),
        "win" => progress::parse_win(&parts),
        "tie" => progress::parse_tie(&parts),
        "move" => major::parse_move(&parts),
        "switch" => major::parse_entrance(&parts, false),
        "drag" => major::parse_entrance(&parts, true),
        "faint" => major::parse_faint(&parts),
        "-damage" => minor::parse_damage(&parts),
        "-heal" => minor::parse_heal(&parts),
        "-status" => minor::parse_status(&parts),
        "-curestatus" => minor::parse_curestatus(&parts),
        "-weather" => minor::parse_weather(&parts),
        "-fieldstart" => minor::parse_fieldstart(&parts),
        "-fieldend" => minor::parse_fieldend(&parts),
        _ => Ok(LogLine::Raw(line.to_string())),
    }
}
