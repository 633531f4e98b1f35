//! Packed team export
//!
//! One entry per team member, entries joined by `]`:
//!
//! ```text
//! NICKNAME|SPECIES|ITEM|ABILITY|MOVES|NATURE|EVS|GENDER|IVS|SHINY|LEVEL|
//! ```
//!
//! SPECIES is left blank when it equals the nickname, and LEVEL when it is
//! 100, the way the simulator writes it. Records carry no items or abilities,
//! so those fields stay empty for the simulator to fill with defaults.

use splice_battle::{PlayerRecord, PokemonRecord};

fn pack_pokemon(poke: &PokemonRecord) -> String {
    let species = if poke.species() == poke.name() {
        ""
    } else {
        poke.species()
    };
    let moves = poke
        .moves()
        .iter()
        .map(|m| m.id())
        .collect::<Vec<_>>()
        .join(",");
    let level = if poke.level() == 100 {
        String::new()
    } else {
        poke.level().to_string()
    };

    format!("{}|{}|||{}||||||{}|", poke.name(), species, moves, level)
}

/// Export a player's team in the simulator's packed format
pub fn pack_team(player: &PlayerRecord) -> String {
    player
        .team()
        .iter()
        .map(pack_pokemon)
        .collect::<Vec<_>>()
        .join("]")
}
