//! Copying simulator snapshots into the local records

use tracing::{debug, warn};

use super::reconcile::{SlotMatch, reconcile};
use crate::simulator::{SimField, SimHandle, SimPokemon, SimSide};
use crate::types::{FieldEffect, FieldState, PlayerRecord, PokemonRecord, Room, Status};

/// Mirror one side into `player`, refreshing `handles` along the way
///
/// Returns how the active slot was located.
pub(crate) fn mirror_side(
    player: &mut PlayerRecord,
    handles: &mut Vec<Option<SimHandle>>,
    side: &SimSide,
) -> SlotMatch {
    handles.resize(player.team.len(), None);

    for sim in &side.pokemon {
        let found = reconcile(sim, handles, &player.team);
        match found.index() {
            Some(idx) => {
                if found.is_fallback() {
                    debug!(
                        player = player.id(),
                        slot = idx,
                        strategy = ?found,
                        "re-linked simulator pokemon to team slot"
                    );
                    handles[idx] = Some(sim.handle);
                }
                copy_pokemon(&mut player.team[idx], sim);
            }
            None => {
                debug!(
                    player = player.id(),
                    species = %sim.species,
                    "simulator pokemon matches no team slot"
                );
            }
        }
    }

    let Some(active) = side.active.first().and_then(|a| a.as_ref()) else {
        return SlotMatch::NotFound;
    };

    let found = reconcile(active, handles, &player.team);
    match found.index() {
        Some(idx) => player.active = idx,
        None => warn!(
            player = player.id(),
            species = %active.species,
            "could not locate active pokemon, keeping previous slot"
        ),
    }
    found
}

fn copy_pokemon(poke: &mut PokemonRecord, sim: &SimPokemon) {
    poke.hp = sim.hp;
    if sim.max_hp > 0 {
        poke.max_hp = sim.max_hp;
    }

    poke.fainted = sim.fainted || sim.status == "fnt";
    poke.status = if poke.fainted {
        None
    } else {
        Status::from_protocol(&sim.status)
    };
    if poke.fainted {
        poke.hp = 0;
    }

    poke.stages
        .copy_from_table(sim.boosts.iter().map(|(stat, v)| (stat.as_str(), *v)));
    poke.volatiles = sim.volatiles.clone();
}

/// Mirror the field: weather, terrain and rooms
pub(crate) fn mirror_field(field: &mut FieldState, sim: &SimField) {
    let effect = |c: &crate::simulator::SimCondition| FieldEffect::new(c.id.clone(), c.duration);

    field.weather = sim
        .weather
        .as_ref()
        .filter(|w| !w.id.is_empty())
        .map(effect);
    field.terrain = sim
        .terrain
        .as_ref()
        .filter(|t| !t.id.is_empty())
        .map(effect);
    field.rooms = sim
        .pseudo_weather
        .iter()
        .filter(|c| Room::from_protocol(&c.id).is_some())
        .map(effect)
        .collect();
}
