//! Locating the team slot behind a simulator pokemon
//!
//! The simulator does not keep one identity-stable object per team member,
//! so a slot is looked up with three strategies in a fixed order.

use crate::simulator::{SimHandle, SimPokemon};
use crate::types::PokemonRecord;

/// How (and whether) a simulator pokemon was matched to a team slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotMatch {
    /// Handle equal to the one recorded for the slot
    ByReference(usize),
    /// The simulator's declared position field
    ByPosition(usize),
    /// Species or name equality
    ByName(usize),
    NotFound,
}

impl SlotMatch {
    /// The matched team index, if any
    pub fn index(&self) -> Option<usize> {
        match *self {
            SlotMatch::ByReference(i) | SlotMatch::ByPosition(i) | SlotMatch::ByName(i) => Some(i),
            SlotMatch::NotFound => None,
        }
    }

    /// Whether the match came from a fallback rather than the recorded handle
    pub fn is_fallback(&self) -> bool {
        matches!(self, SlotMatch::ByPosition(_) | SlotMatch::ByName(_))
    }
}

/// Find the team slot for `target`
///
/// `handles[i]` is the handle last seen for `team[i]`.
pub fn reconcile(
    target: &SimPokemon,
    handles: &[Option<SimHandle>],
    team: &[PokemonRecord],
) -> SlotMatch {
    if let Some(i) = handles
        .iter()
        .take(team.len())
        .position(|h| *h == Some(target.handle))
    {
        return SlotMatch::ByReference(i);
    }

    if let Some(position) = target.position
        && position < team.len()
    {
        return SlotMatch::ByPosition(position);
    }

    if let Some(i) = team
        .iter()
        .position(|p| p.answers_to(&target.species) || p.answers_to(&target.name))
    {
        return SlotMatch::ByName(i);
    }

    SlotMatch::NotFound
}
