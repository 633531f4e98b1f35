//! Animation-intent events derived from the battle log

use serde::Serialize;
use splice_protocol::{LogLine, PokemonRef, SideId, parse_log_line};
use tracing::debug;

/// A visual effect a renderer should play
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum AnimationEvent {
    Move {
        player_id: String,
        attacker: String,
        move_name: String,
        target: String,
        target_player_id: String,
        miss: bool,
    },
    Switch {
        player_id: String,
        pokemon: String,
        species: String,
        hp_percent: Option<u32>,
        /// Forced in by the opponent (Roar, Dragon Tail, ...)
        dragged: bool,
    },
    Damage {
        player_id: String,
        target: String,
        hp_percent: Option<u32>,
        source: Option<String>,
    },
    Heal {
        player_id: String,
        target: String,
        hp_percent: Option<u32>,
        source: Option<String>,
    },
    Faint {
        player_id: String,
        pokemon: String,
    },
    Status {
        player_id: String,
        pokemon: String,
        status: String,
        cured: bool,
    },
    Weather {
        weather: String,
        upkeep: bool,
    },
    Field {
        condition: String,
        started: bool,
    },
}

/// Maps log lines to events, resolving sides to player ids
#[derive(Debug, Clone, Default)]
pub struct AnimationMapper {
    player_ids: [String; 2],
}

impl AnimationMapper {
    pub fn new(p1: impl Into<String>, p2: impl Into<String>) -> Self {
        Self {
            player_ids: [p1.into(), p2.into()],
        }
    }

    /// Player id for a side; empty when the side cannot be resolved
    pub fn player_id(&self, side: SideId) -> String {
        self.player_ids
            .get(side.index())
            .cloned()
            .unwrap_or_default()
    }

    fn owner(&self, pokemon: &PokemonRef) -> String {
        self.player_id(pokemon.side)
    }

    /// Map one raw line; unrecognized or malformed lines yield None
    pub fn map_line(&self, line: &str) -> Option<AnimationEvent> {
        match parse_log_line(line) {
            Ok(parsed) => self.map(&parsed),
            Err(e) => {
                debug!(line, error = %e, "skipping unparseable log line");
                None
            }
        }
    }

    /// Map a batch of raw lines, dropping the ones with no animation
    pub fn map_lines<'a, I>(&self, lines: I) -> Vec<AnimationEvent>
    where
        I: IntoIterator<Item = &'a String>,
    {
        lines
            .into_iter()
            .filter_map(|line| self.map_line(line))
            .collect()
    }

    /// Map an already parsed line
    pub fn map(&self, line: &LogLine) -> Option<AnimationEvent> {
        let event = match line {
            LogLine::Move {
                pokemon,
                move_name,
                target,
                miss,
                still: _,
            } => AnimationEvent::Move {
                player_id: self.owner(pokemon),
                attacker: pokemon.name.clone(),
                move_name: move_name.clone(),
                target: target.as_ref().map(|t| t.name.clone()).unwrap_or_default(),
                target_player_id: target.as_ref().map(|t| self.owner(t)).unwrap_or_default(),
                miss: *miss,
            },

            LogLine::Switch {
                pokemon,
                details,
                hp_status,
            }
            | LogLine::Drag {
                pokemon,
                details,
                hp_status,
            } => AnimationEvent::Switch {
                player_id: self.owner(pokemon),
                pokemon: pokemon.name.clone(),
                species: details.species.clone(),
                hp_percent: hp_status.as_ref().map(|hp| hp.percent()),
                dragged: matches!(line, LogLine::Drag { .. }),
            },

            LogLine::Damage {
                pokemon,
                hp_status,
                from,
            } => AnimationEvent::Damage {
                player_id: self.owner(pokemon),
                target: pokemon.name.clone(),
                hp_percent: hp_status.as_ref().map(|hp| hp.percent()),
                source: from.clone(),
            },

            LogLine::Heal {
                pokemon,
                hp_status,
                from,
            } => AnimationEvent::Heal {
                player_id: self.owner(pokemon),
                target: pokemon.name.clone(),
                hp_percent: hp_status.as_ref().map(|hp| hp.percent()),
                source: from.clone(),
            },

            LogLine::Faint(pokemon) => AnimationEvent::Faint {
                player_id: self.owner(pokemon),
                pokemon: pokemon.name.clone(),
            },

            LogLine::Status { pokemon, status } => AnimationEvent::Status {
                player_id: self.owner(pokemon),
                pokemon: pokemon.name.clone(),
                status: status.clone(),
                cured: false,
            },

            LogLine::CureStatus { pokemon, status } => AnimationEvent::Status {
                player_id: self.owner(pokemon),
                pokemon: pokemon.name.clone(),
                status: status.clone(),
                cured: true,
            },

            LogLine::Weather { weather, upkeep } => AnimationEvent::Weather {
                weather: weather.clone(),
                upkeep: *upkeep,
            },

            LogLine::FieldStart(condition) => AnimationEvent::Field {
                condition: condition.clone(),
                started: true,
            },

            LogLine::FieldEnd(condition) => AnimationEvent::Field {
                condition: condition.clone(),
                started: false,
            },

            _ => return None,
        };

        Some(event)
    }
}
