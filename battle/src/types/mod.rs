//! Domain records shared by the adapter and the engine mirror

mod conditions;
mod field;
mod moves;
mod player;
mod pokemon;
mod pokemon_type;
mod stats;
mod status;

pub use conditions::{Room, Terrain, Weather};
pub use field::{FieldEffect, FieldState};
pub use moves::{MoveCategory, MoveRecord};
pub use player::PlayerRecord;
pub use pokemon::PokemonRecord;
pub use pokemon_type::Type;
pub use stats::{Stat, StatBlock, StatStages};
pub use status::Status;
