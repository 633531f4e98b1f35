//! Import of external roster data into battle records.
//!
//! External data comes in loosely shaped JSON: stat keys spelled several
//! ways, moves with `basePower` or `power`, accuracy given as `true`. This
//! crate accepts all of that and produces the records `splice-battle`
//! works with. Missing or malformed optional fields never fail an import;
//! only JSON that cannot be parsed at all does.
//!
//! # Example
//!
//! ```ignore
//! use splice_team::{Catalogue, import_roster, pack_team};
//!
//! let catalogue = Catalogue::from_json(species_json, moves_json)?;
//! let player = import_roster(roster_json, &catalogue)?;
//! let packed = pack_team(&player);
//! ```

mod catalogue;
mod convert;
mod descriptor;
mod lenient;
mod packed;
mod stats;

pub use catalogue::Catalogue;
pub use convert::{build_pokemon, import_roster, max_hp_for};
pub use descriptor::{
    Accuracy, MoveDescriptor, RosterDescriptor, SpeciesDescriptor, TeamMemberDescriptor,
};
pub use packed::pack_team;
pub use stats::{BASELINE_STAT, normalize_stats};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),
}
