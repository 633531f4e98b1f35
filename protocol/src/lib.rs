use thiserror::Error;

pub mod choice;
pub mod log;

pub use choice::{Choice, MoveModifier};
pub use log::{
    HpStatus, LogLine, PokemonDetails, PokemonRef, SideId, parse_log, parse_log_line,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid message format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty message")]
    EmptyMessage,
}

/// Normalize a name to the simulator's id form: lowercase ASCII alphanumerics only
///
/// "Mr. Mime" becomes "mrmime", "Thunder Punch" becomes "thunderpunch".
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
