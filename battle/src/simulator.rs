//! The call surface of the external battle simulator
//!
//! Everything the engine knows about a battle comes through these traits.
//! Bindings (an embedded runtime, a child process, a test double) implement
//! [`Simulator`] and hand out sessions through a [`SimulatorFactory`].

use std::collections::BTreeMap;

use serde_json::Value;
use splice_protocol::SideId;
use thiserror::Error;

use crate::types::PlayerRecord;

#[derive(Error, Debug)]
pub enum SimulatorError {
    /// The session was started before; harmless on repeated initialization
    #[error("battle already started")]
    AlreadyStarted,

    #[error("simulator rejected battle setup: {0}")]
    InvalidSetup(String),

    #[error("simulator failure: {0}")]
    Internal(String),
}

/// Opaque identity the simulator attaches to one of its pokemon objects
///
/// The simulator may hand out a fresh handle for the same team member after
/// internal transitions, so a handle is a hint, not a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimHandle(pub u64);

/// Snapshot of one simulator-internal pokemon
#[derive(Debug, Clone, PartialEq)]
pub struct SimPokemon {
    pub handle: SimHandle,

    /// The simulator's declared position field, if it exposes one
    pub position: Option<usize>,

    pub species: String,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,

    /// Protocol status code ("", "brn", "par", ..., "fnt")
    pub status: String,
    pub fainted: bool,

    /// Boosts table keyed by stat id ("atk", "spe", "evasion", ...)
    pub boosts: BTreeMap<String, i8>,

    /// Volatile effects keyed by id, values passed through untouched
    pub volatiles: BTreeMap<String, Value>,
}

/// What the simulator is waiting on from a side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingRequest {
    #[default]
    None,
    Move,
    /// A forced replacement (after a faint, U-turn, ...)
    Switch,
    TeamPreview,
    Wait,
}

/// Snapshot of one simulator side
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimSide {
    pub name: String,

    /// Pokemon in the simulator's current internal order
    pub pokemon: Vec<SimPokemon>,

    /// Active slot pointers, one per active position
    pub active: Vec<Option<SimPokemon>>,

    pub pending: PendingRequest,
}

/// A field condition with its remaining duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimCondition {
    pub id: String,
    pub duration: Option<u8>,
}

impl SimCondition {
    pub fn new(id: impl Into<String>, duration: Option<u8>) -> Self {
        Self {
            id: id.into(),
            duration,
        }
    }
}

/// Snapshot of the simulator's field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimField {
    pub weather: Option<SimCondition>,
    pub terrain: Option<SimCondition>,

    /// Everything else the simulator tracks field-wide (rooms, gravity, ...)
    pub pseudo_weather: Vec<SimCondition>,
}

/// Everything needed to construct a session
#[derive(Debug, Clone, Copy)]
pub struct BattleSetup<'a> {
    pub format: &'a str,
    pub seed: [u16; 4],
    pub p1: &'a PlayerRecord,
    pub p2: &'a PlayerRecord,
}

/// One live simulator session
pub trait Simulator {
    /// Begin the battle. May report `AlreadyStarted` on repeated initialization.
    fn start(&mut self) -> Result<(), SimulatorError>;

    /// Submit a command string for a side. `Ok(false)` means the choice was rejected.
    fn choose(&mut self, side: SideId, command: &str) -> Result<bool, SimulatorError>;

    /// The append-only battle log
    fn log(&self) -> &[String];

    /// Current snapshot of a side, None if the side does not exist
    fn side(&self, side: SideId) -> Option<SimSide>;

    fn field(&self) -> SimField;

    fn turn(&self) -> u32;

    fn ended(&self) -> bool;

    /// Winner's name once ended; None for ties and unfinished battles
    fn winner(&self) -> Option<String>;
}

/// Creates simulator sessions
pub trait SimulatorFactory {
    type Sim: Simulator;

    fn create(&self, setup: &BattleSetup<'_>) -> Result<Self::Sim, SimulatorError>;
}
