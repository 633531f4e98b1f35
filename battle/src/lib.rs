//! Simulator session wrapper and local battle mirror.
//!
//! The simulator is authoritative for every rule. This crate holds the
//! records a caller sees, drives a session through the [`Simulator`] trait,
//! and turns the simulator's log into animation events.
//!
//! # Overview
//!
//! ```text
//! splice-protocol (log lines, choice commands)
//!        │
//!        ▼
//! splice-battle (records + engine wrapper) ← THIS CRATE
//!        │
//!        └─> splice-team (builds records from external rosters)
//! ```
//!
//! # Main Types
//!
//! ## Records
//! - [`PokemonRecord`], [`MoveRecord`], [`PlayerRecord`] - what a caller reads
//! - [`StatStages`], [`Status`] - mirrored battle state of one pokemon
//! - [`FieldState`] - weather, terrain and rooms
//!
//! ## Session
//! - [`Simulator`], [`SimulatorFactory`] - the external engine's call surface
//! - [`Engine`] - one session per match, re-synced after every step
//! - [`AnimationEvent`] - visual intent extracted from new log lines
//!
//! ## Registries
//! - [`registry::ability`], [`registry::move_hook`] - named effect hooks
//!
//! # Example Usage
//!
//! ```ignore
//! use splice_battle::{Engine, EngineOptions};
//! use splice_protocol::{Choice, SideId};
//!
//! let (mut engine, opening) = Engine::start(&factory, p1, p2, &EngineOptions::default())?;
//! play(opening);
//!
//! let report = engine.submit_turn(&Choice::Default, &Choice::Switch(2))?;
//! play(report.events);
//!
//! if engine.pending_switch(SideId::P1) {
//!     engine.force_switch(SideId::P1, None)?;
//! }
//! ```

pub mod registry;
pub mod simulator;
pub mod tracking;
pub mod types;

pub use simulator::{
    BattleSetup, PendingRequest, SimCondition, SimField, SimHandle, SimPokemon, SimSide,
    Simulator, SimulatorError, SimulatorFactory,
};
pub use tracking::{
    AnimationEvent, AnimationMapper, ChoiceOutcome, Engine, EngineError, EngineOptions,
    PreambleFilter, SlotMatch, TurnReport, reconcile,
};
pub use types::{
    FieldEffect, FieldState, MoveCategory, MoveRecord, PlayerRecord, PokemonRecord, Room, Stat,
    StatBlock, StatStages, Status, Terrain, Type, Weather,
};
