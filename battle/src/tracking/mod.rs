//! Running a simulator session and mirroring it locally

mod animation;
mod engine;
mod mirror;
mod preamble;
mod reconcile;

#[cfg(test)]
pub(crate) mod fake;

pub use animation::{AnimationEvent, AnimationMapper};
pub use engine::{ChoiceOutcome, Engine, EngineError, EngineOptions, TurnReport};
pub use preamble::PreambleFilter;
pub use reconcile::{SlotMatch, reconcile};
