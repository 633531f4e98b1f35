//! Static registries of named effect hooks
//!
//! The simulator enforces every rule. An entry only records when an effect
//! fires and whether the renderer has something extra to show for it.

mod abilities;
mod moves;

pub use abilities::{ability, abilities};
pub use moves::{move_hook, move_hooks};

/// Point in a turn at which an effect fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTrigger {
    SwitchIn,
    BeforeMove,
    ModifyPriority,
    ModifyDamage,
    AfterHit,
    Contact,
    StatusAttempt,
    Residual,
    WeatherChange,
}

/// Who resolves an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The simulator does everything
    Simulator,
    /// Simulator-enforced, with a named cosmetic the renderer may play
    Cosmetic(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectHook {
    pub id: &'static str,
    pub name: &'static str,
    pub triggers: &'static [HookTrigger],
    pub resolution: Resolution,
}

impl EffectHook {
    pub fn fires_on(&self, trigger: HookTrigger) -> bool {
        self.triggers.contains(&trigger)
    }

    pub fn defers_to_simulator(&self) -> bool {
        self.resolution == Resolution::Simulator
    }

    /// Cosmetic hint, if any
    pub fn cosmetic(&self) -> Option<&'static str> {
        match self.resolution {
            Resolution::Simulator => None,
            Resolution::Cosmetic(hint) => Some(hint),
        }
    }
}
