use phf::phf_map;
use splice_protocol::to_id;

use super::{EffectHook, HookTrigger::*, Resolution};

static MOVES: phf::Map<&'static str, EffectHook> = phf_map! {
    "protect" => EffectHook {
        id: "protect",
        name: "Protect",
        triggers: &[ModifyPriority, BeforeMove],
        resolution: Resolution::Cosmetic("shield"),
    },
    "quickattack" => EffectHook {
        id: "quickattack",
        name: "Quick Attack",
        triggers: &[ModifyPriority],
        resolution: Resolution::Simulator,
    },
    "uturn" => EffectHook {
        id: "uturn",
        name: "U-turn",
        triggers: &[AfterHit],
        resolution: Resolution::Simulator,
    },
    "thunderbolt" => EffectHook {
        id: "thunderbolt",
        name: "Thunderbolt",
        triggers: &[AfterHit],
        resolution: Resolution::Cosmetic("lightning"),
    },
    "earthquake" => EffectHook {
        id: "earthquake",
        name: "Earthquake",
        triggers: &[ModifyDamage],
        resolution: Resolution::Cosmetic("screen-shake"),
    },
    "raindance" => EffectHook {
        id: "raindance",
        name: "Rain Dance",
        triggers: &[WeatherChange],
        resolution: Resolution::Cosmetic("rain"),
    },
    "toxic" => EffectHook {
        id: "toxic",
        name: "Toxic",
        triggers: &[StatusAttempt, Residual],
        resolution: Resolution::Simulator,
    },
    "willowisp" => EffectHook {
        id: "willowisp",
        name: "Will-O-Wisp",
        triggers: &[StatusAttempt],
        resolution: Resolution::Simulator,
    },
    "leechseed" => EffectHook {
        id: "leechseed",
        name: "Leech Seed",
        triggers: &[Residual],
        resolution: Resolution::Simulator,
    },
    "trickroom" => EffectHook {
        id: "trickroom",
        name: "Trick Room",
        triggers: &[ModifyPriority],
        resolution: Resolution::Cosmetic("room-warp"),
    },
};

/// Look up a move hook by display name or id
pub fn move_hook(name: &str) -> Option<&'static EffectHook> {
    MOVES.get(to_id(name).as_str())
}

pub fn move_hooks() -> impl Iterator<Item = &'static EffectHook> {
    MOVES.values()
}
