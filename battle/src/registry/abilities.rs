use phf::phf_map;
use splice_protocol::to_id;

use super::{EffectHook, HookTrigger::*, Resolution::*};

macro_rules! hook {
    ($id:literal, $name:literal, [$($trigger:expr),*], $resolution:expr) => {
        EffectHook {
            id: $id,
            name: $name,
            triggers: &[$($trigger),*],
            resolution: $resolution,
        }
    };
}

static ABILITIES: phf::Map<&'static str, EffectHook> = phf_map! {
    "intimidate" => hook!("intimidate", "Intimidate", [SwitchIn], Cosmetic("stat-drop")),
    "drizzle" => hook!("drizzle", "Drizzle", [SwitchIn, WeatherChange], Cosmetic("rain")),
    "drought" => hook!("drought", "Drought", [SwitchIn, WeatherChange], Cosmetic("sun")),
    "sandstream" => hook!("sandstream", "Sand Stream", [SwitchIn, WeatherChange], Cosmetic("sandstorm")),
    "snowwarning" => hook!("snowwarning", "Snow Warning", [SwitchIn, WeatherChange], Cosmetic("snow")),
    "levitate" => hook!("levitate", "Levitate", [ModifyDamage], Simulator),
    "static" => hook!("static", "Static", [Contact], Simulator),
    "roughskin" => hook!("roughskin", "Rough Skin", [Contact], Simulator),
    "speedboost" => hook!("speedboost", "Speed Boost", [Residual], Cosmetic("stat-rise")),
    "prankster" => hook!("prankster", "Prankster", [ModifyPriority], Simulator),
    "multiscale" => hook!("multiscale", "Multiscale", [ModifyDamage], Simulator),
    "immunity" => hook!("immunity", "Immunity", [StatusAttempt], Simulator),
    "moxie" => hook!("moxie", "Moxie", [AfterHit], Cosmetic("stat-rise")),
};

/// Look up an ability hook by display name or id
pub fn ability(name: &str) -> Option<&'static EffectHook> {
    ABILITIES.get(to_id(name).as_str())
}

pub fn abilities() -> impl Iterator<Item = &'static EffectHook> {
    ABILITIES.values()
}
