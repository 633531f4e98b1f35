//! Stat-block normalization

use serde_json::{Map, Value};
use splice_battle::StatBlock;

use crate::lenient::number;

/// Value used for any stat that is missing or not a number
pub const BASELINE_STAT: u16 = 50;

/// Key spellings accepted for each stat, canonical key first
const HP: &[&str] = &["hp", "HP", "Hp", "health", "Health"];
const ATK: &[&str] = &["atk", "Atk", "attack", "Attack"];
const DEF: &[&str] = &["def", "Def", "defense", "Defense", "defence"];
const SPA: &[&str] = &[
    "spa",
    "SpA",
    "spAtk",
    "sp_atk",
    "specialAttack",
    "special_attack",
    "special-attack",
];
const SPD: &[&str] = &[
    "spd",
    "SpD",
    "spDef",
    "sp_def",
    "specialDefense",
    "special_defense",
    "special-defense",
];
const SPE: &[&str] = &["spe", "Spe", "speed", "Speed"];

fn numeric(value: &Value) -> Option<u16> {
    let n = number(value)?;
    Some(n.round().clamp(0.0, f64::from(u16::MAX)) as u16)
}

fn lookup(table: &Map<String, Value>, keys: &[&str]) -> u16 {
    keys.iter()
        .find_map(|key| table.get(*key).and_then(numeric))
        .unwrap_or(BASELINE_STAT)
}

/// Reduce a raw stat table to the canonical block
///
/// Total: every stat gets a value. Idempotent: a block serialized with its
/// canonical keys normalizes to itself.
pub fn normalize_stats(table: &Map<String, Value>) -> StatBlock {
    StatBlock {
        hp: lookup(table, HP),
        atk: lookup(table, ATK),
        def: lookup(table, DEF),
        spa: lookup(table, SPA),
        spd: lookup(table, SPD),
        spe: lookup(table, SPE),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn table(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_aliases() {
        let block = normalize_stats(&table(json!({
            "HP": 35,
            "attack": 55,
            "Defense": 40,
            "spAtk": 50,
            "special-defense": 50,
            "speed": 90,
        })));

        assert_eq!(
            block,
            StatBlock {
                hp: 35,
                atk: 55,
                def: 40,
                spa: 50,
                spd: 50,
                spe: 90,
            }
        );
    }

    #[test]
    fn test_missing_and_garbage_default_to_baseline() {
        let block = normalize_stats(&table(json!({
            "hp": "lots",
            "atk": null,
            "spe": "110",
        })));

        assert_eq!(block.hp, BASELINE_STAT);
        assert_eq!(block.atk, BASELINE_STAT);
        assert_eq!(block.def, BASELINE_STAT);
        assert_eq!(block.spe, 110);

        assert_eq!(normalize_stats(&Map::new()), StatBlock::uniform(BASELINE_STAT));
    }

    #[test]
    fn test_non_numeric_alias_falls_through() {
        let block = normalize_stats(&table(json!({"spa": "n/a", "specialAttack": 120})));
        assert_eq!(block.spa, 120);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let first = normalize_stats(&table(json!({
            "health": 80.6,
            "sp_def": 100,
            "Speed": -5,
        })));
        let again = normalize_stats(&table(serde_json::to_value(first).unwrap()));

        assert_eq!(first, again);
        assert_eq!(first.hp, 81);
        assert_eq!(first.spe, 0);
    }
}
