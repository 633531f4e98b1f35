//! Shapes of the external JSON documents
//!
//! Every field is optional. Values of the wrong shape are treated as absent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;

/// Move accuracy as external data writes it: a percentage or `true`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Accuracy {
    Percent(u8),
    Always(bool),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveDescriptor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, rename = "type", deserialize_with = "lenient::text")]
    pub move_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, alias = "basePower", deserialize_with = "lenient::opt_int")]
    pub power: Option<u16>,
    #[serde(default, deserialize_with = "lenient::accuracy")]
    pub accuracy: Option<Accuracy>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub priority: Option<i8>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesDescriptor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub types: Vec<String>,
    /// Raw stat table; keys and values are normalized on conversion
    #[serde(
        default,
        alias = "stats",
        alias = "base_stats",
        deserialize_with = "lenient::table"
    )]
    pub base_stats: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberDescriptor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    /// Nickname; the species name is used when absent
    #[serde(default, alias = "nickname", deserialize_with = "lenient::opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub species: String,
    #[serde(default, deserialize_with = "lenient::level")]
    pub level: Option<u8>,
    /// Move ids or display names
    #[serde(default, deserialize_with = "lenient::strings")]
    pub moves: Vec<String>,
    #[serde(default, alias = "hp", deserialize_with = "lenient::opt_int")]
    pub max_hp: Option<u32>,
}

/// A player's roster document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterDescriptor {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::entries")]
    pub team: Vec<TeamMemberDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_descriptor_aliases() {
        let desc: MoveDescriptor = serde_json::from_str(
            r#"{"id": "thunderbolt", "name": "Thunderbolt", "type": "Electric",
                "category": "Special", "basePower": 90, "accuracy": 100}"#,
        )
        .unwrap();

        assert_eq!(desc.power, Some(90));
        assert_eq!(desc.accuracy, Some(Accuracy::Percent(100)));
        assert_eq!(desc.priority, None);
    }

    #[test]
    fn test_accuracy_true() {
        let desc: MoveDescriptor =
            serde_json::from_str(r#"{"name": "Swift", "accuracy": true}"#).unwrap();
        assert_eq!(desc.accuracy, Some(Accuracy::Always(true)));
        assert!(desc.id.is_empty());
    }

    #[test]
    fn test_member_fields_are_optional() {
        let member: TeamMemberDescriptor =
            serde_json::from_str(r#"{"species": "Pikachu", "hp": 95}"#).unwrap();
        assert_eq!(member.species, "Pikachu");
        assert_eq!(member.max_hp, Some(95));
        assert!(member.name.is_none());
        assert!(member.moves.is_empty());
    }

    #[test]
    fn test_species_stats_alias() {
        let species: SpeciesDescriptor =
            serde_json::from_str(r#"{"name": "Onix", "stats": {"hp": 35}}"#).unwrap();
        assert_eq!(species.base_stats["hp"], 35);
    }

    #[test]
    fn test_wrong_typed_move_fields_are_absent() {
        let desc: MoveDescriptor = serde_json::from_str(
            r#"{"id": "tackle", "power": "40", "accuracy": "high", "priority": 300,
                "category": ["Physical"]}"#,
        )
        .unwrap();

        assert_eq!(desc.power, Some(40));
        assert_eq!(desc.accuracy, None);
        assert_eq!(desc.priority, None);
        assert!(desc.category.is_empty());
    }

    #[test]
    fn test_member_level_is_clamped() {
        let parse = |json: &str| serde_json::from_str::<TeamMemberDescriptor>(json).unwrap();

        assert_eq!(parse(r#"{"level": "50"}"#).level, Some(50));
        assert_eq!(parse(r#"{"level": 300}"#).level, Some(100));
        assert_eq!(parse(r#"{"level": 0}"#).level, Some(1));
        assert_eq!(parse(r#"{"level": "max"}"#).level, None);
        assert_eq!(parse(r#"{"level": null}"#).level, None);
    }

    #[test]
    fn test_member_odd_shapes() {
        let member: TeamMemberDescriptor = serde_json::from_str(
            r#"{"species": "Pikachu", "name": 25, "moves": "Thunderbolt", "hp": -10}"#,
        )
        .unwrap();

        assert_eq!(member.name.as_deref(), Some("25"));
        assert_eq!(member.moves, ["Thunderbolt"]);
        assert_eq!(member.max_hp, None);
    }

    #[test]
    fn test_species_bad_types_and_stats() {
        let species: SpeciesDescriptor = serde_json::from_str(
            r#"{"name": "Onix", "types": ["Rock", 7, null, "Ground"], "stats": [35]}"#,
        )
        .unwrap();

        assert_eq!(species.types, ["Rock", "7", "Ground"]);
        assert!(species.base_stats.is_empty());
    }

    #[test]
    fn test_roster_skips_unusable_members() {
        let roster: RosterDescriptor = serde_json::from_str(
            r#"{"id": "ash", "team": [{"species": "Pikachu"}, "Onix", 3]}"#,
        )
        .unwrap();

        assert_eq!(roster.team.len(), 1);
        assert_eq!(roster.team[0].species, "Pikachu");
    }
}
