//! Descriptor to record conversion

use splice_battle::{MoveCategory, MoveRecord, PlayerRecord, PokemonRecord, Type};
use splice_protocol::to_id;

use crate::TeamError;
use crate::catalogue::Catalogue;
use crate::descriptor::{Accuracy, MoveDescriptor, RosterDescriptor, TeamMemberDescriptor};
use crate::stats::normalize_stats;

const DEFAULT_LEVEL: u8 = 100;

impl MoveDescriptor {
    pub fn to_record(&self) -> MoveRecord {
        let id = if self.id.is_empty() {
            to_id(&self.name)
        } else {
            to_id(&self.id)
        };
        let name = if self.name.is_empty() {
            id.clone()
        } else {
            self.name.clone()
        };
        let accuracy = match self.accuracy {
            Some(Accuracy::Percent(n)) => Some(n),
            Some(Accuracy::Always(_)) | None => None,
        };

        MoveRecord::new(
            id,
            name,
            Type::from_protocol(&self.move_type),
            MoveCategory::parse_lenient(&self.category),
        )
        .with_power(self.power)
        .with_accuracy(accuracy)
        .with_priority(self.priority.unwrap_or(0))
    }
}

/// Max HP at `level` with 31 IVs and no EVs
pub fn max_hp_for(base_hp: u16, level: u8) -> u32 {
    let base = u32::from(base_hp);
    let level = u32::from(level);
    (2 * base + 31) * level / 100 + level + 10
}

fn resolve_move(name: &str, catalogue: &Catalogue) -> MoveRecord {
    match catalogue.move_desc(name) {
        Some(desc) => desc.to_record(),
        None => MoveRecord::new(to_id(name), name, None, MoveCategory::Physical),
    }
}

/// Build one team member, `index` being its slot in the team
pub fn build_pokemon(
    member: &TeamMemberDescriptor,
    index: usize,
    catalogue: &Catalogue,
) -> PokemonRecord {
    let species = catalogue.species(&member.species);

    let species_name = species
        .map(|s| s.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| member.species.clone());
    let name = member
        .name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| species_name.clone());
    let id = if member.id.is_empty() {
        format!("{}-{}", to_id(&species_name), index)
    } else {
        member.id.clone()
    };
    let level = member.level.unwrap_or(DEFAULT_LEVEL);

    let types: Vec<Type> = species
        .map(|s| s.types.iter().filter_map(|t| Type::from_protocol(t)).collect())
        .unwrap_or_default();
    let base_stats = normalize_stats(&species.map(|s| s.base_stats.clone()).unwrap_or_default());
    let moves = member
        .moves
        .iter()
        .map(|m| resolve_move(m, catalogue))
        .collect();

    let record = PokemonRecord::new(id, name, species_name, level)
        .with_types(types)
        .with_base_stats(base_stats)
        .with_moves(moves);
    let max_hp = member
        .max_hp
        .unwrap_or_else(|| max_hp_for(base_stats.hp, record.level()));
    record.with_max_hp(max_hp)
}

/// Parse a roster document into a player
pub fn import_roster(json: &str, catalogue: &Catalogue) -> Result<PlayerRecord, TeamError> {
    let roster: RosterDescriptor = serde_json::from_str(json)?;

    let team = roster
        .team
        .iter()
        .enumerate()
        .map(|(idx, member)| build_pokemon(member, idx, catalogue))
        .collect();
    let name = if roster.name.is_empty() {
        roster.id.clone()
    } else {
        roster.name
    };

    Ok(PlayerRecord::new(roster.id, name, team))
}

#[cfg(test)]
mod tests {
    use splice_battle::StatBlock;

    use super::*;
    use crate::stats::BASELINE_STAT;

    fn catalogue() -> Catalogue {
        Catalogue::from_json(
            r#"[
                {"id": "pikachu", "name": "Pikachu", "types": ["electric", "Shadow"],
                 "baseStats": {"hp": 35, "atk": 55, "def": 40, "spa": 50, "spd": 50, "spe": 90}}
            ]"#,
            r#"[
                {"id": "thunderbolt", "name": "Thunderbolt", "type": "Electric",
                 "category": "special", "basePower": 90, "accuracy": 100},
                {"id": "swift", "name": "Swift", "type": "Normal",
                 "category": "SPECIAL", "power": 60, "accuracy": true},
                {"id": "protect", "name": "Protect", "type": "Normal",
                 "category": "Status", "accuracy": true, "priority": 4}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_move_conversion() {
        let catalogue = catalogue();

        let bolt = catalogue.move_desc("Thunderbolt").unwrap().to_record();
        assert_eq!(bolt.category(), MoveCategory::Special);
        assert_eq!(bolt.power(), Some(90));
        assert_eq!(bolt.accuracy(), Some(100));
        assert_eq!(bolt.move_type(), Some(Type::Electric));
        assert_eq!(bolt.priority(), 0);

        let swift = catalogue.move_desc("swift").unwrap().to_record();
        assert_eq!(swift.category(), MoveCategory::Special);
        assert_eq!(swift.accuracy(), None);

        let protect = catalogue.move_desc("protect").unwrap().to_record();
        assert_eq!(protect.priority(), 4);
        assert_eq!(protect.power(), None);
    }

    #[test]
    fn test_unknown_category_is_physical() {
        let desc = MoveDescriptor {
            name: "Odd Move".to_string(),
            category: "weird".to_string(),
            ..MoveDescriptor::default()
        };
        let record = desc.to_record();
        assert_eq!(record.id(), "oddmove");
        assert_eq!(record.category(), MoveCategory::Physical);
    }

    #[test]
    fn test_max_hp_formula() {
        assert_eq!(max_hp_for(35, 50), 110);
        assert_eq!(max_hp_for(35, 100), 211);
    }

    #[test]
    fn test_import_roster() {
        let player = import_roster(
            r#"{
                "id": "ash",
                "name": "Ash",
                "team": [
                    {"species": "Pikachu", "name": "Sparky", "level": 50,
                     "moves": ["Thunderbolt", "Swift", "Volt Tackle"]},
                    {"id": "m2", "species": "MissingNo", "hp": 33}
                ]
            }"#,
            &catalogue(),
        )
        .unwrap();

        assert_eq!(player.id(), "ash");
        assert_eq!(player.team().len(), 2);

        let pika = &player.team()[0];
        assert_eq!(pika.id(), "pikachu-0");
        assert_eq!(pika.name(), "Sparky");
        assert_eq!(pika.species(), "Pikachu");
        assert_eq!(pika.types(), &[Type::Electric]);
        assert_eq!(pika.max_hp(), 110);
        assert_eq!(pika.hp(), 110);
        assert_eq!(pika.moves().len(), 3);

        let placeholder = &pika.moves()[2];
        assert_eq!(placeholder.id(), "volttackle");
        assert_eq!(placeholder.name(), "Volt Tackle");
        assert_eq!(placeholder.category(), MoveCategory::Physical);

        let missing = &player.team()[1];
        assert_eq!(missing.id(), "m2");
        assert_eq!(missing.name(), "MissingNo");
        assert_eq!(missing.level(), 100);
        assert_eq!(missing.max_hp(), 33);
        assert_eq!(*missing.base_stats(), StatBlock::uniform(BASELINE_STAT));
        assert!(missing.types().is_empty());
    }

    #[test]
    fn test_import_roster_defaults_malformed_fields() {
        let player = import_roster(
            r#"{
                "id": "ash",
                "team": [
                    {"species": "Pikachu", "level": "50"},
                    {"species": "Pikachu", "level": 300, "hp": "lots"},
                    {"species": "Pikachu", "level": [1], "moves": {"a": 1}}
                ]
            }"#,
            &catalogue(),
        )
        .unwrap();

        let team = player.team();
        assert_eq!(team[0].level(), 50);
        assert_eq!(team[0].max_hp(), 110);
        assert_eq!(team[1].level(), 100);
        assert_eq!(team[1].max_hp(), 211);
        assert_eq!(team[2].level(), 100);
        assert!(team[2].moves().is_empty());
    }

    #[test]
    fn test_import_roster_rejects_malformed_json() {
        let err = import_roster("{\"team\": [", &Catalogue::new()).unwrap_err();
        assert!(matches!(err, TeamError::Json(_)));
    }

    #[test]
    fn test_empty_roster() {
        let player = import_roster("{}", &Catalogue::new()).unwrap();
        assert!(player.team().is_empty());
        assert!(player.active_pokemon().is_none());
    }
}
