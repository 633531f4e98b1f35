//! Player records

use serde::{Deserialize, Serialize};

use super::pokemon::PokemonRecord;

/// One player and their ordered team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    id: String,
    name: String,
    pub(crate) team: Vec<PokemonRecord>,

    /// Index into `team` of the active Pokemon, recomputed on every sync
    pub(crate) active: usize,
}

impl PlayerRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, team: Vec<PokemonRecord>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team,
            active: 0,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn team(&self) -> &[PokemonRecord] {
        &self.team
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active Pokemon, if the team is not empty
    pub fn active_pokemon(&self) -> Option<&PokemonRecord> {
        self.team.get(self.active)
    }

    /// Iterate over bench Pokemon (not active, not fainted) with their team index
    pub fn bench(&self) -> impl Iterator<Item = (usize, &PokemonRecord)> {
        let active = self.active;
        self.team
            .iter()
            .enumerate()
            .filter(move |(idx, poke)| *idx != active && poke.is_alive())
    }

    /// Count non-fainted Pokemon
    pub fn alive_count(&self) -> usize {
        self.team.iter().filter(|p| p.is_alive()).count()
    }

    /// Check if all Pokemon have fainted
    pub fn all_fainted(&self) -> bool {
        !self.team.is_empty() && self.team.iter().all(|p| p.fainted)
    }

    /// Find a Pokemon by name (nickname or species)
    pub fn find_pokemon(&self, name: &str) -> Option<usize> {
        self.team.iter().position(|p| p.answers_to(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team() -> Vec<PokemonRecord> {
        vec![
            PokemonRecord::new("a", "Pikachu", "Pikachu", 50).with_max_hp(100),
            PokemonRecord::new("b", "Bulby", "Bulbasaur", 50).with_max_hp(120),
            PokemonRecord::new("c", "Onix", "Onix", 50).with_max_hp(95),
        ]
    }

    #[test]
    fn test_new_player_starts_on_first_slot() {
        let player = PlayerRecord::new("p-1", "Alice", team());
        assert_eq!(player.active_index(), 0);
        assert_eq!(player.active_pokemon().unwrap().name(), "Pikachu");
    }

    #[test]
    fn test_bench_skips_active_and_fainted() {
        let mut player = PlayerRecord::new("p-1", "Alice", team());
        player.team[2].fainted = true;
        player.team[2].hp = 0;

        let bench: Vec<usize> = player.bench().map(|(i, _)| i).collect();
        assert_eq!(bench, [1]);
        assert_eq!(player.alive_count(), 2);
        assert!(!player.all_fainted());
    }

    #[test]
    fn test_find_pokemon_by_species() {
        let player = PlayerRecord::new("p-1", "Alice", team());
        assert_eq!(player.find_pokemon("Bulbasaur"), Some(1));
        assert_eq!(player.find_pokemon("Bulby"), Some(1));
        assert_eq!(player.find_pokemon("Mew"), None);
    }

    #[test]
    fn test_empty_team() {
        let player = PlayerRecord::new("p-1", "Alice", Vec::new());
        assert!(player.active_pokemon().is_none());
        assert!(!player.all_fainted());
    }
}
