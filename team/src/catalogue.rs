//! Species and move lookup tables used during import

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;
use splice_protocol::to_id;

use crate::TeamError;
use crate::descriptor::{MoveDescriptor, SpeciesDescriptor};

/// Entries of a document shipped either as a list or as an object keyed by
/// id, paired with their key. Entries that are not usable objects are
/// skipped.
fn listing<T: DeserializeOwned>(json: &str) -> Result<Vec<(Option<String>, T)>, TeamError> {
    let raw: Vec<(Option<String>, Value)> = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items.into_iter().map(|item| (None, item)).collect(),
        Value::Object(map) => map.into_iter().map(|(key, item)| (Some(key), item)).collect(),
        _ => Vec::new(),
    };

    Ok(raw
        .into_iter()
        .filter_map(|(key, item)| Some((key, serde_json::from_value(item).ok()?)))
        .collect())
}

#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    species: HashMap<String, SpeciesDescriptor>,
    moves: HashMap<String, MoveDescriptor>,
}

fn key(id: &str, name: &str) -> String {
    if id.is_empty() { to_id(name) } else { to_id(id) }
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lists(species: Vec<SpeciesDescriptor>, moves: Vec<MoveDescriptor>) -> Self {
        let mut catalogue = Self::new();
        for s in species {
            catalogue.add_species(s);
        }
        for m in moves {
            catalogue.add_move(m);
        }
        catalogue
    }

    /// Parse species and move documents, each a list or an id-keyed object
    pub fn from_json(species: &str, moves: &str) -> Result<Self, TeamError> {
        let mut catalogue = Self::new();

        for (listed_id, mut s) in listing::<SpeciesDescriptor>(species)? {
            if s.id.is_empty()
                && let Some(listed_id) = listed_id
            {
                s.id = listed_id;
            }
            catalogue.add_species(s);
        }

        for (listed_id, mut m) in listing::<MoveDescriptor>(moves)? {
            if m.id.is_empty()
                && let Some(listed_id) = listed_id
            {
                m.id = listed_id;
            }
            catalogue.add_move(m);
        }

        Ok(catalogue)
    }

    pub fn add_species(&mut self, species: SpeciesDescriptor) {
        self.species.insert(key(&species.id, &species.name), species);
    }

    pub fn add_move(&mut self, desc: MoveDescriptor) {
        self.moves.insert(key(&desc.id, &desc.name), desc);
    }

    /// Look up by id or display name
    pub fn species(&self, name: &str) -> Option<&SpeciesDescriptor> {
        self.species.get(&to_id(name))
    }

    /// Look up by id or display name
    pub fn move_desc(&self, name: &str) -> Option<&MoveDescriptor> {
        self.moves.get(&to_id(name))
    }
}
