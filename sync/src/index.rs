//! Variant index: sprite filenames grouped by fusion pair

use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::SyncError;
use crate::filename::parse_sprite_filename;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Chunk<'a> {
    Digits(&'a str),
    Text(String),
}

fn chunks(s: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut rest = s;
    while let Some(first) = rest.chars().next() {
        let digits = first.is_ascii_digit();
        let end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(end);
        out.push(if digits {
            Chunk::Digits(head.trim_start_matches('0'))
        } else {
            Chunk::Text(head.to_lowercase())
        });
        rest = tail;
    }
    out
}

fn cmp_chunk(a: &Chunk<'_>, b: &Chunk<'_>) -> Ordering {
    match (a, b) {
        (Chunk::Digits(x), Chunk::Digits(y)) => x.len().cmp(&y.len()).then_with(|| x.cmp(y)),
        (Chunk::Text(x), Chunk::Text(y)) => x.cmp(y),
        (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
        (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
    }
}

/// Case-insensitive comparison treating digit runs as numbers
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let (xs, ys) = (chunks(a), chunks(b));
    xs.iter()
        .zip(&ys)
        .map(|(x, y)| cmp_chunk(x, y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| xs.len().cmp(&ys.len()))
        .then_with(|| a.cmp(b))
}

/// Base sprite first, the rest in natural order
fn cmp_variants(a: &str, b: &str) -> Ordering {
    let is_base = |name: &str| parse_sprite_filename(name).is_some_and(|s| s.is_base());
    is_base(b)
        .cmp(&is_base(a))
        .then_with(|| natural_cmp(a, b))
}

#[derive(Debug, Clone, Default)]
pub struct VariantIndex {
    pairs: HashMap<(u32, u32), Vec<String>>,
    locations: HashMap<String, PathBuf>,
}

impl VariantIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index bare filenames with no location on disk
    pub fn from_filenames<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::new();
        for name in names {
            index.insert(name.into(), None);
        }
        index.sort();
        index
    }

    /// Index every sprite in `dirs`
    ///
    /// A name found in more than one directory is kept once, from the
    /// first directory it appears in. Missing directories are skipped.
    pub async fn scan(dirs: &[PathBuf]) -> Result<Self, SyncError> {
        let mut index = Self::new();

        for dir in dirs {
            let mut entries = match tokio::fs::read_dir(dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    warn!(dir = %dir.display(), "sprite directory does not exist, skipping");
                    continue;
                }
                Err(e) => return Err(SyncError::io(dir, e)),
            };

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| SyncError::io(dir, e))?
            {
                if let Some(name) = entry.file_name().to_str() {
                    index.insert(name.to_string(), Some(entry.path()));
                }
            }
        }

        index.sort();
        Ok(index)
    }

    fn insert(&mut self, name: String, path: Option<PathBuf>) {
        let Some(sprite) = parse_sprite_filename(&name) else {
            return;
        };
        if self.locations.contains_key(&name)
            || self
                .pairs
                .get(&sprite.pair())
                .is_some_and(|v| v.contains(&name))
        {
            return;
        }

        if let Some(path) = path {
            self.locations.insert(name.clone(), path);
        }
        self.pairs.entry(sprite.pair()).or_default().push(name);
    }

    fn sort(&mut self) {
        for names in self.pairs.values_mut() {
            names.sort_by(|a, b| cmp_variants(a, b));
        }
    }

    /// Filenames for a pair, base first; empty when the pair is unknown
    pub fn variants(&self, head_id: u32, body_id: u32) -> &[String] {
        self.pairs
            .get(&(head_id, body_id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn total_fusions(&self) -> usize {
        self.pairs.len()
    }

    /// Where an indexed sprite lives on disk
    pub fn locate(&self, filename: &str) -> Option<&Path> {
        self.locations.get(filename).map(PathBuf::as_path)
    }
}
