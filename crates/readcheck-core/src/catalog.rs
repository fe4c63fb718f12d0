//! Phrase catalog: built-in phrase sets plus any configured ones.

use crate::dictionaries::phrase_sets::BUILTIN_PHRASE_SETS;
use crate::error::{CatalogError, CatalogResult};
use crate::phrase::{Difficulty, Phrase, PhraseSet};

/// Read-only collection of phrase sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseCatalog {
    sets: Vec<PhraseSet>,
}

impl PhraseCatalog {
    /// The phrase sets shipped with readcheck.
    pub fn builtin() -> Self {
        Self {
            sets: BUILTIN_PHRASE_SETS.clone(),
        }
    }

    /// Add phrase sets. A set whose id matches an existing set replaces it.
    pub fn with_sets<I: IntoIterator<Item = PhraseSet>>(mut self, sets: I) -> Self {
        for set in sets {
            match self.sets.iter_mut().find(|s| s.id == set.id) {
                Some(existing) => *existing = set,
                None => self.sets.push(set),
            }
        }
        self
    }

    /// All sets in catalog order.
    pub fn sets(&self) -> &[PhraseSet] {
        &self.sets
    }

    /// All phrases across sets, in catalog order.
    pub fn phrases(&self) -> impl Iterator<Item = &Phrase> {
        self.sets.iter().flat_map(|s| s.phrases.iter())
    }

    /// Find a set by id.
    pub fn find_set(&self, id: &str) -> CatalogResult<&PhraseSet> {
        self.sets
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::UnknownSet {
                id: id.to_string(),
                available: self
                    .sets
                    .iter()
                    .map(|s| s.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }

    /// Find a phrase by id. The first match in catalog order wins.
    pub fn find_phrase(&self, id: &str) -> CatalogResult<&Phrase> {
        self.phrases()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::UnknownPhrase { id: id.to_string() })
    }

    /// Phrases whose text contains `needle`, ignoring case.
    pub fn phrases_containing(&self, needle: &str) -> Vec<&Phrase> {
        let needle = needle.to_lowercase();
        self.phrases()
            .filter(|p| p.target.text.to_lowercase().contains(&needle))
            .collect()
    }

    /// Phrases graded at `difficulty`.
    pub fn phrases_at(&self, difficulty: Difficulty) -> Vec<&Phrase> {
        self.phrases()
            .filter(|p| p.difficulty == Some(difficulty))
            .collect()
    }
}
