//! Ordered registry of village inhabitants

use std::cmp::Reverse;

use crate::core::error::{Result, VillageError};
use crate::inhabitant::Inhabitant;

/// The owning collection of a village's inhabitants.
///
/// Keeps insertion order and enforces unique names on insert.
#[derive(Debug, Default)]
pub struct Village {
    inhabitants: Vec<Inhabitant>,
}

impl Village {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an inhabitant, rejecting duplicate names.
    pub fn add(&mut self, inhabitant: Inhabitant) -> Result<()> {
        if self.inhabitants.iter().any(|i| i.name == inhabitant.name) {
            return Err(VillageError::DuplicateName(inhabitant.name));
        }
        self.inhabitants.push(inhabitant);
        Ok(())
    }

    /// Look up an inhabitant by name. A miss is not an error, just a note.
    pub fn find_by_name(&self, name: &str) -> Option<&Inhabitant> {
        let found = self.inhabitants.iter().find(|i| i.name == name);
        if found.is_none() {
            tracing::info!(name, "no such inhabitant");
        }
        found
    }

    /// Remove the inhabitant with the given name, if present.
    pub fn remove_by_name(&mut self, name: &str) {
        match self.inhabitants.iter().position(|i| i.name == name) {
            Some(idx) => {
                self.inhabitants.remove(idx);
            }
            None => tracing::info!(name, "no such inhabitant, nothing removed"),
        }
    }

    /// Reorder by level in place. The sort is stable, so equal levels keep
    /// their current relative order.
    pub fn sort_by_level(&mut self, ascending: bool) {
        if ascending {
            self.inhabitants.sort_by_key(|i| i.level);
        } else {
            self.inhabitants.sort_by_key(|i| Reverse(i.level));
        }
    }

    /// Total emeralds earned across the whole village. Zero when empty.
    pub fn total_emeralds(&self) -> i32 {
        self.inhabitants.iter().map(Inhabitant::reward).sum()
    }

    /// Up to three inhabitants with the highest rewards, best first.
    /// Ties resolve in favor of earlier registry order.
    pub fn top3_by_reward(&self) -> Vec<&Inhabitant> {
        let mut ranked: Vec<&Inhabitant> = self.inhabitants.iter().collect();
        ranked.sort_by_key(|i| Reverse(i.reward()));
        ranked.truncate(3);
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = &Inhabitant> {
        self.inhabitants.iter()
    }

    pub fn len(&self) -> usize {
        self.inhabitants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inhabitants.is_empty()
    }

    /// Swap in a complete new population. Load path only; uniqueness of the
    /// incoming set is the caller's responsibility.
    pub(crate) fn replace_all(&mut self, inhabitants: Vec<Inhabitant>) {
        self.inhabitants = inhabitants;
    }
}
