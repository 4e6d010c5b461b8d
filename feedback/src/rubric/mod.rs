//! # Rubric Table
//!
//! An immutable lookup from `(level, score)` to a [`RubricEntry`]. The standard
//! table covers three literacy levels with scores from 0 to 10. Alternate
//! tables can be built with [`RubricTable::from_entries`].
//!
//! A table is built once at startup and shared behind an `Arc`. It is never
//! mutated afterwards.

mod standard;

use crate::error::RubricError;
use std::collections::HashMap;

/// Highest score a student can reach in a game.
pub const MAX_SCORE: u8 = 10;

/// Key into the rubric table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RubricKey {
    pub level: u8,
    pub score: u8,
}

impl RubricKey {
    pub const fn new(level: u8, score: u8) -> Self {
        Self { level, score }
    }
}

/// Descriptive record for one `(level, score)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RubricEntry {
    /// Short label such as "Sangat Baik".
    pub category: String,
    /// What the student can and cannot do yet.
    pub description: String,
    /// The suggested next pedagogical step.
    pub recommendation: String,
}

impl RubricEntry {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            recommendation: recommendation.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RubricTable {
    entries: HashMap<RubricKey, RubricEntry>,
}

impl RubricTable {
    /// The literacy rubric used in production.
    pub fn standard() -> Self {
        let entries = standard::STANDARD_ROWS
            .iter()
            .map(|&(key, category, description, recommendation)| {
                (key, RubricEntry::new(category, description, recommendation))
            })
            .collect();
        Self { entries }
    }

    /// Builds a table from explicit entries.
    ///
    /// Fails with [`RubricError::DuplicateEntry`] if a key appears twice.
    pub fn from_entries<I>(entries: I) -> Result<Self, RubricError>
    where
        I: IntoIterator<Item = (RubricKey, RubricEntry)>,
    {
        let mut map = HashMap::new();
        for (key, entry) in entries {
            if map.insert(key, entry).is_some() {
                return Err(RubricError::DuplicateEntry {
                    level: key.level,
                    score: key.score,
                });
            }
        }
        Ok(Self { entries: map })
    }

    /// Looks up the entry for `(level, score)`.
    ///
    /// Values outside the key range are a miss like any other uncovered pair.
    pub fn lookup(&self, level: i64, score: i64) -> Result<&RubricEntry, RubricError> {
        let key = u8::try_from(level)
            .ok()
            .zip(u8::try_from(score).ok())
            .map(|(level, score)| RubricKey::new(level, score));

        key.and_then(|key| self.entries.get(&key))
            .ok_or(RubricError::NotFound { level, score })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All covered keys, in ascending order.
    pub fn keys(&self) -> Vec<RubricKey> {
        let mut keys: Vec<RubricKey> = self.entries.keys().copied().collect();
        keys.sort();
        keys
    }
}
