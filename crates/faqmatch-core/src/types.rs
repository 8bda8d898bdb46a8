//! Domain types shared by the matcher, the store and the CLI.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub type FaqId = i64;

/// Default acceptance threshold on the [0, 1] similarity scale.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// One row of the FAQ catalog.
///
/// - `id`: unique within a corpus snapshot
/// - `question`/`answer`: non-empty text
/// - `category`: free-form label, may be empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: String,
}

impl FaqEntry {
    pub fn new(
        id: FaqId,
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self { id, question: question.into(), answer: answer.into(), category: category.into() }
    }

    /// Rejects entries whose question or answer is blank.
    pub fn validate(&self) -> Result<()> {
        if self.question.trim().is_empty() {
            return Err(Error::MalformedEntry { id: self.id, reason: "empty question".to_string() });
        }
        if self.answer.trim().is_empty() {
            return Err(Error::MalformedEntry { id: self.id, reason: "empty answer".to_string() });
        }
        Ok(())
    }
}

/// The best FAQ for a query. `similarity_score` is cosine similarity as a
/// percentage in [0, 100], rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub similarity_score: f64,
}

/// A catalog row without its id, as returned by category lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub question: String,
    pub answer: String,
    pub category: String,
}

impl From<&FaqEntry> for CategoryEntry {
    fn from(entry: &FaqEntry) -> Self {
        Self {
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            category: entry.category.clone(),
        }
    }
}

/// A seed row before the store assigns it an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedFaq {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}
