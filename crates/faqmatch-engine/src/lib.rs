//! faqmatch-engine
//!
//! [`FaqMatcher`] answers a free-text question with the closest FAQ entry, or
//! `None` when nothing clears the acceptance threshold.
use std::collections::{BTreeSet, HashSet};

use faqmatch_core::error::{validate_threshold, Error, Result};
use faqmatch_core::traits::FaqStore;
use faqmatch_core::types::{CategoryEntry, FaqEntry, MatchResult, DEFAULT_THRESHOLD};
use faqmatch_text::{Normalizer, VectorSpaceIndex};
use tracing::debug;

/// Immutable matcher over one corpus snapshot. Rebuild to pick up new entries.
#[derive(Clone)]
pub struct FaqMatcher {
    entries: Vec<FaqEntry>,
    index: VectorSpaceIndex,
    threshold: f64,
}

impl FaqMatcher {
    pub fn new(entries: Vec<FaqEntry>) -> Result<Self> { Self::with_normalizer(entries, Normalizer::default()) }

    /// Validates every entry, then indexes the questions in corpus order.
    pub fn with_normalizer(entries: Vec<FaqEntry>, normalizer: Normalizer) -> Result<Self> {
        if entries.is_empty() { return Err(Error::EmptyCorpus); }
        let mut ids = HashSet::with_capacity(entries.len());
        for e in &entries {
            e.validate()?;
            if !ids.insert(e.id) { return Err(Error::DuplicateId(e.id)); }
        }
        let questions: Vec<&str> = entries.iter().map(|e| e.question.as_str()).collect();
        let index = VectorSpaceIndex::build_with(normalizer, &questions)?;
        debug!(entries = entries.len(), vocabulary = index.vocabulary_len(), "FAQ matcher ready");
        Ok(Self { entries, index, threshold: DEFAULT_THRESHOLD })
    }

    pub fn from_store<S: FaqStore + ?Sized>(store: &S) -> Result<Self> { Self::new(store.load_all()?) }

    /// Replaces the default acceptance threshold used by [`find_best_match`](Self::find_best_match).
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        self.threshold = validate_threshold(threshold)?;
        Ok(self)
    }

    pub fn threshold(&self) -> f64 { self.threshold }

    pub fn find_best_match(&self, query: &str) -> Option<MatchResult> { self.best_match(query, self.threshold) }

    pub fn find_best_match_with_threshold(&self, query: &str, threshold: f64) -> Result<Option<MatchResult>> {
        let threshold = validate_threshold(threshold)?;
        Ok(self.best_match(query, threshold))
    }

    fn best_match(&self, query: &str, threshold: f64) -> Option<MatchResult> {
        if query.trim().is_empty() { return None; }
        let scores = self.index.scores(&self.index.vectorize(query));
        // Strictly greater keeps the earliest entry on ties.
        let (best, similarity) = scores
            .iter()
            .copied()
            .enumerate()
            .fold(None, |acc: Option<(usize, f64)>, (i, s)| match acc {
                Some((_, top)) if s <= top => acc,
                _ => Some((i, s)),
            })?;
        if similarity < threshold {
            debug!(similarity, threshold, "no confident match");
            return None;
        }
        let entry = &self.entries[best];
        Some(MatchResult {
            question: entry.question.clone(),
            answer: entry.answer.clone(),
            category: entry.category.clone(),
            similarity_score: (similarity * 100.0 * 100.0).round() / 100.0,
        })
    }

    /// Distinct category names, compared case-sensitively.
    pub fn categories(&self) -> BTreeSet<String> { self.entries.iter().map(|e| e.category.clone()).collect() }

    /// Entries whose category equals `name` ignoring case, in corpus order.
    pub fn entries_in_category(&self, name: &str) -> Vec<CategoryEntry> {
        let wanted = name.to_lowercase();
        self.entries.iter().filter(|e| e.category.to_lowercase() == wanted).map(CategoryEntry::from).collect()
    }

    pub fn entries(&self) -> &[FaqEntry] { &self.entries }

    pub fn index(&self) -> &VectorSpaceIndex { &self.index }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
