use std::sync::Arc;

use faqmatch_core::traits::Lemmatizer;
use tantivy::tokenizer::TokenStream;

use crate::lemmatize::RuleLemmatizer;
use crate::tantivy_utils::ensure_resources_loaded;

/// Text-to-terms pipeline: lowercase, split into alphanumeric runs, drop
/// stop-words, lemmatize, join with single spaces.
#[derive(Clone)]
pub struct Normalizer {
	lemmatizer: Arc<dyn Lemmatizer>,
}

impl Default for Normalizer {
	fn default() -> Self { Self::with_lemmatizer(RuleLemmatizer::new()) }
}

impl Normalizer {
	pub fn new() -> Self { Self::default() }

	pub fn with_lemmatizer<L: Lemmatizer + 'static>(lemmatizer: L) -> Self {
		Self::with_shared_lemmatizer(Arc::new(lemmatizer))
	}

	pub fn with_shared_lemmatizer(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
		ensure_resources_loaded();
		Self { lemmatizer }
	}

	/// Lemmatized content terms of `text`, in order.
	pub fn tokens(&self, text: &str) -> Vec<String> {
		let mut analyzer = ensure_resources_loaded().analyzer();
		let mut stream = analyzer.token_stream(text);
		let mut terms = Vec::new();
		while stream.advance() {
			let lemma = self.lemmatizer.lemma(&stream.token().text);
			if !lemma.is_empty() { terms.push(lemma); }
		}
		terms
	}

	/// Empty or stop-word-only input yields an empty string.
	pub fn normalize(&self, text: &str) -> String { self.tokens(text).join(" ") }
}
