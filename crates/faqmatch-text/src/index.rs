use std::collections::HashMap;

use faqmatch_core::error::{Error, Result};
use tracing::{debug, warn};

use crate::normalize::Normalizer;
use crate::vector::TermVector;

/// TF-IDF vector space over a fixed corpus of questions.
///
/// Vocabulary, document frequencies, idf values and document vectors are
/// computed once in [`VectorSpaceIndex::build`] and never change afterwards;
/// the index is safe to share across threads for reads.
///
/// Weighting, for term `t` in document `d` over `N` documents:
/// - `tf(t,d)`: raw count of `t` in the normalized text of `d`
/// - `idf(t) = ln((1 + N) / (1 + df(t))) + 1`
/// - `weight(t,d) = tf(t,d) * idf(t)`, then the vector is L2-normalized
#[derive(Clone)]
pub struct VectorSpaceIndex {
	normalizer: Normalizer,
	vocabulary: HashMap<String, u32>,
	doc_freq: Vec<u32>,
	idf: Vec<f64>,
	documents: Vec<TermVector>,
}

impl VectorSpaceIndex {
	pub fn build<S: AsRef<str>>(corpus_questions: &[S]) -> Result<Self> {
		Self::build_with(Normalizer::default(), corpus_questions)
	}

	pub fn build_with<S: AsRef<str>>(normalizer: Normalizer, corpus_questions: &[S]) -> Result<Self> {
		if corpus_questions.is_empty() { return Err(Error::EmptyCorpus); }

		// Vocabulary indices follow first appearance across the corpus.
		let mut vocabulary: HashMap<String, u32> = HashMap::new();
		let mut doc_freq: Vec<u32> = Vec::new();
		let mut counts: Vec<HashMap<u32, u32>> = Vec::with_capacity(corpus_questions.len());
		for (i, question) in corpus_questions.iter().enumerate() {
			let terms = normalizer.tokens(question.as_ref());
			if terms.is_empty() { warn!(document = i, "question has no content terms after normalization"); }
			let mut tf: HashMap<u32, u32> = HashMap::new();
			for term in terms {
				let next = vocabulary.len() as u32;
				let idx = *vocabulary.entry(term).or_insert_with(|| { doc_freq.push(0); next });
				*tf.entry(idx).or_insert(0) += 1;
			}
			for &idx in tf.keys() { doc_freq[idx as usize] += 1; }
			counts.push(tf);
		}

		let n = corpus_questions.len() as f64;
		let idf: Vec<f64> = doc_freq.iter().map(|&df| ((1.0 + n) / (1.0 + f64::from(df))).ln() + 1.0).collect();
		let documents: Vec<TermVector> = counts.iter().map(|tf| weigh(tf, &idf)).collect();
		debug!(documents = documents.len(), vocabulary = vocabulary.len(), "built vector space index");

		Ok(Self { normalizer, vocabulary, doc_freq, idf, documents })
	}

	/// Projects `query` into the build-time space. Unknown terms are dropped.
	pub fn vectorize(&self, query: &str) -> TermVector {
		let mut tf: HashMap<u32, u32> = HashMap::new();
		for term in self.normalizer.tokens(query) {
			if let Some(&idx) = self.vocabulary.get(&term) { *tf.entry(idx).or_insert(0) += 1; }
		}
		weigh(&tf, &self.idf)
	}

	/// Cosine similarity; 0 when either vector has zero magnitude.
	pub fn similarity(a: &TermVector, b: &TermVector) -> f64 { a.cosine(b) }

	/// Similarity of `query` against every document, in corpus order.
	pub fn scores(&self, query: &TermVector) -> Vec<f64> {
		self.documents.iter().map(|d| Self::similarity(query, d)).collect()
	}

	pub fn normalizer(&self) -> &Normalizer { &self.normalizer }

	pub fn num_documents(&self) -> usize { self.documents.len() }

	pub fn vocabulary_len(&self) -> usize { self.vocabulary.len() }

	pub fn document(&self, i: usize) -> Option<&TermVector> { self.documents.get(i) }

	pub fn term_index(&self, term: &str) -> Option<u32> { self.vocabulary.get(term).copied() }

	pub fn document_frequency(&self, term: &str) -> Option<u32> {
		self.term_index(term).map(|i| self.doc_freq[i as usize])
	}

	pub fn idf(&self, term: &str) -> Option<f64> { self.term_index(term).map(|i| self.idf[i as usize]) }
}

fn weigh(tf: &HashMap<u32, u32>, idf: &[f64]) -> TermVector {
	TermVector::normalized(tf.iter().map(|(&t, &c)| (t, f64::from(c) * idf[t as usize])).collect())
}
