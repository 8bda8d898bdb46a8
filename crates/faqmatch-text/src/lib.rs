//! faqmatch-text
//!
//! Text normalization and the TF-IDF vector space used to compare questions.
//! Tokenization and stop-word removal run through a tantivy analyzer chain;
//! see `normalize` and `index`.
pub mod tantivy_utils;
pub mod lemmatize;
pub mod normalize;
pub mod vector;
pub mod index;

pub use index::VectorSpaceIndex;
pub use lemmatize::RuleLemmatizer;
pub use normalize::Normalizer;
pub use tantivy_utils::{ensure_resources_loaded, LinguisticResources};
pub use vector::TermVector;
