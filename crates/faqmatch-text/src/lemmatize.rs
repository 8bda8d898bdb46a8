//! Noun-only lemmatization.
//!
//! Every token is treated as a noun: plural inflections are reduced, verb and
//! adjective forms pass through unchanged ("shipping" stays "shipping").

use faqmatch_core::traits::Lemmatizer;

use crate::tantivy_utils::{ensure_resources_loaded, LinguisticResources};

/// Default [`Lemmatizer`]: irregular-plural exceptions first, then suffix rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
	pub fn new() -> Self {
		ensure_resources_loaded();
		Self
	}
}

impl Lemmatizer for RuleLemmatizer {
	fn lemma(&self, token: &str) -> String {
		let resources = ensure_resources_loaded();
		if let Some(base) = resources.noun_exception(token) {
			return base.to_string();
		}
		if resources.is_base_noun(token) {
			return token.to_string();
		}
		singular(token, resources).unwrap_or_else(|| token.to_string())
	}
}

/// Suffix rules; every suffix is ASCII so byte slicing stays on char boundaries.
/// Stems listed as base nouns win over the generic rules.
fn singular(token: &str, resources: &LinguisticResources) -> Option<String> {
	let len = token.chars().count();
	if len <= 3 {
		return None;
	}
	let strip = |n: usize| token[..token.len() - n].to_string();
	let known = |n: usize| resources.is_base_noun(&token[..token.len() - n]);

	// movies -> movie, skis -> ski
	if (token.ends_with("ies") || token.ends_with("is")) && known(1) {
		return Some(strip(1));
	}
	// lenses -> lens, buses -> bus
	if token.ends_with("ses") && known(2) {
		return Some(strip(2));
	}
	if token.ends_with("ies") && len > 4 {
		return Some(format!("{}y", strip(3)));
	}
	if token.ends_with("sses")
		|| token.ends_with("xes")
		|| token.ends_with("ches")
		|| token.ends_with("shes")
		|| token.ends_with("zzes")
	{
		return Some(strip(2));
	}
	if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
		return None;
	}
	if token.ends_with('s') {
		return Some(strip(1));
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn regular_plurals() {
		let l = RuleLemmatizer::new();
		for (word, base) in [
			("sizes", "size"),
			("items", "item"),
			("policies", "policy"),
			("boxes", "box"),
			("watches", "watch"),
			("dishes", "dish"),
			("classes", "class"),
			("charges", "charge"),
		] {
			assert_eq!(l.lemma(word), base, "{word}");
		}
	}

	#[test]
	fn leaves_base_forms_alone() {
		let l = RuleLemmatizer::new();
		for word in ["size", "status", "address", "analysis", "gas", "clothes", "shipping"] {
			assert_eq!(l.lemma(word), word, "{word}");
		}
	}

	#[test]
	fn irregular_plurals() {
		let l = RuleLemmatizer::new();
		assert_eq!(l.lemma("children"), "child");
		assert_eq!(l.lemma("women"), "woman");
		assert_eq!(l.lemma("knives"), "knife");
	}

	#[test]
	fn singular_and_plural_share_a_lemma() {
		let l = RuleLemmatizer::new();
		for (singular, plural) in [
			("movie", "movies"),
			("hoodie", "hoodies"),
			("cookie", "cookies"),
			("tie", "ties"),
			("bikini", "bikinis"),
			("ski", "skis"),
			("taxi", "taxis"),
			("lens", "lenses"),
			("canvas", "canvases"),
			("bus", "buses"),
			("gas", "gases"),
			("bonus", "bonuses"),
			("policy", "policies"),
			("item", "items"),
		] {
			assert_eq!(l.lemma(plural), l.lemma(singular), "{singular}/{plural}");
			assert_eq!(l.lemma(plural), singular, "{plural}");
		}
	}

	#[test]
	fn singular_s_nouns_keep_their_ending() {
		let l = RuleLemmatizer::new();
		assert_eq!(l.lemma("lens"), "lens");
		assert_eq!(l.lemma("canvas"), "canvas");
		assert_eq!(l.lemma("tennis"), "tennis");
		assert_eq!(l.lemma("uses"), "use");
	}
}
