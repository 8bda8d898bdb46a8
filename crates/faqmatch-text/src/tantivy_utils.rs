use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tantivy::tokenizer::{LowerCaser, SimpleTokenizer, StopWordFilter, TextAnalyzer};
use tracing::debug;

/// The standard English stop-word list (179 entries). Apostrophe forms never
/// survive alphanumeric tokenization; they are kept so the list stays complete.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
	"i","me","my","myself","we","our","ours","ourselves","you","you're","you've","you'll","you'd",
	"your","yours","yourself","yourselves","he","him","his","himself","she","she's","her","hers",
	"herself","it","it's","its","itself","they","them","their","theirs","themselves","what","which",
	"who","whom","this","that","that'll","these","those","am","is","are","was","were","be","been",
	"being","have","has","had","having","do","does","did","doing","a","an","the","and","but","if",
	"or","because","as","until","while","of","at","by","for","with","about","against","between",
	"into","through","during","before","after","above","below","to","from","up","down","in","out",
	"on","off","over","under","again","further","then","once","here","there","when","where","why",
	"how","all","any","both","each","few","more","most","other","some","such","no","nor","not",
	"only","own","same","so","than","too","very","s","t","can","will","just","don","don't","should",
	"should've","now","d","ll","m","o","re","ve","y","ain","aren","aren't","couldn","couldn't",
	"didn","didn't","doesn","doesn't","hadn","hadn't","hasn","hasn't","haven","haven't","isn",
	"isn't","ma","mightn","mightn't","mustn","mustn't","needn","needn't","shan","shan't","shouldn",
	"shouldn't","wasn","wasn't","weren","weren't","won","won't","wouldn","wouldn't",
];

/// Irregular plurals and their singular forms.
const NOUN_EXCEPTIONS: &[(&str, &str)] = &[
	("children", "child"), ("men", "man"), ("women", "woman"), ("feet", "foot"), ("teeth", "tooth"),
	("mice", "mouse"), ("geese", "goose"), ("oxen", "ox"), ("lives", "life"), ("knives", "knife"),
	("wives", "wife"), ("leaves", "leaf"), ("halves", "half"), ("shelves", "shelf"),
	("thieves", "thief"), ("wolves", "wolf"),
];

/// Base forms the suffix rules would otherwise damage. Plural rules also check
/// candidate stems against this list ("movies" -> "movie", "lenses" -> "lens").
const BASE_NOUNS: &[&str] = &[
	// already singular, ending in "s"
	"clothes", "news", "series", "species", "always", "perhaps", "less", "towards", "whereas",
	"afterwards", "sometimes", "physics", "mathematics", "lens", "canvas", "bus", "gas", "atlas",
	"bias", "alias", "iris", "chaos", "plus", "yes", "bonus", "virus", "campus", "census",
	"status", "corpus", "cactus", "octopus", "walrus", "circus",
	// singular in "ie", plural in "ies"
	"movie", "cookie", "hoodie", "pie", "tie", "lie", "goalie", "calorie", "smoothie", "selfie",
	"zombie", "rookie", "beanie", "onesie", "brownie", "prairie", "genie", "necktie", "bootie",
	"sweetie", "freebie", "newbie", "hippie", "veggie", "boogie",
	// singular in "i", plural in "is"
	"bikini", "ski", "taxi", "kiwi", "safari", "emoji", "khaki", "alibi", "wiki", "yeti", "deli",
	"chili", "martini", "broccoli", "salami", "origami", "sari", "tsunami", "graffiti",
];

/// Process-wide linguistic tables shared by every normalizer.
pub struct LinguisticResources {
	stop_words: HashSet<&'static str>,
	noun_exceptions: HashMap<&'static str, &'static str>,
	base_nouns: HashSet<&'static str>,
	analyzer: TextAnalyzer,
}

impl LinguisticResources {
	fn load() -> Self {
		let stop_words: HashSet<&'static str> = ENGLISH_STOP_WORDS.iter().copied().collect();
		let stop_filter = StopWordFilter::remove(ENGLISH_STOP_WORDS.iter().map(|s| s.to_string()));
		let noun_exceptions = NOUN_EXCEPTIONS.iter().copied().collect();
		let base_nouns = BASE_NOUNS.iter().copied().collect();
		let analyzer = TextAnalyzer::builder(SimpleTokenizer::default())
			.filter(LowerCaser)
			.filter(stop_filter)
			.build();
		debug!(stop_words = stop_words.len(), exceptions = NOUN_EXCEPTIONS.len(), base_nouns = BASE_NOUNS.len(), "linguistic resources loaded");
		Self { stop_words, noun_exceptions, base_nouns, analyzer }
	}

	pub fn is_stop_word(&self, token: &str) -> bool { self.stop_words.contains(token) }

	pub fn stop_word_count(&self) -> usize { self.stop_words.len() }

	pub fn noun_exception(&self, token: &str) -> Option<&'static str> { self.noun_exceptions.get(token).copied() }

	pub fn is_base_noun(&self, token: &str) -> bool { self.base_nouns.contains(token) }

	/// Lowercasing, alphanumeric-run tokenization and stop-word removal. Built
	/// once at load; callers get a handle to the shared chain.
	pub fn analyzer(&self) -> TextAnalyzer { self.analyzer.clone() }
}

static RESOURCES: OnceLock<LinguisticResources> = OnceLock::new();

/// Loads the stop-word list and lemmatizer tables on first call; later calls
/// return the same instance.
pub fn ensure_resources_loaded() -> &'static LinguisticResources {
	RESOURCES.get_or_init(LinguisticResources::load)
}
