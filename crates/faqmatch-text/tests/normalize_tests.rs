use faqmatch_core::traits::Lemmatizer;
use faqmatch_text::{ensure_resources_loaded, Normalizer};

struct Identity;
impl Lemmatizer for Identity {
    fn lemma(&self, token: &str) -> String { token.to_string() }
}

#[test]
fn normalizes_faq_questions() {
    let n = Normalizer::new();
    assert_eq!(n.normalize("What sizes do you offer?"), "size offer");
    assert_eq!(n.normalize("How long does shipping take?"), "long shipping take");
    assert_eq!(n.normalize("Do you restock sold-out items?"), "restock sold item");
    assert_eq!(n.normalize("I'll track MY Orders!!"), "track order");
}

#[test]
fn empty_and_stop_word_only_input() {
    let n = Normalizer::new();
    assert_eq!(n.normalize(""), "");
    assert_eq!(n.normalize("   "), "");
    assert_eq!(n.normalize("The, and... is it?!"), "");
    assert!(n.tokens("? ! .").is_empty());
}

#[test]
fn lemmatization_is_part_of_speech_agnostic() {
    // Every token is lemmatized as a noun, so the gerund is not reduced to its verb.
    let n = Normalizer::new();
    assert_eq!(n.normalize("shipping"), "shipping");
    assert_eq!(n.normalize("Do you ship internationally?"), "ship internationally");
}

#[test]
fn preserves_token_order_and_repeats() {
    let n = Normalizer::new();
    assert_eq!(n.tokens("Cards, gift cards and more cards"), vec!["card", "gift", "card", "card"]);
}

#[test]
fn lemmatizer_is_swappable() {
    let n = Normalizer::with_lemmatizer(Identity);
    assert_eq!(n.normalize("What sizes do you offer?"), "sizes offer");
}

#[test]
fn resources_load_once() {
    let a = ensure_resources_loaded();
    let b = ensure_resources_loaded();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.stop_word_count(), 179);
    assert!(a.is_stop_word("the"));
    assert!(!a.is_stop_word("shipping"));
}

#[test]
fn deterministic() {
    let n = Normalizer::new();
    let text = "How do I return an item? Returns, refunds & exchanges!";
    assert_eq!(n.normalize(text), n.normalize(text));
}

#[test]
fn shared_analyzer_across_calls_and_threads() {
    let n = std::sync::Arc::new(Normalizer::new());
    let expected = n.tokens("Do you sell hoodies and bikinis?");
    assert_eq!(expected, vec!["sell", "hoodie", "bikini"]);
    assert_eq!(n.tokens("Do you sell hoodies and bikinis?"), expected);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let n = n.clone();
            std::thread::spawn(move || (0..50).map(|_| n.tokens("Do you sell hoodies and bikinis?")).collect::<Vec<_>>())
        })
        .collect();
    for h in handles {
        for tokens in h.join().unwrap() {
            assert_eq!(tokens, expected);
        }
    }
}
