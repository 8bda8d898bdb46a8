use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

use faqmatch_core::config::{resolve_with_base, Config};
use faqmatch_core::seed::SEED_FAQS;
use faqmatch_core::store::{JsonFaqStore, MemoryFaqStore};
use faqmatch_core::traits::FaqStore;
use faqmatch_core::{Error, FaqEntry, DEFAULT_THRESHOLD};

#[test]
fn seed_catalog_has_unique_questions() {
    assert_eq!(SEED_FAQS.len(), 24);
    let questions: HashSet<&str> = SEED_FAQS.iter().map(|s| s.question).collect();
    assert_eq!(questions.len(), SEED_FAQS.len());
    assert!(SEED_FAQS.iter().all(|s| !s.answer.trim().is_empty()));
}

#[test]
fn json_store_populates_once() {
    let tmp = TempDir::new().unwrap();
    let store = JsonFaqStore::new(tmp.path().join("nested/faqs.json"));
    assert!(!store.exists());

    let added = store.populate(SEED_FAQS).expect("populate");
    assert_eq!(added, SEED_FAQS.len());
    assert!(store.exists());

    // A second populate leaves the existing rows untouched.
    assert_eq!(store.populate(SEED_FAQS).expect("repopulate"), 0);
    assert_eq!(store.count().unwrap(), SEED_FAQS.len());

    let rows = store.load_all().unwrap();
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, (1..=24).collect::<Vec<i64>>());
    assert_eq!(rows[3].question, "How long does shipping take?");
    assert_eq!(rows[3].category, "Shipping");
}

#[test]
fn json_store_find_by_id() {
    let tmp = TempDir::new().unwrap();
    let store = JsonFaqStore::new(tmp.path().join("faqs.json"));
    store.populate(SEED_FAQS).unwrap();

    let row = store.find_by_id(8).unwrap().expect("row 8");
    assert_eq!(row.question, "What is your return policy?");
    assert!(store.find_by_id(999).unwrap().is_none());
}

#[test]
fn json_store_create_is_empty_and_missing_file_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let store = JsonFaqStore::new(tmp.path().join("faqs.json"));
    assert!(matches!(store.load_all(), Err(Error::NotFound(_))));

    store.create().unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn json_store_rejects_garbage() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("faqs.json");
    fs::write(&path, "{not json").unwrap();
    let store = JsonFaqStore::new(path);
    assert!(matches!(store.load_all(), Err(Error::Store(_))));
}

#[test]
fn memory_store_assigns_sequential_ids() {
    let store = MemoryFaqStore::from_seeds(&SEED_FAQS[..3]);
    let rows = store.load_all().unwrap();
    assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn entry_validation_rejects_blank_text() {
    assert!(FaqEntry::new(1, "Q?", "A.", "").validate().is_ok());
    let blank_question = FaqEntry::new(2, "   ", "A.", "General");
    assert!(matches!(blank_question.validate(), Err(Error::MalformedEntry { id: 2, .. })));
    let blank_answer = FaqEntry::new(3, "Q?", "", "General");
    assert!(matches!(blank_answer.validate(), Err(Error::MalformedEntry { id: 3, .. })));
}

#[test]
fn config_defaults_without_files() {
    let tmp = TempDir::new().unwrap();
    let config = Config::load_from(tmp.path()).expect("config");
    let settings = config.settings().unwrap();
    assert_eq!(settings.matcher.threshold, DEFAULT_THRESHOLD);
    assert!(settings.store.seed_if_missing);
    assert_eq!(config.store_path().unwrap(), tmp.path().join("faqs.json"));
}

#[test]
fn config_reads_toml_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        "[matcher]\nthreshold = 0.45\n\n[store]\npath = \"data/catalog.json\"\nseed_if_missing = false\n",
    )
    .unwrap();
    let config = Config::load_from(tmp.path()).expect("config");
    let settings = config.settings().unwrap();
    assert_eq!(settings.matcher.threshold, 0.45);
    assert!(!settings.store.seed_if_missing);
    assert_eq!(config.get::<f64>("matcher.threshold").unwrap(), 0.45);
    assert_eq!(config.store_path().unwrap(), tmp.path().join("data/catalog.json"));
}

#[test]
fn config_rejects_out_of_range_threshold() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("config.toml"), "[matcher]\nthreshold = 1.5\n").unwrap();
    match Config::load_from(tmp.path()) {
        Err(Error::InvalidThreshold(t)) => assert_eq!(t, 1.5),
        Err(e) => panic!("unexpected error: {e}"),
        Ok(_) => panic!("threshold 1.5 must be rejected"),
    }
}

#[test]
fn absolute_paths_ignore_base() {
    let tmp = TempDir::new().unwrap();
    let abs = tmp.path().join("faqs.json");
    let resolved = resolve_with_base(std::path::Path::new("/elsewhere"), abs.to_string_lossy());
    assert_eq!(resolved, abs);
}
