use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use faqmatch_core::config::{expand_path, Config, Settings};
use faqmatch_core::seed::SEED_FAQS;
use faqmatch_core::store::JsonFaqStore;
use faqmatch_core::traits::FaqStore;
use faqmatch_core::types::MatchResult;
use faqmatch_engine::FaqMatcher;

const FALLBACK: &str = "😕 I couldn't find a good match. Please try rephrasing or contact support@clothingbrand.com";

#[derive(Parser)]
#[command(name = "faqmatch", version, about = "Answer customer questions from the FAQ catalog")]
struct Cli {
    /// FAQ store file, overrides `store.path` from config
    #[arg(long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create the store and fill it with the seed catalog
    Init,
    /// Answer a single question
    Ask {
        question: String,
        /// Acceptance threshold in [0, 1]
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Interactive session (:clear, :history, :stats, :categories, :reload, :quit)
    Chat,
    /// List categories
    Categories,
    /// List the FAQs in one category (case-insensitive)
    Category { name: String },
    /// Print one FAQ by id
    Show { id: i64 },
    /// Catalog summary
    Stats,
}

struct ChatTurn {
    question: String,
    result: Option<MatchResult>,
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn open_matcher(store: &JsonFaqStore, settings: &Settings) -> Result<FaqMatcher> {
    if !store.exists() && settings.store.seed_if_missing {
        info!(path = %store.path().display(), "store missing, seeding");
        store.populate(SEED_FAQS)?;
    }
    let matcher = FaqMatcher::from_store(store)
        .with_context(|| format!("building matcher from {}", store.path().display()))?
        .with_threshold(settings.matcher.threshold)?;
    Ok(matcher)
}

fn print_match(result: Option<&MatchResult>) {
    match result {
        Some(m) => {
            println!("📌 {}", m.question);
            println!("   {}", m.answer);
            println!("   🏷️  {}   🎯 {}% Match", m.category, m.similarity_score);
        }
        None => println!("{}", FALLBACK),
    }
}

fn print_categories(matcher: &FaqMatcher) {
    println!("📂 Categories");
    for category in matcher.categories() { println!("  {}", category); }
}

fn print_stats(store: &JsonFaqStore, matcher: &FaqMatcher, asked: Option<usize>) -> Result<()> {
    println!("📊 FAQs: {}", store.count()?);
    println!("   Categories: {}", matcher.categories().len());
    if let Some(asked) = asked { println!("   Asked: {}", asked); }
    Ok(())
}

fn init_store(store: &JsonFaqStore) -> Result<()> {
    println!("Initializing FAQ store...");
    store.create()?;
    let added = store.populate(SEED_FAQS)?;
    if added == 0 { println!("✓ FAQs already exist in store"); } else { println!("✓ Successfully added {} FAQs", added); }
    let location = std::fs::canonicalize(store.path()).unwrap_or_else(|_| store.path().to_path_buf());
    println!("\n📊 Store Summary:");
    println!("   Total FAQs: {}", store.count()?);
    println!("   Location: {}", location.display());
    Ok(())
}

/// Whole-index rebuild. `matcher` is only replaced when the new one builds.
fn reload(matcher: &mut FaqMatcher, store: &JsonFaqStore, settings: &Settings) -> Result<usize> {
    let fresh = open_matcher(store, settings)?;
    *matcher = fresh;
    Ok(matcher.len())
}

fn chat(store: &JsonFaqStore, settings: &Settings) -> Result<()> {
    let mut matcher = open_matcher(store, settings)?;
    let mut history: Vec<ChatTurn> = Vec::new();
    println!("💬 FAQ Assistant ({} FAQs). Try: \"What sizes do you offer?\", \"How long does shipping take?\". :quit to exit.", matcher.len());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("❓ ");
        stdout.flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 { break; }
        match line.trim() {
            "" => {}
            ":quit" | ":q" => break,
            ":clear" => { history.clear(); println!("🗑️  Chat cleared"); }
            ":history" => {
                for (i, turn) in history.iter().enumerate() {
                    let answer = turn.result.as_ref().map_or("no match", |m| m.question.as_str());
                    println!("  {}. {} → {}", i + 1, turn.question, answer);
                }
            }
            ":stats" => print_stats(store, &matcher, Some(history.len()))?,
            ":categories" => print_categories(&matcher),
            ":reload" => match reload(&mut matcher, store, settings) {
                Ok(count) => println!("🔄 Reloaded {} FAQs", count),
                Err(e) => {
                    warn!(error = %e, "reload failed, keeping previous catalog");
                    println!("⚠️  Reload failed: {:#}. Still answering from the previous {} FAQs.", e, matcher.len());
                }
            },
            question => {
                let result = matcher.find_best_match(question);
                print_match(result.as_ref());
                history.push(ChatTurn { question: question.to_string(), result });
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("loading configuration")?;
    let settings = config.settings()?;
    init_tracing(&settings.logging.filter);

    let store_path = match &cli.store { Some(p) => expand_path(p), None => config.store_path()? };
    let store = JsonFaqStore::new(store_path);

    match cli.command {
        Command::Init => init_store(&store)?,
        Command::Ask { question, threshold } => {
            let matcher = open_matcher(&store, &settings)?;
            let result = match threshold {
                Some(t) => matcher.find_best_match_with_threshold(&question, t)?,
                None => matcher.find_best_match(&question),
            };
            println!("❓ {}", question);
            print_match(result.as_ref());
        }
        Command::Chat => chat(&store, &settings)?,
        Command::Categories => print_categories(&open_matcher(&store, &settings)?),
        Command::Category { name } => {
            let matcher = open_matcher(&store, &settings)?;
            let entries = matcher.entries_in_category(&name);
            if entries.is_empty() { println!("No FAQs in category '{}'", name); }
            for (i, e) in entries.iter().enumerate() {
                println!("\n  {}. {}", i + 1, e.question);
                println!("     {}", e.answer);
            }
        }
        Command::Show { id } => {
            match store.find_by_id(id)? {
                Some(e) => println!("#{} [{}] {}\n   {}", e.id, e.category, e.question, e.answer),
                None => println!("No FAQ with id {}", id),
            }
        }
        Command::Stats => print_stats(&store, &open_matcher(&store, &settings)?, None)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn failed_reload_keeps_previous_matcher() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFaqStore::new(tmp.path().join("faqs.json"));
        let settings = Settings::default();
        let mut matcher = open_matcher(&store, &settings).expect("seeded matcher");
        assert_eq!(matcher.len(), SEED_FAQS.len());

        std::fs::write(store.path(), r#"[{"id": 1, "question": "  ", "answer": "x", "category": "General"}]"#).unwrap();
        assert!(reload(&mut matcher, &store, &settings).is_err());
        assert_eq!(matcher.len(), SEED_FAQS.len());
        assert!(matcher.find_best_match("How do I reset my password?").is_some());

        std::fs::write(store.path(), "[]").unwrap();
        assert!(reload(&mut matcher, &store, &settings).is_err());
        assert_eq!(matcher.len(), SEED_FAQS.len());
    }

    #[test]
    fn successful_reload_swaps_in_new_catalog() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFaqStore::new(tmp.path().join("faqs.json"));
        let settings = Settings::default();
        let mut matcher = open_matcher(&store, &settings).expect("seeded matcher");

        std::fs::write(
            store.path(),
            r#"[{"id": 1, "question": "Do you sell hoodies?", "answer": "Yes.", "category": "Products"}]"#,
        )
        .unwrap();
        assert_eq!(reload(&mut matcher, &store, &settings).unwrap(), 1);
        assert_eq!(matcher.find_best_match("hoodie").unwrap().answer, "Yes.");
    }
}
