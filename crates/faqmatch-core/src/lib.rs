//! Shared FAQ domain types, error taxonomy, configuration and storage.
//!
//! Uses Figment to merge defaults + `config.toml` + `config.<env>.toml` + `FAQ_*`
//! env vars. Stores are plain JSON files or in-memory vectors.
#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod config;
pub mod error;
pub mod seed;
pub mod store;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use types::{CategoryEntry, FaqEntry, FaqId, MatchResult, DEFAULT_THRESHOLD};
