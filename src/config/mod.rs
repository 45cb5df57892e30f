// src/config/mod.rs
//! Configuration system for symcrypt
//!
//! Central, lazy-loaded global config from TOML with env-var lookup.

pub use app::{load, load_from, parse, Config, Logging, Output, Prompt};

mod app;
mod defaults;
