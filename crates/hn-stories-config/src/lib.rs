//! Configuration and persistence for hacker-stories
//!
//! This crate provides:
//! - File path utilities for config and cache files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - Key-value storage and the persistent value mirror built on it

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod persistent_value;
pub mod storage;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
pub use paths::{cache_dir, config_dir, storage_path};
pub use persistent_value::PersistentValue;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
