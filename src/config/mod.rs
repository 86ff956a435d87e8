//! Configuration loading and management for the timeclock engine.
//!
//! This module provides functionality to load NIS contribution tables
//! from YAML files, one file per effective year.
//!
//! # Example
//!
//! ```no_run
//! use timeclock_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/nis").unwrap();
//! println!("2026 brackets: {}", config.table_for_year(2026).unwrap().brackets().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::NisConfig;
