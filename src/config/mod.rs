//! Configuration loading and management for the shift engine.
//!
//! This module loads the shift template catalog from YAML files and
//! validates each template against its clock times.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ips_virtual").unwrap();
//! println!("Loaded catalog: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CatalogConfig, CatalogMetadata, TemplatesConfig};
