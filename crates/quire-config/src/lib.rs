//! # Quire Configuration Library
//!
//! Configuration for the quire ecosystem: where instruction documents live
//! inside a workspace folder, which file names qualify, and how the host logs.
//!
//! ## Features
//!
//! - TOML configuration files
//! - Three-tier resolution (defaults, global, workspace)
//! - Typed defaults matching the built-in discovery constants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quire_config::ConfigLoader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load_from_file("quire.toml").await?;
//!     println!("instructions live under {}", config.instructions.subpath);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
mod config;
mod error;
mod loader;
mod resolver;

pub use components::*;
pub use config::*;
pub use error::{ConfigError, ConfigResult};
pub use loader::*;
pub use resolver::*;
