//! Configuration for the orb icosphere generator.
//!
//! Settings persist to disk as a RON file, can be overridden from the command
//! line via clap, and can be re-read to detect changes while the generator runs.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, ExportConfig, MeshConfig};
pub use error::ConfigError;
