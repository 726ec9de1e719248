//! Command-line argument parsing for the orb generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orb icosphere generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orb-gen", about = "Icosphere mesh generator")]
pub struct CliArgs {
    /// Subdivision order (0-10).
    #[arg(long)]
    pub order: Option<u32>,

    /// Generate texture coordinates.
    #[arg(long)]
    pub uv: Option<bool>,

    /// Sphere radius.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Seam detection threshold in texture space (0-1).
    #[arg(long)]
    pub seam_threshold: Option<f32>,

    /// Write the mesh as JSON to this file.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Keep running and regenerate whenever the config file changes.
    #[arg(long)]
    pub watch: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(order) = args.order {
            self.mesh.order = order;
        }
        if let Some(uv) = args.uv {
            self.mesh.with_uv = uv;
        }
        if let Some(radius) = args.radius {
            self.mesh.radius = radius;
        }
        if let Some(threshold) = args.seam_threshold {
            self.mesh.seam_threshold = threshold;
        }
        if let Some(ref path) = args.output {
            self.export.path = Some(path.clone());
        }
        if let Some(pretty) = args.pretty {
            self.export.pretty = pretty;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
