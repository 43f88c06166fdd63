//! CLI for the remote-control layout selector.
//!
//! Stands in for the receiver's settings screen: every subcommand maps to one
//! of the screen's operations (browse, preview, save, reset).

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rcsel_core::config;
use rcsel_core::paths::{self, BoxPaths};
use rcsel_core::registry::RemoteLayoutRegistry;

use commands::{run_apply, run_list, run_preview, run_status};

/// Top-level CLI for the remote-control layout selector.
#[derive(Debug, Parser)]
#[command(name = "rcsel")]
#[command(about = "Pick an alternate remote-control layout for the receiver", long_about = None)]
pub struct Cli {
    /// The device's native remote model. Defaults to the value the receiver
    /// reports via /proc/stb/info/model.
    #[arg(long, global = true, value_name = "MODEL")]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the remote-control variants the catalog offers.
    List,

    /// Show the stored choice and the layout the renderer is using.
    Status,

    /// Download (if needed) and print the preview image for a variant.
    Preview {
        /// Variant name as listed by `rcsel list`.
        variant: String,
    },

    /// Validate and persist a variant's image and key mapping.
    Apply {
        /// Variant name as listed by `rcsel list`.
        variant: String,
    },

    /// Return to the device's built-in remote layout.
    Reset,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        let config_file = config::config_path()?;
        let model = cli
            .model
            .or_else(paths::detect_rc_model)
            .unwrap_or_else(|| "unknown".to_string());
        let box_paths = BoxPaths::receiver_defaults();

        // Same as the plugin-load refresh on the receiver.
        let registry = RemoteLayoutRegistry::new();
        registry.refresh(&box_paths, &cfg.remote, &model);

        match cli.command {
            CliCommand::List => run_list(&cfg)?,
            CliCommand::Status => run_status(&cfg, &registry),
            CliCommand::Preview { variant } => run_preview(&box_paths, &cfg, &variant, &model)?,
            CliCommand::Apply { variant } => {
                run_apply(&box_paths, &mut cfg, &config_file, &registry, &variant, &model)?
            }
            CliCommand::Reset => {
                let selection = model.clone();
                run_apply(&box_paths, &mut cfg, &config_file, &registry, &selection, &model)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
