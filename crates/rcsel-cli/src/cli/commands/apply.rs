//! `rcsel apply <variant>` / `rcsel reset` – the commit stage.

use anyhow::Result;
use rcsel_core::catalog;
use rcsel_core::commit::{self, CommitOutcome};
use rcsel_core::config::RcselConfig;
use rcsel_core::paths::BoxPaths;
use rcsel_core::registry::RemoteLayoutRegistry;
use std::path::Path;

pub fn run_apply(
    paths: &BoxPaths,
    cfg: &mut RcselConfig,
    config_file: &Path,
    registry: &RemoteLayoutRegistry,
    variant: &str,
    model: &str,
) -> Result<()> {
    let remotes = catalog::fetch_catalog(&cfg.catalog_url);
    match commit::apply(paths, cfg, config_file, registry, &remotes, variant, model)? {
        CommitOutcome::Committed { remote } => {
            println!("Now using remote layout '{remote}'.");
        }
        CommitOutcome::Cleared => {
            println!("Restored the device's built-in remote layout.");
        }
    }
    Ok(())
}
