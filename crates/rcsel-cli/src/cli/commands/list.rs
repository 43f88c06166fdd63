//! `rcsel list` – print the catalog of remote-control variants.

use anyhow::Result;
use rcsel_core::catalog;
use rcsel_core::config::RcselConfig;

pub fn run_list(cfg: &RcselConfig) -> Result<()> {
    let remotes = catalog::fetch_catalog(&cfg.catalog_url);
    if remotes.is_empty() {
        println!("No remote-control variants available.");
        return Ok(());
    }
    for name in remotes.keys() {
        if *name == cfg.remote {
            println!("{name} (current)");
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
