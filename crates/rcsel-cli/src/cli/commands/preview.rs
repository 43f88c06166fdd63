//! `rcsel preview <variant>` – resolve or download the preview image.

use anyhow::{Context, Result};
use rcsel_core::config::RcselConfig;
use rcsel_core::paths::BoxPaths;
use rcsel_core::preview;
use rcsel_core::resolver::{self, PreviewSource};
use std::sync::mpsc;

pub fn run_preview(paths: &BoxPaths, cfg: &RcselConfig, variant: &str, model: &str) -> Result<()> {
    match resolver::resolve_preview(paths, cfg, variant, model)? {
        PreviewSource::Skin(path) => println!("skin default: {}", path.display()),
        PreviewSource::Persisted(path) => println!("committed copy: {}", path.display()),
        PreviewSource::Cached(path) => println!("cached preview: {}", path.display()),
        PreviewSource::Download { url, dest } => {
            tracing::debug!("downloading preview from {}", url);
            let (tx, rx) = mpsc::channel();
            let handle = preview::spawn(url, dest, move |result| {
                let _ = tx.send(result);
            });
            let result = rx.recv().context("preview worker vanished")?;
            handle.join();
            let path = result?;
            println!("downloaded: {}", path.display());
        }
    }
    Ok(())
}
