//! Decides which local image to show for the highlighted variant.
//!
//! Preference order: the skin's built-in image when the selection is the
//! device's own model, then the already-committed copy, then the preview
//! cache, and only then a fresh download. Local copies we already trust
//! are never re-fetched.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::config::RcselConfig;
use crate::paths::{BoxPaths, RC_IMAGE};

/// Where the preview image for the highlighted variant comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    /// The skin ships this image for the device's own model.
    Skin(PathBuf),
    /// The committed pair in the config dir already covers this variant.
    Persisted(PathBuf),
    /// A prior preview already downloaded this variant's image.
    Cached(PathBuf),
    /// Nothing local; fetch `url` into `dest` in the background.
    Download { url: String, dest: PathBuf },
}

impl PreviewSource {
    /// The local path to render, if one exists already.
    pub fn local_path(&self) -> Option<&PathBuf> {
        match self {
            PreviewSource::Skin(p) | PreviewSource::Persisted(p) | PreviewSource::Cached(p) => {
                Some(p)
            }
            PreviewSource::Download { .. } => None,
        }
    }
}

/// Resolves the preview source for `selection`. Creates the variant's temp
/// directory when the cache is consulted, so a follow-up download has
/// somewhere to land.
pub fn resolve_preview(
    paths: &BoxPaths,
    cfg: &RcselConfig,
    selection: &str,
    model: &str,
) -> Result<PreviewSource> {
    if selection == model {
        let skin = paths.skin_image(model);
        if skin.is_file() {
            return Ok(PreviewSource::Skin(skin));
        }
    }
    if !cfg.remote.is_empty() && selection == cfg.remote {
        let persisted = paths.persisted_image();
        if persisted.is_file() {
            return Ok(PreviewSource::Persisted(persisted));
        }
    }
    fs::create_dir_all(paths.temp_variant_dir(selection))?;
    let cached = paths.temp_image(selection);
    if cached.is_file() {
        Ok(PreviewSource::Cached(cached))
    } else {
        Ok(PreviewSource::Download {
            url: cfg.asset_url(selection, RC_IMAGE),
            dest: cached,
        })
    }
}
