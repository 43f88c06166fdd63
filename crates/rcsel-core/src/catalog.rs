//! Remote catalog: the hosting API's JSON directory listings.
//!
//! The top-level listing enumerates remote-control variants (one directory
//! per variant); each variant's own listing reports the byte sizes of its
//! `rc.png` and `rcpositions.xml`, which the commit stage validates against.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::fetch::http_get;
use crate::paths::{RC_IMAGE, RC_MAPPING};

/// One entry of a directory listing; only the fields we consume.
#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub size: u64,
}

/// Byte sizes the catalog reports for a variant's asset pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSizes {
    pub image: u64,
    pub mapping: u64,
}

/// Parses the top-level listing into variant name → metadata URL.
/// Only `dir` entries with both a name and a URL count.
pub fn parse_catalog(bytes: &[u8]) -> Result<BTreeMap<String, String>> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_slice(bytes).context("catalog is not a JSON directory listing")?;
    let mut remotes = BTreeMap::new();
    for entry in entries {
        if entry.kind == "dir" && !entry.name.is_empty() && !entry.url.is_empty() {
            remotes.insert(entry.name, entry.url);
        }
    }
    Ok(remotes)
}

/// Fetches the variant catalog. Any network or parse failure degrades to an
/// empty catalog so the screen can still open with no choices on offer.
pub fn fetch_catalog(catalog_url: &str) -> BTreeMap<String, String> {
    match http_get(catalog_url).and_then(|body| parse_catalog(&body)) {
        Ok(remotes) => remotes,
        Err(err) => {
            tracing::warn!("catalog fetch from {} failed: {:#}", catalog_url, err);
            BTreeMap::new()
        }
    }
}

/// Extracts the reported sizes for the image and mapping files from a
/// variant's listing. Both entries must be present.
pub fn parse_variant_sizes(bytes: &[u8]) -> Result<AssetSizes> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_slice(bytes).context("variant listing is not a JSON directory listing")?;
    let mut image = None;
    let mut mapping = None;
    for entry in &entries {
        match entry.name.as_str() {
            RC_IMAGE => image = Some(entry.size),
            RC_MAPPING => mapping = Some(entry.size),
            _ => {}
        }
    }
    match (image, mapping) {
        (Some(image), Some(mapping)) => Ok(AssetSizes { image, mapping }),
        _ => anyhow::bail!("variant listing lacks {} or {}", RC_IMAGE, RC_MAPPING),
    }
}

/// Fetches a variant's metadata listing and returns the expected asset sizes.
pub fn fetch_variant_sizes(metadata_url: &str) -> Result<AssetSizes> {
    let body = http_get(metadata_url)
        .with_context(|| format!("fetching variant listing {}", metadata_url))?;
    parse_variant_sizes(&body)
}
