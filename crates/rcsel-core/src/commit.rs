//! Commit stage: validate and persist a variant's asset pair, or revert to
//! the device default.
//!
//! The persisted image and mapping exist as a pair or not at all. Both
//! payloads are fetched and length-checked against the catalog's reported
//! sizes before either file is touched; a failed validation leaves the prior
//! choice and the prior pair exactly as they were.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::catalog;
use crate::config::RcselConfig;
use crate::fetch::http_get;
use crate::paths::{BoxPaths, RC_IMAGE, RC_MAPPING};
use crate::registry::RemoteLayoutRegistry;

/// Why a commit was rejected. Validation failures are deliberate hard stops,
/// not best-effort fallthroughs.
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    #[error("variant '{0}' is not in the catalog")]
    UnknownVariant(String),
    #[error("fetching {name}: {cause:#}")]
    Fetch {
        name: String,
        cause: anyhow::Error,
    },
    #[error("{name}: catalog reports {expected} bytes, fetched {actual}")]
    SizeMismatch {
        name: String,
        expected: u64,
        actual: u64,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("saving configuration: {0:#}")]
    Config(anyhow::Error),
}

/// What a successful commit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The pair was validated and written; `remote` is the stored choice.
    Committed { remote: String },
    /// The selection was the device default; the override is gone.
    Cleared,
}

/// Applies the highlighted `selection`.
///
/// A selection other than the device's native `model` runs the validating
/// path: metadata sizes are fetched from the variant's catalog entry, the
/// image comes from the preview cache when present (else a synchronous GET),
/// the mapping is always fetched fresh, and both byte lengths must match the
/// reported sizes before the old pair is replaced. Selecting the native model
/// clears the stored choice and removes the override directory.
///
/// Either way the preview cache is dropped, the choice is saved to
/// `config_file`, and `registry` is refreshed.
pub fn apply(
    paths: &BoxPaths,
    cfg: &mut RcselConfig,
    config_file: &Path,
    registry: &RemoteLayoutRegistry,
    remotes: &BTreeMap<String, String>,
    selection: &str,
    model: &str,
) -> Result<CommitOutcome, CommitError> {
    let outcome = if selection != model {
        let metadata_url = remotes
            .get(selection)
            .ok_or_else(|| CommitError::UnknownVariant(selection.to_string()))?;
        let sizes = catalog::fetch_variant_sizes(metadata_url).map_err(|cause| {
            CommitError::Fetch {
                name: "variant listing".to_string(),
                cause,
            }
        })?;

        let image = cached_or_fetched_image(paths, cfg, selection)?;
        let mapping = fetch_asset(cfg, selection, RC_MAPPING)?;
        check_size(RC_IMAGE, sizes.image, &image)?;
        check_size(RC_MAPPING, sizes.mapping, &mapping)?;

        write_pair(paths, &image, &mapping)?;
        cfg.remote = selection.to_string();
        tracing::info!("committed remote layout '{}'", selection);
        CommitOutcome::Committed {
            remote: selection.to_string(),
        }
    } else {
        cfg.remote.clear();
        let dir = paths.persisted_dir();
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
        }
        tracing::info!("reverted to the device default remote layout");
        CommitOutcome::Cleared
    };

    cfg.save_to(config_file).map_err(CommitError::Config)?;
    cleanup_temp(paths)?;
    registry.refresh(paths, &cfg.remote, model);
    Ok(outcome)
}

/// The files may have changed upstream, so the image is re-read every save:
/// from the preview cache when a preview already fetched it, else over HTTP.
fn cached_or_fetched_image(
    paths: &BoxPaths,
    cfg: &RcselConfig,
    variant: &str,
) -> Result<Vec<u8>, CommitError> {
    let cached = paths.temp_image(variant);
    if cached.is_file() {
        return Ok(fs::read(&cached)?);
    }
    fetch_asset(cfg, variant, RC_IMAGE)
}

fn fetch_asset(cfg: &RcselConfig, variant: &str, name: &str) -> Result<Vec<u8>, CommitError> {
    http_get(&cfg.asset_url(variant, name)).map_err(|cause| CommitError::Fetch {
        name: name.to_string(),
        cause,
    })
}

fn check_size(name: &str, expected: u64, bytes: &[u8]) -> Result<(), CommitError> {
    let actual = bytes.len() as u64;
    if actual != expected {
        return Err(CommitError::SizeMismatch {
            name: name.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}

/// Replaces the persisted pair. Only reached after both payloads validated.
fn write_pair(paths: &BoxPaths, image: &[u8], mapping: &[u8]) -> io::Result<()> {
    fs::create_dir_all(paths.persisted_dir())?;
    let image_path = paths.persisted_image();
    let mapping_path = paths.persisted_mapping();
    if image_path.exists() {
        fs::remove_file(&image_path)?;
    }
    if mapping_path.exists() {
        fs::remove_file(&mapping_path)?;
    }
    fs::write(&image_path, image)?;
    fs::write(&mapping_path, mapping)?;
    Ok(())
}

/// Drops the whole preview cache. Safe to call when it is already gone.
pub fn cleanup_temp(paths: &BoxPaths) -> io::Result<()> {
    match fs::remove_dir_all(paths.temp_root()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_paths(dir: &std::path::Path) -> BoxPaths {
        BoxPaths::new(dir.join("config"), dir.join("skin"), dir.join("tmp"))
    }

    #[test]
    fn cleanup_temp_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let paths = test_paths(dir.path());
        fs::create_dir_all(paths.temp_variant_dir("vu_zero")).unwrap();
        fs::write(paths.temp_image("vu_zero"), b"png").unwrap();

        cleanup_temp(&paths).unwrap();
        assert!(!paths.temp_root().exists());
        // Second run with nothing left must not error.
        cleanup_temp(&paths).unwrap();
    }

    #[test]
    fn check_size_rejects_mismatch() {
        assert!(check_size("rc.png", 4, b"abcd").is_ok());
        let err = check_size("rc.png", 5, b"abcd").unwrap_err();
        match err {
            CommitError::SizeMismatch {
                expected, actual, ..
            } => {
                assert_eq!(expected, 5);
                assert_eq!(actual, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn write_pair_replaces_previous_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = test_paths(dir.path());
        write_pair(&paths, b"old-image", b"old-map").unwrap();
        write_pair(&paths, b"new-image", b"new-map").unwrap();
        assert_eq!(fs::read(paths.persisted_image()).unwrap(), b"new-image");
        assert_eq!(fs::read(paths.persisted_mapping()).unwrap(), b"new-map");
    }

    #[test]
    fn revert_removes_override_and_clears_choice() {
        let dir = tempfile::tempdir().unwrap();
        let paths = test_paths(dir.path());
        write_pair(&paths, b"image", b"map").unwrap();

        let mut cfg = RcselConfig {
            remote: "vu_zero".to_string(),
            ..RcselConfig::default()
        };
        let config_file = dir.path().join("config.toml");
        let registry = RemoteLayoutRegistry::new();
        let remotes = BTreeMap::new();

        let outcome = apply(
            &paths,
            &mut cfg,
            &config_file,
            &registry,
            &remotes,
            "dm920",
            "dm920",
        )
        .unwrap();
        assert_eq!(outcome, CommitOutcome::Cleared);
        assert!(!paths.persisted_dir().exists());
        assert!(cfg.is_default_choice());

        let stored = RcselConfig::load_from(&config_file).unwrap();
        assert!(stored.is_default_choice());
        assert!(registry.get().fallback);
    }

    #[test]
    fn unknown_variant_is_rejected_before_any_io() {
        let dir = tempfile::tempdir().unwrap();
        let paths = test_paths(dir.path());
        let mut cfg = RcselConfig::default();
        let config_file = dir.path().join("config.toml");
        let registry = RemoteLayoutRegistry::new();
        let remotes = BTreeMap::new();

        let err = apply(
            &paths,
            &mut cfg,
            &config_file,
            &registry,
            &remotes,
            "vu_zero",
            "dm920",
        )
        .unwrap_err();
        assert!(matches!(err, CommitError::UnknownVariant(_)));
        assert!(!paths.persisted_dir().exists());
        assert!(!config_file.exists());
    }
}
