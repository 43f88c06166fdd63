//! Local filesystem layout for remote-control assets.
//!
//! Three roots matter: the receiver's configuration directory (persisted
//! override pair), the skin directory (per-model built-in pairs), and a
//! volatile temp directory (preview download cache).

use std::fs;
use std::path::PathBuf;

/// Image file name, both remotely and locally.
pub const RC_IMAGE: &str = "rc.png";
/// Key-position mapping file name, both remotely and locally.
pub const RC_MAPPING: &str = "rcpositions.xml";
/// Subdirectory used for the persisted pair and for the temp cache.
pub const SELECTION_DIR: &str = "RemoteControlSelection";

/// Directory roots handed to us by the receiver environment.
#[derive(Debug, Clone)]
pub struct BoxPaths {
    pub config_dir: PathBuf,
    pub skin_dir: PathBuf,
    pub temp_dir: PathBuf,
}

impl BoxPaths {
    pub fn new(
        config_dir: impl Into<PathBuf>,
        skin_dir: impl Into<PathBuf>,
        temp_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config_dir: config_dir.into(),
            skin_dir: skin_dir.into(),
            temp_dir: temp_dir.into(),
        }
    }

    /// Stock locations on the receiver.
    pub fn receiver_defaults() -> Self {
        Self::new("/etc/enigma2", "/usr/share/enigma2", "/var/volatile/tmp")
    }

    /// Directory holding the committed override pair.
    pub fn persisted_dir(&self) -> PathBuf {
        self.config_dir.join(SELECTION_DIR)
    }

    pub fn persisted_image(&self) -> PathBuf {
        self.persisted_dir().join(RC_IMAGE)
    }

    pub fn persisted_mapping(&self) -> PathBuf {
        self.persisted_dir().join(RC_MAPPING)
    }

    /// Root of the preview cache; removed wholesale when the screen closes.
    pub fn temp_root(&self) -> PathBuf {
        self.temp_dir.join(SELECTION_DIR)
    }

    /// Per-variant cache directory; variants never share files.
    pub fn temp_variant_dir(&self, variant: &str) -> PathBuf {
        self.temp_root().join(variant)
    }

    pub fn temp_image(&self, variant: &str) -> PathBuf {
        self.temp_variant_dir(variant).join(RC_IMAGE)
    }

    /// The skin's built-in directory for one remote model.
    pub fn skin_model_dir(&self, model: &str) -> PathBuf {
        self.skin_dir.join("rc_models").join(model)
    }

    pub fn skin_image(&self, model: &str) -> PathBuf {
        self.skin_model_dir(model).join(RC_IMAGE)
    }

    pub fn skin_mapping(&self, model: &str) -> PathBuf {
        self.skin_model_dir(model).join(RC_MAPPING)
    }
}

/// Reads the device's native remote model from the STB proc interface.
/// Returns None on anything that is not a receiver (tests, dev machines).
pub fn detect_rc_model() -> Option<String> {
    let model = fs::read_to_string("/proc/stb/info/model").ok()?;
    let model = model.trim();
    if model.is_empty() {
        None
    } else {
        Some(model.to_string())
    }
}
