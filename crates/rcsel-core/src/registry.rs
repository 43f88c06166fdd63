//! Process-wide record of the active remote-control layout.
//!
//! The receiver's input renderer reads two paths (image + key mapping) to
//! draw the on-screen remote. Here they live in an explicit registry the
//! host injects and queries, refreshed on startup and after every commit.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::paths::BoxPaths;

/// The image/mapping pair the input renderer should draw from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RcLayout {
    pub image: PathBuf,
    pub mapping: PathBuf,
    /// True when neither a persisted nor a skin pair exists on disk and the
    /// renderer must fall back to its built-in default artwork.
    pub fallback: bool,
}

#[derive(Debug, Default)]
pub struct RemoteLayoutRegistry {
    layout: RwLock<RcLayout>,
}

impl RemoteLayoutRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> RcLayout {
        self.layout.read().unwrap().clone()
    }

    pub fn set(&self, image: PathBuf, mapping: PathBuf) {
        *self.layout.write().unwrap() = RcLayout {
            image,
            mapping,
            fallback: false,
        };
    }

    /// Recomputes the active pair: the persisted override when a choice is
    /// stored and both files exist, else the skin's per-model pair, else the
    /// built-in fallback. Files are only ever used as a pair.
    pub fn refresh(&self, paths: &BoxPaths, choice: &str, model: &str) {
        let mut layout = RcLayout {
            image: paths.persisted_image(),
            mapping: paths.persisted_mapping(),
            fallback: false,
        };
        if choice.is_empty() || !(layout.image.is_file() && layout.mapping.is_file()) {
            layout.image = paths.skin_image(model);
            layout.mapping = paths.skin_mapping(model);
        }
        if !(layout.image.is_file() && layout.mapping.is_file()) {
            layout.fallback = true;
        }
        *self.layout.write().unwrap() = layout;
    }
}
