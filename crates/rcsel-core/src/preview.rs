//! Best-effort background download of a preview image.
//!
//! One worker thread per spawn, one GET, no retries and no queueing. The
//! handle carries a cancel token: cancelling does not interrupt the transfer,
//! it suppresses the completion callback, so a screen can tear down without
//! a stray callback firing into destroyed widgets afterwards.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::fetch::http_get;

/// Handle to one in-flight preview download.
pub struct PreviewHandle {
    cancelled: Arc<AtomicBool>,
    worker: thread::JoinHandle<()>,
}

impl PreviewHandle {
    /// Suppresses the completion callback. Call on screen teardown; the
    /// worker finishes its transfer and drops the result.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Waits for the worker to finish. Dropping the handle without joining
    /// simply detaches the worker.
    pub fn join(self) {
        let _ = self.worker.join();
    }
}

/// Starts a background download of `url` into `dest` and returns a handle.
/// `on_done` runs on the worker thread with `Ok(dest)` or the fetch/write
/// error, unless the handle was cancelled first.
pub fn spawn<F>(url: String, dest: PathBuf, on_done: F) -> PreviewHandle
where
    F: FnOnce(Result<PathBuf>) + Send + 'static,
{
    let cancelled = Arc::new(AtomicBool::new(false));
    let token = Arc::clone(&cancelled);
    let worker = thread::spawn(move || {
        let result = download(&url, &dest);
        if token.load(Ordering::Relaxed) {
            tracing::debug!("preview download of {} cancelled, result dropped", url);
            return;
        }
        if let Err(err) = &result {
            tracing::warn!("preview download of {} failed: {:#}", url, err);
        }
        on_done(result);
    });
    PreviewHandle { cancelled, worker }
}

fn download(url: &str, dest: &Path) -> Result<PathBuf> {
    let body = http_get(url)?;
    std::fs::write(dest, &body).with_context(|| format!("writing {}", dest.display()))?;
    Ok(dest.to_path_buf())
}
