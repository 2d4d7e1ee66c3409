//! Reading an events file from disk.
//!
//! Selecting a new file supersedes any read still in flight: [`Importer::begin`]
//! cancels the previous token before handing out a fresh one.

use std::path::Path;
use std::time::Instant;

use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use super::validate::parse_event_json;
use crate::error::{AppError, AppResult};
use crate::models::EventRecord;
use crate::utils::logging::log_import;

/// Tracks the in-flight import so a newer selection can supersede it.
#[derive(Debug, Default)]
pub struct Importer {
    current: Option<CancellationToken>,
}

impl Importer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the previous import, if any, and return the token for a new one.
    pub fn begin(&mut self) -> CancellationToken {
        if let Some(previous) = self.current.take() {
            if !previous.is_cancelled() {
                debug!("Superseding in-flight import");
                previous.cancel();
            }
        }
        let token = CancellationToken::new();
        self.current = Some(token.clone());
        token
    }

    /// Cancel the current import without starting another.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.current.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Start a new import of `path`, superseding any previous one.
    pub async fn import(&mut self, path: impl AsRef<Path>) -> AppResult<Vec<EventRecord>> {
        let token = self.begin();
        let result = import_file(path, token).await;
        self.current = None;
        result
    }
}

/// Only `.json` files are accepted.
pub fn check_file_type(path: &Path) -> AppResult<()> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(())
    } else {
        Err(AppError::invalid_file_type(format!(
            "'{}' is not a .json file",
            path.display()
        )))
    }
}

/// Read and validate the events in `path` unless `token` is cancelled first.
pub async fn import_file(
    path: impl AsRef<Path>,
    token: CancellationToken,
) -> AppResult<Vec<EventRecord>> {
    let path = path.as_ref();
    check_file_type(path)?;

    let started = Instant::now();
    let text = tokio::select! {
        biased;
        _ = token.cancelled() => {
            info!("Import of {} cancelled", path.display());
            return Err(AppError::ImportCancelled);
        }
        result = tokio::fs::read_to_string(path) => result.map_err(|e| {
            warn!("Error reading file {}: {}", path.display(), e);
            AppError::Io(e)
        })?,
    };

    if token.is_cancelled() {
        info!("Import of {} superseded after read", path.display());
        return Err(AppError::ImportCancelled);
    }

    let events = parse_event_json(&text)?;
    log_import(&path.display().to_string(), events.len(), started.elapsed().as_millis() as u64);
    Ok(events)
}
