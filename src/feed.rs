//! Trial loading with cancellation.
//!
//! A fetch runs under a [`FetchToken`]. Aborting its [`AbortHandle`] (for
//! example when the chart is torn down) makes any later result disappear:
//! [`FetchToken::deliver`] yields `None` and the caller skips the update.
//!
//! # Example
//!
//! ```
//! use trialviz::feed::fetch_scope;
//!
//! let (token, handle) = fetch_scope();
//! handle.abort();
//! assert!(token.deliver(Ok(vec![1, 2, 3])).is_none());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::trial::Trial;

/// Create a linked token/handle pair for one fetch.
pub fn fetch_scope() -> (FetchToken, AbortHandle) {
    let aborted = Arc::new(AtomicBool::new(false));
    (FetchToken { aborted: Arc::clone(&aborted) }, AbortHandle { aborted })
}

/// Held by the code doing the fetch.
#[derive(Debug, Clone)]
pub struct FetchToken {
    aborted: Arc<AtomicBool>,
}

impl FetchToken {
    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }

    /// Fail with `AbortedFetch` once the fetch has been aborted.
    pub fn check(&self) -> Result<()> {
        if self.is_aborted() {
            Err(ChartError::AbortedFetch)
        } else {
            Ok(())
        }
    }

    /// Hand a finished fetch to the caller.
    ///
    /// Returns `None` when the fetch was aborted, either before or during the
    /// load. Other errors pass through.
    pub fn deliver<T>(&self, result: Result<T>) -> Option<Result<T>> {
        if self.is_aborted() {
            log::debug!("discarding result of aborted fetch");
            return None;
        }
        match result {
            Err(ChartError::AbortedFetch) => None,
            other => Some(other),
        }
    }
}

/// Held by the owner of the fetch; aborting is idempotent.
#[derive(Debug, Clone)]
pub struct AbortHandle {
    aborted: Arc<AtomicBool>,
}

impl AbortHandle {
    pub fn abort(&self) {
        if !self.aborted.swap(true, Ordering::AcqRel) {
            log::debug!("fetch aborted");
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::Acquire)
    }
}

/// Something that can produce the current trial list.
pub trait TrialSource {
    fn load(&self, token: &FetchToken) -> Result<Vec<Trial>>;
}

/// Load from `source` and deliver through `token`.
pub fn fetch<S: TrialSource + ?Sized>(source: &S, token: &FetchToken) -> Option<Result<Vec<Trial>>> {
    token.deliver(source.load(token))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TrialDocument {
    List(Vec<Trial>),
    Wrapped { trials: Vec<Trial> },
}

/// Parse a JSON array of trials or an object with a `trials` array.
pub fn parse_trials(json: &str) -> Result<Vec<Trial>> {
    let trials = match serde_json::from_str(json)? {
        TrialDocument::List(trials) | TrialDocument::Wrapped { trials } => trials,
    };
    Ok(trials)
}

/// Trials stored as JSON on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TrialSource for JsonFileSource {
    fn load(&self, token: &FetchToken) -> Result<Vec<Trial>> {
        token.check()?;
        let json =
            fs::read_to_string(&self.path).map_err(|e| ChartError::read_failed(&self.path, e))?;
        token.check()?;
        let trials = parse_trials(&json)?;
        log::info!("loaded {} trials from {}", trials.len(), self.path.display());
        Ok(trials)
    }
}
