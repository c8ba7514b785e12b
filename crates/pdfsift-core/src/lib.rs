use std::path::{Path, PathBuf};

pub mod backend;
#[cfg(feature = "test-support")]
pub mod fixture;
#[cfg(any(test, feature = "test-support"))]
pub mod mock;
pub mod runner;
pub mod strategy;

pub use backend::{BackendError, DocumentBackend, PagedBackend, PagedDocument};
pub use runner::{Attempt, ExtractionRunner, Outcome, RunOutcome};
pub use strategy::{PageFailurePolicy, Strategy, StrategyId, StrategyKind};

/// The one input path, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "assets/docs/registration.pdf";

/// Printed in place of text that came back empty or absent.
pub const PLACEHOLDER: &str = "[NO_TEXT]";

/// Printed alone when the input file does not exist.
pub const MISSING_MARKER: &str = "MISSING";

/// The single file a run extracts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDocument {
    path: PathBuf,
}

impl InputDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Default for InputDocument {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_PATH)
    }
}
