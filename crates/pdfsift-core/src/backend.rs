use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to enumerate pages: {0}")]
    Pages(String),
    #[error("failed to extract text from page {number}: {message}")]
    Page { number: u32, message: String },
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("library panicked: {0}")]
    Panicked(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A strategy that yields text one page at a time.
///
/// Opening and per-page extraction are separate steps so the runner can
/// print each page as soon as it is available and decide, per strategy,
/// whether a page failure aborts the attempt.
pub trait PagedBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PagedDocument>, BackendError>;
}

/// An opened document produced by a [`PagedBackend`].
pub trait PagedDocument {
    /// Page numbers in reading order. Numbering starts at 1.
    fn page_numbers(&self) -> Result<Vec<u32>, BackendError>;

    /// Text of a single page. `None` means the library returned nothing.
    fn page_text(&self, number: u32) -> Result<Option<String>, BackendError>;
}

/// A strategy that yields the whole document as one string.
pub trait DocumentBackend {
    fn extract_document(&self, path: &Path) -> Result<Option<String>, BackendError>;
}
