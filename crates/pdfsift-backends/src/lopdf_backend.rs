use std::path::Path;

use lopdf::Document;

use pdfsift_core::{BackendError, PagedBackend, PagedDocument};

/// `lopdf`-based implementation of [`PagedBackend`].
///
/// Loading the whole object graph happens in [`open`](PagedBackend::open);
/// content streams are decoded lazily, one page per
/// [`page_text`](PagedDocument::page_text) call.
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PagedBackend for LopdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PagedDocument>, BackendError> {
        let document = Document::load(path).map_err(|e| BackendError::Open(e.to_string()))?;
        tracing::debug!(
            path = %path.display(),
            pages = document.get_pages().len(),
            "lopdf loaded document"
        );
        Ok(Box::new(LopdfDocument { document }))
    }
}

struct LopdfDocument {
    document: Document,
}

impl PagedDocument for LopdfDocument {
    fn page_numbers(&self) -> Result<Vec<u32>, BackendError> {
        // BTreeMap keyed by 1-based page number, already in order
        Ok(self.document.get_pages().into_keys().collect())
    }

    fn page_text(&self, number: u32) -> Result<Option<String>, BackendError> {
        self.document
            .extract_text(&[number])
            .map(Some)
            .map_err(|e| BackendError::Page {
                number,
                message: e.to_string(),
            })
    }
}
