use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pdfsift_core::{BackendError, PagedBackend, PagedDocument};

/// MuPDF-based implementation of [`PagedBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0 and links the MuPDF C library) from the rest of the
/// workspace.
///
/// Any failure while opening, counting, or reading a page is reported as an
/// error; the runner decides whether that aborts the attempt.
#[derive(Debug, Default, Clone, Copy)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PagedBackend for MupdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PagedDocument>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::Open("invalid path encoding".into()))?;

        let document = Document::open(path_str).map_err(|e| BackendError::Open(e.to_string()))?;
        tracing::debug!(path = %path.display(), "mupdf opened document");

        Ok(Box::new(MupdfDocument { document }))
    }
}

struct MupdfDocument {
    document: Document,
}

impl PagedDocument for MupdfDocument {
    fn page_numbers(&self) -> Result<Vec<u32>, BackendError> {
        let count = self
            .document
            .page_count()
            .map_err(|e| BackendError::Pages(e.to_string()))?;
        Ok((1..=count.max(0) as u32).collect())
    }

    fn page_text(&self, number: u32) -> Result<Option<String>, BackendError> {
        let page_error = |e: mupdf::Error| BackendError::Page {
            number,
            message: e.to_string(),
        };

        let page = self
            .document
            .load_page(number as i32 - 1)
            .map_err(page_error)?;
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(page_error)?;

        // Block/line iteration, one output line per text line. The runner
        // terminates the page body, so no trailing newline here.
        let mut lines = Vec::new();
        for block in text_page.blocks() {
            for line in block.lines() {
                let line_text: String = line
                    .chars()
                    .map(|c| c.char().unwrap_or('\u{FFFD}'))
                    .collect();
                lines.push(line_text);
            }
        }

        Ok(Some(lines.join("\n")))
    }
}
