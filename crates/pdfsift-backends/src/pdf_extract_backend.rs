use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use gag::Gag;

use pdfsift_core::{BackendError, DocumentBackend};

/// `pdf-extract`-based implementation of [`DocumentBackend`].
///
/// Produces one string for the whole document, without page separators.
///
/// pdf-extract reports some font problems with `println!`. Process stdout
/// is gagged for the duration of the call so those lines never mix with
/// extracted text.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentBackend for PdfExtractBackend {
    fn extract_document(&self, path: &Path) -> Result<Option<String>, BackendError> {
        // The handle is closed at the end of this block on every path.
        let bytes = {
            let mut file = File::open(path)?;
            let mut bytes = Vec::new();
            file.read_to_end(&mut bytes)?;
            bytes
        };
        tracing::debug!(path = %path.display(), len = bytes.len(), "pdf-extract read document");

        let text = quiet_stdout(|| pdf_extract::extract_text_from_mem(&bytes))
            .map_err(|e| BackendError::Extraction(e.to_string()))?;
        Ok(Some(text))
    }
}

/// Run `f` with fd 1 redirected away. The gag is released on unwind too.
fn quiet_stdout<T>(f: impl FnOnce() -> T) -> T {
    // Anything already buffered belongs to the caller and must get out first.
    let _ = std::io::stdout().flush();
    let gag = match Gag::stdout() {
        Ok(gag) => Some(gag),
        Err(e) => {
            tracing::debug!(error = %e, "could not gag stdout, library output may leak");
            None
        }
    };
    let result = f();
    // Drain the library's own unterminated `print!` output into the gag.
    let _ = std::io::stdout().flush();
    drop(gag);
    result
}
