//! Pure-Rust extraction strategies.
//!
//! - [`LopdfBackend`]: page-segmented, via `lopdf`'s per-page text extraction.
//! - [`PdfExtractBackend`]: whole document, via `pdf-extract`'s layout-aware output.

pub mod lopdf_backend;
pub mod pdf_extract_backend;

pub use lopdf_backend::LopdfBackend;
pub use pdf_extract_backend::PdfExtractBackend;
