use pdfsift_backends::{LopdfBackend, PdfExtractBackend};
use pdfsift_core::{ExtractionRunner, PageFailurePolicy, Strategy, StrategyId};
use pdfsift_mupdf::MupdfBackend;

/// The production chain: MuPDF, then lopdf, then pdf-extract.
pub fn default_chain() -> ExtractionRunner {
    ExtractionRunner::new(vec![
        Strategy::paged(
            StrategyId::A,
            "mupdf",
            MupdfBackend::new(),
            PageFailurePolicy::Abort,
        ),
        Strategy::paged(
            StrategyId::B,
            "lopdf",
            LopdfBackend::new(),
            PageFailurePolicy::Placeholder,
        ),
        Strategy::document(StrategyId::C, "pdf-extract", PdfExtractBackend::new()),
    ])
}
