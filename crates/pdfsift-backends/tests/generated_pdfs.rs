//! Runs the lopdf and pdf-extract strategies against PDFs generated on the fly.

use pdfsift_backends::{LopdfBackend, PdfExtractBackend};
use pdfsift_core::fixture::{CORE_FONT, write_pdf};
use pdfsift_core::{
    DocumentBackend, ExtractionRunner, InputDocument, PageFailurePolicy, PagedBackend,
    RunOutcome, Strategy, StrategyId,
};

#[test]
fn lopdf_enumerates_pages_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("three.pdf");
    write_pdf(&path, CORE_FONT, &[Some("Alpha"), Some("Bravo"), Some("Charlie")]).unwrap();

    let document = LopdfBackend::new().open(&path).unwrap();
    assert_eq!(document.page_numbers().unwrap(), vec![1, 2, 3]);

    let second = document.page_text(2).unwrap().unwrap();
    assert!(second.contains("Bravo"), "page 2 text was {second:?}");
    assert!(!second.contains("Alpha"));
}

#[test]
fn lopdf_rejects_non_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.pdf");
    std::fs::write(&path, b"not a pdf at all").unwrap();

    assert!(LopdfBackend::new().open(&path).is_err());
}

#[test]
fn pdf_extract_returns_whole_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two.pdf");
    write_pdf(&path, CORE_FONT, &[Some("Hello"), Some("World")]).unwrap();

    let text = PdfExtractBackend::new()
        .extract_document(&path)
        .unwrap()
        .unwrap();
    assert!(text.contains("Hello"), "text was {text:?}");
    assert!(text.contains("World"), "text was {text:?}");
    assert!(!text.contains("----- PAGE"));
}

#[test]
fn pdf_extract_reports_io_error_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = PdfExtractBackend::new()
        .extract_document(&dir.path().join("absent.pdf"))
        .unwrap_err();
    assert!(matches!(err, pdfsift_core::BackendError::Io(_)));
}

fn lopdf_then_pdf_extract() -> ExtractionRunner {
    ExtractionRunner::new(vec![
        Strategy::paged(
            StrategyId::B,
            "lopdf",
            LopdfBackend::new(),
            PageFailurePolicy::Placeholder,
        ),
        Strategy::document(StrategyId::C, "pdf-extract", PdfExtractBackend::new()),
    ])
}

#[test]
fn chain_prints_placeholder_for_blank_page() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registration.pdf");
    write_pdf(&path, CORE_FONT, &[Some("Name"), None]).unwrap();

    let mut out = Vec::new();
    let outcome = lopdf_then_pdf_extract()
        .run(&InputDocument::new(&path), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(outcome, RunOutcome::Extracted(StrategyId::B));
    assert!(out.starts_with("\n----- PAGE 1 -----\n\n"));
    assert!(out.contains("Name"));
    assert!(out.ends_with("\n----- PAGE 2 -----\n\n[NO_TEXT]\n"), "output was {out:?}");
}

#[test]
fn chain_reports_both_failures_for_garbage_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registration.pdf");
    std::fs::write(&path, b"<html>not a pdf</html>").unwrap();

    let mut out = Vec::new();
    let outcome = lopdf_then_pdf_extract()
        .run(&InputDocument::new(&path), &mut out)
        .unwrap();
    let out = String::from_utf8(out).unwrap();

    assert_eq!(outcome, RunOutcome::Exhausted);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "output was {out:?}");
    assert!(lines[0].starts_with("PYPDF2_ERROR: "));
    assert!(lines[1].starts_with("PDFMINER_ERROR: "));
}
