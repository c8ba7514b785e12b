//! Mock backends for testing the fallback chain without real PDFs.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::backend::{BackendError, DocumentBackend, PagedBackend, PagedDocument};

/// Shared call counter that survives the backend being boxed into a strategy.
#[derive(Debug, Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// How a mock reacts to being opened or asked for whole-document text.
#[derive(Debug, Clone)]
pub enum MockResponse {
    Text(String),
    /// The library returned an empty string.
    Empty,
    /// The library returned nothing at all.
    Absent,
    Error(String),
    Panic(String),
}

impl MockResponse {
    fn resolve(&self) -> Result<Option<String>, BackendError> {
        match self {
            MockResponse::Text(text) => Ok(Some(text.clone())),
            MockResponse::Empty => Ok(Some(String::new())),
            MockResponse::Absent => Ok(None),
            MockResponse::Error(msg) => Err(BackendError::Extraction(msg.clone())),
            MockResponse::Panic(msg) => panic!("{}", msg),
        }
    }
}

#[derive(Debug, Clone)]
enum OpenFailure {
    Error(String),
    Panic(String),
}

/// A hand-rolled [`PagedBackend`] serving a fixed list of page responses.
#[derive(Debug, Clone)]
pub struct MockPagedBackend {
    open_failure: Option<OpenFailure>,
    pages: Vec<MockResponse>,
    opens: CallCounter,
}

impl MockPagedBackend {
    pub fn new(pages: Vec<MockResponse>) -> Self {
        Self {
            open_failure: None,
            pages,
            opens: CallCounter::default(),
        }
    }

    /// A backend whose `open` fails with `message`.
    pub fn failing_open(message: &str) -> Self {
        Self {
            open_failure: Some(OpenFailure::Error(message.to_string())),
            ..Self::new(Vec::new())
        }
    }

    /// A backend whose `open` panics with `message`.
    pub fn panicking_open(message: &str) -> Self {
        Self {
            open_failure: Some(OpenFailure::Panic(message.to_string())),
            ..Self::new(Vec::new())
        }
    }

    /// Counter of `open()` calls.
    pub fn opens(&self) -> CallCounter {
        self.opens.clone()
    }
}

impl PagedBackend for MockPagedBackend {
    fn open(&self, _path: &Path) -> Result<Box<dyn PagedDocument>, BackendError> {
        self.opens.bump();
        match &self.open_failure {
            Some(OpenFailure::Error(msg)) => Err(BackendError::Open(msg.clone())),
            Some(OpenFailure::Panic(msg)) => panic!("{}", msg),
            None => Ok(Box::new(MockPagedDocument {
                pages: self.pages.clone(),
            })),
        }
    }
}

struct MockPagedDocument {
    pages: Vec<MockResponse>,
}

impl PagedDocument for MockPagedDocument {
    fn page_numbers(&self) -> Result<Vec<u32>, BackendError> {
        Ok((1..=self.pages.len() as u32).collect())
    }

    fn page_text(&self, number: u32) -> Result<Option<String>, BackendError> {
        let response = self
            .pages
            .get((number as usize).wrapping_sub(1))
            .ok_or_else(|| BackendError::Page {
                number,
                message: "page out of range".into(),
            })?;
        response.resolve().map_err(|e| match e {
            BackendError::Extraction(message) => BackendError::Page { number, message },
            other => other,
        })
    }
}

/// A hand-rolled [`DocumentBackend`] returning one fixed response.
#[derive(Debug, Clone)]
pub struct MockDocumentBackend {
    response: MockResponse,
    calls: CallCounter,
}

impl MockDocumentBackend {
    pub fn new(response: MockResponse) -> Self {
        Self {
            response,
            calls: CallCounter::default(),
        }
    }

    /// Counter of `extract_document()` calls.
    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }
}

impl DocumentBackend for MockDocumentBackend {
    fn extract_document(&self, _path: &Path) -> Result<Option<String>, BackendError> {
        self.calls.bump();
        self.response.resolve()
    }
}
