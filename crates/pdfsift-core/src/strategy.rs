use std::fmt;

use crate::backend::{DocumentBackend, PagedBackend};

/// Slot of a strategy in the fallback chain.
///
/// The error tags are part of the output format and stay fixed no matter
/// which library is bound to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyId {
    A,
    B,
    C,
}

impl StrategyId {
    pub fn error_tag(&self) -> &'static str {
        match self {
            StrategyId::A => "PYPDF_ERROR",
            StrategyId::B => "PYPDF2_ERROR",
            StrategyId::C => "PDFMINER_ERROR",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyId::A => "A",
            StrategyId::B => "B",
            StrategyId::C => "C",
        };
        f.write_str(s)
    }
}

/// What a paged strategy does when a single page cannot be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageFailurePolicy {
    /// The whole attempt fails.
    Abort,
    /// The page is printed with the placeholder and the attempt continues.
    Placeholder,
}

pub enum StrategyKind {
    Paged {
        backend: Box<dyn PagedBackend>,
        on_page_failure: PageFailurePolicy,
    },
    Document(Box<dyn DocumentBackend>),
}

/// One entry of the fallback chain.
pub struct Strategy {
    pub id: StrategyId,
    /// Library name, used only in log events.
    pub library: &'static str,
    pub kind: StrategyKind,
}

impl Strategy {
    pub fn paged(
        id: StrategyId,
        library: &'static str,
        backend: impl PagedBackend + 'static,
        on_page_failure: PageFailurePolicy,
    ) -> Self {
        Self {
            id,
            library,
            kind: StrategyKind::Paged {
                backend: Box::new(backend),
                on_page_failure,
            },
        }
    }

    pub fn document(
        id: StrategyId,
        library: &'static str,
        backend: impl DocumentBackend + 'static,
    ) -> Self {
        Self {
            id,
            library,
            kind: StrategyKind::Document(Box::new(backend)),
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            StrategyKind::Paged {
                on_page_failure, ..
            } => format!("Paged({on_page_failure:?})"),
            StrategyKind::Document(_) => "Document".to_string(),
        };
        f.debug_struct("Strategy")
            .field("id", &self.id)
            .field("library", &self.library)
            .field("kind", &kind)
            .finish()
    }
}
