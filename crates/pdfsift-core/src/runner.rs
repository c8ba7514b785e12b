//! The fallback chain.
//!
//! Strategies run in list order against one input file. Every library call
//! is isolated: an error or a panic becomes a tagged diagnostic line and the
//! next strategy gets its turn. The first strategy to finish ends the run.
//!
//! Output format, byte for byte:
//!
//! ```text
//! MISSING                      (input absent, nothing else is printed)
//!
//! ----- PAGE <n> -----         (paged strategies, one block per page)
//!
//! <text or [NO_TEXT]>
//! <text or [NO_TEXT]>          (whole-document strategy)
//! <TAG>: <message>             (failed attempt)
//! ```

use std::any::Any;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use crate::backend::{BackendError, DocumentBackend, PagedBackend};
use crate::strategy::{PageFailurePolicy, Strategy, StrategyId, StrategyKind};
use crate::{InputDocument, MISSING_MARKER, PLACEHOLDER};

/// Result of one strategy's attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub strategy: StrategyId,
    pub outcome: Outcome,
}

/// How a whole run ended. Never maps to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Missing,
    Extracted(StrategyId),
    /// Every strategy failed.
    Exhausted,
}

/// Drives a fixed, ordered list of strategies until one succeeds.
#[derive(Debug)]
pub struct ExtractionRunner {
    strategies: Vec<Strategy>,
}

enum AttemptError {
    Backend(BackendError),
    Output(io::Error),
}

impl From<BackendError> for AttemptError {
    fn from(e: BackendError) -> Self {
        AttemptError::Backend(e)
    }
}

impl From<io::Error> for AttemptError {
    fn from(e: io::Error) -> Self {
        AttemptError::Output(e)
    }
}

impl ExtractionRunner {
    pub fn new(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Run the chain against `input`, writing everything to `out`.
    ///
    /// Extraction failures never surface here; they are printed. The only
    /// error returned is a failure to write to `out`.
    pub fn run(&self, input: &InputDocument, out: &mut dyn Write) -> io::Result<RunOutcome> {
        if !input.exists() {
            tracing::info!(path = %input.path().display(), "input document missing");
            writeln!(out, "{}", MISSING_MARKER)?;
            out.flush()?;
            return Ok(RunOutcome::Missing);
        }

        for strategy in &self.strategies {
            let attempt = self.attempt(strategy, input.path(), out)?;
            match attempt.outcome {
                Outcome::Success => {
                    tracing::info!(strategy = %strategy.id, library = strategy.library, "extraction succeeded");
                    return Ok(RunOutcome::Extracted(strategy.id));
                }
                Outcome::Failure(message) => {
                    tracing::warn!(
                        strategy = %strategy.id,
                        library = strategy.library,
                        error = %message,
                        "extraction attempt failed"
                    );
                    writeln!(out, "{}: {}", strategy.id.error_tag(), message)?;
                    out.flush()?;
                }
            }
        }

        Ok(RunOutcome::Exhausted)
    }

    /// Run a single strategy. Output already written by a failed attempt
    /// stays written.
    pub fn attempt(
        &self,
        strategy: &Strategy,
        path: &Path,
        out: &mut dyn Write,
    ) -> io::Result<Attempt> {
        tracing::debug!(strategy = %strategy.id, library = strategy.library, path = %path.display(), "starting attempt");
        // Backends may redirect fd 1 while a library runs; nothing of ours may be buffered then.
        out.flush()?;

        let result = match &strategy.kind {
            StrategyKind::Paged {
                backend,
                on_page_failure,
            } => run_paged(backend.as_ref(), *on_page_failure, path, out),
            StrategyKind::Document(backend) => run_document(backend.as_ref(), path, out),
        };

        let outcome = match result {
            Ok(()) => Outcome::Success,
            Err(AttemptError::Backend(e)) => Outcome::Failure(e.to_string()),
            Err(AttemptError::Output(e)) => return Err(e),
        };

        Ok(Attempt {
            strategy: strategy.id,
            outcome,
        })
    }
}

fn run_paged(
    backend: &dyn PagedBackend,
    on_page_failure: PageFailurePolicy,
    path: &Path,
    out: &mut dyn Write,
) -> Result<(), AttemptError> {
    let document = guarded(|| backend.open(path))?;
    let numbers = guarded(|| document.page_numbers())?;

    for (index, number) in numbers.into_iter().enumerate() {
        let text = match guarded(|| document.page_text(number)) {
            Ok(text) => text,
            Err(e) => match on_page_failure {
                PageFailurePolicy::Abort => return Err(e.into()),
                PageFailurePolicy::Placeholder => {
                    tracing::debug!(page = number, error = %e, "page extraction failed, using placeholder");
                    None
                }
            },
        };

        write!(out, "\n----- PAGE {} -----\n\n", index + 1)?;
        writeln!(out, "{}", or_placeholder(text.as_deref()))?;
        out.flush()?;
    }

    Ok(())
}

fn run_document(
    backend: &dyn DocumentBackend,
    path: &Path,
    out: &mut dyn Write,
) -> Result<(), AttemptError> {
    let text = guarded(|| backend.extract_document(path))?;
    writeln!(out, "{}", or_placeholder(text.as_deref()))?;
    out.flush()?;
    Ok(())
}

/// Empty and absent text are indistinguishable in the output.
fn or_placeholder(text: Option<&str>) -> &str {
    match text {
        Some(t) if !t.is_empty() => t,
        _ => PLACEHOLDER,
    }
}

/// Call into a third-party library, turning a panic into a [`BackendError`].
fn guarded<T>(f: impl FnOnce() -> Result<T, BackendError>) -> Result<T, BackendError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(BackendError::Panicked(panic_message(payload))))
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
