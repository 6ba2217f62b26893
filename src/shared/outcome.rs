//! Per-call result of an entity operation.

use crate::error::EdanError;

/// Result of a single OGMT operation: a success flag, the ordered error
/// messages collected during that call, and the returned data.
///
/// Every operation builds a fresh `Outcome`; nothing is accumulated across
/// calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub success: bool,
    pub errors: Vec<String>,
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            data: Some(data),
        }
    }

    pub fn failed(err: &EdanError) -> Self {
        Self {
            success: false,
            errors: err.messages(),
            data: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            success: self.success,
            errors: self.errors,
            data: self.data.map(f),
        }
    }
}

impl<T> From<Result<T, EdanError>> for Outcome<T> {
    fn from(result: Result<T, EdanError>) -> Self {
        match result {
            Ok(data) => Outcome::ok(data),
            Err(err) => {
                tracing::debug!(error = %err, "OGMT operation failed");
                Outcome::failed(&err)
            }
        }
    }
}
