use crate::view::ResultView;
use serde::Serialize;
use serde_json::Value;

/// A service failure surfaced to the user, distinct from zero results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureNotice {
    pub code: String,
    pub message: String,
}

impl FailureNotice {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// What the results area shows. `raw` carries the entire last response for
/// the inspector view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub enum SearchViewState {
    Idle,
    Loading,
    Results { view: ResultView, raw: Value },
    NoResults { raw: Value },
    Failed(FailureNotice),
}

impl SearchViewState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}
