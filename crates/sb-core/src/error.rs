use crate::types::SourceSpan;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
#[error("{code}: {message}")]
pub struct StoryboardError {
    pub code: String,
    pub message: String,
    pub span: Option<SourceSpan>,
}

impl StoryboardError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(
        code: impl Into<String>,
        message: impl Into<String>,
        span: SourceSpan,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            span: Some(span),
        }
    }

    /// Errors that invalidate the whole run rather than a single storyboard.
    pub fn is_run_fatal(&self) -> bool {
        self.code == "PLATFORM_UNSUPPORTED"
    }
}
