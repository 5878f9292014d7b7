//! Error types for page wiring and project-data loading.
//!
//! Missing page elements are deliberately not errors: a structure mismatch
//! is a silent no-op (with a `tracing` diagnostic), never a failure the
//! visitor sees.

use thiserror::Error;
use vitrine_dom::SelectorError;

/// Errors that can occur while wiring the page or loading project data.
#[derive(Debug, Error)]
pub enum PageError {
	/// A structural selector failed to parse.
	#[error("selector error: {0}")]
	Selector(#[from] SelectorError),

	/// Project data from an external source failed to deserialize.
	#[error("invalid project data: {0}")]
	ProjectData(#[from] toml::de::Error),
}

/// Result type for page operations.
pub type Result<T> = std::result::Result<T, PageError>;
