use thiserror::Error;

/// Errors raised while building inputs for, or walking, a transition table.
#[derive(Error, Debug)]
pub enum ModelError {
	/// The table has no keys (the source text had fewer than two words).
	#[error("Empty model: input text too short to build a model (need at least 2 words)")]
	EmptyModel,

	/// A custom start key was requested but never appears in the source text.
	#[error("Unknown start key: ({first}, {second}) does not appear in the model")]
	UnknownKey { first: String, second: String },

	/// A custom start key must be exactly two whitespace-separated words.
	#[error("Invalid start key: expected two words, got {0:?}")]
	InvalidStartKey(String),

	/// The output length guard must leave room for the starting key.
	#[error("max_words must be >= 2, got {0}")]
	MaxWordsTooSmall(usize),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
