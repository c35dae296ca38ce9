use crate::error::{ModelError, ModelResult};

use super::token::TransitionKey;

/// Strategy used to select the key a walk starts from.
///
/// # Variants
/// - `Random`: any key of the table, chosen uniformly.
/// - `Custom(String)`: two whitespace-separated words that must form a key
///   of the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StartKey {
	#[default]
	Random,
	Custom(String),
}

impl StartKey {
	/// Parses a custom start into a key.
	///
	/// Returns `Ok(None)` for `Random`.
	pub fn to_key(&self) -> ModelResult<Option<TransitionKey>> {
		match self {
			StartKey::Random => Ok(None),
			StartKey::Custom(text) => {
				let words: Vec<&str> = text.split_whitespace().collect();
				match words.as_slice() {
					[first, second] => Ok(Some(TransitionKey::new(*first, *second))),
					_ => Err(ModelError::InvalidStartKey(text.clone())),
				}
			}
		}
	}
}

/// Parameters of a generation run.
///
/// # Invariants
/// - `max_words`, when set, is at least 2 (the starting key is always emitted)
#[derive(Debug, Clone, Default)]
pub struct GenerationInput {
	/// Where the walk starts.
	pub start_key: StartKey,

	/// Optional cap on the number of emitted words. `None` walks until `End`.
	max_words: Option<usize>,
}

impl GenerationInput {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn max_words(&self) -> Option<usize> {
		self.max_words
	}

	/// Sets the output length guard.
	///
	/// # Errors
	/// Returns an error if the value is below 2.
	pub fn set_max_words(&mut self, max_words: Option<usize>) -> ModelResult<()> {
		if let Some(n) = max_words {
			if n < 2 {
				return Err(ModelError::MaxWordsTooSmall(n));
			}
		}
		self.max_words = max_words;
		Ok(())
	}
}
