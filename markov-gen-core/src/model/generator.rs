use log::{debug, trace};

use crate::error::{ModelError, ModelResult};

use super::chain_builder::TransitionTable;
use super::generation_input::GenerationInput;
use super::selector::Selector;
use super::token::{Token, TransitionKey};

/// Random walk over a [`TransitionTable`].
///
/// # Responsibilities
/// - Pick a starting key (uniformly, or as configured)
/// - Repeatedly draw a successor uniformly from the current key's list
/// - Stop when `Token::End` is drawn, or when the optional length guard is hit
///
/// The generator only borrows the table, so any number of generators can walk
/// the same table at once, each with its own [`Selector`] (any `rand::Rng`).
#[derive(Debug, Clone, Copy)]
pub struct TextGenerator<'a> {
	table: &'a TransitionTable,
}

impl<'a> TextGenerator<'a> {
	pub fn new(table: &'a TransitionTable) -> Self {
		Self { table }
	}

	/// Generates a word sequence starting from a uniformly chosen key.
	///
	/// # Returns
	/// - `Ok(Vec<String>)`: at least two words, never containing the sentinel.
	/// - `Err(ModelError::EmptyModel)`: if the table has no keys.
	///
	/// # Notes
	/// - The walk is not anchored to the start of the source text and has no
	///   length bound. Use [`TextGenerator::predict`] with `max_words` for one.
	pub fn generate<S: Selector + ?Sized>(&self, selector: &mut S) -> ModelResult<Vec<String>> {
		let start = self.random_key(selector)?.clone();
		self.walk(&start, None, selector)
	}

	/// Generates a word sequence starting from `start`.
	///
	/// # Errors
	/// - `EmptyModel` if the table has no keys.
	/// - `UnknownKey` if `start` was never observed.
	pub fn generate_from<S: Selector + ?Sized>(&self, start: &TransitionKey, selector: &mut S) -> ModelResult<Vec<String>> {
		self.walk(start, None, selector)
	}

	/// Generates a word sequence according to `input`.
	///
	/// Resolves the start key from `input.start_key` and applies the
	/// `max_words` guard if one is set.
	pub fn predict<S: Selector + ?Sized>(&self, input: &GenerationInput, selector: &mut S) -> ModelResult<Vec<String>> {
		let start = match input.start_key.to_key()? {
			Some(key) => key,
			None => self.random_key(selector)?.clone(),
		};
		self.walk(&start, input.max_words(), selector)
	}

	fn random_key<S: Selector + ?Sized>(&self, selector: &mut S) -> ModelResult<&'a TransitionKey> {
		if self.table.is_empty() {
			return Err(ModelError::EmptyModel);
		}
		let index = selector.select(self.table.len());
		self.table.key_at(index).ok_or(ModelError::EmptyModel)
	}

	fn walk<S: Selector + ?Sized>(
		&self,
		start: &TransitionKey,
		max_words: Option<usize>,
		selector: &mut S,
	) -> ModelResult<Vec<String>> {
		if self.table.is_empty() {
			return Err(ModelError::EmptyModel);
		}
		if !self.table.contains_key(start) {
			return Err(unknown_key(start));
		}

		let mut key = start.clone();
		let mut words = vec![key.first().to_owned(), key.second().to_owned()];

		loop {
			if let Some(max) = max_words {
				if words.len() >= max {
					debug!("Walk stopped by max_words guard at {} words", words.len());
					break;
				}
			}

			// Every emitted (second, next) pair was adjacent in the source, so it is a key
			let successors = self.table.successors(&key).ok_or_else(|| unknown_key(&key))?;
			let next = match &successors[selector.select(successors.len())] {
				Token::Word(word) => word,
				Token::End => break,
			};

			trace!("{key} -> {next}");
			key = key.advance(next);
			words.push(next.clone());
		}

		Ok(words)
	}
}

fn unknown_key(key: &TransitionKey) -> ModelError {
	ModelError::UnknownKey {
		first: key.first().to_owned(),
		second: key.second().to_owned(),
	}
}
