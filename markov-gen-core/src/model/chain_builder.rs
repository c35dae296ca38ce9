use std::collections::HashMap;

use log::debug;
use serde::Serialize;

use super::token::{Token, TransitionKey};

/// Word-level Markov chain with a window of two preceding words.
///
/// Maps every observed pair of adjacent words to the ordered list of words
/// that followed it in the source. Duplicates are kept: a continuation seen
/// `k` times appears `k` times, which is what makes a uniform pick from the
/// list frequency-weighted.
///
/// # Invariants
/// - Every key is a pair of adjacent words from the source
/// - No successor list is empty
/// - Successors are stored in order of appearance
/// - The key of the last two source words holds `Token::End`
///
/// The table can only be produced by [`ChainBuilder::build`] and exposes no
/// mutating method afterwards.
#[derive(Clone, Debug, Default)]
pub struct TransitionTable {
	/// Mapping from a key to every word observed right after it.
	successors: HashMap<TransitionKey, Vec<Token>>,

	/// Keys in first-seen order, so that seeded walks are reproducible.
	order: Vec<TransitionKey>,

	/// Key formed by the last two words of the source.
	terminal_key: Option<TransitionKey>,
}

/// Summary of a [`TransitionTable`], serializable for reporting.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TableStats {
	/// Number of distinct keys.
	pub key_count: usize,
	/// Number of recorded transitions (sum of all successor list lengths).
	pub transition_count: usize,
	/// Keys with more than one distinct successor, where the walk can branch.
	pub branching_keys: usize,
	/// Key formed by the last two source words.
	pub terminal_key: Option<TransitionKey>,
}

impl TransitionTable {
	/// Number of distinct keys.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn contains_key(&self, key: &TransitionKey) -> bool {
		self.successors.contains_key(key)
	}

	/// Successors recorded for `key`, in source order, or `None` if the pair
	/// was never observed.
	pub fn successors(&self, key: &TransitionKey) -> Option<&[Token]> {
		self.successors.get(key).map(Vec::as_slice)
	}

	/// Iterates over keys in the order they first appeared in the source.
	pub fn keys(&self) -> impl Iterator<Item = &TransitionKey> {
		self.order.iter()
	}

	pub(crate) fn key_at(&self, index: usize) -> Option<&TransitionKey> {
		self.order.get(index)
	}

	pub fn terminal_key(&self) -> Option<&TransitionKey> {
		self.terminal_key.as_ref()
	}

	pub fn stats(&self) -> TableStats {
		let branching_keys = self
			.successors
			.values()
			.filter(|next| next.iter().any(|token| *token != next[0]))
			.count();

		TableStats {
			key_count: self.len(),
			transition_count: self.successors.values().map(Vec::len).sum(),
			branching_keys,
			terminal_key: self.terminal_key.clone(),
		}
	}

	/// Builds a table from raw entries, bypassing the [`ChainBuilder`] invariants.
	#[cfg(test)]
	pub(crate) fn from_entries(entries: Vec<(TransitionKey, Vec<Token>)>) -> Self {
		let mut table = Self::default();
		for (key, next) in entries {
			table.order.push(key.clone());
			table.successors.insert(key, next);
		}
		table
	}

	/// Records one occurrence of `key -> next`.
	///
	/// - If the key exists, `next` is appended to its list (duplicates kept).
	/// - Otherwise the key is created with `next` as its first successor.
	fn record(&mut self, key: TransitionKey, next: Token) {
		match self.successors.get_mut(&key) {
			Some(list) => list.push(next),
			None => {
				self.order.push(key.clone());
				self.successors.insert(key, vec![next]);
			}
		}
	}
}

/// Builds a [`TransitionTable`] from a whitespace-tokenized text.
pub struct ChainBuilder;

impl ChainBuilder {
	/// Builds the transition table of `words`.
	///
	/// # Behavior
	/// - Appends `Token::End` after the last word.
	/// - For every position with two real words ahead, records
	///   `(words[i], words[i + 1]) -> words[i + 2]`, the last pair mapping to `End`.
	///
	/// # Notes
	/// - Total: fewer than 2 words yields an empty table, exactly 2 words yields
	///   a single key whose only successor is `End`.
	/// - Words are compared exactly, without normalization.
	pub fn build<S: AsRef<str>>(words: &[S]) -> TransitionTable {
		let mut tokens: Vec<Token> = words.iter().map(|word| Token::from(word.as_ref())).collect();
		tokens.push(Token::End);

		let mut table = TransitionTable::default();
		for window in tokens.windows(3) {
			// Only the last element of the last window can be `End`
			if let [Token::Word(first), Token::Word(second), next] = window {
				let key = TransitionKey::new(first.as_str(), second.as_str());
				if next.is_end() {
					table.terminal_key = Some(key.clone());
				}
				table.record(key, next.clone());
			}
		}

		debug!(
			"Built transition table: {} words, {} keys",
			words.len(),
			table.len()
		);
		table
	}
}
