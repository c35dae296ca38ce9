use std::fmt;

use serde::Serialize;

/// A successor recorded in the transition table.
///
/// `End` is the terminal marker appended after the last word of the source.
/// Being its own variant, it can never be confused with a real word, whatever
/// the tokenizer produces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
	Word(String),
	End,
}

impl Token {
	pub fn is_end(&self) -> bool {
		matches!(self, Token::End)
	}
}

impl From<&str> for Token {
	fn from(word: &str) -> Self {
		Token::Word(word.to_owned())
	}
}

impl From<String> for Token {
	fn from(word: String) -> Self {
		Token::Word(word)
	}
}

/// State of the chain: two consecutive words, in order.
///
/// Equality and hashing are structural, so a key rebuilt from the same two
/// words finds the same table entry. `(a, b)` and `(b, a)` are distinct keys.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TransitionKey {
	first: String,
	second: String,
}

impl TransitionKey {
	pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
		Self { first: first.into(), second: second.into() }
	}

	pub fn first(&self) -> &str {
		&self.first
	}

	pub fn second(&self) -> &str {
		&self.second
	}

	/// Key reached after emitting `next`: `(second, next)`.
	pub fn advance(&self, next: &str) -> Self {
		Self { first: self.second.clone(), second: next.to_owned() }
	}
}

impl fmt::Display for TransitionKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.first, self.second)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_key_order_matters() {
		assert_ne!(TransitionKey::new("a", "b"), TransitionKey::new("b", "a"));
	}

	#[test]
	fn test_key_hash_is_structural() {
		let mut keys = HashSet::new();
		keys.insert(TransitionKey::new("hi", "there"));
		assert!(keys.contains(&TransitionKey::new(String::from("hi"), String::from("there"))));
	}

	#[test]
	fn test_advance_shifts_window() {
		let key = TransitionKey::new("hi", "there").advance("mary");
		assert_eq!(key.first(), "there");
		assert_eq!(key.second(), "mary");
	}

	#[test]
	fn test_end_is_not_a_word() {
		assert!(Token::End.is_end());
		assert!(!Token::from("END").is_end());
		assert_eq!(Token::from("END"), Token::Word("END".to_owned()));
	}
}
