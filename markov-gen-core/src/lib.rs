//! Word-level Markov text generation library.
//!
//! This crate provides:
//! - A two-word transition table built from whitespace-tokenized text
//! - Random-walk generation over that table with injectable randomness
//! - I/O collaborators (file reading, tokenizing, joining)
//!
//! ```
//! use markov_gen_core::io::{join_words, tokenize};
//! use markov_gen_core::model::chain_builder::ChainBuilder;
//! use markov_gen_core::model::generator::TextGenerator;
//!
//! let table = ChainBuilder::build(&tokenize("hi there mary hi there juanita"));
//! let words = TextGenerator::new(&table).generate(&mut rand::rng()).unwrap();
//! assert!(words.len() >= 2);
//! println!("{}", join_words(&words));
//! ```

/// Transition table construction and generation logic.
pub mod model;

/// Error type shared by the crate.
pub mod error;

/// I/O utilities (file loading, tokenizing, path helpers).
pub mod io;

pub use error::{ModelError, ModelResult};
