//! Word-level Markov chain: table construction and random-walk generation.
//!
//! - Tokens and keys (`Token`, `TransitionKey`)
//! - Table construction (`ChainBuilder`, `TransitionTable`)
//! - Walk configuration (`GenerationInput`, `StartKey`)
//! - The random walk itself (`TextGenerator`)

/// Successor tokens (words and the `End` sentinel) and two-word keys.
pub mod token;

/// Builds the transition table from a sequence of words.
///
/// Keeps duplicate successors in source order, so uniform sampling
/// reproduces the source frequencies.
pub mod chain_builder;

/// Random walk over a transition table.
pub mod generator;

/// Generation parameters such as the start key and the length guard.
pub mod generation_input;

/// Injection point for the walk's randomness.
pub mod selector;
