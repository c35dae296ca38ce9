//! Command-line front end for `markov-gen-core`.
//!
//! [`run`] takes its input source and output sink as parameters, so the
//! binary only wires it to a file or stdin and to stdout.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use markov_gen_core::io::{join_words, read_all, tokenize};
use markov_gen_core::model::chain_builder::ChainBuilder;
use markov_gen_core::model::generation_input::{GenerationInput, StartKey};
use markov_gen_core::model::generator::TextGenerator;
use markov_gen_core::ModelError;

/// Generate text that imitates an input text, word by word.
#[derive(Debug, Parser)]
#[command(name = "markov-gen", version)]
pub struct Options {
	/// Input text file, or `-` for stdin
	#[arg(value_name = "FILE")]
	pub input: String,

	/// Stop a text after this many words (unbounded by default)
	#[arg(short, long, value_name = "N")]
	pub max_words: Option<usize>,

	/// Seed the random walk for reproducible output
	#[arg(short, long)]
	pub seed: Option<u64>,

	/// Start from these two words instead of a random pair
	#[arg(long, value_name = "\"WORD1 WORD2\"")]
	pub start: Option<String>,

	/// Number of texts to generate, one per line
	#[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
	pub count: u64,

	/// Print transition table statistics as JSON instead of generating
	#[arg(long)]
	pub stats: bool,
}

impl Options {
	fn generation_input(&self) -> Result<GenerationInput> {
		let mut input = GenerationInput::new();
		input.set_max_words(self.max_words)?;
		if let Some(start) = &self.start {
			input.start_key = StartKey::Custom(start.clone());
		}
		Ok(input)
	}
}

/// Builds the model from `source` and writes the generated texts to `sink`.
pub fn run<R: Read, W: Write>(options: &Options, source: R, mut sink: W) -> Result<()> {
	let text = read_all(source).context("Failed to read input text")?;
	let words = tokenize(&text);
	let table = ChainBuilder::build(&words);
	info!("{} words, {} keys", words.len(), table.len());

	if options.stats {
		let stats = serde_json::to_string_pretty(&table.stats())?;
		writeln!(sink, "{stats}")?;
		return Ok(());
	}

	if table.is_empty() {
		return Err(ModelError::EmptyModel.into());
	}

	let input = options.generation_input()?;
	let generator = TextGenerator::new(&table);
	let mut rng = match options.seed {
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng(),
	};

	for i in 0..options.count {
		let words = generator.predict(&input, &mut rng)?;
		debug!("Text {}: {} words", i + 1, words.len());
		writeln!(sink, "{}", join_words(&words))?;
	}

	Ok(())
}
