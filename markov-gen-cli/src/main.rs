use std::fs::File;
use std::io::{self, BufReader, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;

use markov_gen_cli::{run, Options};

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let options = Options::parse();
	let stdout = BufWriter::new(io::stdout().lock());

	if options.input == "-" {
		run(&options, io::stdin().lock(), stdout)
	} else {
		let file = File::open(&options.input)
			.with_context(|| format!("Failed to open {}", options.input))?;
		run(&options, BufReader::new(file), stdout)
	}
}
