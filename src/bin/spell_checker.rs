//! Spell checks the text part of an input file against its dictionary part.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use mask_speller::prelude::*;
use mask_speller::{Document, Result};

#[derive(Parser, Debug)]
#[command(name = "spell-checker", version, about)]
struct Args {
    /// Dictionary words, then `===`, then the text, then `===`.
    input: PathBuf,

    /// Where the corrected text is written.
    output: PathBuf,

    /// Masks checked per worker task.
    #[arg(long, default_value_t = 10)]
    chunk_size: usize,

    /// Worker threads; 0 shares rayon's global pool.
    #[arg(long, default_value_t = 0)]
    workers: usize,

    #[arg(long, default_value_t = 2000)]
    max_lines: usize,

    #[arg(long, default_value_t = 50)]
    max_word_len: usize,
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::new_with_params(self.chunk_size, self.workers);
        config.set_max_lines(self.max_lines);
        config.set_max_word_len(self.max_word_len);
        config
    }
}

fn run(args: Args) -> Result<()> {
    let config = args.config();
    let document = Document::load(&args.input, &config)?;

    let mut checker = TextChecker::new_with_config(config)?;
    let skipped = checker.add_words(&document.words);
    log::info!(
        "dictionary holds {} words, {} skipped",
        checker.checker().len(),
        skipped
    );

    let output = checker.check_text(&document.text);
    fs::write(&args.output, output)?;

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
