use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use bifm::{Alphabet, AminoAcid, BiFmIndex, Dna4, Dna5, SearchError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{AlphabetArg, Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.alphabet {
        AlphabetArg::Dna4 => run::<Dna4>(cli.command),
        AlphabetArg::Dna5 => run::<Dna5>(cli.command),
        AlphabetArg::Protein => run::<AminoAcid>(cli.command),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the default from `warn`.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<A: Alphabet>(command: Commands) -> Result<()> {
    match command {
        Commands::Count { input, pattern } => {
            let index = load_index::<A>(&input)?;
            let count = index
                .count(pattern.as_bytes())
                .with_context(|| format!("invalid pattern {:?}", pattern))?;
            println!("{}", count);
        }
        Commands::Locate {
            input,
            pattern,
            limit,
        } => {
            let index = load_index::<A>(&input)?;
            let hits = index
                .locate(pattern.as_bytes())
                .with_context(|| format!("invalid pattern {:?}", pattern))?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            for hit in hits.iter().take(limit.unwrap_or(usize::MAX)) {
                writeln!(out, "{}\t{}", hit.text_id, hit.position)?;
            }
        }
        Commands::Explore { input, seed } => {
            let index = load_index::<A>(&input)?;
            explore(&index, seed.as_bytes())?;
        }
    }
    Ok(())
}

/// Print each symbol that extends `seed` on the right, with its count.
fn explore<A: Alphabet>(index: &BiFmIndex<A>, seed: &[u8]) -> Result<()> {
    let mut cursor = index.cursor();
    match cursor.extend_right_seq(seed) {
        Ok(()) => {}
        Err(SearchError::EmptyMatch) => {
            eprintln!("seed {:?} does not occur", String::from_utf8_lossy(seed));
            return Ok(());
        }
        Err(err) => return Err(err).context("invalid seed"),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(
        out,
        "{}\t{}",
        String::from_utf8_lossy(&cursor.query()),
        cursor.count()
    )?;

    if cursor.extend_right_any().is_err() {
        // every occurrence ends at a text boundary
        return Ok(());
    }
    loop {
        writeln!(out, "  +{}\t{}", char::from(cursor.last_char()?), cursor.count())?;
        if !cursor.cycle_back()? {
            break;
        }
    }
    Ok(())
}

fn load_index<A: Alphabet>(path: &str) -> Result<BiFmIndex<A>> {
    let raw = fs::read(path).with_context(|| format!("failed to read {}", path))?;
    let texts = parse_texts(&raw);
    tracing::debug!(path, texts = texts.len(), alphabet = A::NAME, "loaded sequences");

    BiFmIndex::from_texts(&texts).with_context(|| format!("failed to index {}", path))
}

/// Split a sequence file into texts.
///
/// Without `>` headers every non-empty line is a text. With headers, each
/// header opens a new text and the lines below it are joined.
fn parse_texts(raw: &[u8]) -> Vec<Vec<u8>> {
    let lines = raw
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line));

    let mut texts: Vec<Vec<u8>> = Vec::new();
    let mut in_record = false;
    for line in lines {
        if line.first() == Some(&b'>') {
            texts.push(Vec::new());
            in_record = true;
        } else if line.is_empty() {
            continue;
        } else if in_record {
            if let Some(text) = texts.last_mut() {
                text.extend_from_slice(line);
            }
        } else {
            texts.push(line.to_vec());
        }
    }
    texts
}
