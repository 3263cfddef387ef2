use clap::Parser;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use rayon::prelude::*;
use serde::Serialize;

use khmer_tokenizer::{count_khmer_words, logging, TokenizerConfig, SEGMENTER_SOURCE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file, one record per line
    #[arg(short, long)]
    input: PathBuf,

    /// Extra word list merged into the built-in dictionary
    #[arg(short, long)]
    dict: Option<PathBuf>,

    /// JSON tokenizer config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file (JSONL) - optional, skip to benchmark only
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Drop whitespace tokens
    #[arg(long)]
    no_spaces: bool,

    /// Print the Khmer word count of the whole input instead of segmenting
    #[arg(long)]
    count: bool,

    /// Limit number of lines to process
    #[arg(short, long)]
    limit: Option<usize>,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Record<'a> {
    id: usize,
    input: &'a str,
    tokens: Vec<String>,
    source: &'static str,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.verbose);

    let content = fs::read_to_string(&args.input)?;

    if args.count {
        println!("{}", count_khmer_words(&content));
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => TokenizerConfig::from_path(path)?,
        None => TokenizerConfig::default(),
    };
    if args.dict.is_some() {
        config.dictionary_path = args.dict.clone();
    }
    if args.no_spaces {
        config.keep_spaces = false;
    }

    let start_load = Instant::now();
    let tokenizer = config.build()?;
    log::info!(
        "dictionary with {} words loaded in {:.2}s",
        tokenizer.dictionary().len(),
        start_load.elapsed().as_secs_f32()
    );

    let mut lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if let Some(limit) = args.limit {
        lines.truncate(limit);
    }

    log::info!("processing {} lines from {}", lines.len(), args.input.display());
    let start_process = Instant::now();

    let results: Vec<String> = lines
        .par_iter()
        .enumerate()
        .map(|(id, line)| {
            let record = Record {
                id,
                input: line,
                tokens: tokenizer.tokenize(line, config.keep_spaces),
                source: SEGMENTER_SOURCE,
            };
            serde_json::to_string(&record)
        })
        .collect::<Result<Vec<String>, serde_json::Error>>()?;

    if let Some(output_path) = &args.output {
        let output_file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(262144, output_file);
        for result in &results {
            writeln!(writer, "{}", result)?;
        }
        writer.flush()?;
        log::info!("saved to {}", output_path.display());
    }

    let duration = start_process.elapsed();
    println!("Time taken: {:.2}s", duration.as_secs_f32());
    println!("Speed: {:.2} lines/sec", lines.len() as f32 / duration.as_secs_f32());

    Ok(())
}
