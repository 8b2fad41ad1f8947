mod generate_corpus;
mod loader;
mod metrics;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use rayon::prelude::*;
use shingling::minhash::{HashFamily, HasherKind, MinHasher};
use shingling::text::StopwordSet;
use shingling::{exact_jaccard, Corpus, ShinglingConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::generate_corpus::PairGenerator;
use crate::metrics::Metrics;

#[derive(Parser)]
#[command(name = "shingling-bench", about = "Shingle-based document similarity with MinHash")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two documents of a corpus
    Compare(CompareArgs),
    /// Measure how MinHash estimates approach exact Jaccard similarity
    Convergence(ConvergenceArgs),
}

#[derive(Args)]
struct CompareArgs {
    /// File with one raw document per line
    #[arg(short, long)]
    documents: PathBuf,

    /// File with one stopword per line
    #[arg(short, long)]
    stopwords: Option<PathBuf>,

    /// JSON configuration file; command line options override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short = 'k', long)]
    shingle_size: Option<usize>,

    #[arg(short, long)]
    num_hashes: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    /// Base hasher: sha1, sip, sea or fnv
    #[arg(long)]
    hasher: Option<HasherKind>,

    /// Shingle documents in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// First document number (1-based)
    #[arg(long, default_value_t = 4)]
    first: usize,

    /// Second document number (1-based)
    #[arg(long, default_value_t = 10)]
    second: usize,

    /// Only use the first N documents of the file
    #[arg(long)]
    num_docs: Option<usize>,

    /// Print the shingles of both documents
    #[arg(long, default_value_t = false)]
    show_shingles: bool,

    /// Print the report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args)]
struct ConvergenceArgs {
    /// Comma-separated numbers of hash functions
    #[arg(long, value_delimiter = ',', default_values_t = vec![50, 500, 5000])]
    num_hashes: Vec<usize>,

    #[arg(long, default_value_t = 0.5)]
    jaccard_similarity: f64,

    #[arg(long, default_value_t = 200)]
    shingles_per_doc: usize,

    #[arg(long, default_value_t = 100)]
    num_pairs: usize,

    #[arg(long, default_value_t = 1)]
    seed: u64,
}

fn build_config(args: &CompareArgs) -> Result<ShinglingConfig> {
    let mut config = match &args.config {
        Some(path) => loader::load_config(path)?,
        None => ShinglingConfig::default(),
    };
    if let Some(shingle_size) = args.shingle_size {
        config.shingle_size = shingle_size;
    }
    if let Some(num_hashes) = args.num_hashes {
        config.num_hashes = num_hashes;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(hasher) = args.hasher {
        config.hasher = hasher;
    }
    config.parallel |= args.parallel;
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn document_index(number: usize, len: usize) -> Result<usize> {
    if number < 1 || number > len {
        bail!("document number {} is out of range 1..={}", number, len);
    }
    Ok(number - 1)
}

fn take_documents(mut documents: Vec<String>, num_docs: Option<usize>) -> Result<Vec<String>> {
    if let Some(num_docs) = num_docs {
        if num_docs < 1 {
            bail!("--num-docs must be at least 1");
        }
        documents.truncate(num_docs);
    }
    Ok(documents)
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let config = build_config(&args)?;
    let documents = take_documents(loader::load_documents(&args.documents)?, args.num_docs)?;
    let stopwords = match &args.stopwords {
        Some(path) => loader::load_stopwords(path)?,
        None => StopwordSet::new(),
    };
    info!(documents = documents.len(), stopwords = stopwords.len(), "loaded input");

    let now = Instant::now();
    let corpus = Corpus::build(&documents, &stopwords, config)?;
    info!(elapsed_ms = now.elapsed().as_millis() as u64, "corpus built");

    let doc_a = document_index(args.first, corpus.len())?;
    let doc_b = document_index(args.second, corpus.len())?;

    if args.show_shingles {
        for doc in [doc_a, doc_b] {
            let shingles = corpus.shingles(doc)?;
            println!("Shingles of document {}: {}", doc + 1, shingles.iter().sorted().join(" | "));
        }
    }

    let report = corpus.compare(doc_a, doc_b)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("Minhash-based estimation: {}", report.estimated);
    match report.exact {
        Some(exact) => println!("True Jaccard-Similarity: {}", exact),
        None => println!("True Jaccard-Similarity: undefined (both documents have no shingles)"),
    }
    Ok(())
}

fn run_convergence(args: ConvergenceArgs) -> Result<()> {
    let generator = PairGenerator::new(
        args.jaccard_similarity,
        args.shingles_per_doc,
        args.shingles_per_doc * 100,
        args.num_pairs,
        args.seed,
    );
    let pairs = generator.generate();
    let target_similarity = pairs.first().map(|pair| pair.jaccard_similarity);
    info!(pairs = pairs.len(), target_similarity = ?target_similarity, "generated pairs");

    for &num_hashes in args.num_hashes.iter() {
        let family = HashFamily::new(num_hashes, args.seed)?;
        let now = Instant::now();
        let estimates: Vec<(f64, f64)> = pairs
            .par_iter()
            .map(|pair| -> shingling::Result<(f64, f64)> {
                let estimated = family.compute_set_similarity(&pair.first, &pair.second);
                let exact = exact_jaccard(&pair.first, &pair.second)?;
                Ok((estimated, exact))
            })
            .collect::<shingling::Result<_>>()?;
        let mut metrics = Metrics::new(num_hashes);
        for (estimated, exact) in estimates {
            metrics.update_metrics(estimated, exact);
        }
        info!(num_hashes = num_hashes, elapsed_ms = now.elapsed().as_millis() as u64, "estimated pairs");
        println!("{}", serde_json::to_string(&metrics.get_result())?);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("shingling=info,shingling_bench=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Compare(args) => run_compare(args),
        Command::Convergence(args) => run_convergence(args),
    }
}
