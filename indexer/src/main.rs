use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use search_core::loader::load_index;
use search_core::tokenizer::query_keyword;
use search_core::{KeywordIndex, TOP_K};
use tracing_subscriber::{fmt, EnvFilter};

use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "indexer")]
#[command(about = "Index a document collection and run two-keyword queries", long_about = None)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SourceArgs {
    /// File listing the documents to index, whitespace separated
    #[arg(long, global = true, conflicts_with = "dir")]
    docs: Option<PathBuf>,
    /// Index every file below this directory instead of a document list
    #[arg(long, global = true)]
    dir: Option<PathBuf>,
    /// Noise-word file; a built-in English list is used when omitted
    #[arg(long, global = true)]
    noise: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Documents containing KW1 or KW2, most frequent first
    Search {
        kw1: String,
        kw2: String,
        /// Maximum number of documents to print
        #[arg(long, default_value_t = TOP_K)]
        limit: usize,
        /// Print the result as a JSON array
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print keywords with their ranked occurrence lists
    Dump {
        /// Only print this keyword
        #[arg(long)]
        keyword: Option<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let index = build_index(&cli.source)?;

    match cli.command {
        Commands::Search { kw1, kw2, limit, json } => search(&index, &kw1, &kw2, limit, json),
        Commands::Dump { keyword } => {
            dump(&index, keyword.as_deref());
            Ok(())
        }
    }
}

fn build_index(source: &SourceArgs) -> Result<KeywordIndex> {
    let start = Instant::now();
    let index = load_index(source.docs.as_deref(), source.dir.as_deref(), source.noise.as_deref())?;
    tracing::info!(
        documents = index.num_documents(),
        keywords = index.num_keywords(),
        took_s = start.elapsed().as_secs_f64(),
        "index ready"
    );
    Ok(index)
}

fn search(index: &KeywordIndex, kw1: &str, kw2: &str, limit: usize, json: bool) -> Result<()> {
    let (kw1, kw2) = (query_keyword(kw1), query_keyword(kw2));
    let results = index.top_k(&kw1, &kw2, limit);
    if json {
        println!("{}", serde_json::to_string(&results)?);
    } else if results.is_empty() {
        println!("no matches");
    } else {
        for doc in results {
            println!("{doc}");
        }
    }
    Ok(())
}

fn dump(index: &KeywordIndex, keyword: Option<&str>) {
    let mut entries: Vec<_> = match keyword {
        Some(kw) => {
            let kw = query_keyword(kw);
            index.iter().filter(|(k, _)| *k == kw).collect()
        }
        None => index.iter().collect(),
    };
    entries.sort_by_key(|(k, _)| *k);
    for (keyword, occurrences) in entries {
        let list: Vec<String> = occurrences.iter().map(ToString::to_string).collect();
        println!("{keyword}: [{}]", list.join(", "));
    }
}
