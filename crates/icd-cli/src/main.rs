//! # icdgraph
//!
//! ICD-10 code graph: ingest the code table, look codes up, search them,
//! and ask for grounded explanations.
//!
//! ```bash
//! icdgraph ingest data/codes.csv
//! icdgraph lookup A00.1
//! icdgraph search "viral pneumonia" --limit 5
//! icdgraph ask "patient with typhoid fever" --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use icd_cli::commands;
use icd_cli::tracing_setup::init_tracing;
use icd_cli::AppContext;
use icd_core::IcdConfig;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "icdgraph")]
#[command(about = "ICD-10 code graph: lookup, ranked search and grounded explanations", long_about = None)]
#[command(version = icd_core::constants::VERSION)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(long, global = true, value_name = "PATH", default_value = "icdgraph.toml")]
    config: PathBuf,
    /// Database file, overrides storage.db_path
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,
    /// Enable verbose logging to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Load a headerless six-column ICD-10 CSV into the graph
    Ingest {
        #[arg(value_name = "CSV")]
        path: PathBuf,
    },
    /// Show a code with its category and immediate parents/children
    Lookup {
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Ranked free-text search
    Search {
        #[arg(value_name = "QUERY")]
        query: String,
        /// Maximum results (defaults to retrieval.default_limit)
        #[arg(long, value_name = "COUNT")]
        limit: Option<usize>,
    },
    /// List every code in a category or under a code prefix
    Category {
        #[arg(value_name = "TERM")]
        term: String,
    },
    /// Search and explain the results, restricted to codes found in the database
    Ask {
        #[arg(value_name = "QUERY")]
        query: String,
        /// Skip generation and answer from the database only
        #[arg(long)]
        no_llm: bool,
    },
    /// Node and edge counts
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // An unreadable config falls back to default logging; AppContext::open reports it.
    let observability = IcdConfig::load(&cli.config)
        .map(|c| c.observability)
        .unwrap_or_default();
    init_tracing(&observability, cli.verbose);

    let ctx = match AppContext::open(&cli.config, cli.db.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::from(2);
        }
    };

    let result = match &cli.command {
        Commands::Ingest { path } => commands::ingest::run(&ctx, path, cli.json),
        Commands::Lookup { code } => commands::lookup::run(&ctx, code, cli.json),
        Commands::Search { query, limit } => commands::search::run(&ctx, query, *limit, cli.json),
        Commands::Category { term } => commands::category::run(&ctx, term, cli.json),
        Commands::Ask { query, no_llm } => commands::ask::run(&ctx, query, *no_llm, cli.json),
        Commands::Stats => commands::stats::run(&ctx, cli.json),
    };

    match result {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
