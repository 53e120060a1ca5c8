mod commands;

use clap::{Parser, Subcommand};
use ideavault_core::{RankingMode, VoteDirection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ideavault", about = "Submit, vote on, and rank ideas", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Log store activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an idea vault in the current directory
    Init,

    /// Submit a new idea
    Submit {
        /// Short title
        #[arg(short, long)]
        title: String,

        /// What the idea is about
        #[arg(short, long)]
        description: String,

        /// Category (defaults to "General")
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Vote on an idea; repeating your vote withdraws it
    Vote {
        /// Idea ID (full or prefix, minimum 4 chars)
        id: String,

        /// up | down (or +1 / -1)
        #[arg(allow_negative_numbers = true)]
        direction: VoteDirection,
    },

    /// Delete one of your ideas
    Delete {
        /// Idea ID (full or prefix, minimum 4 chars)
        id: String,
    },

    /// List ideas ranked by votes or recency
    List {
        /// Ranking mode: top | new (defaults to the vault setting)
        #[arg(short, long)]
        mode: Option<RankingMode>,

        /// Maximum number of entries
        #[arg(short = 'n', long)]
        max_count: Option<usize>,
    },

    /// Show one idea with its voters
    Show {
        /// Idea ID (full or prefix, minimum 4 chars)
        id: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init => commands::init::run(),
        Commands::Submit {
            title,
            description,
            category,
        } => commands::submit::run(title, description, category, cli.json),
        Commands::Vote { id, direction } => commands::vote::run(id, direction, cli.json),
        Commands::Delete { id } => commands::delete::run(id),
        Commands::List { mode, max_count } => commands::list::run(mode, max_count, cli.json),
        Commands::Show { id } => commands::show::run(id, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
