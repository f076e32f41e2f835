use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use launchdeck_core::launch::{OutcomeCategory, Partition, SortOrder};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "launchdeck")]
#[command(about = "LaunchDeck - browse, filter and pin SpaceX launches", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// GraphQL endpoint override
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Directory holding favorites.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep favorites in memory for this run only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List launches, favorites first
    List {
        #[arg(short, long, default_value = "past")]
        partition: Partition,

        /// Only show these rockets (repeatable)
        #[arg(long = "rocket")]
        rockets: Vec<String>,

        /// Only show these outcomes: Yes, No or NA (repeatable)
        #[arg(long = "outcome")]
        outcomes: Vec<OutcomeCategory>,

        /// Sort by launch date
        #[arg(long)]
        sort: Option<SortArg>,

        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// Rows per page
        #[arg(long, default_value_t = render::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Toggle a launch as favorite
    Favorite {
        #[arg(short, long, default_value = "past")]
        partition: Partition,

        id: String,
    },
    /// Show stored favorites without contacting the service
    Favorites {
        #[arg(short, long, default_value = "past")]
        partition: Partition,
    },
    /// Show the details of one launch
    Show { id: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => SortOrder::Ascending,
            SortArg::Desc => SortOrder::Descending,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::AppContext::build(commands::Overrides {
        config: cli.config,
        endpoint: cli.endpoint,
        data_dir: cli.data_dir,
        ephemeral: cli.ephemeral,
    })?;

    match cli.command {
        Commands::List {
            partition,
            rockets,
            outcomes,
            sort,
            page,
            page_size,
        } => {
            let page = render::Page::new(page, page_size);
            commands::list::run(&ctx, partition, rockets, outcomes, sort.map(Into::into), page).await?
        }
        Commands::Favorite { partition, id } => commands::favorite::toggle(&ctx, partition, &id).await?,
        Commands::Favorites { partition } => commands::favorite::list(&ctx, partition)?,
        Commands::Show { id } => commands::show::run(&ctx, &id).await?,
    }

    Ok(())
}
