//! snippetbox CLI - store and read expiring text snippets
//!
//! Thin wrapper over snippetbox-store:
//! - `init` bootstraps the snippets table
//! - `create` stores a snippet and prints its id
//! - `show` prints one live snippet
//! - `latest` prints the ten most recent live snippets

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use snippetbox_store::{create_pool, ensure_schema, CallContext, PgPool, SnippetRepo, StoreConfig};

mod commands;
mod config;
mod tracing_setup;

use commands::{CreateArgs, LatestArgs, ShowArgs};
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "snippetbox",
    author,
    version,
    about = "Store and read expiring text snippets in PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// PostgreSQL connection string (overrides DATABASE_URL and config file)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    /// Give up on each database call after this many milliseconds
    #[arg(long, global = true, value_name = "MS", env = "SNIPPETBOX_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the snippets table if it does not exist
    Init,
    /// Store a new snippet and print its id
    Create(CreateArgs),
    /// Print a snippet by id (fails if missing or expired)
    Show(ShowArgs),
    /// Print the most recent snippets that have not expired
    Latest(LatestArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing: clap reads SNIPPETBOX_TIMEOUT_MS from the environment
    let env_files = config::load_dotenv();
    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;
    for path in &env_files {
        debug!("Loaded .env from {}", path.display());
    }

    let store_config = config::resolve(cli.database_url.as_deref())?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Init => {
            let pool = connect(&store_config).await?;
            ensure_schema(&pool).await.context("Failed to create schema")?;
            writeln!(stdout, "snippets table ready")?;
        }
        Commands::Create(args) => {
            // Bad input should fail without needing a database
            let (title, content, retention) = args.validated()?;
            let repo = SnippetRepo::new(connect(&store_config).await?);
            let ctx = call_context(cli.timeout_ms);
            commands::run_create(&repo, &ctx, title, content, retention, &mut stdout).await?;
        }
        Commands::Show(args) => {
            let repo = SnippetRepo::new(connect(&store_config).await?);
            let ctx = call_context(cli.timeout_ms);
            commands::run_show(&repo, &ctx, &args, &mut stdout).await?;
        }
        Commands::Latest(args) => {
            let repo = SnippetRepo::new(connect(&store_config).await?);
            let ctx = call_context(cli.timeout_ms);
            commands::run_latest(&repo, &ctx, &args, &mut stdout).await?;
        }
    }
    Ok(())
}

/// Deadline for the store call; starts counting once the pool is connected.
fn call_context(timeout_ms: Option<u64>) -> CallContext {
    match timeout_ms {
        Some(ms) => CallContext::with_timeout(Duration::from_millis(ms)),
        None => CallContext::background(),
    }
}

async fn connect(config: &StoreConfig) -> Result<PgPool> {
    create_pool(config)
        .await
        .context("Failed to connect to database")
}
