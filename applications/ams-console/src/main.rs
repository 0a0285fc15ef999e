/// Artist Management System - admin console
use ams_client::AmsClient;
use ams_console::{config::ConsoleConfig, render, Shell};
use ams_core::{Gateway, Role, SessionState, SessionStore};
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ams-console")]
#[command(about = "Artist Management System admin console", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API base URL, overriding file and environment
    #[arg(long, env = "AMS_BASE_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Shell,
    /// Print the navigation for a role without contacting the server
    Nav {
        /// super_admin, artist_manager or artist; anything else is a guest
        #[arg(short, long)]
        role: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConsoleConfig::load(cli.config.as_deref())?.with_base_url(cli.base_url);
    config.validate()?;

    // Initialize tracing; logs go to stderr so they never interleave with
    // shell output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => shell(&config).await?,
        Commands::Nav { role } => {
            println!("{}", render::nav(Role::from_wire(role.as_deref())));
        }
    }

    Ok(())
}

async fn shell(config: &ConsoleConfig) -> anyhow::Result<()> {
    tracing::info!("Starting console against {}", config.api.base_url);

    let session = Arc::new(SessionStore::in_memory());
    let client = AmsClient::new(config.client_config(), Arc::clone(&session))?;
    let gateway: Arc<dyn Gateway> = Arc::new(client);

    tokio::spawn(log_session_changes(session.subscribe()));

    println!("Type `help` for commands, `exit` to quit.");
    Shell::new(gateway, session).run().await?;
    Ok(())
}

async fn log_session_changes(mut changes: watch::Receiver<SessionState>) {
    while changes.changed().await.is_ok() {
        let state = changes.borrow_and_update().clone();
        tracing::info!(
            authenticated = state.authenticated,
            role = %state.role(),
            "Session changed"
        );
    }
}
