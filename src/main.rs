mod cli;
mod render;
mod steps;

use anyhow::Context;
use cli::{CommandLine, Commands};
use housing_browser::{CatalogueSource, Command, Effect, JsonFileCatalogue, Session};
use steps::{Resolved, Step};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    // Logs go to stderr so rendered listings on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("🏠 Housing Browser");

    let source = JsonFileCatalogue::new(&commands.catalogue);
    let listings = source
        .load()
        .await
        .with_context(|| format!("Failed to load catalogue from {}", source.source_name()))?;
    let session = Session::new(listings);

    match commands.command {
        Commands::Search(args) => {
            let (session, _) = session.update(Command::Search(args.into()));
            render::results(&session);
        }
        Commands::Show { id } => match session.listing(&id).cloned() {
            Some(listing) => {
                let (session, _) = session.update(Command::View(listing));
                render::session(&session);
            }
            None => render::detail(None, false),
        },
        Commands::Session => run_session(session).await?,
    }

    Ok(())
}

/// Apply one JSON step per stdin line, rendering after each
async fn run_session(mut session: Session) -> anyhow::Result<()> {
    render::session(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let step: Step = match serde_json::from_str(line) {
            Ok(step) => step,
            Err(e) => {
                warn!("Skipping unreadable step '{}': {}", line, e);
                continue;
            }
        };

        match step.resolve(&session) {
            Resolved::Command(command) => {
                let (next, effect) = session.update(command);
                session = next;
                if effect == Effect::ScrollToTop {
                    debug!("Scrolling to top");
                }
                render::session(&session);
            }
            Resolved::NotFound(_) => render::detail(None, false),
        }
    }

    info!("Session finished with {} favourites", session.favourites().len());
    Ok(())
}
