mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use squirrel_dirs::{DirectoryManager, FixedRootProvider, Identifier, Location};
use tracing_subscriber::EnvFilter;

use render::render_text;

#[derive(Parser, Debug)]
#[command(name = "squirrel-paths", about = "Print the directories Squirrel and ShipIt share")]
struct Args {
    /// Application or job identifier. Defaults to this process's identity.
    #[arg(long)]
    identifier: Option<String>,

    /// Resolve below this directory instead of the platform data directory.
    #[arg(long, env = "SQUIRREL_SUPPORT_ROOT")]
    root: Option<PathBuf>,

    /// Only print one location.
    #[arg(long, value_enum)]
    only: Option<Only>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum Only {
    Support,
    Download,
    Unpack,
    State,
}

impl From<Only> for Location {
    fn from(only: Only) -> Self {
        match only {
            Only::Support => Location::ApplicationSupport,
            Only::Download => Location::Downloads,
            Only::Unpack => Location::Unpacked,
            Only::State => Location::ShipItState,
        }
    }
}

fn build_manager(args: &Args) -> anyhow::Result<DirectoryManager> {
    let manager = match (&args.identifier, &args.root) {
        (Some(id), Some(root)) => {
            DirectoryManager::with_provider(Identifier::new(id.as_str())?, Arc::new(FixedRootProvider::new(root)))
        }
        (Some(id), None) => DirectoryManager::with_identifier(id.as_str())?,
        (None, Some(root)) => {
            let current = DirectoryManager::current_application()?;
            DirectoryManager::with_provider(current.identifier().clone(), Arc::new(FixedRootProvider::new(root)))
        }
        (None, None) => DirectoryManager::current_application()?.clone(),
    };
    Ok(manager)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let manager = build_manager(&args)?;
    tracing::debug!("Resolving locations for {}", manager.identifier());

    if let Some(only) = args.only {
        let path = manager.resolve(only.into()).await?;
        if args.json {
            println!("{}", serde_json::to_string(&path)?);
        } else {
            println!("{}", path.display());
        }
        return Ok(());
    }

    let layout = manager.layout().await?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
    } else {
        print!("{}", render_text(&layout));
    }
    Ok(())
}
