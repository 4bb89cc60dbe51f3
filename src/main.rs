use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trip_producer::config::resolve_config_path;

#[derive(Parser)]
#[command(name = "trip-producer")]
#[command(about = "Republishes taxi trips to a message queue in fixed-size batches", long_about = None)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    Run,
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    Init {
        #[arg(long)]
        stdout: bool,
    },
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trip_producer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config_path = resolve_config_path(cli.config.as_deref());

    match cli.command {
        Some(Commands::Run) | None => {
            trip_producer::cli::run::run(config_path).await?;
        }
        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { stdout } => {
                trip_producer::cli::config::init(stdout)?;
            }
            ConfigAction::Validate => {
                trip_producer::cli::config::validate(config_path)?;
            }
        },
    }

    Ok(())
}
