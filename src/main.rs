use clap::Parser;
use stockroom::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path }) => {
            stockroom::cli::init::run(path).await?;
        }
        Some(Commands::Serve { host, port }) => {
            stockroom::cli::serve::run(&cli.config, &host, port).await?;
        }
        Some(Commands::Migrate) => {
            stockroom::cli::migrate::run(&cli.config).await?;
        }
        Some(Commands::Seed) => {
            stockroom::cli::seed::run(&cli.config).await?;
        }
        None => {
            // No subcommand provided, print help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
