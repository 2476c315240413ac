use anyhow::Context;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod onboarding;
mod output;
mod progress;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("campus error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    if let cli::Commands::Filters(args) = &cli.command {
        return commands::filters::handle(args, &flags);
    }

    let config =
        campus_config::CampusConfig::load_with_dotenv().context("failed to load configuration")?;

    if let cli::Commands::Onboarding { action } = &cli.command {
        return commands::onboarding::handle(action, &config, &flags);
    }

    let ctx = context::AppContext::init(config, &flags).await?;
    commands::dispatch(&cli.command, &ctx, &flags)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CAMPUS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
