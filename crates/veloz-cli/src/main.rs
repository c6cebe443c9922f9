use anyhow::Context;
use clap::Parser;
use veloz_auth::Session;
use veloz_config::VelozConfig;

mod cli;
mod commands;
mod context;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("veloz error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Route(args) = &cli.command {
        return commands::route::handle(args, &flags);
    }

    let config = VelozConfig::load_with_dotenv().context("failed to load veloz configuration")?;
    let ctx = context::AppContext::init(config).context("failed to initialize veloz")?;

    match &cli.command {
        cli::Commands::Login(args) => return commands::session::login(args, &ctx, &flags).await,
        cli::Commands::Logout => return commands::session::logout(&ctx, &flags),
        _ => {}
    }

    let session = Session::restore(&ctx.sessions)?;
    commands::dispatch::dispatch(cli.command, &ctx, &session, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VELOZ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
