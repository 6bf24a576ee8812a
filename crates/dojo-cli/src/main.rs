use clap::Parser;

mod bootstrap;
mod cli;
mod commands;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("dojo error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(&cli)?;

    let flags = cli.global_flags();

    match cli.command {
        cli::Commands::RewriteSchema(args) => {
            commands::rewrite_schema::handle(&args, bootstrap::load_config)
        }
        cli::Commands::Serve(args) => {
            let config = bootstrap::load_config()?;
            commands::serve::handle(&args, &config, &flags).await
        }
    }
}

fn init_tracing(cli: &cli::Cli) -> anyhow::Result<()> {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else if matches!(cli.command, cli::Commands::Serve(_)) {
        // Request lines are the point of running the server.
        "info"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DOJO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
