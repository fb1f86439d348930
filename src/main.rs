use clap::Parser;
use tracing_subscriber::EnvFilter;

use str_match::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("str_match=debug,info")
    } else {
        EnvFilter::new("str_match=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Analyze(args) => {
            cli::analyze::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Cleanup(args) => {
            cli::cleanup::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
