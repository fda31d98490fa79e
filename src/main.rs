mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    init_tracing(args.verbose);
    cli::context::init(&args.config, args.overrides.as_deref(), args.quiet);

    let env = args.env.as_deref();

    let result = match &args.command {
        Commands::Init => cli::commands::init::execute(),
        Commands::Check { all } => cli::commands::check::execute(env, *all),
        Commands::Show => cli::commands::show::execute(env),
        Commands::Export {
            format,
            out,
            stdout,
        } => cli::commands::export::execute(env, format.as_deref(), out.as_deref(), *stdout),
        Commands::Diff { left, right } => cli::commands::diff::execute(left, right),
        Commands::Endpoints => cli::commands::endpoints::execute(env),
        Commands::Status => cli::commands::status::execute(),
        Commands::Probe { timeout } => cli::commands::probe::execute(env, *timeout),
    };

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so rendered output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
