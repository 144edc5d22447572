//! Anvil - forge project scaffolding
//!
//! CLI entry point that dispatches to subcommands.

use anvil::cli::{commands, Cli, Commands};
use anvil::config::ConfigManager;
use anvil::error::AnvilResult;
use anvil::session::{Credential, Session};
use anvil::ui;
use clap::Parser;
use console::style;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AnvilResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn (spinners only), 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => tracing_subscriber::EnvFilter::new("anvil=warn"),
        1 => tracing_subscriber::EnvFilter::new("anvil=info"),
        _ => tracing_subscriber::EnvFilter::new("anvil=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    ui::init_theme();

    // Completions don't need config or a session
    if let Commands::Completions(args) = cli.command {
        return commands::completions(args);
    }

    // Load configuration
    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };

    let mut config = config_manager.load().await?;
    if let Some(server) = cli.server {
        config.server.base_url = server;
    }

    // Credential pair lives in memory for this invocation only
    let mut session = match (cli.identity, cli.secret) {
        (Some(identity), Some(secret)) if !identity.is_empty() && !secret.is_empty() => {
            Session::with_credential(Credential::new(identity, secret))
        }
        _ => Session::anonymous(),
    };

    // Dispatch to command
    match cli.command {
        Commands::Completions(_) => unreachable!("Completions handled above"),
        Commands::Create(args) => commands::create(args, &mut session, &config).await,
        Commands::Groups(args) => commands::groups(args, &mut session, &config).await,
        Commands::Login => commands::login(&mut session, &config).await,
        Commands::Config(args) => commands::config(args, &config_manager, &config).await,
    }
}
