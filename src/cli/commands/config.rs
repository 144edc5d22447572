//! Config command - show or edit configuration

use clap::ValueEnum;

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{AnvilError, AnvilResult};
use crate::form::{ProjectType, TechStack};
use crate::ui::{self, UiContext};

/// Execute the config command
pub async fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> AnvilResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config),
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) {
    let toml =
        toml::to_string_pretty(config).unwrap_or_else(|_| "Error serializing config".to_string());
    println!("{}", toml);
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool) -> AnvilResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    let config = Config::default();
    manager.save(&config).await?;

    ui::step_ok(&ctx, &format!("Configuration written to {}", path.display()));

    Ok(())
}

async fn set_value(
    manager: &ConfigManager,
    config: &Config,
    key: &str,
    value: &str,
) -> AnvilResult<()> {
    let ctx = UiContext::detect();
    let mut config = config.clone();

    // Parse dot-separated key path
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "verbose"] => config.general.verbose = parse_bool(value)?,
        ["general", "log_format"] => config.general.log_format = value.to_string(),

        ["server", "base_url"] => config.server.base_url = value.to_string(),

        ["groups", "common_limit"] => config.groups.common_limit = parse_usize(value)?,
        ["groups", "search_limit"] => config.groups.search_limit = parse_usize(value)?,
        ["groups", "debounce_ms"] => config.groups.debounce_ms = parse_u64(value)?,

        ["project", "default_type"] => {
            config.project.default_type = Some(
                ProjectType::from_str(value, true)
                    .map_err(|_| AnvilError::User(format!("Unknown project type: {}", value)))?,
            )
        }
        ["project", "default_stack"] => {
            config.project.default_stack = Some(
                TechStack::from_str(value, true)
                    .map_err(|_| AnvilError::User(format!("Unknown stack: {}", value)))?,
            )
        }

        _ => {
            ui::step_error(&ctx, &format!("Unknown config key: {}", key));
            ui::remark(&ctx, "Valid keys:");
            print_valid_keys();
            return Ok(());
        }
    }

    manager.save(&config).await?;
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));

    Ok(())
}

fn parse_bool(value: &str) -> AnvilResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(AnvilError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}

fn parse_usize(value: &str) -> AnvilResult<usize> {
    value
        .parse()
        .map_err(|_| AnvilError::User(format!("Invalid number: {}", value)))
}

fn parse_u64(value: &str) -> AnvilResult<u64> {
    value
        .parse()
        .map_err(|_| AnvilError::User(format!("Invalid number: {}", value)))
}

fn print_valid_keys() {
    let keys = [
        "general.verbose",
        "general.log_format",
        "server.base_url",
        "groups.common_limit",
        "groups.search_limit",
        "groups.debounce_ms",
        "project.default_type",
        "project.default_stack",
    ];

    for key in keys {
        eprintln!("  {}", key);
    }
}
