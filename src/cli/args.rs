//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::form::{DeployTarget, ProjectType, TechStack};

/// Anvil - forge project scaffolding
///
/// Creates projects on your software forge: validates a credential pair,
/// searches groups as you type, and submits the project configuration.
#[derive(Parser, Debug)]
#[command(name = "anvil")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ANVIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Forge base URL (overrides config)
    #[arg(long, global = true, env = "ANVIL_SERVER")]
    pub server: Option<String>,

    /// Account identity for the forge
    #[arg(long, global = true, env = "ANVIL_IDENTITY")]
    pub identity: Option<String>,

    /// Account secret for the forge
    #[arg(long, global = true, env = "ANVIL_SECRET", hide_env_values = true)]
    pub secret: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a project on the forge
    Create(CreateArgs),

    /// List or search groups
    Groups(GroupsArgs),

    /// Validate the credential pair
    Login,

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the create command
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Group to create the project under (skips the interactive picker)
    #[arg(long)]
    pub group_id: Option<u64>,

    /// Project type
    #[arg(long, value_enum)]
    pub project_type: Option<ProjectType>,

    /// Technology stack (ignored for delivery projects)
    #[arg(long, value_enum)]
    pub stack: Option<TechStack>,

    /// Deployment namespace assignment (TARGET=NAMESPACE, repeatable)
    #[arg(long = "namespace", value_parser = parse_namespace)]
    pub namespaces: Vec<(DeployTarget, String)>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the groups command
#[derive(Parser, Debug)]
pub struct GroupsArgs {
    /// Fetch the full group list instead of the common subset
    #[arg(long, conflicts_with = "search")]
    pub all: bool,

    /// Search groups matching a term
    #[arg(short, long)]
    pub search: Option<String>,

    /// Maximum number of groups to fetch
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., server.base_url)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Output format for the groups command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one path per line)
    Plain,
}

/// Parse a deployment namespace in TARGET=NAMESPACE format
fn parse_namespace(s: &str) -> Result<(DeployTarget, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid TARGET=NAMESPACE format: no '=' found in '{s}'"))?;
    let target = DeployTarget::from_str(&s[..pos], true)
        .map_err(|_| format!("unknown deployment target '{}'", &s[..pos]))?;
    Ok((target, s[pos + 1..].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_namespace_valid() {
        let (target, ns) = parse_namespace("staging=apps-staging").unwrap();
        assert_eq!(target, DeployTarget::Staging);
        assert_eq!(ns, "apps-staging");
    }

    #[test]
    fn parse_namespace_unknown_target() {
        assert!(parse_namespace("qa=apps-qa").is_err());
    }

    #[test]
    fn parse_namespace_missing_equals() {
        assert!(parse_namespace("staging").is_err());
    }

    #[test]
    fn cli_parses_create() {
        let cli = Cli::parse_from([
            "anvil",
            "create",
            "--name",
            "billing",
            "--group-id",
            "7",
            "--project-type",
            "delivery",
            "--namespace",
            "production=apps-prod",
            "--yes",
        ]);
        match cli.command {
            Commands::Create(args) => {
                assert_eq!(args.name.as_deref(), Some("billing"));
                assert_eq!(args.group_id, Some(7));
                assert_eq!(args.project_type, Some(ProjectType::Delivery));
                assert_eq!(
                    args.namespaces,
                    vec![(DeployTarget::Production, "apps-prod".to_string())]
                );
                assert!(args.yes);
            }
            _ => panic!("expected Create command"),
        }
    }

    #[test]
    fn cli_parses_groups_search() {
        let cli = Cli::parse_from(["anvil", "groups", "--search", "platform", "--limit", "5"]);
        match cli.command {
            Commands::Groups(args) => {
                assert_eq!(args.search.as_deref(), Some("platform"));
                assert_eq!(args.limit, Some(5));
                assert!(!args.all);
            }
            _ => panic!("expected Groups command"),
        }
    }

    #[test]
    fn cli_groups_all_conflicts_with_search() {
        let result =
            Cli::try_parse_from(["anvil", "groups", "--all", "--search", "platform"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_login() {
        let cli = Cli::parse_from(["anvil", "login"]);
        assert!(matches!(cli.command, Commands::Login));
    }

    #[test]
    fn cli_parses_completions() {
        let cli = Cli::parse_from(["anvil", "completions", "bash"]);
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, clap_complete::Shell::Bash);
            }
            _ => panic!("expected Completions command"),
        }
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["anvil", "login"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["anvil", "-v", "login"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["anvil", "-vv", "login"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_server_override() {
        let cli = Cli::parse_from(["anvil", "--server", "https://forge.internal", "login"]);
        assert_eq!(cli.server.as_deref(), Some("https://forge.internal"));
    }
}
