//! Groups command - list or search groups

use console::style;

use crate::api::{DirectoryApi, ForgeClient, Group};
use crate::cli::args::{GroupsArgs, OutputFormat};
use crate::config::Config;
use crate::error::AnvilResult;
use crate::session::Session;
use crate::ui::{self, UiContext};

/// Execute the groups command
pub async fn execute(args: GroupsArgs, session: &mut Session, config: &Config) -> AnvilResult<()> {
    let ctx = UiContext::detect();
    let credential = super::acquire_credential(&ctx, session).await?;
    let client = ForgeClient::new(&config.server.base_url);

    let groups = if let Some(term) = &args.search {
        let limit = args.limit.unwrap_or(config.groups.search_limit);
        client.search_groups(&credential, term, limit).await?
    } else if args.all {
        client.groups(&credential).await?
    } else {
        let limit = args.limit.unwrap_or(config.groups.common_limit);
        client.common_groups(&credential, limit).await?
    };

    if groups.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => ui::step_info(&ctx, "No groups found"),
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&groups),
        OutputFormat::Json => print_json(&groups)?,
        OutputFormat::Plain => print_plain(&groups),
    }

    Ok(())
}

fn print_table(groups: &[Group]) {
    let name_width = groups
        .iter()
        .map(|g| g.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len())
        + 2;

    println!(
        "{:<8} {:<name_width$} {}",
        style("ID").bold(),
        style("NAME").bold(),
        style("PATH").bold(),
    );

    for group in groups {
        println!("{:<8} {:<name_width$} {}", group.id, group.name, group.path);
    }

    println!();
    println!("{} group(s)", groups.len());
}

fn print_json(groups: &[Group]) -> AnvilResult<()> {
    let json = serde_json::to_string_pretty(groups)?;
    println!("{}", json);
    Ok(())
}

fn print_plain(groups: &[Group]) {
    for group in groups {
        println!("{}", group.path);
    }
}
