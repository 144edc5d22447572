//! Completions command - generate shell completion scripts

use clap::CommandFactory;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::AnvilResult;

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> AnvilResult<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "anvil", &mut std::io::stdout());
    Ok(())
}
