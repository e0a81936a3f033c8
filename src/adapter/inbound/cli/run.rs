//! Command dispatch.

use super::command::{Cli, Commands, ConfigCommand};
use super::{config, gather, push};
use crate::error::Result;

/// Run the parsed command line.
///
/// # Errors
///
/// Returns the first error raised by the selected command.
pub async fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Gather(args) => gather::execute(&args.config).await,
        Commands::Push(args) => push::execute(&args.config, &args.input).await,
        Commands::Config(ConfigCommand::Init(args)) => config::execute_init(&args.path, args.force),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config),
        Commands::Config(ConfigCommand::Sample) => {
            config::execute_sample();
            Ok(())
        }
    }
}
