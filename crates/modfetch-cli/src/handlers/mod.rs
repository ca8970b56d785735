//! Command handlers.

pub mod fetch;

use tracing::error;

use crate::bootstrap::{CliConfig, bootstrap};
use crate::error::CliError;
use crate::parser::Cli;

/// Run one invocation and return the process exit code.
pub async fn run(cli: &Cli) -> i32 {
    match try_run(cli).await {
        Ok(code) => code,
        Err(err) => {
            error!(target: "modfetch.cli", "{err}");
            err.exit_code()
        }
    }
}

async fn try_run(cli: &Cli) -> Result<i32, CliError> {
    let config = CliConfig::from_cli(cli)?;
    let ctx = bootstrap(config)?;
    fetch::execute(&ctx).await
}
