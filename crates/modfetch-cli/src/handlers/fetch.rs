//! Fetch handler: run the batch and report it.

use modfetch_core::BatchSummary;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::render_summary;

/// Exit code when the batch ran but some artifact failed.
pub const PARTIAL_FAILURE_EXIT_CODE: i32 = 1;

/// Execute the fetch and print the summary.
///
/// # Errors
///
/// Returns `CliError::Destination` if the output directory is unusable.
pub async fn execute(ctx: &CliContext) -> Result<i32, CliError> {
    let summary = ctx
        .orchestrator
        .fetch_all(&ctx.names, &ctx.destination, &ctx.credentials)
        .await?;

    for line in render_summary(&summary) {
        println!("{line}");
    }

    Ok(exit_code(&summary))
}

/// 0 when nothing failed, 1 otherwise.
pub fn exit_code(summary: &BatchSummary) -> i32 {
    if summary.all_succeeded() {
        0
    } else {
        PARTIAL_FAILURE_EXIT_CODE
    }
}
