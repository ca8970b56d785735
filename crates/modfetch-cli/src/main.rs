//! CLI entry point.

use anyhow::Context;
use clap::Parser;

use modfetch_cli::logging::init_tracing;
use modfetch_cli::{Cli, handlers};

fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;
    let code = runtime.block_on(handlers::run(&cli));
    drop(runtime);

    std::process::exit(code);
}
