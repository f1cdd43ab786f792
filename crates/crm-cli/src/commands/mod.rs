//! Command handlers, one module per command group.

pub mod activities;
pub mod companies;
pub mod contacts;
pub mod dashboard;
pub mod metrics;
pub mod misc;
mod records;
pub mod reports;
pub mod shell;

use crate::app::AppContext;
use crate::cli::Commands;

/// Run one command against the session, then print its notices.
///
/// `shell` is handled by the caller; nested shells are rejected.
pub async fn execute(ctx: &AppContext<'_>, command: &Commands) -> anyhow::Result<()> {
    let result = match command {
        Commands::Contacts(command) => contacts::handle(ctx, command).await,
        Commands::Companies(command) => companies::handle(ctx, command).await,
        Commands::Activities(command) => activities::handle(ctx, command).await,
        Commands::Reports(command) => reports::handle(ctx, command).await,
        Commands::Metrics(command) => metrics::handle(ctx, command).await,
        Commands::Dashboard => dashboard::handle(ctx).await,
        Commands::Completions(args) => misc::handle_completions(args),
        Commands::Shell => Err(anyhow::anyhow!("Already in a shell")),
    };
    ctx.flush_notices();
    result
}
