use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Run commands that never touch the backend.
///
/// Returns `None` when `command` needs an [`AppContext`].
pub async fn dispatch_offline(
    command: &Commands,
    flags: &GlobalFlags,
) -> Option<anyhow::Result<()>> {
    match command {
        Commands::Services(args) => Some(commands::services::handle(args, flags)),
        Commands::Metrics(args) => Some(commands::metrics::handle(args, flags).await),
        Commands::Page(args) => commands::page::handle_offline(args, flags).await,
        Commands::Engineers(_)
        | Commands::Projects(_)
        | Commands::Engineer(_)
        | Commands::Inquire(_)
        | Commands::Apply(_) => None,
    }
}

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Engineers(args) => commands::engineers::handle(&args, ctx, flags).await,
        Commands::Projects(args) => commands::projects::handle(&args, ctx, flags).await,
        Commands::Engineer(args) => commands::engineer::handle(&args, ctx, flags).await,
        Commands::Services(args) => commands::services::handle(&args, flags),
        Commands::Metrics(args) => commands::metrics::handle(&args, flags).await,
        Commands::Page(args) => commands::page::handle(&args, ctx, flags).await,
        Commands::Inquire(args) => commands::inquire::handle(&args, ctx, flags).await,
        Commands::Apply(args) => commands::apply::handle(&args, ctx, flags).await,
    }
}
