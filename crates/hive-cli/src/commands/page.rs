use hive_core::forms::{BUDGET_RANGES, EXPERTISE_AREAS, PROJECT_TYPES};
use hive_core::routes::Route;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{
    EngineerArgs, EngineersArgs, MetricsArgs, PageArgs, ProjectsArgs, ServicesArgs,
};
use crate::commands::{engineer, engineers, metrics, projects, services};
use crate::context::AppContext;
use crate::output::{Table, output};

/// Handle `hive page <PATH>` for pages that need no backend.
///
/// Returns `None` when the route has to read remote data.
pub async fn handle_offline(args: &PageArgs, flags: &GlobalFlags) -> Option<anyhow::Result<()>> {
    let route = match args.path.parse::<Route>() {
        Ok(route) => route,
        Err(error) => return Some(Err(error.into())),
    };

    match route {
        Route::Home => Some(
            metrics::handle(
                &MetricsArgs {
                    animate: true,
                    visibility: 1.0,
                },
                flags,
            )
            .await,
        ),
        Route::Services => Some(services::handle(&ServicesArgs { title: None }, flags)),
        Route::Contact => Some(output(&contact_options(), flags.format, options_table)),
        Route::Contribute => Some(output(&contribute_options(), flags.format, options_table)),
        Route::Portfolio | Route::Engineers | Route::Engineer { .. } => None,
    }
}

/// Handle `hive page <PATH>`.
pub async fn handle(args: &PageArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(result) = handle_offline(args, flags).await {
        return result;
    }

    match args.path.parse::<Route>()? {
        Route::Portfolio => projects::handle(&ProjectsArgs { category: None }, ctx, flags).await,
        Route::Engineers => engineers::handle(&EngineersArgs { role: None }, ctx, flags).await,
        Route::Engineer { id } => engineer::handle(&EngineerArgs { id }, ctx, flags).await,
        other => anyhow::bail!("no remote view for {}", other.path()),
    }
}

/// Field name → offered choices.
type FormOptions = Vec<(&'static str, Vec<&'static str>)>;

fn contact_options() -> FormOptions {
    vec![
        ("project_type", PROJECT_TYPES.to_vec()),
        (
            "budget_range",
            BUDGET_RANGES.iter().map(|(value, _)| *value).collect(),
        ),
    ]
}

fn contribute_options() -> FormOptions {
    vec![("expertise", EXPERTISE_AREAS.to_vec())]
}

fn options_table(options: &FormOptions) -> Table {
    let mut table = Table::new(&["field", "choices"]);
    for (field, choices) in options {
        table.row(vec![(*field).to_string(), choices.join(" | ")]);
    }
    table
}
