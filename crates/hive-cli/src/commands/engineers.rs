use hive_core::entities::Engineer;
use hive_core::filter::EngineerField;
use hive_site::SiteService;
use hive_site::view::{Listing, ViewState};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EngineersArgs;
use crate::commands::shared::filter::options_caption;
use crate::context::AppContext;
use crate::output::{Table, ViewMessages, list_cell, output_view, text_cell};
use crate::progress::Progress;

const MESSAGES: ViewMessages = ViewMessages {
    empty: "No engineers to display yet",
    not_found: "No engineers to display yet",
};

/// Handle `hive engineers`.
pub async fn handle(
    args: &EngineersArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = load(&ctx.service, args.role.as_deref()).await;
    output_view(&state, flags.format, MESSAGES, |listing| {
        table(listing, flags.skill_preview)
    })
}

async fn load(service: &SiteService, role: Option<&str>) -> ViewState<Listing<Engineer>> {
    let progress = Progress::spinner("Loading engineers...");
    let result = service.load_collection::<Engineer>(None).await;
    progress.finish_clear();

    ViewState::<Vec<Engineer>>::from_collection(result)
        .map(|engineers| Listing::project(&engineers, EngineerField::Role, role))
}

fn table(listing: &Listing<Engineer>, skill_preview: usize) -> Table {
    let mut table = Table::new(&["id", "name", "role", "skills", "github", "bio"])
        .caption(options_caption("Role", listing));
    for engineer in &listing.items {
        table.row(vec![
            engineer.id.clone(),
            engineer.name.clone(),
            engineer.role.clone(),
            skills_cell(engineer, skill_preview),
            text_cell(&engineer.github_url),
            text_cell(&engineer.bio),
        ]);
    }
    table
}

fn skills_cell(engineer: &Engineer, shown: usize) -> String {
    let (preview, hidden) = engineer.skill_preview(shown);
    let cell = list_cell(preview);
    if hidden == 0 {
        cell
    } else {
        format!("{cell} +{hidden}")
    }
}
