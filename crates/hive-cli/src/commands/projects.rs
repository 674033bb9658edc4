use hive_core::entities::Project;
use hive_core::filter::ProjectField;
use hive_site::SiteService;
use hive_site::view::{Listing, ViewState};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProjectsArgs;
use crate::commands::shared::filter::options_caption;
use crate::context::AppContext;
use crate::output::{Table, ViewMessages, list_cell, output_view, text_cell};
use crate::progress::Progress;

const MESSAGES: ViewMessages = ViewMessages {
    empty: "No projects to display yet",
    not_found: "No projects to display yet",
};

/// Handle `hive projects`.
pub async fn handle(
    args: &ProjectsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = load(&ctx.service, args.category.as_deref()).await;
    output_view(&state, flags.format, MESSAGES, table)
}

async fn load(service: &SiteService, category: Option<&str>) -> ViewState<Listing<Project>> {
    let progress = Progress::spinner("Loading projects...");
    let result = service.load_collection::<Project>(None).await;
    progress.finish_clear();

    ViewState::<Vec<Project>>::from_collection(result)
        .map(|projects| Listing::project(&projects, ProjectField::Category, category))
}

fn table(listing: &Listing<Project>) -> Table {
    let mut table = Table::new(&["id", "title", "category", "tech", "added", "description"])
        .caption(options_caption("Category", listing));
    for project in &listing.items {
        table.row(vec![
            project.id.clone(),
            project.title.clone(),
            project.category.clone(),
            list_cell(&project.tech_stack),
            project
                .created_at
                .map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d").to_string()),
            text_cell(&project.description),
        ]);
    }
    for project in listing.items.iter().filter(|p| p.has_narrative()) {
        case_study(&mut table, project);
    }
    table
}

/// Problem, solution and outcome lines for one project, below the table.
fn case_study(table: &mut Table, project: &Project) {
    table.note(format!("{}:", project.title));
    for (label, text) in [
        ("Problem", &project.problem),
        ("Solution", &project.solution),
        ("Outcome", &project.outcome),
    ] {
        if let Some(text) = text {
            table.note(format!("  {label}: {text}"));
        }
    }
}
