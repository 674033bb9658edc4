use hive_site::view::ViewState;
use hive_site::{EngineerPortfolio, SiteService};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::EngineerArgs;
use crate::context::AppContext;
use crate::output::{Table, ViewMessages, list_cell, output_view, text_cell};
use crate::progress::Progress;

const MESSAGES: ViewMessages = ViewMessages {
    empty: "No projects to display yet",
    not_found: "Engineer not found",
};

/// Handle `hive engineer <ID>`.
pub async fn handle(
    args: &EngineerArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = load(&ctx.service, &args.id).await;
    output_view(&state, flags.format, MESSAGES, table)
}

async fn load(service: &SiteService, id: &str) -> ViewState<EngineerPortfolio> {
    let progress = Progress::spinner("Loading engineer...");
    let result = service.load_engineer_portfolio(id).await;
    progress.finish_clear();
    ViewState::<EngineerPortfolio>::from_portfolio(result)
}

fn table(portfolio: &EngineerPortfolio) -> Table {
    let engineer = &portfolio.engineer;
    let mut table = Table::new(&["project", "category", "contribution", "tech", "description"])
        .caption(format!("{} ({})", engineer.name, engineer.role))
        .caption(list_cell(&engineer.skills));
    if !engineer.bio.is_empty() {
        table = table.caption(engineer.bio.clone());
    }
    for link in [&engineer.github_url, &engineer.linkedin_url]
        .into_iter()
        .chain(engineer.portfolio_url.as_ref())
        .filter(|link| !link.is_empty())
    {
        table = table.caption(link.clone());
    }

    if portfolio.projects.is_empty() {
        return table.caption(MESSAGES.empty);
    }

    table = table.caption(format!(
        "Projects that {} has contributed to:",
        engineer.first_name()
    ));
    for item in &portfolio.projects {
        table.row(vec![
            item.project.title.clone(),
            item.project.category.clone(),
            item.contribution().unwrap_or("-").to_string(),
            list_cell(&item.project.tech_stack),
            text_cell(&item.project.description),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hive_core::enums::Collection;
    use hive_site::SiteService;
    use hive_site::view::ViewState;
    use hive_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{load, table};

    fn store() -> MemoryStore {
        MemoryStore::new()
            .with_rows(
                Collection::Engineers,
                vec![
                    json!({"id": "e1", "name": "Ana Silva", "role": "Frontend", "skills": ["React"]}),
                    json!({"id": "e2", "name": "Ben", "role": "Backend"}),
                ],
            )
            .with_rows(
                Collection::Projects,
                vec![json!({"id": "p1", "title": "Shop", "category": "web", "description": "Storefront rebuild"})],
            )
            .with_rows(
                Collection::EngineerProjects,
                vec![json!({"engineer_id": "e1", "project_id": "p1", "contribution": "Checkout UI"})],
            )
    }

    #[tokio::test]
    async fn portfolio_table_lists_contributions() {
        let state = load(&SiteService::new(Arc::new(store())), "e1").await;
        let rendered = table(state.ready().expect("engineer loaded")).render(None);
        assert!(rendered.starts_with("Ana Silva (Frontend)"));
        assert!(rendered.contains("Projects that Ana has contributed to:"));
        let row = rendered.lines().last().expect("one project row");
        assert!(row.contains("Checkout UI"));
        assert!(row.ends_with("Storefront rebuild"));
    }

    #[tokio::test]
    async fn engineer_without_projects_is_ready_with_message() {
        let state = load(&SiteService::new(Arc::new(store())), "e2").await;
        let rendered = table(state.ready().expect("engineer loaded")).render(None);
        assert!(rendered.contains("No projects to display yet"));
    }

    #[tokio::test]
    async fn unknown_engineer_is_not_found() {
        let state = load(&SiteService::new(Arc::new(store())), "zz").await;
        assert_eq!(state, ViewState::NotFound);
    }
}
