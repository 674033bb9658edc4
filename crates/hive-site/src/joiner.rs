//! Relation joiner: an engineer plus the projects they contributed to.
//!
//! The engineer row and the engineer's `engineer_projects` edges are read
//! concurrently, then merged by [`hive_core::join::merge_contributions`].

use hive_core::entities::{Engineer, EngineerProjectEdge, ProjectWithContribution};
use hive_core::enums::Collection;
use hive_core::join::merge_contributions;
use hive_store::{Embed, Select};
use serde::Serialize;

use crate::error::SiteError;
use crate::loader::decode_rows;
use crate::service::SiteService;

const EDGE_COLUMNS: &[&str] = &["engineer_id", "project_id", "contribution"];

/// Everything the engineer profile page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EngineerPortfolio {
    pub engineer: Engineer,
    /// In edge order as returned by the store.
    pub projects: Vec<ProjectWithContribution>,
}

impl SiteService {
    /// Projects the engineer contributed to, each with the edge's
    /// `contribution`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_engineer_portfolio`].
    pub async fn load_related_projects(
        &self,
        engineer_id: &str,
    ) -> Result<Vec<ProjectWithContribution>, SiteError> {
        self.load_engineer_portfolio(engineer_id)
            .await
            .map(|portfolio| portfolio.projects)
    }

    /// Load an engineer and their merged projects.
    ///
    /// Both reads are awaited before anything is returned. A failure reading
    /// the engineer wins over any edge outcome. An empty project list is a
    /// success.
    ///
    /// # Errors
    ///
    /// - [`SiteError::NotFound`] if the id is blank or matches no engineer.
    /// - [`SiteError::RemoteFetch`] if either read fails.
    pub async fn load_engineer_portfolio(
        &self,
        engineer_id: &str,
    ) -> Result<EngineerPortfolio, SiteError> {
        if engineer_id.trim().is_empty() {
            return Err(not_found(engineer_id));
        }

        let (engineer, edges) = tokio::join!(
            self.fetch_engineer(engineer_id),
            self.fetch_edges(engineer_id)
        );
        let engineer = engineer?;
        let merged = merge_contributions(edges?);

        if !merged.dangling.is_empty() {
            tracing::debug!(
                engineer_id,
                dangling = ?merged.dangling,
                "skipped edges with no matching project"
            );
        }

        Ok(EngineerPortfolio {
            engineer,
            projects: merged.projects,
        })
    }

    async fn fetch_engineer(&self, engineer_id: &str) -> Result<Engineer, SiteError> {
        let query = Select::from(Collection::Engineers)
            .eq("id", engineer_id)
            .limit(1);
        let rows = self.fetch_rows(&query).await?;
        decode_rows::<Engineer>(Collection::Engineers, rows)?
            .into_iter()
            .next()
            .ok_or_else(|| not_found(engineer_id))
    }

    async fn fetch_edges(&self, engineer_id: &str) -> Result<Vec<EngineerProjectEdge>, SiteError> {
        let query = Select::from(Collection::EngineerProjects)
            .columns(EDGE_COLUMNS)
            .eq("engineer_id", engineer_id)
            .embed(Embed::new(Collection::Projects, "project_id"));
        let rows = self.fetch_rows(&query).await?;
        decode_rows(Collection::EngineerProjects, rows)
    }
}

fn not_found(engineer_id: &str) -> SiteError {
    SiteError::NotFound {
        entity: "engineer",
        id: engineer_id.to_string(),
    }
}
