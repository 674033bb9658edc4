//! Engineer→project relation merge.
//!
//! Kept separate from the fetch so dangling-edge exclusion and merge
//! precedence can be tested without a store.

use crate::entities::{EngineerProjectEdge, ProjectWithContribution};

/// Outcome of merging a batch of edges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// One record per edge with a resolvable project, in edge order.
    pub projects: Vec<ProjectWithContribution>,
    /// Project ids of edges dropped because their embedded project was absent.
    pub dangling: Vec<String>,
}

/// Merge each edge's embedded project with the edge's `contribution`.
///
/// Edge order is preserved. Edges with no embedded project are excluded, never
/// emitted as partial records. The edge's `contribution` always wins over any
/// same-named key the project row happened to carry.
#[must_use]
pub fn merge_contributions(edges: Vec<EngineerProjectEdge>) -> MergeOutcome {
    let mut outcome = MergeOutcome {
        projects: Vec::with_capacity(edges.len()),
        dangling: Vec::new(),
    };
    for edge in edges {
        match edge.project {
            Some(project) => outcome.projects.push(ProjectWithContribution {
                project,
                contribution: edge.contribution,
            }),
            None => outcome.dangling.push(edge.project_id),
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn edge(json: &str) -> EngineerProjectEdge {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn merges_in_edge_order() {
        let outcome = merge_contributions(vec![
            edge(r#"{"project_id": "p2", "contribution": "design", "projects": {"id": "p2", "title": "Two"}}"#),
            edge(r#"{"project_id": "p1", "contribution": "built API", "projects": {"id": "p1", "title": "One"}}"#),
        ]);
        let got: Vec<_> = outcome
            .projects
            .iter()
            .map(|p| (p.project.id.as_str(), p.contribution.as_str()))
            .collect();
        assert_eq!(got, vec![("p2", "design"), ("p1", "built API")]);
        assert!(outcome.dangling.is_empty());
    }

    #[test]
    fn dangling_edges_are_excluded() {
        let outcome = merge_contributions(vec![
            edge(r#"{"project_id": "p1", "contribution": "a", "projects": {"id": "p1"}}"#),
            edge(r#"{"project_id": "gone", "contribution": "b", "projects": null}"#),
            edge(r#"{"project_id": "p3", "contribution": "c", "projects": {"id": "p3"}}"#),
        ]);
        assert_eq!(outcome.projects.len(), 2);
        assert_eq!(outcome.dangling, vec!["gone".to_string()]);
    }

    #[test]
    fn edge_contribution_wins_over_project_key() {
        let outcome = merge_contributions(vec![edge(
            r#"{"contribution": "fresh", "projects": {"id": "p1", "contribution": "stale"}}"#,
        )]);
        assert_eq!(outcome.projects[0].contribution, "fresh");
    }

    #[test]
    fn merged_record_keeps_full_project() {
        let outcome = merge_contributions(vec![edge(
            r#"{"project_id": "p1", "contribution": "API", "projects": {
                "id": "p1",
                "title": "Ledger",
                "description": "Double-entry books",
                "tech_stack": ["Rust"],
                "outcome": "Month-end close in a day"
            }}"#,
        )]);
        let merged = &outcome.projects[0];
        assert_eq!(merged.project.title, "Ledger");
        assert_eq!(merged.project.description, "Double-entry books");
        assert_eq!(merged.project.tech_stack, vec!["Rust"]);
        assert_eq!(merged.project.outcome.as_deref(), Some("Month-end close in a day"));
        assert_eq!(merged.contribution, "API");
    }

    #[test]
    fn no_edges_merge_to_nothing() {
        assert_eq!(merge_contributions(Vec::new()), MergeOutcome::default());
    }
}
