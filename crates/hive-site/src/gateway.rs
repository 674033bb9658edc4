//! Submission gateway: one insert per form submission.
//!
//! No retry, batching, or deduplication. Validation is the form layer's job
//! ([`hive_core::entities::Submission::validate`]).

use hive_core::entities::Submission;
use hive_core::enums::Collection;
use hive_store::{Row, StoreError};

use crate::error::SiteError;
use crate::service::SiteService;

impl SiteService {
    /// Insert `record` into its collection.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::SubmissionFailed`] if the record cannot be encoded
    /// as a row or the backend rejects the insert.
    pub async fn submit<S: Submission>(&self, record: &S) -> Result<(), SiteError> {
        let row = to_row(record).map_err(|source| SiteError::SubmissionFailed {
            collection: S::COLLECTION,
            source,
        })?;
        self.submit_row(S::COLLECTION, row).await
    }

    /// Insert an already-encoded row into `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::SubmissionFailed`] if the backend rejects the
    /// insert.
    pub async fn submit_row(&self, collection: Collection, row: Row) -> Result<(), SiteError> {
        match self.store().insert(collection, row).await {
            Ok(()) => {
                tracing::info!(%collection, "submission accepted");
                Ok(())
            }
            Err(source) => {
                tracing::warn!(%collection, error = %source, "submission rejected");
                Err(SiteError::SubmissionFailed { collection, source })
            }
        }
    }
}

fn to_row<S: Submission>(record: &S) -> Result<Row, StoreError> {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(row)) => Ok(row),
        Ok(other) => Err(StoreError::Decode(format!(
            "submission must encode as an object, got {other}"
        ))),
        Err(e) => Err(StoreError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hive_core::entities::{ContributionApplication, Inquiry};
    use hive_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "Grace".into(),
            email: "grace@example.com".into(),
            project_type: "web-app".into(),
            budget_range: String::new(),
            message: "We need a dashboard.".into(),
        }
    }

    #[tokio::test]
    async fn inquiry_lands_in_inquiries_as_flat_row() {
        let store = Arc::new(MemoryStore::new());
        SiteService::new(store.clone())
            .submit(&inquiry())
            .await
            .unwrap();

        let rows = store.rows(Collection::Inquiries);
        assert_eq!(rows.len(), 1);
        assert_eq!(
            serde_json::Value::Object(rows[0].clone()),
            json!({
                "name": "Grace",
                "email": "grace@example.com",
                "project_type": "web-app",
                "budget_range": "",
                "message": "We need a dashboard.",
            })
        );
        assert_eq!(store.insert_calls(), 1);
    }

    #[tokio::test]
    async fn rejection_is_submission_failed_and_not_retried() {
        let store = Arc::new(MemoryStore::new());
        store.fail_writes(Collection::Contributions, "permission denied");

        let application = ContributionApplication {
            name: "Linus".into(),
            email: "linus@example.com".into(),
            expertise: "backend".into(),
            portfolio_url: String::new(),
            message: "Hi".into(),
        };
        let err = SiteService::new(store.clone())
            .submit(&application)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SiteError::SubmissionFailed {
                collection: Collection::Contributions,
                ..
            }
        ));
        assert_eq!(store.insert_calls(), 1);
        assert!(store.rows(Collection::Contributions).is_empty());
    }

    #[tokio::test]
    async fn gateway_does_not_validate() {
        let store = Arc::new(MemoryStore::new());
        SiteService::new(store.clone())
            .submit(&Inquiry::default())
            .await
            .unwrap();
        assert_eq!(store.rows(Collection::Inquiries).len(), 1);
    }
}
