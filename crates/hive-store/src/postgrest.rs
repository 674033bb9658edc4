//! PostgREST (Supabase REST) adapter.

use std::time::Duration;

use async_trait::async_trait;
use hive_config::SupabaseConfig;
use hive_core::enums::Collection;

use crate::error::StoreError;
use crate::http::{check_response, decode_rows};
use crate::query::Select;
use crate::{RemoteStore, Row};

/// HTTP client for a Supabase project's REST endpoint.
pub struct PostgrestStore {
    http: reqwest::Client,
    rest_url: String,
    api_key: String,
}

impl PostgrestStore {
    /// Create a client for `rest_url` (e.g. `https://x.supabase.co/rest/v1`).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(
        rest_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .user_agent("hive/0.1")
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            rest_url: rest_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a client from the `[supabase]` config section.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn from_config(config: &SupabaseConfig) -> Result<Self, StoreError> {
        Self::new(
            config.rest_url(),
            config.anon_key.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    fn collection_url(&self, collection: Collection) -> String {
        format!("{}/{}", self.rest_url, collection.as_str())
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

/// Render `query` as a PostgREST query string.
///
/// Filters become `{column}=eq.{value}` and ordering `order={column}.{dir}`.
/// Every value is percent-encoded.
#[must_use]
pub fn query_string(query: &Select) -> String {
    let mut params = vec![format!(
        "select={}",
        urlencoding::encode(&query.projection())
    )];
    for filter in &query.filters {
        params.push(format!(
            "{}=eq.{}",
            urlencoding::encode(&filter.column),
            urlencoding::encode(&filter.value)
        ));
    }
    if let Some(order) = &query.order {
        params.push(format!(
            "order={}.{}",
            urlencoding::encode(&order.column),
            order.direction.as_str()
        ));
    }
    if let Some(limit) = query.limit {
        params.push(format!("limit={limit}"));
    }
    params.join("&")
}

#[async_trait]
impl RemoteStore for PostgrestStore {
    async fn select(&self, query: &Select) -> Result<Option<Vec<Row>>, StoreError> {
        let url = format!(
            "{}?{}",
            self.collection_url(query.collection),
            query_string(query)
        );
        tracing::debug!(collection = %query.collection, %url, "postgrest select");

        let resp = self
            .authorized(self.http.get(&url))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let resp = check_response(resp, query.collection).await?;
        decode_rows(resp).await
    }

    async fn insert(&self, collection: Collection, row: Row) -> Result<(), StoreError> {
        tracing::debug!(%collection, columns = row.len(), "postgrest insert");

        let resp = self
            .authorized(self.http.post(self.collection_url(collection)))
            .header("Prefer", "return=minimal")
            .json(&[row])
            .send()
            .await?;
        check_response(resp, collection).await?;
        Ok(())
    }
}
