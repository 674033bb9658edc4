//! Entity loader: ordered reads of whole collections.

use hive_core::entities::Entity;
use hive_core::enums::{Collection, OrderBy};
use hive_store::{Row, Select, StoreError};
use serde::de::DeserializeOwned;

use crate::error::SiteError;
use crate::service::SiteService;

impl SiteService {
    /// Load every row of `E`'s collection, ordered by `order` or by the
    /// entity's default ordering.
    ///
    /// An absent result set comes back as an empty `Vec`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::RemoteFetch`] if the read fails or a row does not
    /// decode as `E`.
    pub async fn load_collection<E: Entity>(
        &self,
        order: Option<OrderBy>,
    ) -> Result<Vec<E>, SiteError> {
        let order = order.unwrap_or_else(E::default_order);
        let query = Select::from(E::COLLECTION).order(Some(order));
        let rows = self.fetch_rows(&query).await?;
        decode_rows(E::COLLECTION, rows)
    }

    /// [`Self::load_collection`], degrading any failure to an empty `Vec`.
    pub async fn load_collection_or_empty<E: Entity>(&self, order: Option<OrderBy>) -> Vec<E> {
        match self.load_collection(order).await {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(collection = %E::COLLECTION, %error, "load failed, showing empty collection");
                Vec::new()
            }
        }
    }

    /// Run one read, normalising an absent result to no rows.
    pub(crate) async fn fetch_rows(&self, query: &Select) -> Result<Vec<Row>, SiteError> {
        tracing::debug!(collection = %query.collection, filters = query.filters.len(), "remote read");
        let rows = self
            .store()
            .select(query)
            .await
            .map_err(|source| SiteError::RemoteFetch {
                collection: query.collection,
                source,
            })?;
        Ok(rows.unwrap_or_default())
    }
}

pub(crate) fn decode_rows<T: DeserializeOwned>(
    collection: Collection,
    rows: Vec<Row>,
) -> Result<Vec<T>, SiteError> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(serde_json::Value::Object(row)).map_err(|e| {
                SiteError::RemoteFetch {
                    collection,
                    source: StoreError::Decode(e.to_string()),
                }
            })
        })
        .collect()
}
