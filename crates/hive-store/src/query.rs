//! Read query description shared by every store implementation.

use hive_core::enums::{Collection, OrderBy};

/// Equality predicate `column = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equals {
    pub column: String,
    pub value: String,
}

/// Embed a related row through a foreign key on the queried collection.
///
/// The related row appears under the related collection's name, or as `null`
/// when no row matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub collection: Collection,
    /// Column on the queried row holding the related row's `id`.
    pub foreign_key: String,
}

impl Embed {
    #[must_use]
    pub fn new(collection: Collection, foreign_key: impl Into<String>) -> Self {
        Self {
            collection,
            foreign_key: foreign_key.into(),
        }
    }

    /// Key the related row is placed under.
    #[must_use]
    pub const fn alias(&self) -> &'static str {
        self.collection.as_str()
    }
}

/// A read against one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub collection: Collection,
    /// Columns to return; empty means every column.
    pub columns: Vec<String>,
    pub filters: Vec<Equals>,
    pub order: Option<OrderBy>,
    pub embed: Option<Embed>,
    pub limit: Option<usize>,
}

impl Select {
    /// Every row and column of `collection`.
    #[must_use]
    pub const fn from(collection: Collection) -> Self {
        Self {
            collection,
            columns: Vec::new(),
            filters: Vec::new(),
            order: None,
            embed: None,
            limit: None,
        }
    }

    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Equals {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    #[must_use]
    pub fn order(mut self, order: Option<OrderBy>) -> Self {
        self.order = order;
        self
    }

    #[must_use]
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embed = Some(embed);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// The `select=` projection: listed columns (or `*`) plus any embed.
    #[must_use]
    pub fn projection(&self) -> String {
        let mut parts = if self.columns.is_empty() {
            vec!["*".to_string()]
        } else {
            self.columns.clone()
        };
        if let Some(embed) = &self.embed {
            parts.push(format!("{}(*)", embed.alias()));
        }
        parts.join(",")
    }
}
