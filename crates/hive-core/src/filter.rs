//! Filter/select projection over a loaded collection.
//!
//! Options are derived from the collection itself, so they must be recomputed
//! whenever the backing collection changes. Both functions are pure.

use std::collections::HashSet;

use crate::entities::{Engineer, Project, ProjectWithContribution};

/// Sentinel filter value meaning "no filter applied".
pub const ALL: &str = "all";

/// A record with string-valued fields a view can filter on.
pub trait Filterable {
    /// Names the fields available for filtering.
    type Key: Copy;

    /// The value of `key` on this record.
    fn field(&self, key: Self::Key) -> &str;
}

/// Filterable engineer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineerField {
    Role,
}

/// Filterable project fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Category,
}

impl Filterable for Engineer {
    type Key = EngineerField;

    fn field(&self, key: EngineerField) -> &str {
        match key {
            EngineerField::Role => &self.role,
        }
    }
}

impl Filterable for Project {
    type Key = ProjectField;

    fn field(&self, key: ProjectField) -> &str {
        match key {
            ProjectField::Category => &self.category,
        }
    }
}

impl Filterable for ProjectWithContribution {
    type Key = ProjectField;

    fn field(&self, key: ProjectField) -> &str {
        self.project.field(key)
    }
}

/// Distinct values of `key` across `items`, in first-seen order, led by
/// [`ALL`].
///
/// A data value that is literally `"all"` is folded into the sentinel rather
/// than listed twice.
#[must_use]
pub fn derive_filter_options<T: Filterable>(items: &[T], key: T::Key) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::from([ALL]);
    let mut options = vec![ALL.to_string()];
    for item in items {
        let value = item.field(key);
        if seen.insert(value) {
            options.push(value.to_string());
        }
    }
    options
}

/// Narrow `items` to those whose `key` equals `selected`.
///
/// [`ALL`] passes every element through. Relative order is preserved either
/// way; this never re-sorts.
#[must_use]
pub fn apply_filter<'a, T: Filterable>(items: &'a [T], key: T::Key, selected: &str) -> Vec<&'a T> {
    if selected == ALL {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.field(key) == selected)
        .collect()
}

/// Button label for a filter option: `All` for the sentinel, otherwise the
/// value with its first letter upper-cased.
#[must_use]
pub fn option_label(value: &str) -> String {
    if value == ALL {
        return "All".to_string();
    }
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
