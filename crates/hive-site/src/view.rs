//! Presentation model: every fetch and submit outcome as a renderable state.
//!
//! Errors stop here. Collection reads degrade to [`ViewState::Empty`], the
//! engineer page distinguishes [`ViewState::NotFound`] from a transport
//! failure, and form submissions surface one generic message.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use hive_core::enums::Collection;
use hive_core::filter::{ALL, Filterable, apply_filter, derive_filter_options};
use serde::Serialize;

use crate::error::SiteError;
use crate::joiner::EngineerPortfolio;

pub const INQUIRY_FAILED: &str = "Failed to submit inquiry. Please try again.";
pub const APPLICATION_FAILED: &str = "Failed to submit application. Please try again.";
pub const INQUIRY_SENT: &str = "Thank you for your inquiry! We'll get back to you soon.";
pub const APPLICATION_SENT: &str =
    "Thank you for your interest! We'll review your application and get back to you soon.";
pub const ENGINEER_UNAVAILABLE: &str = "Could not load this engineer right now.";

/// What a view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    Loading,
    Empty,
    NotFound,
    Error { message: String },
    Ready(T),
}

impl<T> ViewState<T> {
    /// Transform the ready value, leaving every other state as is.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
        match self {
            Self::Ready(value) => ViewState::Ready(f(value)),
            Self::Loading => ViewState::Loading,
            Self::Empty => ViewState::Empty,
            Self::NotFound => ViewState::NotFound,
            Self::Error { message } => ViewState::Error { message },
        }
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> ViewState<Vec<T>> {
    /// State for a collection page. A failed read renders like an empty one.
    #[must_use]
    pub fn from_collection(result: Result<Vec<T>, SiteError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Ready(items),
            Err(error) => {
                tracing::warn!(%error, "collection view degraded to empty");
                Self::Empty
            }
        }
    }
}

impl ViewState<EngineerPortfolio> {
    /// State for the engineer profile page.
    ///
    /// An engineer with no projects is still `Ready`; only a missing engineer
    /// is `NotFound`.
    #[must_use]
    pub fn from_portfolio(result: Result<EngineerPortfolio, SiteError>) -> Self {
        match result {
            Ok(portfolio) => Self::Ready(portfolio),
            Err(error) if error.is_not_found() => Self::NotFound,
            Err(error) => {
                tracing::warn!(%error, "engineer view failed");
                Self::Error {
                    message: ENGINEER_UNAVAILABLE.to_string(),
                }
            }
        }
    }
}

/// Outcome of a form submission as the form shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum FormOutcome {
    Sent(String),
    Failed(String),
}

impl FormOutcome {
    /// Map a gateway result for `collection` to the form's message.
    ///
    /// The failure cause is logged, never shown.
    #[must_use]
    pub fn from_submission(collection: Collection, result: Result<(), SiteError>) -> Self {
        let (sent, failed) = match collection {
            Collection::Contributions => (APPLICATION_SENT, APPLICATION_FAILED),
            _ => (INQUIRY_SENT, INQUIRY_FAILED),
        };
        match result {
            Ok(()) => Self::Sent(sent.to_string()),
            Err(error) => {
                tracing::debug!(%error, "submission failure shown as generic message");
                Self::Failed(failed.to_string())
            }
        }
    }

    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Sent(m) | Self::Failed(m) => m,
        }
    }
}

/// A filterable directory page: options, current selection, visible items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<T> {
    pub options: Vec<String>,
    pub selected: String,
    pub items: Vec<T>,
}

impl<T: Filterable + Clone> Listing<T> {
    /// Project `items` through `key`, keeping those matching `selected`.
    ///
    /// `None` selects [`ALL`].
    #[must_use]
    pub fn project(items: &[T], key: T::Key, selected: Option<&str>) -> Self {
        let selected = selected.unwrap_or(ALL).to_string();
        Self {
            options: derive_filter_options(items, key),
            items: apply_filter(items, key, &selected)
                .into_iter()
                .cloned()
                .collect(),
            selected,
        }
    }
}

/// Token for one fetch started by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTicket(u64);

/// Per-view fetch generation counter.
///
/// Starting a fetch or tearing the view down makes every earlier ticket
/// stale, so late results are dropped instead of overwriting newer state.
#[derive(Debug, Default)]
pub struct ViewGeneration {
    current: AtomicU64,
}

impl ViewGeneration {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: AtomicU64::new(0),
        }
    }

    /// Start a fetch; older tickets become stale.
    pub fn begin(&self) -> ViewTicket {
        ViewTicket(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Stale every outstanding ticket, e.g. when the view goes away.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_current(&self, ticket: ViewTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.0
    }
}

/// A view's current state guarded by its fetch generation.
#[derive(Debug)]
pub struct ViewCell<T> {
    generation: ViewGeneration,
    state: Mutex<ViewState<T>>,
}

impl<T: Clone> ViewCell<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            generation: ViewGeneration::new(),
            state: Mutex::new(ViewState::Loading),
        }
    }

    /// Enter `Loading` and hand out a ticket for the fetch.
    pub fn begin(&self) -> ViewTicket {
        let ticket = self.generation.begin();
        *self.lock() = ViewState::Loading;
        ticket
    }

    /// Apply `state` if `ticket` is still current. Returns whether it was.
    pub fn resolve(&self, ticket: ViewTicket, state: ViewState<T>) -> bool {
        let mut current = self.lock();
        if !self.generation.is_current(ticket) {
            return false;
        }
        *current = state;
        true
    }

    pub fn invalidate(&self) {
        self.generation.invalidate();
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewState<T> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ViewState<T>> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T: Clone> Default for ViewCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
