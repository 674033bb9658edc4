//! # hive-site
//!
//! Data-fetch-and-render pipeline for the TechHive site.
//!
//! `SiteService` wraps an injected [`hive_store::RemoteStore`] and provides:
//! - the entity loader (ordered collection reads, absent results → empty)
//! - the relation joiner (engineer + edges fetched concurrently, merged)
//! - the submission gateway (one insert per form submission)
//!
//! [`view`] turns every outcome into a renderable state, so nothing here
//! propagates past the view boundary.

pub mod error;
pub mod gateway;
pub mod joiner;
pub mod loader;
pub mod service;
pub mod view;

pub use error::SiteError;
pub use joiner::EngineerPortfolio;
pub use service::SiteService;
