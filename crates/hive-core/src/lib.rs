//! # hive-core
//!
//! Core types and pure logic for the TechHive site data pipeline.
//!
//! This crate provides the foundational types shared across all hive crates:
//! - Entity structs for engineers, projects, join edges, and form submissions
//! - Collection and ordering enums naming the remote store's tables
//! - The filter/select projector (`"all"` sentinel, stable filtering)
//! - The engineer→project relation merge
//! - The animated metric counter ramp
//! - Static site content (service catalog, form vocabularies, routes)
//! - Cross-cutting error types

pub mod catalog;
pub mod counter;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod forms;
pub mod join;
pub mod routes;
