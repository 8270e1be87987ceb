//! Domain models for Roadmapper.
//!
//! # Core Concepts
//!
//! ## Static Reference Data
//!
//! - [`InterestPath`]: A curriculum track (e.g. `frontend`) with an ordered milestone list,
//!   curated resources and tips. Defined at compile time, never mutated.
//! - [`Quote`]: An inspirational quote frozen into each roadmap at creation.
//!
//! ## Generated Entities
//!
//! These live only in process memory and are lost on restart:
//!
//! - [`Roadmap`]: The per-user aggregate of dated milestones drawn from one or more paths.
//! - [`MilestoneEntry`]: A single dated goal within a roadmap. Only its `completed` flag
//!   changes after generation.

mod api;
mod catalog;
mod roadmap;

pub use api::*;
pub use catalog::*;
pub use roadmap::*;
