//! Domain layer for study-assistant
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Classification
//!
//! A free-text [`Query`] is classified into an [`EducationLevel`] and a
//! [`Subject`] by ordered keyword rules (first match wins). Unmatched input
//! is not an error: it falls back to `general`/`general`.
//!
//! ## Tips
//!
//! Each (level, subject) pair maps to a static study tip, with a fallback
//! to the level's general tip and finally to no tip at all.
//!
//! ## Response record
//!
//! A [`ResponseRecord`] gathers the classification, tip and web results
//! for one query and renders them as the text block the user sees.

pub mod core;
pub mod response;
pub mod search;
pub mod study;

// Re-export commonly used types
pub use crate::core::{error::DomainError, query::Query, string::excerpt};
pub use response::record::{CONTENT_EXCERPT_CHARS, ResponseRecord};
pub use search::{depth::SearchDepth, hit::SearchHit};
pub use study::{
    classifier::{Keyword, LEVEL_RULES, Rule, classify, subject_rules},
    level::{EducationLevel, Subject},
    tips::resolve as resolve_tip,
};
