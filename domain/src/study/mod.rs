//! Study classification: levels, subjects, keyword rules and tips.
//!
//! - [`level`]: [`EducationLevel`](level::EducationLevel) and [`Subject`](level::Subject) tags
//! - [`classifier`]: ordered first-match keyword rules
//! - [`tips`]: the static tip table with two-step fallback

pub mod classifier;
pub mod level;
pub mod tips;
