//! Web search value objects.

pub mod depth;
pub mod hit;
