//! The composed answer for one query.

pub mod record;
