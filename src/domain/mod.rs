//! Core pipeline types and logic.

pub mod record;
pub mod schema;
pub mod normalize;
pub mod classify;
pub mod derive;
pub mod variation;
pub mod totals;
pub mod project;
pub mod pipeline;
pub mod error;
