//! Domain aggregates exposed by the planning core.

pub mod plan;
pub mod types;
