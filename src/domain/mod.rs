//! Domain types for dependency reconciliation

mod dependency;
mod repo;
mod report;

pub use dependency::DependencyRecord;
pub use repo::TrackedRepository;
pub use report::{Classification, FreshnessStatus, ReconciliationReport};
