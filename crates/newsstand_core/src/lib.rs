//! In-memory author/magazine/article relationship model.
//!
//! Articles are the only edges between authors and magazines; every
//! relationship query is derived from the per-thread [`registry`].

pub mod logging;
pub mod model;
pub mod registry;

pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::{
    Article, ArticleId, Author, AuthorId, AuthorSummary, ImmutabilityError, Magazine, MagazineId,
    MagazineSummary, ModelError, ModelResult, ValidationError,
};
pub use registry::RegistryStats;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
