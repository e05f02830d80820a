//! Author/magazine/article relationship model.
//!
//! # Responsibility
//! - Define the three entity handles and their validation rules.
//! - Derive relationship queries from the registry.
//!
//! # Invariants
//! - `Article` construction is the only operation that creates an edge.
//! - Authors and magazines never reference each other directly.
//! - Every entity is identified by a stable `Uuid`; handle equality is
//!   identity, not field equality.
//!
//! # "No data" results
//! `Author::topic_areas`, `Magazine::article_titles`,
//! `Magazine::contributing_authors`, and `Magazine::top_publisher` return
//! `None` when there is nothing to aggregate, rather than an empty list.
//! This is an unusual contract; callers must match on it explicitly.

pub mod article;
pub mod author;
pub mod error;
pub mod magazine;
pub mod summary;
pub mod validation;

pub use article::{Article, ArticleId};
pub use author::{Author, AuthorId};
pub use error::{ImmutabilityError, ModelError, ModelResult, ValidationError};
pub use magazine::{Magazine, MagazineId};
pub use summary::{AuthorSummary, MagazineSummary};
