//! Plain-data snapshots of model handles.
//!
//! # Responsibility
//! - Capture query results at one point in time as owned values.
//! - Provide serde-ready shapes for embedding programs.
//!
//! # Invariants
//! - Snapshots never refer back to live handles; related entities appear by
//!   stable ID only.
//! - "No data" query results stay `None` (serialized as `null`), never `[]`.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use serde::{Deserialize, Serialize};

/// Snapshot of one author and its derived relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub id: AuthorId,
    pub name: String,
    pub article_count: usize,
    /// Distinct magazines written for.
    pub magazine_ids: Vec<MagazineId>,
    /// `None` when the author has no articles.
    pub topic_areas: Option<Vec<String>>,
}

/// Snapshot of one magazine and its derived relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagazineSummary {
    pub id: MagazineId,
    pub name: String,
    pub category: String,
    pub article_count: usize,
    /// Distinct contributing authors, any article count.
    pub contributor_ids: Vec<AuthorId>,
    /// `None` when the magazine has no articles.
    pub article_titles: Option<Vec<String>>,
}
