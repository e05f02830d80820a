//! Author entity and author-side relationship queries.
//!
//! # Responsibility
//! - Own the author identity and immutable display name.
//! - Derive articles, magazines, and topic areas from the registry.
//!
//! # Invariants
//! - `name` is non-empty and never reassigned.
//! - Authors are not registered; they are reachable only through articles.

use crate::model::article::Article;
use crate::model::error::{ImmutabilityError, ValidationError};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::summary::AuthorSummary;
use crate::model::validation::validate_author_name;
use crate::registry;
use std::collections::HashSet;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identity of one author.
pub type AuthorId = Uuid;

struct AuthorInner {
    id: AuthorId,
    name: String,
}

/// Shared handle to one author.
///
/// Clones point at the same author; equality is identity.
#[derive(Clone)]
pub struct Author {
    inner: Rc<AuthorInner>,
}

impl Author {
    /// Creates an author with a generated stable ID.
    ///
    /// # Errors
    /// - `ValidationError::EmptyAuthorName` when `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_author_name(&name)?;
        Ok(Self {
            inner: Rc::new(AuthorInner {
                id: Uuid::new_v4(),
                name,
            }),
        })
    }

    pub fn id(&self) -> AuthorId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Always fails: the name is fixed at construction.
    pub fn set_name(&self, _name: impl Into<String>) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::new("author.name"))
    }

    /// Articles written by this author, in creation order.
    pub fn articles(&self) -> Vec<Article> {
        registry::with_articles(|articles| {
            articles
                .iter()
                .filter(|article| article.is_written_by(self))
                .cloned()
                .collect()
        })
    }

    pub fn article_count(&self) -> usize {
        registry::with_articles(|articles| {
            articles
                .iter()
                .filter(|article| article.is_written_by(self))
                .count()
        })
    }

    /// Creates an article with `self` as author.
    ///
    /// Same contract and errors as [`Article::new`].
    pub fn add_article(
        &self,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Article, ValidationError> {
        Article::new(self, magazine, title)
    }

    /// Distinct magazines this author has written for.
    ///
    /// Unordered by contract; currently first-seen order.
    pub fn magazines(&self) -> Vec<Magazine> {
        let mut seen = HashSet::<MagazineId>::new();
        self.articles()
            .iter()
            .map(Article::magazine)
            .filter(|magazine| seen.insert(magazine.id()))
            .collect()
    }

    /// Distinct categories of the magazines this author has written for.
    ///
    /// Returns `None` when the author has no articles, rather than an empty
    /// list. Callers rely on this to tell "no data" apart from a computed
    /// result.
    pub fn topic_areas(&self) -> Option<Vec<String>> {
        let articles = self.articles();
        if articles.is_empty() {
            return None;
        }

        let mut seen = HashSet::<String>::new();
        Some(
            articles
                .iter()
                .map(|article| article.magazine().category())
                .filter(|category| seen.insert(category.clone()))
                .collect(),
        )
    }

    pub fn summary(&self) -> AuthorSummary {
        AuthorSummary {
            id: self.id(),
            name: self.name().to_string(),
            article_count: self.article_count(),
            magazine_ids: self.magazines().iter().map(Magazine::id).collect(),
            topic_areas: self.topic_areas(),
        }
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Author")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}
