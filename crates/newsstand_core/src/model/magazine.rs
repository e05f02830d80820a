//! Magazine entity, publisher statistics, and registry-level ranking.
//!
//! # Responsibility
//! - Own magazine identity plus validated, mutable name and category.
//! - Derive articles, contributors, and contributor statistics from the
//!   registry.
//!
//! # Invariants
//! - `name` length stays within `MAGAZINE_NAME_CHARS`.
//! - `category` is never blank.
//! - Every constructed magazine is registered exactly once.

use crate::model::article::Article;
use crate::model::author::{Author, AuthorId};
use crate::model::error::ValidationError;
use crate::model::summary::MagazineSummary;
use crate::model::validation::{
    validate_category, validate_magazine_name, CONTRIBUTOR_MIN_ARTICLES_EXCLUSIVE,
};
use crate::registry;
use log::debug;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identity of one magazine.
pub type MagazineId = Uuid;

struct MagazineInner {
    id: MagazineId,
    name: RefCell<String>,
    category: RefCell<String>,
}

/// Shared handle to one registered magazine.
///
/// Clones point at the same magazine; equality is identity.
#[derive(Clone)]
pub struct Magazine {
    inner: Rc<MagazineInner>,
}

impl Magazine {
    /// Creates and registers a magazine.
    ///
    /// # Errors
    /// - `ValidationError::MagazineNameLength` when `name` is outside 2..=16
    ///   characters.
    /// - `ValidationError::BlankCategory` when `category` is blank.
    ///
    /// Nothing is registered on error.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        if let Err(err) = validate_magazine_name(&name).and_then(|()| validate_category(&category))
        {
            debug!(
                "event=magazine_create module=model status=error error_code=validation_failed error={}",
                err
            );
            return Err(err);
        }

        let magazine = Self {
            inner: Rc::new(MagazineInner {
                id: Uuid::new_v4(),
                name: RefCell::new(name),
                category: RefCell::new(category),
            }),
        };
        registry::register_magazine(&magazine);
        debug!(
            "event=magazine_create module=model status=ok magazine_id={}",
            magazine.id()
        );
        Ok(magazine)
    }

    /// Registered magazines in creation order.
    pub fn all() -> Vec<Magazine> {
        registry::magazines()
    }

    pub fn id(&self) -> MagazineId {
        self.inner.id
    }

    pub fn name(&self) -> String {
        self.inner.name.borrow().clone()
    }

    pub fn category(&self) -> String {
        self.inner.category.borrow().clone()
    }

    /// Replaces the name after validation; keeps the old name on error.
    pub fn set_name(&self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        *self.inner.name.borrow_mut() = name;
        Ok(())
    }

    /// Replaces the category after validation; keeps the old value on error.
    pub fn set_category(&self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        *self.inner.category.borrow_mut() = category;
        Ok(())
    }

    /// Articles published in this magazine, in creation order.
    pub fn articles(&self) -> Vec<Article> {
        registry::with_articles(|articles| {
            articles
                .iter()
                .filter(|article| article.is_published_in(self))
                .cloned()
                .collect()
        })
    }

    pub fn article_count(&self) -> usize {
        registry::with_articles(|articles| {
            articles
                .iter()
                .filter(|article| article.is_published_in(self))
                .count()
        })
    }

    /// Distinct authors with at least one article here.
    ///
    /// Unordered by contract; currently first-seen order.
    pub fn contributors(&self) -> Vec<Author> {
        let mut seen = HashSet::<AuthorId>::new();
        self.articles()
            .iter()
            .map(Article::author)
            .filter(|author| seen.insert(author.id()))
            .collect()
    }

    /// Titles of this magazine's articles, in creation order.
    ///
    /// Returns `None` instead of an empty list when there are no articles.
    pub fn article_titles(&self) -> Option<Vec<String>> {
        let titles: Vec<String> = self
            .articles()
            .iter()
            .map(|article| article.title().to_string())
            .collect();
        if titles.is_empty() {
            None
        } else {
            Some(titles)
        }
    }

    /// Authors with more than two articles in this magazine.
    ///
    /// The threshold is strict: two articles are not enough. Returns `None`
    /// instead of an empty list when no author qualifies.
    pub fn contributing_authors(&self) -> Option<Vec<Author>> {
        let mut tally: Vec<(Author, usize)> = Vec::new();
        let mut index = HashMap::<AuthorId, usize>::new();
        for article in self.articles() {
            let author = article.author();
            match index.get(&author.id()) {
                Some(&slot) => tally[slot].1 += 1,
                None => {
                    index.insert(author.id(), tally.len());
                    tally.push((author, 1));
                }
            }
        }

        let contributing: Vec<Author> = tally
            .into_iter()
            .filter(|(_, count)| *count > CONTRIBUTOR_MIN_ARTICLES_EXCLUSIVE)
            .map(|(author, _)| author)
            .collect();
        if contributing.is_empty() {
            None
        } else {
            Some(contributing)
        }
    }

    /// Registered magazine with the most articles.
    ///
    /// Ties go to the earliest-created magazine. When every magazine has zero
    /// articles the first registered magazine is returned. Returns `None`
    /// only when no magazine is registered.
    pub fn top_publisher() -> Option<Magazine> {
        let mut counts = HashMap::<MagazineId, usize>::new();
        registry::with_articles(|articles| {
            for article in articles {
                *counts.entry(article.magazine_id()).or_default() += 1;
            }
        });

        let mut top: Option<(Magazine, usize)> = None;
        for magazine in registry::magazines() {
            let count = counts.get(&magazine.id()).copied().unwrap_or(0);
            let beats_top = top.as_ref().map_or(true, |(_, best)| count > *best);
            if beats_top {
                top = Some((magazine, count));
            }
        }
        top.map(|(magazine, _)| magazine)
    }

    pub fn summary(&self) -> MagazineSummary {
        MagazineSummary {
            id: self.id(),
            name: self.name(),
            category: self.category(),
            article_count: self.article_count(),
            contributor_ids: self.contributors().iter().map(Author::id).collect(),
            article_titles: self.article_titles(),
        }
    }
}

impl PartialEq for Magazine {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Magazine {}

impl Hash for Magazine {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for Magazine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Magazine")
            .field("id", &self.inner.id)
            .field("name", &*self.inner.name.borrow())
            .field("category", &*self.inner.category.borrow())
            .finish()
    }
}
