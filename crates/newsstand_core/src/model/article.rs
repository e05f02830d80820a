//! Article entity: the edge between one author and one magazine.
//!
//! # Responsibility
//! - Validate and register author-writes-for-magazine relationships.
//! - Support endpoint reassignment without leaving stale memberships.
//!
//! # Invariants
//! - `title` length stays within `TITLE_CHARS` and is never reassigned.
//! - An article has exactly one author and one magazine at any time.
//! - Membership is derived from the registry only, so reassigning an
//!   endpoint moves the article out of the old endpoint's view and into the
//!   new one in a single step.

use crate::model::author::Author;
use crate::model::error::{ImmutabilityError, ValidationError};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::validate_title;
use crate::registry;
use log::debug;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identity of one article.
pub type ArticleId = Uuid;

struct ArticleInner {
    id: ArticleId,
    title: String,
    author: RefCell<Author>,
    magazine: RefCell<Magazine>,
}

/// Shared handle to one registered article.
///
/// Holds its author and magazine strongly. Clones point at the same article;
/// equality is identity.
#[derive(Clone)]
pub struct Article {
    inner: Rc<ArticleInner>,
}

impl Article {
    /// Creates and registers an article linking `author` and `magazine`.
    ///
    /// # Errors
    /// - `ValidationError::TitleLength` when `title` is outside 5..=50
    ///   characters. Nothing is registered on error.
    pub fn new(
        author: &Author,
        magazine: &Magazine,
        title: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if let Err(err) = validate_title(&title) {
            debug!(
                "event=article_create module=model status=error error_code=validation_failed error={}",
                err
            );
            return Err(err);
        }

        let article = Self {
            inner: Rc::new(ArticleInner {
                id: Uuid::new_v4(),
                title,
                author: RefCell::new(author.clone()),
                magazine: RefCell::new(magazine.clone()),
            }),
        };
        registry::register_article(&article);
        debug!(
            "event=article_create module=model status=ok article_id={} author_id={} magazine_id={}",
            article.id(),
            author.id(),
            magazine.id()
        );
        Ok(article)
    }

    /// Registered articles in creation order.
    pub fn all() -> Vec<Article> {
        registry::articles()
    }

    pub fn id(&self) -> ArticleId {
        self.inner.id
    }

    pub fn title(&self) -> &str {
        &self.inner.title
    }

    /// Always fails: the title is fixed at construction.
    pub fn set_title(&self, _title: impl Into<String>) -> Result<(), ImmutabilityError> {
        Err(ImmutabilityError::new("article.title"))
    }

    pub fn author(&self) -> Author {
        self.inner.author.borrow().clone()
    }

    pub fn magazine(&self) -> Magazine {
        self.inner.magazine.borrow().clone()
    }

    /// Moves this article to another author.
    ///
    /// The previous author stops seeing it in `articles()`.
    pub fn set_author(&self, author: &Author) {
        let previous = self.inner.author.replace(author.clone());
        debug!(
            "event=article_reassign module=model status=ok field=author article_id={} from={} to={}",
            self.id(),
            previous.id(),
            author.id()
        );
    }

    /// Moves this article to another magazine.
    ///
    /// The previous magazine stops seeing it in `articles()`.
    pub fn set_magazine(&self, magazine: &Magazine) {
        let previous = self.inner.magazine.replace(magazine.clone());
        debug!(
            "event=article_reassign module=model status=ok field=magazine article_id={} from={} to={}",
            self.id(),
            previous.id(),
            magazine.id()
        );
    }

    /// Whether `author` is this article's current author.
    pub fn is_written_by(&self, author: &Author) -> bool {
        *self.inner.author.borrow() == *author
    }

    /// Whether `magazine` is this article's current magazine.
    pub fn is_published_in(&self, magazine: &Magazine) -> bool {
        *self.inner.magazine.borrow() == *magazine
    }

    pub(crate) fn magazine_id(&self) -> MagazineId {
        self.inner.magazine.borrow().id()
    }
}

impl PartialEq for Article {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Article {}

impl Hash for Article {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for Article {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Article")
            .field("id", &self.inner.id)
            .field("title", &self.inner.title)
            .field("author_id", &self.inner.author.borrow().id())
            .field("magazine_id", &self.inner.magazine.borrow().id())
            .finish()
    }
}
