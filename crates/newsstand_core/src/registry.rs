//! Process-wide registry of magazines and articles.
//!
//! # Responsibility
//! - Hold every registered `Magazine` and `Article` in creation order.
//! - Serve as the single source of truth for relationship queries.
//!
//! # Invariants
//! - Append-only. Entries leave only through [`reset`].
//! - Storage is thread-local: model handles are `!Send`, so each thread
//!   that builds a model owns an independent registry.
//! - Test harnesses must call [`reset`] before building fixtures, since
//!   the test runner may reuse a thread across tests.

use crate::model::article::Article;
use crate::model::magazine::Magazine;
use log::debug;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

struct Registry {
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
}

thread_local! {
    static REGISTRY: RefCell<Registry> = const {
        RefCell::new(Registry {
            magazines: Vec::new(),
            articles: Vec::new(),
        })
    };
}

/// Entry counts of the current thread's registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub magazine_count: usize,
    pub article_count: usize,
}

pub(crate) fn register_magazine(magazine: &Magazine) {
    REGISTRY.with(|registry| registry.borrow_mut().magazines.push(magazine.clone()));
}

pub(crate) fn register_article(article: &Article) {
    REGISTRY.with(|registry| registry.borrow_mut().articles.push(article.clone()));
}

/// Runs `f` over registered articles without cloning the list.
///
/// `f` must not register entities or reset the registry.
pub(crate) fn with_articles<R>(f: impl FnOnce(&[Article]) -> R) -> R {
    REGISTRY.with(|registry| f(&registry.borrow().articles))
}

pub(crate) fn with_magazines<R>(f: impl FnOnce(&[Magazine]) -> R) -> R {
    REGISTRY.with(|registry| f(&registry.borrow().magazines))
}

/// Returns registered magazines in creation order.
pub fn magazines() -> Vec<Magazine> {
    with_magazines(|magazines| magazines.to_vec())
}

/// Returns registered articles in creation order.
pub fn articles() -> Vec<Article> {
    with_articles(|articles| articles.to_vec())
}

pub fn stats() -> RegistryStats {
    REGISTRY.with(|registry| {
        let registry = registry.borrow();
        RegistryStats {
            magazine_count: registry.magazines.len(),
            article_count: registry.articles.len(),
        }
    })
}

/// Drops every registered magazine and article for the current thread.
///
/// Handles held by callers stay valid, but they no longer take part in
/// registry queries.
pub fn reset() {
    let cleared = REGISTRY.with(|registry| {
        let mut registry = registry.borrow_mut();
        let cleared = RegistryStats {
            magazine_count: registry.magazines.len(),
            article_count: registry.articles.len(),
        };
        registry.magazines.clear();
        registry.articles.clear();
        cleared
    });
    debug!(
        "event=registry_reset module=registry status=ok magazines={} articles={}",
        cleared.magazine_count, cleared.article_count
    );
}

#[cfg(test)]
mod tests {
    use super::{articles, magazines, reset, stats, RegistryStats};
    use crate::model::{Author, Magazine};

    #[test]
    fn registers_in_creation_order_and_resets() {
        reset();
        let first = Magazine::new("First", "News").expect("valid magazine");
        let second = Magazine::new("Second", "Sports").expect("valid magazine");
        let author = Author::new("Ada").expect("valid author");
        author
            .add_article(&second, "Late Scores")
            .expect("valid article");

        assert_eq!(magazines(), vec![first, second]);
        assert_eq!(articles().len(), 1);
        assert_eq!(
            stats(),
            RegistryStats {
                magazine_count: 2,
                article_count: 1,
            }
        );

        reset();
        assert_eq!(stats(), RegistryStats::default());
        assert!(author.articles().is_empty());
    }

    #[test]
    fn registries_are_independent_per_thread() {
        reset();
        Magazine::new("Local", "News").expect("valid magazine");

        let remote_count = std::thread::spawn(|| stats().magazine_count)
            .join()
            .expect("thread should finish");
        assert_eq!(remote_count, 0);
        assert_eq!(stats().magazine_count, 1);
    }
}
