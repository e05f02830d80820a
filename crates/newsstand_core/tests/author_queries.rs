use newsstand_core::registry;
use newsstand_core::{Author, Magazine, ValidationError};
use std::collections::HashSet;

#[test]
fn author_name_must_not_be_empty() {
    assert_eq!(Author::new("").unwrap_err(), ValidationError::EmptyAuthorName);
    assert_eq!(Author::new("Carry Bradshaw").unwrap().name(), "Carry Bradshaw");
}

#[test]
fn articles_are_listed_in_creation_order() {
    registry::reset();
    let author = Author::new("Carry Bradshaw").unwrap();
    let other = Author::new("Nathaniel Hawthorne").unwrap();
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    let ad = Magazine::new("AD", "Architecture").unwrap();

    let first = author.add_article(&vogue, "How to wear a tutu").unwrap();
    other.add_article(&vogue, "2023 Eccentric Design Trends").unwrap();
    let second = author.add_article(&ad, "Dating life in NYC").unwrap();

    assert_eq!(author.articles(), vec![first, second]);
    assert_eq!(author.article_count(), 2);
}

#[test]
fn magazines_are_distinct() {
    registry::reset();
    let author = Author::new("Carry Bradshaw").unwrap();
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    let ad = Magazine::new("AD", "Architecture").unwrap();

    author.add_article(&vogue, "How to wear a tutu").unwrap();
    author.add_article(&ad, "2023 Eccentric Design Trends").unwrap();
    author.add_article(&vogue, "Dating life in NYC").unwrap();

    let magazines: HashSet<Magazine> = author.magazines().into_iter().collect();
    assert_eq!(magazines, HashSet::from([vogue, ad]));
    assert_eq!(author.magazines().len(), 2);
}

#[test]
fn topic_areas_is_none_without_articles() {
    registry::reset();
    let author = Author::new("Carry Bradshaw").unwrap();
    Magazine::new("Vogue", "Fashion").unwrap();

    assert_eq!(author.topic_areas(), None);
    assert!(author.magazines().is_empty());
}

#[test]
fn topic_areas_are_distinct_categories() {
    registry::reset();
    let author = Author::new("Carry Bradshaw").unwrap();
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    let gq = Magazine::new("GQ", "Fashion").unwrap();
    let ad = Magazine::new("AD", "Architecture").unwrap();

    author.add_article(&vogue, "How to wear a tutu").unwrap();
    author.add_article(&gq, "Suits for every season").unwrap();
    author.add_article(&ad, "2023 Eccentric Design Trends").unwrap();

    let topics: HashSet<String> = author.topic_areas().unwrap().into_iter().collect();
    assert_eq!(
        topics,
        HashSet::from(["Fashion".to_string(), "Architecture".to_string()])
    );
}

#[test]
fn topic_areas_follow_category_changes() {
    registry::reset();
    let author = Author::new("Carry Bradshaw").unwrap();
    let vogue = Magazine::new("Vogue", "Fashion").unwrap();
    author.add_article(&vogue, "How to wear a tutu").unwrap();

    vogue.set_category("Culture").unwrap();

    assert_eq!(author.topic_areas(), Some(vec!["Culture".to_string()]));
}
