use newsstand_core::registry;
use newsstand_core::{
    Article, Author, ImmutabilityError, Magazine, ModelError, ModelResult, ValidationError,
};

fn fixture() -> (Author, Magazine) {
    registry::reset();
    (
        Author::new("Carry Bradshaw").unwrap(),
        Magazine::new("Vogue", "Fashion").unwrap(),
    )
}

fn retitle(article: &Article, title: &str) -> ModelResult<()> {
    article.set_title(title)?;
    Ok(())
}

#[test]
fn new_article_appears_on_both_endpoints() {
    let (author, magazine) = fixture();

    let article = Article::new(&author, &magazine, "How to wear a tutu").unwrap();

    assert_eq!(author.articles(), vec![article.clone()]);
    assert_eq!(magazine.articles(), vec![article.clone()]);
    assert_eq!(Article::all(), vec![article]);
}

#[test]
fn title_length_bounds_are_enforced() {
    let (author, magazine) = fixture();

    Article::new(&author, &magazine, "Tutus").unwrap();
    Article::new(&author, &magazine, "t".repeat(50)).unwrap();

    for title in ["Hi".to_string(), "Tutu".to_string(), "t".repeat(51), "t".repeat(60)] {
        let err = Article::new(&author, &magazine, title.as_str()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::TitleLength {
                len: title.chars().count()
            }
        );
    }
    assert_eq!(magazine.article_count(), 2);
}

#[test]
fn add_article_round_trips_endpoints_and_title() {
    let (author, magazine) = fixture();

    let article = author.add_article(&magazine, "Valid Title").unwrap();

    assert_eq!(article.author(), author);
    assert_eq!(article.magazine(), magazine);
    let titles = magazine.article_titles().unwrap();
    assert_eq!(
        titles.iter().filter(|title| *title == "Valid Title").count(),
        1
    );
}

#[test]
fn add_article_propagates_validation_errors() {
    let (author, magazine) = fixture();

    let err = author.add_article(&magazine, "Hi").unwrap_err();
    assert_eq!(err, ValidationError::TitleLength { len: 2 });
    assert!(author.articles().is_empty());
}

#[test]
fn fixed_fields_reject_reassignment() {
    let (author, magazine) = fixture();
    let article = author.add_article(&magazine, "How to wear a tutu").unwrap();

    assert_eq!(
        retitle(&article, "Dating life in NYC"),
        Err(ModelError::Immutable(ImmutabilityError {
            field: "article.title"
        }))
    );
    assert_eq!(
        author.set_name("ActuallyTopher").unwrap_err().field,
        "author.name"
    );
}

// Reassignment moves the edge: the old endpoint no longer lists it. This
// differs from a model where endpoints keep their own append-only lists.
#[test]
fn set_magazine_moves_article_between_magazines() {
    let (author, vogue) = fixture();
    let gq = Magazine::new("GQ", "Fashion").unwrap();
    let article = author.add_article(&vogue, "How to wear a tutu").unwrap();

    article.set_magazine(&gq);

    assert_eq!(article.magazine(), gq);
    assert!(vogue.articles().is_empty());
    assert_eq!(gq.articles(), vec![article.clone()]);
    assert_eq!(author.magazines(), vec![gq]);
    assert!(vogue.article_titles().is_none());
}

#[test]
fn set_author_moves_article_between_authors() {
    let (carry, magazine) = fixture();
    let nathaniel = Author::new("Nathaniel Hawthorne").unwrap();
    let article = carry.add_article(&magazine, "How to wear a tutu").unwrap();

    article.set_author(&nathaniel);

    assert_eq!(article.author(), nathaniel);
    assert!(carry.articles().is_empty());
    assert!(carry.topic_areas().is_none());
    assert_eq!(nathaniel.articles(), vec![article]);
    assert_eq!(magazine.contributors(), vec![nathaniel]);
}

#[test]
fn article_keeps_endpoints_alive_after_callers_drop_them() {
    let (author, magazine) = fixture();
    let author_id = author.id();
    let article = author.add_article(&magazine, "How to wear a tutu").unwrap();
    drop(author);
    drop(magazine);

    assert_eq!(article.author().id(), author_id);
    assert_eq!(article.magazine().name(), "Vogue");
}
