//! Field rules shared by constructors and setters.
//!
//! # Invariants
//! - Lengths are measured in Unicode scalar values, not bytes.
//! - Validators are pure; callers write only after `Ok(())`.

use crate::model::error::ValidationError;
use std::ops::RangeInclusive;

/// Minimum author name length.
pub const AUTHOR_NAME_MIN_CHARS: usize = 1;
/// Allowed magazine name length.
pub const MAGAZINE_NAME_CHARS: RangeInclusive<usize> = 2..=16;
/// Allowed article title length.
pub const TITLE_CHARS: RangeInclusive<usize> = 5..=50;
/// An author must have strictly more articles than this in one magazine to
/// count as a contributing author of it.
pub const CONTRIBUTOR_MIN_ARTICLES_EXCLUSIVE: usize = 2;

pub fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < AUTHOR_NAME_MIN_CHARS {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !MAGAZINE_NAME_CHARS.contains(&len) {
        return Err(ValidationError::MagazineNameLength { len });
    }
    Ok(())
}

/// Category must keep at least one non-whitespace character.
pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.trim().is_empty() {
        return Err(ValidationError::BlankCategory);
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if !TITLE_CHARS.contains(&len) {
        return Err(ValidationError::TitleLength { len });
    }
    Ok(())
}
