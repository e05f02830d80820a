//! Error taxonomy for model construction and mutation.
//!
//! # Responsibility
//! - Report rule violations before any state is written.
//! - Keep "bad value" and "field is fixed" failures distinguishable.
//!
//! # Invariants
//! - A returned error implies the target entity (or registry) is unchanged.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ModelResult<T> = Result<T, ModelError>;

/// Constructor/setter argument violates a length or non-emptiness rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Author name is empty.
    EmptyAuthorName,
    /// Magazine name character count is outside the allowed range.
    MagazineNameLength { len: usize },
    /// Magazine category is empty or whitespace only.
    BlankCategory,
    /// Article title character count is outside the allowed range.
    TitleLength { len: usize },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use crate::model::validation::{MAGAZINE_NAME_CHARS, TITLE_CHARS};

        match self {
            Self::EmptyAuthorName => write!(f, "author name must not be empty"),
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be {}..={} characters, got {len}",
                MAGAZINE_NAME_CHARS.start(),
                MAGAZINE_NAME_CHARS.end()
            ),
            Self::BlankCategory => write!(f, "magazine category must not be blank"),
            Self::TitleLength { len } => write!(
                f,
                "article title must be {}..={} characters, got {len}",
                TITLE_CHARS.start(),
                TITLE_CHARS.end()
            ),
        }
    }
}

impl Error for ValidationError {}

/// Attempt to reassign a field that is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmutabilityError {
    /// Qualified field name, e.g. `article.title`.
    pub field: &'static str,
}

impl ImmutabilityError {
    pub(crate) fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl Display for ImmutabilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is immutable", self.field)
    }
}

impl Error for ImmutabilityError {}

/// Umbrella error for callers that mix validated and fixed-field operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    Validation(ValidationError),
    Immutable(ImmutabilityError),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Immutable(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Immutable(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ModelError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<ImmutabilityError> for ModelError {
    fn from(value: ImmutabilityError) -> Self {
        Self::Immutable(value)
    }
}
