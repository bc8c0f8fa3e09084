use crate::gender::Gender;
use thiserror::Error;

/// Main error type for dataset layout and domain rules
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("dataset header has {found} columns, need at least {needed}")]
    ShortHeader { found: usize, needed: usize },

    #[error("column index {index} falls outside the {identifier_columns}-column identifier block")]
    IdentifierIndex {
        index: usize,
        identifier_columns: usize,
    },

    #[error("unrecognized gender: {0}")]
    UnknownGender(String),
}

/// A cause of death was paired with a gender it is not defined for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no {gender} mortality estimate exists for {cause}")]
pub struct GenderRuleError {
    pub cause: String,
    pub gender: Gender,
}

pub type Result<T> = std::result::Result<T, CoreError>;
