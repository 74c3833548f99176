use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::{validate_author_name, validate_author_surname};

/// Author entity - the person a post is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
}

impl Author {
    /// Create a new author with a generated ID.
    pub fn new(name: String, surname: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            surname,
        }
    }
}

/// Input for creating an author on its own.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AuthorSubmission {
    #[validate(custom(function = "validate_author_name"))]
    pub name: String,
    #[validate(custom(function = "validate_author_surname"))]
    pub surname: String,
}
