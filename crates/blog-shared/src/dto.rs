//! Data Transfer Objects - request/response types for the API.
//!
//! JSON field names are camelCase.

use serde::{Deserialize, Deserializer, Serialize, de};
use uuid::Uuid;

/// Request to create a post.
///
/// Missing fields deserialize as empty strings so that validation, not the
/// JSON decoder, reports them. `author_id` is accepted but ignored: the author
/// is always resolved from `author_name` and `author_surname`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePostRequest {
    pub author_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub content: String,
    pub author_name: String,
    pub author_surname: String,
}

/// Query string of `GET /api/post/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetPostQuery {
    #[serde(deserialize_with = "flag_any_case")]
    pub include_author: bool,
}

/// `true`/`false` in any letter case, surrounding whitespace ignored.
fn flag_any_case<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        v if v.eq_ignore_ascii_case("true") => Ok(true),
        v if v.eq_ignore_ascii_case("false") => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"true or false",
        )),
    }
}

/// A post as returned by the API.
///
/// Author name fields are present only when the author was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_surname: Option<String>,
}

/// Request to create an author.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub surname: String,
}

/// An author as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorResponse {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
}
