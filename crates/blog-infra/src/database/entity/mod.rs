//! SeaORM entities for the blog schema.

pub mod author;
pub mod post;
