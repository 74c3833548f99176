//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use uuid::Uuid;

use blog_core::domain::{Author, Post};
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, PostRepository};

use super::entity::author::{self, Entity as AuthorEntity};
use super::entity::post::Entity as PostEntity;
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL author repository.
pub type PostgresAuthorRepository = PostgresBaseRepository<AuthorEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn find_by_name_and_surname(
        &self,
        name: &str,
        surname: &str,
    ) -> Result<Option<Author>, RepoError> {
        tracing::debug!("Finding author by name and surname");

        let result = AuthorEntity::find()
            .filter(author::Column::Name.eq(name))
            .filter(author::Column::Surname.eq(surname))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_with_author(&self, id: Uuid) -> Result<Option<(Post, Option<Author>)>, RepoError> {
        tracing::debug!(post_id = %id, "Finding post with author");

        let result = PostEntity::find_by_id(id)
            .find_also_related(AuthorEntity)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|(post, author)| (post.into(), author.map(Into::into))))
    }
}
