//! Author entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub surname: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for blog_core::domain::Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            surname: model.surname,
        }
    }
}

impl From<blog_core::domain::Author> for ActiveModel {
    fn from(author: blog_core::domain::Author) -> Self {
        Self {
            id: Set(author.id),
            name: Set(author.name),
            surname: Set(author.surname),
        }
    }
}
