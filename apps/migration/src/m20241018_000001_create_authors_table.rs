use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Authors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Authors::Name).string().not_null())
                    .col(ColumnDef::new(Authors::Surname).string().not_null())
                    .to_owned(),
            )
            .await?;

        // One author per (name, surname); author resolution relies on it.
        manager
            .create_index(
                Index::create()
                    .name("idx_authors_name_surname")
                    .table(Authors::Table)
                    .col(Authors::Name)
                    .col(Authors::Surname)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Authors {
    Table,
    Id,
    Name,
    Surname,
}
