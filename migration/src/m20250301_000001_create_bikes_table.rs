use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // category is plain text; the allowed values are enforced by the request validator
        manager
            .create_table(
                Table::create()
                    .table(Bikes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Bikes::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Bikes::Make).text().not_null())
                    .col(ColumnDef::new(Bikes::Model).text().not_null())
                    .col(ColumnDef::new(Bikes::Year).integer().not_null())
                    .col(ColumnDef::new(Bikes::Category).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bikes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Bikes {
    Table,
    Id,
    Make,
    Model,
    Year,
    Category,
}
