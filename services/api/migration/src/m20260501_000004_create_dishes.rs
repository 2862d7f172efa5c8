use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dishes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Dishes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Dishes::Title).string().not_null())
                    .col(ColumnDef::new(Dishes::Description).string().not_null())
                    .col(ColumnDef::new(Dishes::Price).double().not_null())
                    .col(ColumnDef::new(Dishes::Allergens).json_binary().not_null())
                    .col(ColumnDef::new(Dishes::ImageUrl).string())
                    .col(ColumnDef::new(Dishes::Translations).json_binary())
                    .col(ColumnDef::new(Dishes::RestaurantId).uuid().not_null())
                    .col(ColumnDef::new(Dishes::CategoryId).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Dishes::Table, Dishes::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Dishes::Table, Dishes::CategoryId)
                            .to(Categories::Table, Categories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dishes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Dishes {
    Table,
    Id,
    Title,
    Description,
    Price,
    Allergens,
    ImageUrl,
    Translations,
    RestaurantId,
    CategoryId,
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
}
