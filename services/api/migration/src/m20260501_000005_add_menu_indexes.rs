use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Categories::Table)
                    .col(Categories::RestaurantId)
                    .name("idx_categories_restaurant_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Dishes::Table)
                    .col(Dishes::RestaurantId)
                    .name("idx_dishes_restaurant_id")
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Dishes::Table)
                    .col(Dishes::CategoryId)
                    .name("idx_dishes_category_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_dishes_category_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_dishes_restaurant_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_categories_restaurant_id")
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Categories {
    Table,
    RestaurantId,
}

#[derive(Iden)]
enum Dishes {
    Table,
    RestaurantId,
    CategoryId,
}
