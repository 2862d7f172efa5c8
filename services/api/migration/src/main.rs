use sea_orm_migration::prelude::*;

mod m20260501_000001_create_users;
mod m20260501_000002_create_restaurants;
mod m20260501_000003_create_categories;
mod m20260501_000004_create_dishes;
mod m20260501_000005_add_menu_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260501_000001_create_users::Migration),
            Box::new(m20260501_000002_create_restaurants::Migration),
            Box::new(m20260501_000003_create_categories::Migration),
            Box::new(m20260501_000004_create_dishes::Migration),
            Box::new(m20260501_000005_add_menu_indexes::Migration),
        ]
    }
}

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
