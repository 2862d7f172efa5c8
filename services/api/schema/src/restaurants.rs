use sea_orm::entity::prelude::*;

/// One restaurant per owning client user.
///
/// `owner_id` carries a unique constraint — the enforcement point for the
/// one-restaurant-per-owner invariant under concurrent provisioning.
/// Rows are never deleted; "delete menu" only purges dishes and resets the
/// publication columns.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurants")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub owner_id: Uuid,
    pub company_name: String,
    pub address: String,
    pub phone: String,
    pub qr_color: String,
    pub tagline: Option<String>,
    pub status: i16,
    pub published: bool,
    pub menu_link: Option<String>,
    pub setup_completed: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::OwnerId",
        to = "super::users::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::categories::Entity")]
    Categories,
    #[sea_orm(has_many = "super::dishes::Entity")]
    Dishes,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categories.def()
    }
}

impl Related<super::dishes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dishes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
