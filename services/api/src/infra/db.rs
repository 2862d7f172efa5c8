use anyhow::{Context as _, anyhow};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionError, TransactionTrait,
};
use serde_json::json;
use uuid::Uuid;

use carta_api_schema::{categories, dishes, restaurants, users};
use carta_domain::restaurant::RestaurantStatus;
use carta_domain::user::UserRole;

use crate::domain::repository::{
    CategoryRepository, DishRepository, RestaurantRepository, UserRepository,
};
use crate::domain::types::{
    AdminRestaurant, Category, Dish, ProfileUpdate, Restaurant, RestaurantBundle, User,
};
use crate::error::ApiServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: &User) -> Result<(), ApiServiceError> {
        users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            name: Set(user.name.clone()),
            avatar: Set(user.avatar.clone()),
            role: Set(user.role.as_u8() as i16),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn promote_to_superadmin(&self, id: Uuid) -> Result<(), ApiServiceError> {
        users::ActiveModel {
            id: Set(id),
            role: Set(UserRole::Superadmin.as_u8() as i16),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("promote user to superadmin")?;
        Ok(())
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiServiceError> {
    let role = UserRole::from_u8(model.role as u8)
        .ok_or_else(|| anyhow!("unknown role value {} for user {}", model.role, model.id))?;
    Ok(User {
        id: model.id,
        email: model.email,
        name: model.name,
        avatar: model.avatar,
        role,
        created_at: model.created_at,
    })
}

// ── Restaurant repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRestaurantRepository {
    pub db: DatabaseConnection,
}

impl DbRestaurantRepository {
    async fn load_parts(
        &self,
        restaurant: restaurants::Model,
    ) -> Result<RestaurantBundle, ApiServiceError> {
        let categories = categories::Entity::find()
            .filter(categories::Column::RestaurantId.eq(restaurant.id))
            .all(&self.db)
            .await
            .context("load restaurant categories")?;
        let dishes = dishes::Entity::find()
            .filter(dishes::Column::RestaurantId.eq(restaurant.id))
            .all(&self.db)
            .await
            .context("load restaurant dishes")?;
        Ok(RestaurantBundle {
            restaurant: restaurant_from_model(restaurant)?,
            categories: categories.into_iter().map(category_from_model).collect(),
            dishes: dishes.into_iter().map(dish_from_model).collect(),
        })
    }
}

impl RestaurantRepository for DbRestaurantRepository {
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<Restaurant>, ApiServiceError> {
        let model = restaurants::Entity::find()
            .filter(restaurants::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await
            .context("find restaurant by owner")?;
        model.map(restaurant_from_model).transpose()
    }

    async fn load_by_owner(
        &self,
        owner_id: Uuid,
    ) -> Result<Option<RestaurantBundle>, ApiServiceError> {
        let model = restaurants::Entity::find()
            .filter(restaurants::Column::OwnerId.eq(owner_id))
            .one(&self.db)
            .await
            .context("find restaurant by owner")?;
        match model {
            Some(model) => Ok(Some(self.load_parts(model).await?)),
            None => Ok(None),
        }
    }

    async fn load_by_id(&self, id: Uuid) -> Result<Option<RestaurantBundle>, ApiServiceError> {
        let model = restaurants::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find restaurant by id")?;
        match model {
            Some(model) => Ok(Some(self.load_parts(model).await?)),
            None => Ok(None),
        }
    }

    async fn create_with_categories(
        &self,
        restaurant: &Restaurant,
        category_names: &[&str],
    ) -> Result<(), ApiServiceError> {
        let restaurant = restaurant.clone();
        let names: Vec<String> = category_names.iter().map(|n| (*n).to_owned()).collect();
        let result = self
            .db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                Box::pin(async move {
                    insert_restaurant(txn, &restaurant).await?;
                    for name in names {
                        categories::ActiveModel {
                            id: Set(Uuid::now_v7()),
                            name: Set(name),
                            restaurant_id: Set(restaurant.id),
                        }
                        .insert(txn)
                        .await?;
                    }
                    Ok(())
                })
            })
            .await;

        match result {
            Ok(()) => Ok(()),
            Err(TransactionError::Transaction(e)) | Err(TransactionError::Connection(e)) => {
                // The owner_id unique constraint decides provisioning races.
                if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                    Err(ApiServiceError::RestaurantAlreadyExists)
                } else {
                    Err(anyhow::Error::new(e)
                        .context("create restaurant with starter categories")
                        .into())
                }
            }
        }
    }

    async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> Result<(), ApiServiceError> {
        let mut am = restaurants::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref company_name) = update.company_name {
            am.company_name = Set(company_name.clone());
        }
        if let Some(ref address) = update.address {
            am.address = Set(address.clone());
        }
        if let Some(ref phone) = update.phone {
            am.phone = Set(phone.clone());
        }
        if let Some(ref qr_color) = update.qr_color {
            am.qr_color = Set(qr_color.clone());
        }
        if let Some(ref tagline) = update.tagline {
            am.tagline = Set(Some(tagline.clone()));
        }
        am.update(&self.db)
            .await
            .context("update restaurant profile")?;
        Ok(())
    }

    async fn publish(&self, id: Uuid, menu_link: &str) -> Result<(), ApiServiceError> {
        restaurants::ActiveModel {
            id: Set(id),
            published: Set(true),
            setup_completed: Set(true),
            menu_link: Set(Some(menu_link.to_owned())),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("publish menu")?;
        Ok(())
    }

    async fn unpublish(&self, id: Uuid) -> Result<(), ApiServiceError> {
        restaurants::ActiveModel {
            id: Set(id),
            published: Set(false),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("unpublish menu")?;
        Ok(())
    }

    async fn clear_publication(&self, id: Uuid) -> Result<(), ApiServiceError> {
        restaurants::ActiveModel {
            id: Set(id),
            published: Set(false),
            menu_link: Set(None),
            setup_completed: Set(false),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("clear publication state")?;
        Ok(())
    }

    async fn set_status(&self, id: Uuid, status: RestaurantStatus) -> Result<(), ApiServiceError> {
        restaurants::ActiveModel {
            id: Set(id),
            status: Set(status.as_u8() as i16),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set restaurant status")?;
        Ok(())
    }

    async fn set_published(&self, id: Uuid, published: bool) -> Result<(), ApiServiceError> {
        restaurants::ActiveModel {
            id: Set(id),
            published: Set(published),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set published flag")?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<AdminRestaurant>, ApiServiceError> {
        let rows = restaurants::Entity::find()
            .find_also_related(users::Entity)
            .order_by_desc(restaurants::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list restaurants with owners")?;

        let mut results = Vec::with_capacity(rows.len());
        for (model, owner) in rows {
            let owner =
                owner.ok_or_else(|| anyhow!("restaurant {} has no owner row", model.id))?;
            let owner = user_from_model(owner)?;
            let bundle = self.load_parts(model).await?;
            results.push(AdminRestaurant {
                restaurant: bundle.restaurant,
                categories: bundle.categories,
                dishes: bundle.dishes,
                owner,
            });
        }
        Ok(results)
    }
}

async fn insert_restaurant(
    txn: &DatabaseTransaction,
    restaurant: &Restaurant,
) -> Result<(), sea_orm::DbErr> {
    restaurants::ActiveModel {
        id: Set(restaurant.id),
        owner_id: Set(restaurant.owner_id),
        company_name: Set(restaurant.company_name.clone()),
        address: Set(restaurant.address.clone()),
        phone: Set(restaurant.phone.clone()),
        qr_color: Set(restaurant.qr_color.clone()),
        tagline: Set(restaurant.tagline.clone()),
        status: Set(restaurant.status.as_u8() as i16),
        published: Set(restaurant.published),
        menu_link: Set(restaurant.menu_link.clone()),
        setup_completed: Set(restaurant.setup_completed),
        created_at: Set(restaurant.created_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn restaurant_from_model(model: restaurants::Model) -> Result<Restaurant, ApiServiceError> {
    let status = RestaurantStatus::from_u8(model.status as u8).ok_or_else(|| {
        anyhow!(
            "unknown status value {} for restaurant {}",
            model.status,
            model.id
        )
    })?;
    Ok(Restaurant {
        id: model.id,
        owner_id: model.owner_id,
        company_name: model.company_name,
        address: model.address,
        phone: model.phone,
        qr_color: model.qr_color,
        tagline: model.tagline,
        status,
        published: model.published,
        menu_link: model.menu_link,
        setup_completed: model.setup_completed,
        created_at: model.created_at,
    })
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn create(&self, category: &Category) -> Result<(), ApiServiceError> {
        categories::ActiveModel {
            id: Set(category.id),
            name: Set(category.name.clone()),
            restaurant_id: Set(category.restaurant_id),
        }
        .insert(&self.db)
        .await
        .context("create category")?;
        Ok(())
    }

    async fn find_in_restaurant(
        &self,
        id: Uuid,
        restaurant_id: Uuid,
    ) -> Result<Option<Category>, ApiServiceError> {
        let model = categories::Entity::find_by_id(id)
            .filter(categories::Column::RestaurantId.eq(restaurant_id))
            .one(&self.db)
            .await
            .context("find category in restaurant")?;
        Ok(model.map(category_from_model))
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        name: model.name,
        restaurant_id: model.restaurant_id,
    }
}

// ── Dish repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDishRepository {
    pub db: DatabaseConnection,
}

impl DishRepository for DbDishRepository {
    async fn create(&self, dish: &Dish) -> Result<(), ApiServiceError> {
        dishes::ActiveModel {
            id: Set(dish.id),
            title: Set(dish.title.clone()),
            description: Set(dish.description.clone()),
            price: Set(dish.price),
            allergens: Set(json!(dish.allergens)),
            image_url: Set(dish.image_url.clone()),
            translations: Set(dish.translations.as_ref().map(|t| json!(t))),
            restaurant_id: Set(dish.restaurant_id),
            category_id: Set(dish.category_id),
        }
        .insert(&self.db)
        .await
        .context("create dish")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Dish>, ApiServiceError> {
        let model = dishes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find dish by id")?;
        Ok(model.map(dish_from_model))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiServiceError> {
        let result = dishes::Entity::delete_many()
            .filter(dishes::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete dish")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_by_restaurant(&self, restaurant_id: Uuid) -> Result<u64, ApiServiceError> {
        let result = dishes::Entity::delete_many()
            .filter(dishes::Column::RestaurantId.eq(restaurant_id))
            .exec(&self.db)
            .await
            .context("delete dishes by restaurant")?;
        Ok(result.rows_affected)
    }
}

fn dish_from_model(model: dishes::Model) -> Dish {
    Dish {
        id: model.id,
        title: model.title,
        description: model.description,
        price: model.price,
        allergens: serde_json::from_value(model.allergens).unwrap_or_default(),
        image_url: model.image_url,
        translations: model
            .translations
            .and_then(|v| serde_json::from_value(v).ok()),
        restaurant_id: model.restaurant_id,
        category_id: model.category_id,
    }
}
