use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::category::{CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered alphabetically by name
    pub async fn get_all(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Creates a new category
    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            name: ActiveValue::Set(params.name),
            image: ActiveValue::Set(params.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates a category's name and image
    pub async fn update(
        &self,
        params: UpdateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        let category = entity::prelude::Category::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Category with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::category::ActiveModel = category.into();
        active_model.name = ActiveValue::Set(params.name);
        active_model.image = ActiveValue::Set(params.image);

        active_model.update(self.db).await
    }

    /// Deletes a category, cascading to its cars
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if a category exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
