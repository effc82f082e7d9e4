use sea_orm::DatabaseConnection;

use crate::{
    data::category::CategoryRepository,
    error::AppError,
    model::category::{Category, CreateCategoryParams, UpdateCategoryParams},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered alphabetically
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        let categories = repo.get_all().await?;

        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_by_id(id).await?.map(Category::from_entity))
    }

    /// Creates a new category
    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let repo = CategoryRepository::new(self.db);

        let category = repo.create(params).await?;

        Ok(Category::from_entity(category))
    }

    /// Updates a category
    /// Returns None if the category doesn't exist
    pub async fn update(&self, params: UpdateCategoryParams) -> Result<Option<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.get_by_id(params.id).await?.is_none() {
            return Ok(None);
        }

        let category = repo.update(params).await?;

        Ok(Some(Category::from_entity(category)))
    }

    /// Deletes a category
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = CategoryRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        repo.delete(id).await?;

        Ok(true)
    }
}
