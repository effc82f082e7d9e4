use crate::dto::category::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};

/// Car category used to group the fleet for browsing and filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    /// Optional image path for the category tile.
    pub image: Option<String>,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            image: entity.image,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            image: self.image,
        }
    }
}

/// Parameters for creating a new category.
#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
    pub image: Option<String>,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name,
            image: dto.image,
        }
    }
}

/// Parameters for updating an existing category.
#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: String,
    pub image: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name,
            image: dto.image,
        }
    }
}
