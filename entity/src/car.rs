use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub brand: String,
    pub category_id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub quantity: i32,
    /// Hours needed for cleaning between trips.
    pub cleaning_time: i32,
    pub transmission: String,
    pub seats: i32,
    pub doors: i32,
    pub fuel_type: String,
    pub daily_rate: Decimal,
    pub twelve_hour_rate: Decimal,
    pub status: String,
    pub image: Option<String>,
    pub is_featured: bool,
    pub features: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
