use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string(Car::Name))
                    .col(string(Car::Brand))
                    .col(integer(Car::CategoryId))
                    .col(string_uniq(Car::Slug))
                    .col(integer(Car::Quantity).default(1))
                    .col(integer(Car::CleaningTime).default(1))
                    .col(string(Car::Transmission))
                    .col(integer(Car::Seats).default(5))
                    .col(integer(Car::Doors).default(4))
                    .col(string(Car::FuelType).default("Petrol"))
                    .col(decimal_len(Car::DailyRate, 10, 2))
                    .col(decimal_len(Car::TwelveHourRate, 10, 2))
                    .col(string(Car::Status).default("AVAILABLE"))
                    .col(string_null(Car::Image))
                    .col(boolean(Car::IsFeatured).default(false))
                    .col(text(Car::Features).default(""))
                    .col(
                        timestamp(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_category_id")
                            .from(Car::Table, Car::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_name")
                    .table(Car::Table)
                    .col(Car::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_brand")
                    .table(Car::Table)
                    .col(Car::Brand)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Name,
    Brand,
    CategoryId,
    Slug,
    Quantity,
    CleaningTime,
    Transmission,
    Seats,
    Doors,
    FuelType,
    DailyRate,
    TwelveHourRate,
    Status,
    Image,
    IsFeatured,
    Features,
    CreatedAt,
}
