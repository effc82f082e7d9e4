use super::*;
use entity::prelude::Category;

/// Tests creating and fetching a category.
#[tokio::test]
async fn creates_and_fetches_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let category = repo
        .create(CreateCategoryParams {
            name: "SUV".to_string(),
            image: Some("categories/suv.jpg".to_string()),
        })
        .await?;

    let fetched = repo.get_by_id(category.id).await?.unwrap();
    assert_eq!(fetched.name, "SUV");
    assert_eq!(fetched.image.as_deref(), Some("categories/suv.jpg"));
    assert!(repo.exists(category.id).await?);

    Ok(())
}

/// Tests that categories come back alphabetically.
#[tokio::test]
async fn lists_categories_alphabetically() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Van", "Compact", "Sedan"] {
        factory::category::CategoryFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Compact", "Sedan", "Van"]);

    Ok(())
}

/// Tests updating a category's fields.
#[tokio::test]
async fn updates_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let updated = repo
        .update(UpdateCategoryParams {
            id: category.id,
            name: "Renamed".to_string(),
            image: None,
        })
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert!(updated.image.is_none());

    Ok(())
}

/// Tests deleting a category.
#[tokio::test]
async fn deletes_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Category)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::category::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    repo.delete(category.id).await?;

    assert!(repo.get_by_id(category.id).await?.is_none());
    assert!(!repo.exists(category.id).await?);

    Ok(())
}
