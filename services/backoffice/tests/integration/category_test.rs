use farmstead_backoffice::error::BackofficeError;
use farmstead_backoffice::usecase::category::DeleteCategoryWithItemsUseCase;

use crate::helpers::MockCategoryRepo;

#[tokio::test]
async fn should_delete_category_and_its_items() {
    let repo = MockCategoryRepo::new(
        &["cat-eggs", "cat-hens"],
        &[
            ("item-1", "cat-eggs"),
            ("item-2", "cat-eggs"),
            ("item-3", "cat-eggs"),
            ("item-4", "cat-hens"),
        ],
    );
    let items = repo.items_handle();
    let categories = repo.categories_handle();

    let uc = DeleteCategoryWithItemsUseCase { repo };
    let deleted = uc.execute("cat-eggs").await.unwrap();

    assert_eq!(deleted, 3);
    assert_eq!(
        *items.lock().unwrap(),
        vec![("item-4".to_owned(), "cat-hens".to_owned())]
    );
    assert_eq!(*categories.lock().unwrap(), vec!["cat-hens".to_owned()]);
}

#[tokio::test]
async fn should_delete_empty_category() {
    let repo = MockCategoryRepo::new(&["cat-empty"], &[("item-1", "cat-other")]);
    let items = repo.items_handle();
    let categories = repo.categories_handle();

    let uc = DeleteCategoryWithItemsUseCase { repo };
    let deleted = uc.execute(" cat-empty ").await.unwrap();

    assert_eq!(deleted, 0);
    assert!(categories.lock().unwrap().is_empty());
    assert_eq!(items.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_blank_category_id() {
    let repo = MockCategoryRepo::new(&["cat-eggs"], &[]);
    let categories = repo.categories_handle();

    let uc = DeleteCategoryWithItemsUseCase { repo };
    let result = uc.execute("   ").await;

    assert!(
        matches!(result, Err(BackofficeError::MissingCategoryId)),
        "expected MissingCategoryId, got {result:?}"
    );
    assert_eq!(categories.lock().unwrap().len(), 1);
}
