use farmstead_backoffice::usecase::profile::{EnsureProfileInput, EnsureProfileUseCase};
use farmstead_domain::id::UserId;
use farmstead_domain::user::UserRole;

use crate::helpers::{MockProfileRepo, test_profile};

fn input(uid: &str, role: Option<UserRole>) -> EnsureProfileInput {
    EnsureProfileInput {
        uid: UserId(uid.to_owned()),
        email: Some(format!("{uid}@farmstead.example")),
        role,
    }
}

#[tokio::test]
async fn should_create_profile_on_first_sync() {
    let repo = MockProfileRepo::empty();
    let profiles = repo.profiles_handle();
    let uc = EnsureProfileUseCase { repo };

    let out = uc.execute(input("u-1", None)).await.unwrap();
    assert_eq!(out.uid, UserId("u-1".into()));
    assert_eq!(out.role, None);

    let profiles = profiles.lock().unwrap();
    let created = profiles.get("u-1").expect("profile created");
    assert!(!created.disabled, "new profile must be enabled");
    assert_eq!(created.role, None);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn should_be_idempotent() {
    let repo = MockProfileRepo::empty();
    let profiles = repo.profiles_handle();
    let uc = EnsureProfileUseCase { repo };

    let first = uc.execute(input("u-1", Some(UserRole::Worker))).await.unwrap();
    let second = uc.execute(input("u-1", Some(UserRole::Worker))).await.unwrap();
    assert_eq!(first, second);

    let profiles = profiles.lock().unwrap();
    assert_eq!(profiles.len(), 1);
    let stored = &profiles["u-1"];
    assert!(!stored.disabled);
    assert_eq!(stored.role, Some(UserRole::Worker));
}

#[tokio::test]
async fn should_keep_disabled_flag_and_created_at_on_sync() {
    let mut existing = test_profile("u-2", Some(UserRole::Admin));
    existing.disabled = true;
    let created_at = existing.created_at;

    let repo = MockProfileRepo::new(vec![existing]);
    let profiles = repo.profiles_handle();
    let uc = EnsureProfileUseCase { repo };

    let out = uc.execute(input("u-2", None)).await.unwrap();
    assert_eq!(out.role, Some(UserRole::Admin), "stored role is kept");

    let profiles = profiles.lock().unwrap();
    let stored = &profiles["u-2"];
    assert!(stored.disabled);
    assert_eq!(stored.created_at, created_at);
    assert!(stored.updated_at > created_at);
}

#[tokio::test]
async fn should_prefer_resolved_role_over_stored_role() {
    let repo = MockProfileRepo::new(vec![test_profile("u-3", Some(UserRole::Worker))]);
    let profiles = repo.profiles_handle();
    let uc = EnsureProfileUseCase { repo };

    let out = uc
        .execute(input("u-3", Some(UserRole::SuperAdmin)))
        .await
        .unwrap();
    assert_eq!(out.role, Some(UserRole::SuperAdmin));
    assert_eq!(
        profiles.lock().unwrap()["u-3"].role,
        Some(UserRole::SuperAdmin)
    );
}

#[tokio::test]
async fn should_keep_row_inserted_by_concurrent_first_sign_in() {
    let existing = test_profile("u-4", Some(UserRole::Admin));
    let created_at = existing.created_at;

    let repo = MockProfileRepo::with_stale_reads(vec![existing]);
    let profiles = repo.profiles_handle();
    let uc = EnsureProfileUseCase { repo };

    let out = uc.execute(input("u-4", None)).await.unwrap();
    assert_eq!(out.uid, UserId("u-4".into()));

    let profiles = profiles.lock().unwrap();
    assert_eq!(profiles.len(), 1);
    let stored = &profiles["u-4"];
    assert_eq!(stored.role, Some(UserRole::Admin));
    assert_eq!(stored.created_at, created_at);
}
