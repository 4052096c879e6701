use farmstead_backoffice::error::BackofficeError;
use farmstead_backoffice::usecase::account::{
    CreateAuthUserInput, CreateAuthUserUseCase, DeleteAuthUserUseCase, UpdateAuthUserStatusInput,
    UpdateAuthUserStatusOutput, UpdateAuthUserStatusUseCase,
};
use farmstead_domain::id::UserId;
use farmstead_domain::user::UserRole;

use crate::helpers::{CREATED_UID, IdentityCall, MockIdentityProvider, MockProfileRepo, test_profile};

fn create_input(email: &str, role: Option<&str>, password: Option<&str>) -> CreateAuthUserInput {
    CreateAuthUserInput {
        email: email.to_owned(),
        role: role.map(str::to_owned),
        password: password.map(str::to_owned),
    }
}

// ── createAuthUser ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_user_with_temporary_password() {
    let identity = MockIdentityProvider::new();
    let calls = identity.calls_handle();
    let profiles = MockProfileRepo::empty();
    let stored = profiles.profiles_handle();

    let uc = CreateAuthUserUseCase { identity, profiles };
    let out = uc
        .execute(create_input("  New.Worker@Farmstead.example ", None, None))
        .await
        .unwrap();

    assert_eq!(out.uid, UserId(CREATED_UID.into()));
    let temp = out.temporary_password.expect("temporary password");
    assert!(temp.starts_with("Temp") && temp.ends_with('!'));
    assert_eq!(temp.len(), 13);

    let calls = calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![
            IdentityCall::Create {
                email: "new.worker@farmstead.example".into(),
                password: temp.clone(),
            },
            IdentityCall::SetRole {
                uid: CREATED_UID.into(),
                role: UserRole::Worker,
            },
        ]
    );

    let stored = stored.lock().unwrap();
    let profile = &stored[CREATED_UID];
    assert_eq!(profile.email.as_deref(), Some("new.worker@farmstead.example"));
    assert_eq!(profile.role, Some(UserRole::Worker));
    assert!(!profile.disabled);
}

#[tokio::test]
async fn should_not_return_caller_supplied_password() {
    let identity = MockIdentityProvider::new();
    let calls = identity.calls_handle();
    let uc = CreateAuthUserUseCase {
        identity,
        profiles: MockProfileRepo::empty(),
    };

    let out = uc
        .execute(create_input("a@farmstead.example", Some("admin"), Some("s3cret-pass")))
        .await
        .unwrap();

    assert!(out.temporary_password.is_none());
    let calls = calls.lock().unwrap();
    assert_eq!(
        calls[0],
        IdentityCall::Create {
            email: "a@farmstead.example".into(),
            password: "s3cret-pass".into(),
        }
    );
    assert_eq!(
        calls[1],
        IdentityCall::SetRole {
            uid: CREATED_UID.into(),
            role: UserRole::Admin,
        }
    );
}

#[tokio::test]
async fn should_generate_password_when_supplied_one_is_blank() {
    let uc = CreateAuthUserUseCase {
        identity: MockIdentityProvider::new(),
        profiles: MockProfileRepo::empty(),
    };
    let out = uc
        .execute(create_input("a@farmstead.example", None, Some("   ")))
        .await
        .unwrap();
    assert!(out.temporary_password.is_some());
}

#[tokio::test]
async fn should_reject_empty_email_before_provider_call() {
    let identity = MockIdentityProvider::new();
    let calls = identity.calls_handle();
    let uc = CreateAuthUserUseCase {
        identity,
        profiles: MockProfileRepo::empty(),
    };

    let result = uc.execute(create_input("   ", None, None)).await;
    assert!(
        matches!(result, Err(BackofficeError::MissingEmail)),
        "expected MissingEmail, got {result:?}"
    );
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_unknown_role() {
    let identity = MockIdentityProvider::new();
    let calls = identity.calls_handle();
    let uc = CreateAuthUserUseCase {
        identity,
        profiles: MockProfileRepo::empty(),
    };

    let result = uc
        .execute(create_input("a@farmstead.example", Some("owner"), None))
        .await;
    assert!(
        matches!(result, Err(BackofficeError::InvalidRole(ref r)) if r == "owner"),
        "expected InvalidRole, got {result:?}"
    );
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_propagate_duplicate_email() {
    let uc = CreateAuthUserUseCase {
        identity: MockIdentityProvider::new().with_existing_email("taken@farmstead.example"),
        profiles: MockProfileRepo::empty(),
    };
    let result = uc
        .execute(create_input("Taken@Farmstead.example", None, None))
        .await;
    assert!(
        matches!(result, Err(BackofficeError::EmailAlreadyExists)),
        "expected EmailAlreadyExists, got {result:?}"
    );
}

#[tokio::test]
async fn should_not_write_profile_when_role_claim_fails() {
    let mut identity = MockIdentityProvider::new();
    identity.fail_set_role = true;
    let profiles = MockProfileRepo::empty();
    let stored = profiles.profiles_handle();

    let uc = CreateAuthUserUseCase { identity, profiles };
    let result = uc.execute(create_input("a@farmstead.example", None, None)).await;

    assert!(matches!(result, Err(BackofficeError::Internal(_))));
    assert!(stored.lock().unwrap().is_empty());
}

// ── updateAuthUserStatus ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_disable_user_in_provider_and_profile() {
    let identity = MockIdentityProvider::new().with_user("u-1");
    let calls = identity.calls_handle();
    let profiles = MockProfileRepo::new(vec![test_profile("u-1", Some(UserRole::Worker))]);
    let stored = profiles.profiles_handle();

    let uc = UpdateAuthUserStatusUseCase { identity, profiles };
    let out = uc
        .execute(UpdateAuthUserStatusInput {
            uid: " u-1 ".into(),
            disabled: Some(true),
        })
        .await
        .unwrap();

    assert_eq!(
        out,
        UpdateAuthUserStatusOutput {
            uid: UserId("u-1".into()),
            disabled: true,
        }
    );
    assert_eq!(
        *calls.lock().unwrap(),
        vec![IdentityCall::SetDisabled {
            uid: "u-1".into(),
            disabled: true,
        }]
    );
    assert!(stored.lock().unwrap()["u-1"].disabled);
}

#[tokio::test]
async fn should_leave_missing_profile_missing() {
    let profiles = MockProfileRepo::empty();
    let stored = profiles.profiles_handle();
    let uc = UpdateAuthUserStatusUseCase {
        identity: MockIdentityProvider::new().with_user("u-1"),
        profiles,
    };

    uc.execute(UpdateAuthUserStatusInput {
        uid: "u-1".into(),
        disabled: Some(false),
    })
    .await
    .unwrap();
    assert!(stored.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_blank_uid_for_status_update() {
    let identity = MockIdentityProvider::new();
    let calls = identity.calls_handle();
    let uc = UpdateAuthUserStatusUseCase {
        identity,
        profiles: MockProfileRepo::empty(),
    };

    let result = uc
        .execute(UpdateAuthUserStatusInput {
            uid: "  ".into(),
            disabled: Some(true),
        })
        .await;
    assert!(matches!(result, Err(BackofficeError::MissingUid)));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_report_unknown_user_for_status_update() {
    let uc = UpdateAuthUserStatusUseCase {
        identity: MockIdentityProvider::new(),
        profiles: MockProfileRepo::empty(),
    };
    let result = uc
        .execute(UpdateAuthUserStatusInput {
            uid: "ghost".into(),
            disabled: Some(true),
        })
        .await;
    assert!(matches!(result, Err(BackofficeError::UserNotFound)));
}

#[tokio::test]
async fn should_propagate_profile_failure_after_provider_update() {
    let identity = MockIdentityProvider::new().with_user("u-1");
    let calls = identity.calls_handle();
    let uc = UpdateAuthUserStatusUseCase {
        identity,
        profiles: MockProfileRepo::failing(),
    };

    let result = uc
        .execute(UpdateAuthUserStatusInput {
            uid: "u-1".into(),
            disabled: Some(true),
        })
        .await;
    assert!(matches!(result, Err(BackofficeError::Internal(_))));
    // First write stays applied; no compensation.
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_require_disabled_flag() {
    let identity = MockIdentityProvider::new().with_user("u-1");
    let calls = identity.calls_handle();
    let profiles = MockProfileRepo::new(vec![test_profile("u-1", None)]);
    let stored = profiles.profiles_handle();

    let uc = UpdateAuthUserStatusUseCase { identity, profiles };
    let result = uc
        .execute(UpdateAuthUserStatusInput {
            uid: "u-1".into(),
            disabled: None,
        })
        .await;

    assert!(
        matches!(result, Err(BackofficeError::MissingDisabled)),
        "expected MissingDisabled, got {result:?}"
    );
    assert!(calls.lock().unwrap().is_empty());
    assert!(!stored.lock().unwrap()["u-1"].disabled);
}

// ── deleteAuthUser ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_user_and_profile() {
    let identity = MockIdentityProvider::new().with_user("u-1");
    let calls = identity.calls_handle();
    let profiles = MockProfileRepo::new(vec![
        test_profile("u-1", Some(UserRole::Worker)),
        test_profile("u-2", None),
    ]);
    let stored = profiles.profiles_handle();

    let uc = DeleteAuthUserUseCase { identity, profiles };
    let uid = uc.execute("u-1").await.unwrap();

    assert_eq!(uid, UserId("u-1".into()));
    assert_eq!(
        *calls.lock().unwrap(),
        vec![IdentityCall::Delete { uid: "u-1".into() }]
    );
    let stored = stored.lock().unwrap();
    assert!(!stored.contains_key("u-1"));
    assert!(stored.contains_key("u-2"));
}

#[tokio::test]
async fn should_reject_blank_uid_for_delete() {
    let uc = DeleteAuthUserUseCase {
        identity: MockIdentityProvider::new(),
        profiles: MockProfileRepo::empty(),
    };
    let result = uc.execute("").await;
    assert!(matches!(result, Err(BackofficeError::MissingUid)));
}
