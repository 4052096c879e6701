use farmstead_backoffice::domain::types::Recipients;
use farmstead_backoffice::error::BackofficeError;
use farmstead_backoffice::usecase::test_email::{SendTestEmailInput, SendTestEmailUseCase};

use crate::helpers::{MESSAGE_ID, MockMailer, SENDER};

#[tokio::test]
async fn should_wrap_single_recipient_and_apply_defaults() {
    let mailer = MockMailer::new();
    let sent = mailer.sent_handle();
    let uc = SendTestEmailUseCase {
        mailer: Some(mailer),
        default_from: SENDER.to_owned(),
    };

    let id = uc
        .execute(SendTestEmailInput {
            to: Some(Recipients::One("ops@farmstead.example".into())),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(id.as_deref(), Some(MESSAGE_ID));
    let sent = sent.lock().unwrap();
    assert_eq!(sent[0].to, vec!["ops@farmstead.example".to_owned()]);
    assert_eq!(sent[0].from, SENDER);
    assert_eq!(sent[0].subject, "Farmstead test email");
    assert_eq!(sent[0].html, "<p>This is a test email from Farmstead.</p>");
}

#[tokio::test]
async fn should_pass_through_explicit_fields() {
    let mailer = MockMailer::new();
    let sent = mailer.sent_handle();
    let uc = SendTestEmailUseCase {
        mailer: Some(mailer),
        default_from: SENDER.to_owned(),
    };

    uc.execute(SendTestEmailInput {
        to: Some(Recipients::Many(vec![
            "a@farmstead.example".into(),
            "b@farmstead.example".into(),
        ])),
        subject: Some("Hello".into()),
        html: Some("<p>Hi</p>".into()),
        from: Some("Ops <ops@farmstead.example>".into()),
    })
    .await
    .unwrap();

    let sent = sent.lock().unwrap();
    assert_eq!(sent[0].to.len(), 2);
    assert_eq!(sent[0].subject, "Hello");
    assert_eq!(sent[0].html, "<p>Hi</p>");
    assert_eq!(sent[0].from, "Ops <ops@farmstead.example>");
}

#[tokio::test]
async fn should_default_absent_recipient_to_empty_address() {
    let mailer = MockMailer::new();
    let sent = mailer.sent_handle();
    let uc = SendTestEmailUseCase {
        mailer: Some(mailer),
        default_from: SENDER.to_owned(),
    };

    uc.execute(SendTestEmailInput::default()).await.unwrap();
    assert_eq!(sent.lock().unwrap()[0].to, vec![String::new()]);
}

#[tokio::test]
async fn should_require_configured_mailer_for_test_email() {
    let uc = SendTestEmailUseCase::<MockMailer> {
        mailer: None,
        default_from: SENDER.to_owned(),
    };
    let result = uc.execute(SendTestEmailInput::default()).await;
    assert!(matches!(result, Err(BackofficeError::EmailNotConfigured)));
}
