//! Integration tests for account-form

use std::sync::Arc;
use std::time::Duration;

use account_form::{
    Field, FieldValue, FormController, FormError, FormState, SimulatedSubmitter,
    SubmissionError, SubmissionStatus, Submitter, TestSubmitter, ValidationError,
};

fn fill<S: Submitter>(form: &mut FormController<S>, username: &str) {
    form.on_input("username", username).unwrap();
    form.on_input("favLanguage", "rust").unwrap();
    form.on_input("favFood", "broccoli").unwrap();
    form.on_input("agreement", true).unwrap();
}

#[test]
fn test_mounted_form_is_blocked() {
    let form = FormController::new(TestSubmitter::new());

    assert!(form.state().is_pristine());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(form.errors().len(), 4);
    assert!(!form.can_submit());
}

#[test]
fn test_errors_follow_every_change() {
    let mut form = FormController::new(TestSubmitter::new());

    form.on_input("username", "ab").unwrap();
    assert_eq!(form.error_for(Field::Username), Some(ValidationError::UsernameMin));

    form.on_input("username", "abc").unwrap();
    assert_eq!(form.error_for(Field::Username), None);

    form.on_input("username", "").unwrap();
    assert_eq!(
        form.error_for(Field::Username),
        Some(ValidationError::UsernameRequired)
    );
}

#[test]
fn test_scenario_partial_form() {
    let mut form = FormController::new(TestSubmitter::new());

    form.on_input("username", "ab").unwrap();
    form.on_input("favLanguage", "").unwrap();
    form.on_input("favFood", "pizza").unwrap();
    form.on_input("agreement", true).unwrap();

    let messages = form.errors().messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages["username"], "username must be at least 3 characters");
    assert_eq!(messages["favLanguage"], "favLanguage is required");
    assert!(!form.can_submit());
}

#[test]
fn test_scenario_valid_form() {
    let mut form = FormController::new(TestSubmitter::new());
    fill(&mut form, "bob");

    assert!(form.errors().is_empty());
    assert!(form.can_submit());
    assert_eq!(
        form.state(),
        &FormState {
            username: "bob".to_string(),
            fav_language: "rust".to_string(),
            fav_food: "broccoli".to_string(),
            agreement: true,
        }
    );
}

#[test]
fn test_unchecking_agreement_blocks_submit() {
    let mut form = FormController::new(TestSubmitter::new());
    fill(&mut form, "bob");

    form.on_field_change(Field::Agreement, FieldValue::Checked(false))
        .unwrap();
    assert_eq!(
        form.error_for(Field::Agreement),
        Some(ValidationError::AgreementOptions)
    );
    assert!(!form.can_submit());
}

#[test]
fn test_rejected_input_leaves_form_untouched() {
    let mut form = FormController::new(TestSubmitter::new());
    form.on_input("username", "bob").unwrap();
    let before = form.snapshot();

    let result = form.on_input("email", "bob@example.com");
    assert!(matches!(result, Err(FormError::UnknownField(name)) if name == "email"));

    let result = form.on_input("agreement", "yes");
    assert!(matches!(result, Err(FormError::TypeMismatch { field: Field::Agreement, .. })));

    assert_eq!(form.snapshot(), before);
}

#[tokio::test]
async fn test_submit_success_resets_form() {
    let submitter = Arc::new(TestSubmitter::new());
    let mut form = FormController::new(Arc::clone(&submitter));
    fill(&mut form, "bob");

    let welcome = form.submit().await.unwrap();

    assert_eq!(welcome.username, "bob");
    assert_eq!(welcome.to_string(), "Success! Welcome, new user!");
    assert!(form.state().is_pristine());
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(!form.can_submit());
    assert_eq!(submitter.calls(), 1);
    assert_eq!(submitter.received()[0].username, "bob");
}

#[tokio::test]
async fn test_submit_failure_keeps_data() {
    let mut form = FormController::new(TestSubmitter::new().rejecting());
    fill(&mut form, "bob");
    let entered = form.state().clone();

    let err = form.submit().await.unwrap_err();

    assert!(err.is_submission_failure());
    assert!(matches!(
        err,
        FormError::Submission(SubmissionError::UsernameTaken)
    ));
    assert_eq!(err.to_string(), "Sorry! Username is taken");
    assert_eq!(form.state(), &entered);
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert!(form.can_submit());
}

#[tokio::test]
async fn test_retry_after_correcting_username() {
    let submitter = Arc::new(TestSubmitter::new().rejecting_username("admin"));
    let mut form = FormController::new(Arc::clone(&submitter));
    fill(&mut form, "admin");

    assert!(form.submit().await.is_err());

    form.on_input("username", "bob").unwrap();
    let welcome = form.submit().await.unwrap();

    assert_eq!(welcome.username, "bob");
    assert_eq!(submitter.calls(), 2);
}

#[tokio::test]
async fn test_backend_failure_is_recoverable() {
    let mut form = FormController::new(TestSubmitter::new().failing_with("connection reset"));
    fill(&mut form, "bob");

    let err = form.submit().await.unwrap_err();
    assert_eq!(err.to_string(), "Backend error: connection reset");
    assert!(form.can_submit());
}

#[tokio::test]
async fn test_submit_invalid_form_is_refused() {
    let submitter = Arc::new(TestSubmitter::new());
    let mut form = FormController::new(Arc::clone(&submitter));
    form.on_input("username", "bob").unwrap();

    let err = form.submit().await.unwrap_err();

    assert!(matches!(
        err,
        FormError::NotReady {
            status: SubmissionStatus::Idle,
            errors: 3,
        }
    ));
    assert_eq!(submitter.calls(), 0);
    assert_eq!(form.state().username, "bob");
}

#[tokio::test]
async fn test_no_resubmit_while_pending() {
    let submitter = TestSubmitter::new();
    let mut form = FormController::new(TestSubmitter::new());
    fill(&mut form, "bob");

    let pending = form.begin_submit().unwrap();
    assert_eq!(form.status(), SubmissionStatus::Submitting);
    assert!(!form.can_submit());
    assert!(!form.snapshot().can_submit);

    let second = form.begin_submit();
    assert!(matches!(
        second,
        Err(FormError::NotReady {
            status: SubmissionStatus::Submitting,
            errors: 0,
        })
    ));

    let result = pending.send(&submitter).await;
    form.finish_submit(result).unwrap();
    assert_eq!(form.status(), SubmissionStatus::Idle);
    assert_eq!(submitter.calls(), 1);
}

#[tokio::test]
async fn test_changes_during_submission_survive_failure() {
    let submitter = TestSubmitter::new().rejecting();
    let mut form = FormController::new(TestSubmitter::new());
    fill(&mut form, "bob");

    let pending = form.begin_submit().unwrap();
    form.on_input("favFood", "pizza").unwrap();
    assert_eq!(pending.form().fav_food, "broccoli");

    let result = pending.send(&submitter).await;
    assert!(form.finish_submit(result).is_err());
    assert_eq!(form.state().fav_food, "pizza");
    assert_eq!(form.state().username, "bob");
}

#[test]
fn test_finish_without_begin() {
    let mut form = FormController::new(TestSubmitter::new());

    let result = form.finish_submit(Err(SubmissionError::UsernameTaken));
    assert!(matches!(result, Err(FormError::NotSubmitting)));
}

#[tokio::test(start_paused = true)]
async fn test_simulated_submitter_waits_then_accepts() {
    let mut form = FormController::new(SimulatedSubmitter::new());
    fill(&mut form, "carol");

    let started = tokio::time::Instant::now();
    let welcome = form.submit().await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(welcome.username, "carol");
    assert!(form.state().is_pristine());
}

#[tokio::test]
async fn test_boxed_submitter() {
    let submitter: Box<dyn Submitter> = Box::new(TestSubmitter::new());
    let mut form = FormController::new(submitter);
    fill(&mut form, "dave");

    assert!(form.submit().await.is_ok());
}
