use kv_log_macro as log;

use crate::{
    Field, FieldValue, FormError, FormState, Schema, SubmissionResult, SubmissionStatus,
    Submitter, ValidationError, ValidationErrors, Welcome,
};

/// Read-only copy of everything a presentation layer renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub state: FormState,
    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    pub can_submit: bool,
}

/// A submission that has been started but not yet finished.
///
/// Owns a copy of the submitted form, so the controller stays free for
/// rendering and field changes while the collaborator is awaited.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    form: FormState,
}

impl PendingSubmission {
    /// The form as it was when the submission started.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Hand the form to the collaborator and wait for its answer.
    ///
    /// Pass the result to [`FormController::finish_submit`].
    pub async fn send<S: Submitter + ?Sized>(&self, submitter: &S) -> SubmissionResult {
        submitter.submit_account(&self.form).await
    }
}

/// Owns the form state, keeps validation in step with it and runs the
/// submission workflow.
///
/// Every mutation goes through `&mut self`, so field changes and submissions
/// are serialized. Errors are recomputed from scratch after each change and
/// never describe an older state.
///
/// ```
/// # tokio_test_block_on(async {
/// use account_form::{Field, FormController, SubmissionStatus, TestSubmitter};
///
/// let mut form = FormController::new(TestSubmitter::new());
/// form.on_field_change(Field::Username, "bob".into())?;
/// form.on_field_change(Field::FavLanguage, "rust".into())?;
/// form.on_field_change(Field::FavFood, "broccoli".into())?;
/// form.on_field_change(Field::Agreement, true.into())?;
/// assert!(form.can_submit());
///
/// let welcome = form.submit().await?;
/// assert_eq!(welcome.to_string(), "Success! Welcome, new user!");
/// assert!(form.state().is_pristine());
/// assert_eq!(form.status(), SubmissionStatus::Idle);
/// # Ok::<(), account_form::FormError>(())
/// # }).unwrap();
/// # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug)]
pub struct FormController<S> {
    state: FormState,
    errors: ValidationErrors,
    status: SubmissionStatus,
    schema: Schema,
    submitter: S,
}

impl<S: Submitter> FormController<S> {
    /// Mount an empty form validated against the registration schema.
    pub fn new(submitter: S) -> Self {
        Self::with_schema(submitter, Schema::registration())
    }

    /// Mount an empty form validated against a custom schema.
    pub fn with_schema(submitter: S, schema: Schema) -> Self {
        let state = FormState::default();
        let errors = schema.validate(&state);
        Self {
            state,
            errors,
            status: SubmissionStatus::Idle,
            schema,
            submitter,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// The active error of one field, if any.
    pub fn error_for(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            state: self.state.clone(),
            errors: self.errors.clone(),
            status: self.status,
            can_submit: self.can_submit(),
        }
    }

    /// Apply an input event and revalidate.
    ///
    /// A value of the wrong kind is rejected and leaves the form untouched.
    pub fn on_field_change(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        self.state = self.state.with(field, value)?;
        self.errors = self.schema.validate(&self.state);

        log::debug!("Field changed", { field: field.as_str(), errors: self.errors.len() });
        Ok(())
    }

    /// Apply an input event addressed by wire name, e.g. `"favFood"`.
    pub fn on_input(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let field = name.parse()?;
        self.on_field_change(field, value.into())
    }

    /// The form is valid and no submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty() && self.status == SubmissionStatus::Idle
    }

    /// Start a submission.
    ///
    /// Moves to `Submitting` and returns a copy of the form to send. Fails
    /// with [`FormError::NotReady`] unless [`can_submit`](Self::can_submit).
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, FormError> {
        if !self.can_submit() {
            return Err(FormError::NotReady {
                status: self.status,
                errors: self.errors.len(),
            });
        }

        self.status = SubmissionStatus::Submitting;
        log::info!("Submitting account", { username: self.state.username.as_str() });

        Ok(PendingSubmission {
            form: self.state.clone(),
        })
    }

    /// Apply the collaborator's answer to a started submission.
    ///
    /// On success the form is reset to its initial values and revalidated, so
    /// the empty form blocks submission again. On failure the entered data is
    /// kept. Either way the status returns to `Idle`.
    pub fn finish_submit(&mut self, result: SubmissionResult) -> Result<Welcome, FormError> {
        if self.status != SubmissionStatus::Submitting {
            return Err(FormError::NotSubmitting);
        }
        self.status = SubmissionStatus::Idle;

        match result {
            Ok(welcome) => {
                self.state = FormState::default();
                self.errors = self.schema.validate(&self.state);
                log::info!("Account created", { username: welcome.username.as_str() });
                Ok(welcome)
            }
            Err(err) => {
                log::warn!("Submission failed: {}", err);
                Err(err.into())
            }
        }
    }

    /// Submit the form and wait for the collaborator.
    ///
    /// While this is pending the form reports `Submitting` and cannot be
    /// submitted again. There are no automatic retries.
    pub async fn submit(&mut self) -> Result<Welcome, FormError> {
        let pending = self.begin_submit()?;
        let result = pending.send(&self.submitter).await;
        self.finish_submit(result)
    }
}
