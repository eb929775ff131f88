use std::fmt;

use async_trait::async_trait;

use crate::{FormState, SubmissionError};

/// Success notice returned once an account has been created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    /// The username the account was created for.
    pub username: String,
}

impl Welcome {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl fmt::Display for Welcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Success! Welcome, new user!")
    }
}

/// Outcome of a single call to a [`Submitter`].
pub type SubmissionResult = Result<Welcome, SubmissionError>;

/// Trait for the collaborator that creates the account.
///
/// Implementations decide how the account is created: a simulated delay, a
/// network call, or a scripted stub in tests. The form controller only ever
/// calls this with a form that passed validation.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Submit a validated form.
    ///
    /// # Returns
    /// * `Ok(welcome)` when the account was created
    /// * `Err` when it was refused; the caller keeps the entered data
    async fn submit_account(&self, form: &FormState) -> SubmissionResult;
}

#[async_trait]
impl<S: Submitter + ?Sized> Submitter for Box<S> {
    async fn submit_account(&self, form: &FormState) -> SubmissionResult {
        (**self).submit_account(form).await
    }
}

#[async_trait]
impl<S: Submitter + ?Sized> Submitter for std::sync::Arc<S> {
    async fn submit_account(&self, form: &FormState) -> SubmissionResult {
        (**self).submit_account(form).await
    }
}
