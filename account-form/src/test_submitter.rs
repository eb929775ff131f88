//! Test submitter for exercising forms without a server.
//!
//! `TestSubmitter` answers every submission immediately with a scripted
//! outcome and records what it was sent.
//!
//! # Example
//!
//! ```rust
//! use account_form::{FormState, Submitter, SubmissionError, TestSubmitter};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let submitter = TestSubmitter::new().rejecting_username("admin");
//!
//! let admin = FormState { username: "admin".to_string(), ..FormState::default() };
//! let bob = FormState { username: "bob".to_string(), ..FormState::default() };
//!
//! assert!(matches!(
//!     submitter.submit_account(&admin).await,
//!     Err(SubmissionError::UsernameTaken)
//! ));
//! assert!(submitter.submit_account(&bob).await.is_ok());
//! assert_eq!(submitter.calls(), 2);
//! # });
//! ```

use std::sync::Mutex;

use async_trait::async_trait;

use crate::{FormState, SubmissionError, SubmissionResult, Submitter, Welcome};

#[derive(Debug, Clone, Default)]
enum Outcome {
    #[default]
    Accept,
    RejectAll,
    RejectUsername(String),
    Fail(String),
}

/// A submitter that returns pre-configured outcomes.
#[derive(Debug, Default)]
pub struct TestSubmitter {
    outcome: Outcome,
    received: Mutex<Vec<FormState>>,
}

impl TestSubmitter {
    /// Create a submitter that accepts every form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every form with [`SubmissionError::UsernameTaken`].
    pub fn rejecting(mut self) -> Self {
        self.outcome = Outcome::RejectAll;
        self
    }

    /// Reject only forms with this username.
    pub fn rejecting_username(mut self, username: impl Into<String>) -> Self {
        self.outcome = Outcome::RejectUsername(username.into());
        self
    }

    /// Fail every form with a backend error carrying this message.
    pub fn failing_with(mut self, message: impl Into<String>) -> Self {
        self.outcome = Outcome::Fail(message.into());
        self
    }

    /// Number of submissions received.
    pub fn calls(&self) -> usize {
        self.received().len()
    }

    /// Every form received, oldest first.
    pub fn received(&self) -> Vec<FormState> {
        self.received
            .lock()
            .map(|forms| forms.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Submitter for TestSubmitter {
    async fn submit_account(&self, form: &FormState) -> SubmissionResult {
        if let Ok(mut received) = self.received.lock() {
            received.push(form.clone());
        }

        match &self.outcome {
            Outcome::Accept => Ok(Welcome::new(form.username.clone())),
            Outcome::RejectAll => Err(SubmissionError::UsernameTaken),
            Outcome::RejectUsername(taken) if *taken == form.username => {
                Err(SubmissionError::UsernameTaken)
            }
            Outcome::RejectUsername(_) => Ok(Welcome::new(form.username.clone())),
            Outcome::Fail(message) => Err(SubmissionError::backend(anyhow::anyhow!(
                "{message}"
            ))),
        }
    }
}
