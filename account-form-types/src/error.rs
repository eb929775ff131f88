use crate::{Field, SubmissionStatus};

/// Error returned by a [`Submitter`](crate::Submitter).
///
/// Always recoverable: the entered data is kept and the user may resubmit.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The account could not be created because the name is in use.
    #[error("Sorry! Username is taken")]
    UsernameTaken,

    /// Backend-specific failure (network, server error, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl SubmissionError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Error type for form controller operations.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: Field,
        expected: &'static str,
        actual: &'static str,
    },

    /// Submission was requested while the form is invalid or already submitting.
    #[error("Form cannot be submitted ({status}, {errors} invalid field(s))")]
    NotReady {
        status: SubmissionStatus,
        errors: usize,
    },

    /// A submission result arrived while no submission was in flight.
    #[error("No submission in progress")]
    NotSubmitting,

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl FormError {
    /// Check if this error came from the submission collaborator.
    pub fn is_submission_failure(&self) -> bool {
        matches!(self, Self::Submission(_))
    }
}
