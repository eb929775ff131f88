use std::fmt;

/// Whether a submission is currently in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionStatus {
    pub fn is_submitting(self) -> bool {
        matches!(self, Self::Submitting)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Submitting => f.write_str("submitting"),
        }
    }
}
