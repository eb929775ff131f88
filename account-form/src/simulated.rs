use std::time::Duration;

use async_trait::async_trait;

use crate::{FormState, SubmissionResult, Submitter, Welcome};

/// Stand-in for the account server: waits, then accepts every form.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    /// Delay used by [`SimulatedSubmitter::new`].
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

    pub fn new() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
        }
    }

    /// Set how long each submission takes.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit_account(&self, form: &FormState) -> SubmissionResult {
        tokio::time::sleep(self.delay).await;
        Ok(Welcome::new(form.username.clone()))
    }
}
