use crate::types::{message::Message, outcome::ReconciliationOutcome};

/// Wrapper type for `(Message, ReconciliationOutcome)` where the outcome
/// describes how `message` was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledMessage {
    message: Message,
    outcome: ReconciliationOutcome,
}

impl ReconciledMessage {
    #[must_use]
    pub fn new(message: Message, outcome: ReconciliationOutcome) -> Self {
        ReconciledMessage { message, outcome }
    }

    #[must_use]
    pub fn message(&self) -> &Message { &self.message }

    #[must_use]
    pub fn outcome(&self) -> ReconciliationOutcome { self.outcome }

    #[must_use]
    pub fn into_message(self) -> Message { self.message }
}
