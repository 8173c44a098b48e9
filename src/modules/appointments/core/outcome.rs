use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("network error: {0}")]
    NetworkError(String),

    #[error("non-success status: {0}")]
    NonSuccessStatus(u16),

    #[error("timed out")]
    Timeout,

    #[error("link open was blocked")]
    PopupBlocked,
}

/// Result of one delivery attempt.
///
/// `Indeterminate` is a fire-and-forget handoff: the request left, but nobody
/// can tell whether it arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    Delivered,
    Rejected(RejectionReason),
    Indeterminate,
}

impl DeliveryOutcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DeliveryOutcome::Delivered => "delivered",
            DeliveryOutcome::Rejected(_) => "rejected",
            DeliveryOutcome::Indeterminate => "indeterminate",
        }
    }
}
