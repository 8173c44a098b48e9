use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkOpenError {
    #[error("link open blocked by host: {0}")]
    Blocked(String),
}

/// The host environment that opens deep links (a browser tab, a desktop shell).
/// Opening is a handoff: once it returns, nothing more is known about the link.
pub trait LinkOpener: Send + Sync {
    fn open(&self, uri: &str) -> Result<(), LinkOpenError>;
}

pub mod in_memory;
