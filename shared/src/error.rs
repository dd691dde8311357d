use thiserror::Error;

/// Failures while interpreting raw field values.
///
/// These never reach the views: the formatting functions fall back to a
/// placeholder or to the raw input instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("timestamp is empty")]
    EmptyTimestamp,

    #[error("unrecognized timestamp `{0}`")]
    UnparsableTimestamp(String),
}
