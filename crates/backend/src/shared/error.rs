use contracts::enums::OrderStatus;
use thiserror::Error;

/// Typed failures of the domain operations.
///
/// Every error is reported to the immediate caller; nothing is swallowed
/// inside the services. Persistence failures are surfaced but never fatal:
/// the system keeps running on the in-memory state.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists")]
    DuplicateName(String),

    #[error("the order queue is empty")]
    EmptyQueue,

    #[error("queue position {position} is out of range ({len} pending)")]
    PositionOutOfRange { position: usize, len: usize },

    #[error("illegal status transition: {from} -> {to}")]
    InvalidStatus { from: OrderStatus, to: OrderStatus },

    #[error("order #{0} is a history record and cannot be changed")]
    ImmutableRecord(u64),

    #[error("persistence failure: {0}")]
    Persistence(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
