//! Error types for grid and gesture operations.

use crate::models::event::EventId;
use crate::models::resource::ResourceId;
use thiserror::Error;

/// A store or resource-list request that was declined without mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("event {0} not found")]
    EventNotFound(EventId),
    #[error("invalid span: start day {start} is after end day {end}")]
    InvalidSpan { start: usize, end: usize },
    #[error("resource index {index} out of range ({len} resources)")]
    ResourceOutOfRange { index: usize, len: usize },
    #[error("resource {0:?} no longer exists")]
    ResourceNotFound(ResourceId),
}

/// Input that the interaction controller refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureError {
    #[error("gesture {active} is already in progress")]
    Busy { active: u64 },
    #[error("gesture {0} is not the active gesture")]
    UnknownGesture(u64),
    #[error("event {0} not found")]
    EventNotFound(EventId),
}
