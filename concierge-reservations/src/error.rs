use concierge_core::{CoreError, ItineraryError, ProfileError};
use std::fmt;

/// The four operations the adapter exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Cancel,
    Search,
}

impl Operation {
    /// Name of the structured log event emitted when the operation fails.
    pub fn event_name(&self) -> &'static str {
        match self {
            Operation::Create => "reservation.create.unhandled",
            Operation::Update => "reservation.update.unhandled",
            Operation::Cancel => "reservation.cancel.unhandled",
            Operation::Search => "reservation.search.unhandled",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CreateReservation"),
            Operation::Update => write!(f, "UpdateReservation"),
            Operation::Cancel => write!(f, "CancelReservation"),
            Operation::Search => write!(f, "SearchByConfirmation"),
        }
    }
}

/// Anything that can go wrong between building the header and returning a mapped response.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error(transparent)]
    Context(#[from] CoreError),

    #[error(transparent)]
    Itinerary(#[from] ItineraryError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("Malformed itinerary response: {0}")]
    MalformedResponse(String),
}

/// The single error type surfaced by the adapter.
///
/// `activity_id` is the correlation id of the failed call, or empty when the
/// failure happened before a request header existed.
#[derive(Debug, thiserror::Error)]
#[error("{operation} failed [activity {activity_id}]: {source}")]
pub struct ServiceFault {
    pub operation: Operation,
    pub activity_id: String,
    #[source]
    pub source: AdapterError,
}

impl ServiceFault {
    pub fn new(operation: Operation, activity_id: impl Into<String>, source: AdapterError) -> Self {
        Self {
            operation,
            activity_id: activity_id.into(),
            source,
        }
    }
}
