pub mod client;
pub mod context;
pub mod itinerary;
pub mod profile;
pub mod reservation;

pub use client::{ItineraryConnector, ItineraryError, ItinerarySession, MockItineraryConnector};
pub use context::{BusinessContext, ContextHeader};
pub use profile::{MockProfileLookup, Profile, ProfileError, ProfileLookup, ProfileRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
