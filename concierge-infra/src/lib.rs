pub mod config;
pub mod itinerary_client;
pub mod profile_client;

pub use itinerary_client::HttpItineraryConnector;
pub use profile_client::HttpProfileClient;
