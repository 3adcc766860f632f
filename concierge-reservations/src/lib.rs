pub mod adapter;
pub mod error;
pub mod mapping;
pub mod requests;
pub mod results;

pub use adapter::{AdapterDefaults, ReservationAdapter};
pub use error::{AdapterError, Operation, ServiceFault};
