use concierge_core::ProfileLookup;
use concierge_reservations::ReservationAdapter;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub adapter: Arc<ReservationAdapter>,
    pub profiles: Arc<dyn ProfileLookup>,
}
