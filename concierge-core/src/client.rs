use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::context::ContextHeader;
use crate::itinerary::{
    CancelReservationRq, CancelReservationRs, CreateReservationRq, CreateReservationRs,
    QueryReservationRq, QueryReservationRs, UpdateReservationRq, UpdateReservationRs,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItineraryError {
    #[error("Itinerary transport failure: {0}")]
    Transport(String),
    #[error("Itinerary call timed out: {0}")]
    Timeout(String),
    #[error("Itinerary service returned {code}: {message}")]
    Status { code: u16, message: String },
    #[error("Itinerary response could not be decoded: {0}")]
    Decode(String),
}

/// Opens scoped sessions against the itinerary/reservation manager.
///
/// A session is bound to one request header and is dropped as soon as the
/// operation that opened it returns.
#[async_trait]
pub trait ItineraryConnector: Send + Sync {
    async fn connect(
        &self,
        header: &ContextHeader,
    ) -> Result<Box<dyn ItinerarySession>, ItineraryError>;
}

#[async_trait]
pub trait ItinerarySession: Send + Sync {
    async fn create_reservation(
        &self,
        request: &CreateReservationRq,
    ) -> Result<CreateReservationRs, ItineraryError>;

    async fn update_reservation(
        &self,
        request: &UpdateReservationRq,
    ) -> Result<UpdateReservationRs, ItineraryError>;

    async fn cancel_reservation(
        &self,
        request: &CancelReservationRq,
    ) -> Result<CancelReservationRs, ItineraryError>;

    async fn query_reservation(
        &self,
        request: &QueryReservationRq,
    ) -> Result<QueryReservationRs, ItineraryError>;
}

// ============================================================================
// In-memory connector
// ============================================================================

/// An envelope received by [`MockItineraryConnector`], with the header it came under.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Create(ContextHeader, CreateReservationRq),
    Update(ContextHeader, UpdateReservationRq),
    Cancel(ContextHeader, CancelReservationRq),
    Query(ContextHeader, QueryReservationRq),
}

#[derive(Debug, Default)]
struct MockState {
    connections: usize,
    open_sessions: usize,
    connect_error: Option<ItineraryError>,
    create: Option<Result<CreateReservationRs, ItineraryError>>,
    update: Option<Result<UpdateReservationRs, ItineraryError>>,
    cancel: Option<Result<CancelReservationRs, ItineraryError>>,
    query: Option<Result<QueryReservationRs, ItineraryError>>,
    calls: Vec<RecordedCall>,
}

/// Scripted itinerary manager used by tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct MockItineraryConnector {
    state: Arc<Mutex<MockState>>,
}

impl MockItineraryConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_create_response(self, response: Result<CreateReservationRs, ItineraryError>) -> Self {
        self.lock().create = Some(response);
        self
    }

    pub fn with_update_response(self, response: Result<UpdateReservationRs, ItineraryError>) -> Self {
        self.lock().update = Some(response);
        self
    }

    pub fn with_cancel_response(self, response: Result<CancelReservationRs, ItineraryError>) -> Self {
        self.lock().cancel = Some(response);
        self
    }

    pub fn with_query_response(self, response: Result<QueryReservationRs, ItineraryError>) -> Self {
        self.lock().query = Some(response);
        self
    }

    /// Make every `connect` fail with `error`.
    pub fn refusing_connections(self, error: ItineraryError) -> Self {
        self.lock().connect_error = Some(error);
        self
    }

    pub fn connections(&self) -> usize {
        self.lock().connections
    }

    pub fn open_sessions(&self) -> usize {
        self.lock().open_sessions
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ItineraryConnector for MockItineraryConnector {
    async fn connect(
        &self,
        header: &ContextHeader,
    ) -> Result<Box<dyn ItinerarySession>, ItineraryError> {
        let mut state = self.lock();
        if let Some(err) = state.connect_error.clone() {
            return Err(err);
        }
        state.connections += 1;
        state.open_sessions += 1;

        Ok(Box::new(MockItinerarySession {
            header: header.clone(),
            state: self.state.clone(),
        }))
    }
}

struct MockItinerarySession {
    header: ContextHeader,
    state: Arc<Mutex<MockState>>,
}

impl MockItinerarySession {
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn scripted<T: Clone>(slot: &Option<Result<T, ItineraryError>>, operation: &str) -> Result<T, ItineraryError> {
    slot.clone().unwrap_or_else(|| {
        Err(ItineraryError::Status {
            code: 501,
            message: format!("no scripted response for {}", operation),
        })
    })
}

#[async_trait]
impl ItinerarySession for MockItinerarySession {
    async fn create_reservation(
        &self,
        request: &CreateReservationRq,
    ) -> Result<CreateReservationRs, ItineraryError> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Create(self.header.clone(), request.clone()));
        scripted(&state.create, "CreateReservation")
    }

    async fn update_reservation(
        &self,
        request: &UpdateReservationRq,
    ) -> Result<UpdateReservationRs, ItineraryError> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Update(self.header.clone(), request.clone()));
        scripted(&state.update, "UpdateReservation")
    }

    async fn cancel_reservation(
        &self,
        request: &CancelReservationRq,
    ) -> Result<CancelReservationRs, ItineraryError> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Cancel(self.header.clone(), request.clone()));
        scripted(&state.cancel, "CancelReservation")
    }

    async fn query_reservation(
        &self,
        request: &QueryReservationRq,
    ) -> Result<QueryReservationRs, ItineraryError> {
        let mut state = self.lock();
        state.calls.push(RecordedCall::Query(self.header.clone(), request.clone()));
        scripted(&state.query, "QueryReservation")
    }
}

impl Drop for MockItinerarySession {
    fn drop(&mut self) {
        let mut state = self.lock();
        state.open_sessions = state.open_sessions.saturating_sub(1);
    }
}
