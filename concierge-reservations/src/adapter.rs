use concierge_core::reservation::{
    CancelReservationRequest, CancelReservationResponse, ReservationRequest, ReservationResponse,
};
use concierge_core::{
    BusinessContext, ContextHeader, ItineraryConnector, ProfileLookup, ProfileRequest,
};
use concierge_shared::Masked;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::error::{AdapterError, Operation, ServiceFault};
use crate::requests::{self, EMAIL_SEARCH_TYPE};
use crate::{mapping, results};

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_CHANNEL_CODE: &str = "VA";

/// Values sent when the caller does not supply them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterDefaults {
    pub language: String,
    pub channel_code: String,
}

impl Default for AdapterDefaults {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            channel_code: DEFAULT_CHANNEL_CODE.to_string(),
        }
    }
}

/// Translates voice-agent reservation requests into itinerary manager calls.
///
/// Every operation opens one session, performs one round-trip, and releases
/// the session before returning. Remote application errors come back inside
/// the response; anything else is logged once and returned as a [`ServiceFault`].
pub struct ReservationAdapter {
    connector: Arc<dyn ItineraryConnector>,
    defaults: AdapterDefaults,
}

/// Context fields attached to the failure event of each operation.
enum FaultContext<'a> {
    Booking {
        chain_id: i32,
        hotel_id: i32,
        user_id: Uuid,
    },
    Cancel {
        user_id: Uuid,
        crs_confirmation_number: &'a str,
    },
    Search {
        search_item_type: &'a str,
        search_item_value: &'a str,
        chain_id: i32,
        hotel_id: i32,
        user_id: Uuid,
    },
}

impl ReservationAdapter {
    pub fn new(connector: Arc<dyn ItineraryConnector>, defaults: AdapterDefaults) -> Self {
        Self { connector, defaults }
    }

    /// Book a new reservation.
    #[instrument(name = "create_reservation", skip_all, fields(chain_id = request.chain_id, hotel_id = request.hotel_id))]
    pub async fn create_reservation(
        &self,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, ServiceFault> {
        let context = FaultContext::Booking {
            chain_id: request.chain_id,
            hotel_id: request.hotel_id,
            user_id: request.user_unique_id,
        };

        self.guarded(Operation::Create, request.user_unique_id, context, |header| {
            self.create_with(header, request)
        })
        .await
    }

    /// Confirm an existing reservation, resolving the guest profile first.
    #[instrument(name = "update_reservation", skip_all, fields(chain_id = request.chain_id, hotel_id = request.hotel_id))]
    pub async fn update_reservation(
        &self,
        request: &ReservationRequest,
        profiles: &dyn ProfileLookup,
    ) -> Result<ReservationResponse, ServiceFault> {
        let context = FaultContext::Booking {
            chain_id: request.chain_id,
            hotel_id: request.hotel_id,
            user_id: request.user_unique_id,
        };

        self.guarded(Operation::Update, request.user_unique_id, context, |header| {
            self.update_with(header, request, profiles)
        })
        .await
    }

    #[instrument(name = "cancel_reservation", skip_all)]
    pub async fn cancel_reservation(
        &self,
        request: &CancelReservationRequest,
    ) -> Result<CancelReservationResponse, ServiceFault> {
        let context = FaultContext::Cancel {
            user_id: request.user_unique_id,
            crs_confirmation_number: &request.crs_confirmation_number,
        };

        self.guarded(Operation::Cancel, request.user_unique_id, context, |header| {
            self.cancel_with(header, request)
        })
        .await
    }

    /// Look up a reservation by confirmation number or guest email.
    ///
    /// Returns `Ok(None)` without touching the itinerary manager when the
    /// search type or value is missing.
    #[instrument(name = "search_by_confirmation", skip_all, fields(chain_id = request.chain_id))]
    pub async fn search_by_confirmation(
        &self,
        request: &ReservationRequest,
    ) -> Result<Option<ReservationResponse>, ServiceFault> {
        let search_item_type = request.search_item_type.as_deref().unwrap_or_default();
        let search_item_value = request.search_item_value.as_deref().unwrap_or_default();

        if search_item_type.is_empty() || search_item_value.is_empty() {
            debug!("Search skipped: missing search item type or value");
            return Ok(None);
        }

        let context = FaultContext::Search {
            search_item_type,
            search_item_value,
            chain_id: request.chain_id,
            hotel_id: request.hotel_id,
            user_id: request.user_unique_id,
        };

        self.guarded(Operation::Search, request.user_unique_id, context, |header| {
            self.search_with(header, request.chain_id, search_item_type, search_item_value)
        })
        .await
        .map(Some)
    }

    // ------------------------------------------------------------------------
    // Operation bodies
    // ------------------------------------------------------------------------

    async fn create_with(
        &self,
        header: ContextHeader,
        request: &ReservationRequest,
    ) -> Result<ReservationResponse, AdapterError> {
        let envelope = requests::create_envelope(request, &self.defaults);

        let response = {
            let session = self.connector.connect(&header).await?;
            session.create_reservation(&envelope).await?
        };

        let application_results = results::by_success_text(&response.application_results);
        let reservation = if application_results.success {
            let list = response.reservation_list.as_ref().ok_or_else(|| {
                AdapterError::MalformedResponse("create succeeded without a reservation list".to_string())
            })?;
            Some(mapping::map_reservation(list.reservation.as_ref())?)
        } else {
            None
        };

        info!(success = application_results.success, "CreateReservation completed");
        Ok(ReservationResponse {
            application_results,
            reservation,
        })
    }

    async fn update_with(
        &self,
        header: ContextHeader,
        request: &ReservationRequest,
        profiles: &dyn ProfileLookup,
    ) -> Result<ReservationResponse, AdapterError> {
        let profile = profiles
            .get_traveler_profile(&ProfileRequest {
                chain_id: request.chain_id,
                hotel_id: request.hotel_id,
                traveler_profile_id: request.guest_profile_id.clone(),
            })
            .await?;

        let envelope = requests::update_envelope(request, &profile, &self.defaults);

        let response = {
            let session = self.connector.connect(&header).await?;
            session.update_reservation(&envelope).await?
        };

        let application_results = results::by_success_text(&response.application_results);
        let reservation = if application_results.success {
            let list = response.reservation_list.as_ref().ok_or_else(|| {
                AdapterError::MalformedResponse("update succeeded without a reservation list".to_string())
            })?;
            Some(mapping::map_reservation(list.reservation.as_ref())?)
        } else {
            None
        };

        info!(success = application_results.success, "UpdateReservation completed");
        Ok(ReservationResponse {
            application_results,
            reservation,
        })
    }

    async fn cancel_with(
        &self,
        header: ContextHeader,
        request: &CancelReservationRequest,
    ) -> Result<CancelReservationResponse, AdapterError> {
        let envelope = requests::cancel_envelope(request, &self.defaults);

        let response = {
            let session = self.connector.connect(&header).await?;
            session.cancel_reservation(&envelope).await?
        };

        let application_results = results::by_success_presence(&response.application_results);

        // A rejected cancel carries its reason in the error list, not a reservation node.
        let cancelled = match response.reservation {
            Some(cancelled) => cancelled,
            None if !application_results.success => Default::default(),
            None => {
                return Err(AdapterError::MalformedResponse(
                    "cancel succeeded without a reservation".to_string(),
                ))
            }
        };

        info!(success = application_results.success, "CancelReservation completed");
        Ok(CancelReservationResponse {
            application_results,
            crs_confirmation_number: cancelled.crs_confirmation_number,
            cancellation_number: cancelled.crs_cancellation_number,
        })
    }

    async fn search_with(
        &self,
        header: ContextHeader,
        chain_id: i32,
        search_item_type: &str,
        search_item_value: &str,
    ) -> Result<ReservationResponse, AdapterError> {
        let query_type = requests::query_type_for(search_item_type);
        let envelope = requests::query_envelope(query_type, chain_id, search_item_value, &self.defaults);

        let response = {
            let session = self.connector.connect(&header).await?;
            session.query_reservation(&envelope).await?
        };

        let found = response.reservation_list.first();
        debug!(
            matches = response.reservation_list.len(),
            "QueryReservation returned {:?}", query_type
        );

        Ok(ReservationResponse {
            application_results: results::by_success_presence(&response.application_results),
            reservation: Some(mapping::map_reservation(found)?),
        })
    }

    // ------------------------------------------------------------------------
    // Failure boundary
    // ------------------------------------------------------------------------

    /// Build the request header, run `body`, and turn any failure into a logged [`ServiceFault`].
    async fn guarded<T, F, Fut>(
        &self,
        operation: Operation,
        user_id: Uuid,
        context: FaultContext<'_>,
        body: F,
    ) -> Result<T, ServiceFault>
    where
        F: FnOnce(ContextHeader) -> Fut,
        Fut: Future<Output = Result<T, AdapterError>>,
    {
        let header = ContextHeader::builder()
            .with_business_context(BusinessContext::VoiceAgent)
            .with_user_id(user_id)
            .build();

        let outcome = match header {
            Ok(header) => {
                let activity_id = header.activity_id.clone();
                body(header).await.map_err(|err| (activity_id, err))
            }
            Err(err) => Err((String::new(), AdapterError::from(err))),
        };

        outcome.map_err(|(activity_id, err)| {
            context.log(operation, &activity_id, &err);
            ServiceFault::new(operation, activity_id, err)
        })
    }
}

impl FaultContext<'_> {
    fn log(&self, operation: Operation, activity_id: &str, err: &AdapterError) {
        let event = operation.event_name();
        match self {
            FaultContext::Booking { chain_id, hotel_id, user_id } => error!(
                event,
                activity_id,
                error = %err,
                chain_id,
                hotel_id,
                user_id = %user_id,
                "{} failed", operation
            ),
            FaultContext::Cancel { user_id, crs_confirmation_number } => error!(
                event,
                activity_id,
                error = %err,
                user_id = %user_id,
                crs_confirmation_number,
                "{} failed", operation
            ),
            FaultContext::Search {
                search_item_type,
                search_item_value,
                chain_id,
                hotel_id,
                user_id,
            } => {
                let search_item_value = if *search_item_type == EMAIL_SEARCH_TYPE {
                    Masked(*search_item_value).to_string()
                } else {
                    search_item_value.to_string()
                };
                error!(
                    event,
                    activity_id,
                    error = %err,
                    search_item_type,
                    search_item_value = %search_item_value,
                    chain_id,
                    hotel_id,
                    user_id = %user_id,
                    "{} failed", operation
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::client::RecordedCall;
    use concierge_core::itinerary::{
        ApplicationResults, CancelReservationRs, CancelledReservation, CreateReservationRs,
        PersonName, QueryReservationRs, QueryType, RemoteReservation, RemoteRoomStay,
        ReservationList, ResultNode,
    };
    use concierge_core::{ItineraryError, MockItineraryConnector, MockProfileLookup, Profile};
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::Mutex;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    /// Collects the fields of every ERROR event.
    #[derive(Clone, Default)]
    struct ErrorEvents(Arc<Mutex<Vec<HashMap<String, String>>>>);

    struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    impl<S: Subscriber> Layer<S> for ErrorEvents {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                let mut fields = HashMap::new();
                event.record(&mut FieldVisitor(&mut fields));
                self.0.lock().unwrap().push(fields);
            }
        }
    }

    impl ErrorEvents {
        fn snapshot(&self) -> Vec<HashMap<String, String>> {
            self.0.lock().unwrap().clone()
        }
    }

    fn adapter(connector: &MockItineraryConnector) -> ReservationAdapter {
        ReservationAdapter::new(Arc::new(connector.clone()), AdapterDefaults::default())
    }

    fn success(text: &str) -> ApplicationResults {
        ApplicationResults {
            success: Some(ResultNode::with_text(text)),
            ..Default::default()
        }
    }

    fn remote_reservation(confirmation: &str, stays: usize) -> RemoteReservation {
        RemoteReservation {
            crs_confirmation_number: confirmation.to_string(),
            room_stay: (0..stays)
                .map(|i| RemoteRoomStay {
                    crs_confirmation_number: format!("{}-{}", confirmation, i),
                    num_nights: 2,
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn booking_request() -> ReservationRequest {
        ReservationRequest {
            chain_id: 7,
            hotel_id: 1201,
            user_unique_id: Uuid::new_v4(),
            guest_profile_id: "P-100".to_string(),
            language: "en-US".to_string(),
            currency_code: "USD".to_string(),
            crs_confirmation_number: Some("73920SB001".to_string()),
            ..Default::default()
        }
    }

    fn search_request(search_type: Option<&str>, value: Option<&str>) -> ReservationRequest {
        ReservationRequest {
            chain_id: 7,
            user_unique_id: Uuid::new_v4(),
            search_item_type: search_type.map(str::to_string),
            search_item_value: value.map(str::to_string),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_search_without_criteria_skips_remote() {
        let connector = MockItineraryConnector::new();
        let adapter = adapter(&connector);

        for request in [
            search_request(None, Some("73920SB001")),
            search_request(Some(""), Some("73920SB001")),
            search_request(Some("email"), None),
            search_request(Some("email"), Some("")),
        ] {
            assert_eq!(adapter.search_by_confirmation(&request).await.unwrap(), None);
        }
        assert_eq!(connector.connections(), 0);
    }

    #[tokio::test]
    async fn test_email_search_builds_guest_email_query() {
        let connector = MockItineraryConnector::new().with_query_response(Ok(QueryReservationRs {
            application_results: success("Partially processed"),
            reservation_list: vec![remote_reservation("A1", 1), remote_reservation("B2", 3)],
        }));
        let adapter = adapter(&connector);

        let response = adapter
            .search_by_confirmation(&search_request(Some("email"), Some("a@b.com")))
            .await
            .unwrap()
            .expect("search with criteria returns a response");

        assert!(response.application_results.success);
        let reservation = response.reservation.unwrap();
        assert_eq!(reservation.crs_confirmation_number, "A1");
        assert_eq!(reservation.room_stays.len(), 1);

        match &connector.calls()[0] {
            RecordedCall::Query(_, rq) => {
                assert_eq!(rq.query.query_type, QueryType::ConfirmationNumberAndGuestEmail);
                assert_eq!(rq.chain.id, 7);
                assert_eq!(
                    rq.query.reservation.guest_list.as_ref().unwrap().guest.email_address,
                    "a@b.com"
                );
            }
            other => panic!("unexpected call {:?}", other),
        }
        assert_eq!(connector.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_search_without_match_maps_default_reservation() {
        let connector = MockItineraryConnector::new().with_query_response(Ok(QueryReservationRs::default()));
        let adapter = adapter(&connector);

        let response = adapter
            .search_by_confirmation(&search_request(Some("confirmationNumber"), Some("NOPE")))
            .await
            .unwrap()
            .unwrap();

        assert!(!response.application_results.success);
        assert_eq!(response.reservation, Some(Default::default()));
        match &connector.calls()[0] {
            RecordedCall::Query(_, rq) => {
                assert_eq!(rq.query.query_type, QueryType::ConfirmationNumber);
                assert_eq!(rq.query.reservation.crs_confirmation_number.as_deref(), Some("NOPE"));
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_success_maps_room_stays() {
        let connector = MockItineraryConnector::new().with_create_response(Ok(CreateReservationRs {
            application_results: success("Success"),
            reservation_list: Some(ReservationList {
                reservation: Some(remote_reservation("73920SB001", 2)),
            }),
        }));
        let adapter = adapter(&connector);

        let response = adapter.create_reservation(&booking_request()).await.unwrap();

        assert!(response.application_results.success);
        assert!(response.application_results.warnings.is_empty());
        assert!(response.application_results.errors.is_empty());
        assert_eq!(response.reservation.unwrap().room_stays.len(), 2);
        assert_eq!(connector.connections(), 1);
        assert_eq!(connector.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_create_with_other_success_text_is_not_mapped() {
        let connector = MockItineraryConnector::new().with_create_response(Ok(CreateReservationRs {
            application_results: success("Pending"),
            reservation_list: Some(ReservationList {
                reservation: Some(remote_reservation("73920SB001", 1)),
            }),
        }));
        let adapter = adapter(&connector);

        let response = adapter.create_reservation(&booking_request()).await.unwrap();

        assert!(!response.application_results.success);
        assert!(response.reservation.is_none());
    }

    #[tokio::test]
    async fn test_create_remote_errors_are_returned_not_raised() {
        let connector = MockItineraryConnector::new().with_create_response(Ok(CreateReservationRs {
            application_results: ApplicationResults {
                success: None,
                warning: None,
                error: Some(vec![ResultNode::with_text("Rate not available")]),
            },
            reservation_list: None,
        }));
        let adapter = adapter(&connector);

        let response = adapter.create_reservation(&booking_request()).await.unwrap();

        assert!(!response.application_results.success);
        assert_eq!(response.application_results.errors, vec!["Rate not available"]);
        assert!(response.application_results.warnings.is_empty());
    }

    #[tokio::test]
    async fn test_create_success_without_list_is_a_fault() {
        let connector = MockItineraryConnector::new().with_create_response(Ok(CreateReservationRs {
            application_results: success("Success"),
            reservation_list: None,
        }));
        let adapter = adapter(&connector);

        let fault = adapter.create_reservation(&booking_request()).await.unwrap_err();

        assert_eq!(fault.operation, Operation::Create);
        assert!(!fault.activity_id.is_empty());
        assert!(matches!(fault.source, AdapterError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_update_resolves_profile_into_guest_list() {
        let connector = MockItineraryConnector::new().with_update_response(Ok(CreateReservationRs {
            application_results: success("Success"),
            reservation_list: Some(ReservationList { reservation: None }),
        }));
        let profiles = MockProfileLookup::new().with_profile(Profile {
            profile_id: "P-100".to_string(),
            person_name: PersonName {
                given_name: "Ada".to_string(),
                surname: "Byron".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        let adapter = adapter(&connector);

        let response = adapter.update_reservation(&booking_request(), &profiles).await.unwrap();

        assert!(response.application_results.success);
        assert_eq!(response.reservation, Some(Default::default()));
        match &connector.calls()[0] {
            RecordedCall::Update(_, rq) => {
                assert_eq!(rq.reservation.crs_confirmation_number, "73920SB001");
                assert_eq!(rq.reservation.guest[0].person_name.given_name, "Ada");
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_with_unknown_profile_never_connects() {
        let connector = MockItineraryConnector::new();
        let adapter = adapter(&connector);

        let fault = adapter
            .update_reservation(&booking_request(), &MockProfileLookup::new())
            .await
            .unwrap_err();

        assert_eq!(fault.operation, Operation::Update);
        assert!(!fault.activity_id.is_empty());
        assert!(matches!(fault.source, AdapterError::Profile(_)));
        assert_eq!(connector.connections(), 0);
    }

    #[tokio::test]
    async fn test_cancel_uses_presence_rule() {
        let connector = MockItineraryConnector::new().with_cancel_response(Ok(CancelReservationRs {
            application_results: success("Cancelled with penalty"),
            reservation: Some(CancelledReservation {
                crs_confirmation_number: "73920SB001".to_string(),
                crs_cancellation_number: "CX-5521".to_string(),
            }),
        }));
        let adapter = adapter(&connector);

        let response = adapter
            .cancel_reservation(&CancelReservationRequest {
                user_unique_id: Uuid::new_v4(),
                crs_confirmation_number: "73920SB001".to_string(),
            })
            .await
            .unwrap();

        assert!(response.application_results.success);
        assert_eq!(response.crs_confirmation_number, "73920SB001");
        assert_eq!(response.cancellation_number, "CX-5521");
        match &connector.calls()[0] {
            RecordedCall::Cancel(header, rq) => {
                assert_eq!(rq.reservation.crs_confirmation_number, "73920SB001");
                assert_eq!(rq.user_details.preferences.language.code, DEFAULT_LANGUAGE);
                assert_eq!(header.business_context, BusinessContext::VoiceAgent);
            }
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancel_rejection_returns_remote_errors() {
        let connector = MockItineraryConnector::new().with_cancel_response(Ok(CancelReservationRs {
            application_results: ApplicationResults {
                success: None,
                warning: None,
                error: Some(vec![ResultNode::with_text("Reservation not found")]),
            },
            reservation: None,
        }));
        let adapter = adapter(&connector);

        let response = adapter
            .cancel_reservation(&CancelReservationRequest {
                user_unique_id: Uuid::new_v4(),
                crs_confirmation_number: "73920SB001".to_string(),
            })
            .await
            .unwrap();

        assert!(!response.application_results.success);
        assert_eq!(response.application_results.errors, vec!["Reservation not found"]);
        assert!(response.crs_confirmation_number.is_empty());
        assert!(response.cancellation_number.is_empty());
    }

    #[tokio::test]
    async fn test_cancel_success_without_reservation_is_a_fault() {
        let connector = MockItineraryConnector::new().with_cancel_response(Ok(CancelReservationRs {
            application_results: success("Cancelled"),
            reservation: None,
        }));
        let adapter = adapter(&connector);

        let fault = adapter
            .cancel_reservation(&CancelReservationRequest {
                user_unique_id: Uuid::new_v4(),
                crs_confirmation_number: "73920SB001".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(fault.operation, Operation::Cancel);
        assert!(matches!(fault.source, AdapterError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_cancel_failure_logs_once_and_carries_activity_id() {
        let events = ErrorEvents::default();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));

        let connector = MockItineraryConnector::new()
            .with_cancel_response(Err(ItineraryError::Transport("connection reset".to_string())));
        let adapter = adapter(&connector);
        let user = Uuid::new_v4();

        let fault = adapter
            .cancel_reservation(&CancelReservationRequest {
                user_unique_id: user,
                crs_confirmation_number: "73920SB001".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(fault.operation, Operation::Cancel);
        assert!(Uuid::parse_str(&fault.activity_id).is_ok());

        let logged = events.snapshot();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0]["event"], "reservation.cancel.unhandled");
        assert_eq!(logged[0]["activity_id"], fault.activity_id);
        assert_eq!(logged[0]["crs_confirmation_number"], "73920SB001");
        assert_eq!(logged[0]["user_id"], user.to_string());
        assert!(logged[0]["error"].contains("connection reset"));
        assert_eq!(connector.open_sessions(), 0);
    }

    #[tokio::test]
    async fn test_fault_before_header_has_empty_activity_id() {
        let events = ErrorEvents::default();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));

        let connector = MockItineraryConnector::new();
        let adapter = adapter(&connector);

        let fault = adapter
            .cancel_reservation(&CancelReservationRequest {
                user_unique_id: Uuid::nil(),
                crs_confirmation_number: "73920SB001".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(fault.activity_id, "");
        assert!(matches!(fault.source, AdapterError::Context(_)));
        assert_eq!(connector.connections(), 0);
        assert_eq!(events.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_search_failure_masks_email() {
        let events = ErrorEvents::default();
        let _guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(events.clone()));

        let connector = MockItineraryConnector::new()
            .refusing_connections(ItineraryError::Timeout("30s".to_string()));
        let adapter = adapter(&connector);

        let fault = adapter
            .search_by_confirmation(&search_request(Some("email"), Some("guest@example.com")))
            .await
            .unwrap_err();

        assert_eq!(fault.operation, Operation::Search);
        let logged = events.snapshot();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0]["event"], "reservation.search.unhandled");
        assert_eq!(logged[0]["search_item_value"], "g***@example.com");
        assert_eq!(logged[0]["search_item_type"], "email");
    }
}
