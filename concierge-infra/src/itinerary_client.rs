//! HTTP/JSON client for the itinerary/reservation manager.

use async_trait::async_trait;
use concierge_core::itinerary::{
    CancelReservationRq, CancelReservationRs, CreateReservationRq, CreateReservationRs,
    QueryReservationRq, QueryReservationRs, UpdateReservationRq, UpdateReservationRs,
};
use concierge_core::{ContextHeader, ItineraryConnector, ItineraryError, ItinerarySession};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

pub const BUSINESS_CONTEXT_HEADER: &str = "X-Business-Context";
pub const USER_ID_HEADER: &str = "X-User-Id";
pub const ACTIVITY_ID_HEADER: &str = "X-Activity-Id";

pub const CREATE_PATH: &str = "/reservation/create";
pub const UPDATE_PATH: &str = "/reservation/update";
pub const CANCEL_PATH: &str = "/reservation/cancel";
pub const QUERY_PATH: &str = "/reservation/query";

/// Opens sessions against a remote itinerary manager.
///
/// The timeout is set once on the underlying `reqwest::Client` and applies to
/// every call a session makes.
#[derive(Debug, Clone)]
pub struct HttpItineraryConnector {
    base_url: Arc<str>,
    client: reqwest::Client,
}

impl HttpItineraryConnector {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ItineraryError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ItineraryError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: Arc::from(base_url.into().trim_end_matches('/')),
            client,
        })
    }
}

#[async_trait]
impl ItineraryConnector for HttpItineraryConnector {
    async fn connect(
        &self,
        header: &ContextHeader,
    ) -> Result<Box<dyn ItinerarySession>, ItineraryError> {
        debug!(activity_id = %header.activity_id, "Itinerary session opened");

        Ok(Box::new(HttpItinerarySession {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            header: header.clone(),
        }))
    }
}

struct HttpItinerarySession {
    base_url: Arc<str>,
    client: reqwest::Client,
    header: ContextHeader,
}

impl HttpItinerarySession {
    async fn post<Rq, Rs>(&self, path: &str, body: &Rq) -> Result<Rs, ItineraryError>
    where
        Rq: Serialize + Sync,
        Rs: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header(BUSINESS_CONTEXT_HEADER, self.header.business_context.to_string())
            .header(USER_ID_HEADER, &self.header.user_id)
            .header(ACTIVITY_ID_HEADER, &self.header.activity_id)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("HTTP call to {} failed: {}", url, e);
                transport_error(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ItineraryError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice(&bytes).map_err(|e| ItineraryError::Decode(e.to_string()))
    }
}

fn transport_error(e: reqwest::Error) -> ItineraryError {
    if e.is_timeout() {
        ItineraryError::Timeout(e.to_string())
    } else {
        ItineraryError::Transport(e.to_string())
    }
}

#[async_trait]
impl ItinerarySession for HttpItinerarySession {
    async fn create_reservation(
        &self,
        request: &CreateReservationRq,
    ) -> Result<CreateReservationRs, ItineraryError> {
        self.post(CREATE_PATH, request).await
    }

    async fn update_reservation(
        &self,
        request: &UpdateReservationRq,
    ) -> Result<UpdateReservationRs, ItineraryError> {
        self.post(UPDATE_PATH, request).await
    }

    async fn cancel_reservation(
        &self,
        request: &CancelReservationRq,
    ) -> Result<CancelReservationRs, ItineraryError> {
        self.post(CANCEL_PATH, request).await
    }

    async fn query_reservation(
        &self,
        request: &QueryReservationRq,
    ) -> Result<QueryReservationRs, ItineraryError> {
        self.post(QUERY_PATH, request).await
    }
}

impl Drop for HttpItinerarySession {
    fn drop(&mut self) {
        debug!(activity_id = %self.header.activity_id, "Itinerary session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use concierge_core::itinerary::{
        ApplicationResults, CancelTarget, CancelledReservation, ResultNode, UserDetails,
    };
    use uuid::Uuid;

    async fn cancel(headers: HeaderMap, Json(rq): Json<CancelReservationRq>) -> Json<CancelReservationRs> {
        // Echo the activity id back so the test can see the header arrived.
        let activity_id = headers
            .get(ACTIVITY_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let context = headers
            .get(BUSINESS_CONTEXT_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Json(CancelReservationRs {
            application_results: ApplicationResults {
                success: Some(ResultNode::with_text(context)),
                ..Default::default()
            },
            reservation: Some(CancelledReservation {
                crs_confirmation_number: rq.reservation.crs_confirmation_number,
                crs_cancellation_number: activity_id,
            }),
        })
    }

    async fn spawn_server() -> String {
        let app = Router::new()
            .route(CANCEL_PATH, post(cancel))
            .route(
                CREATE_PATH,
                post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
            )
            .route(QUERY_PATH, post(|| async { "not json" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn header() -> ContextHeader {
        ContextHeader::builder().with_user_id(Uuid::new_v4()).build().unwrap()
    }

    fn cancel_request() -> CancelReservationRq {
        CancelReservationRq {
            reservation: CancelTarget {
                crs_confirmation_number: "73920SB001".to_string(),
            },
            user_details: UserDetails::with_language("en-US"),
        }
    }

    #[tokio::test]
    async fn test_session_sends_context_headers() {
        let base_url = spawn_server().await;
        let connector = HttpItineraryConnector::new(base_url, Duration::from_secs(5)).unwrap();
        let header = header();

        let session = connector.connect(&header).await.unwrap();
        let response = session.cancel_reservation(&cancel_request()).await.unwrap();

        let cancelled = response.reservation.unwrap();
        assert_eq!(cancelled.crs_confirmation_number, "73920SB001");
        assert_eq!(cancelled.crs_cancellation_number, header.activity_id);
        assert_eq!(
            response.application_results.success.unwrap().short_text(),
            "VA"
        );
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let base_url = spawn_server().await;
        let connector = HttpItineraryConnector::new(base_url, Duration::from_secs(5)).unwrap();
        let session = connector.connect(&header()).await.unwrap();

        let body = serde_json::from_value::<CreateReservationRq>(serde_json::json!({
            "chain": { "id": 7 },
            "reservation": {
                "hotel": { "id": 1201 },
                "action": "Booked",
                "bookingInfo": { "bookingSource": { "primaryChannel": { "code": "VA" }, "secondaryChannel": { "code": "VA" } } },
                "currency": { "currencyCode": "USD" },
                "roomStay": [],
                "numRooms": 1
            },
            "returnReservationDetails": true,
            "userDetails": { "preferences": { "language": { "code": "en-US" } } }
        }))
        .unwrap();

        let err = session.create_reservation(&body).await.unwrap_err();
        assert_eq!(
            err,
            ItineraryError::Status {
                code: 503,
                message: "maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_unparseable_body_is_a_decode_error() {
        let base_url = spawn_server().await;
        let connector = HttpItineraryConnector::new(base_url, Duration::from_secs(5)).unwrap();
        let session = connector.connect(&header()).await.unwrap();

        let rq = serde_json::from_value::<QueryReservationRq>(serde_json::json!({
            "query": { "type": "ConfirmationNumber", "reservation": { "crsConfirmationNumber": "X" } },
            "chain": { "id": 7 },
            "userDetails": { "preferences": { "language": { "code": "en-US" } } }
        }))
        .unwrap();

        let err = session.query_reservation(&rq).await.unwrap_err();
        assert!(matches!(err, ItineraryError::Decode(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_a_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let connector =
            HttpItineraryConnector::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap();
        let session = connector.connect(&header()).await.unwrap();

        let err = session.cancel_reservation(&cancel_request()).await.unwrap_err();
        assert!(matches!(err, ItineraryError::Transport(_)));
    }
}
