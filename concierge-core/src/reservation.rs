use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Inbound requests
// ============================================================================

/// Everything the voice agent knows about a booking attempt.
///
/// The same shape drives create, update and search; each operation reads the
/// fields it needs and ignores the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationRequest {
    pub chain_id: i32,
    pub hotel_id: i32,
    pub user_unique_id: Uuid,
    pub guest_profile_id: String,
    pub language: String,
    pub currency_code: String,
    pub ip_address: String,
    pub occupancy: Occupancy,
    pub room_stay: RoomStayDetails,
    pub guests: Vec<GuestDetails>,
    pub comment: Option<String>,
    pub coupon_offer_code: Option<String>,
    pub crs_confirmation_number: Option<String>,
    pub search_item_type: Option<String>,
    pub search_item_value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Occupancy {
    pub number_of_rooms: i32,
    pub adults: i32,
    pub children: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomStayDetails {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub rate_code: String,
    pub room_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestDetails {
    pub prefix: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationRequest {
    pub user_unique_id: Uuid,
    pub crs_confirmation_number: String,
}

// ============================================================================
// Outbound responses
// ============================================================================

/// Uniform outcome of a remote call, independent of its payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResult {
    pub success: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub application_results: ApplicationResult,
    pub reservation: Option<Reservation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationResponse {
    pub application_results: ApplicationResult,
    pub crs_confirmation_number: String,
    pub cancellation_number: String,
}

// ============================================================================
// Reservation
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub crs_confirmation_number: String,
    pub crs_cancel_confirmation_number: Option<String>,
    pub cancellation_permitted: bool,
    pub adults: i32,
    pub children: i32,
    pub booked_by: String,
    pub booked_on: Option<DateTime<Utc>>,
    pub booking_channel: String,
    pub brand: String,
    pub cancel_policy: CancelPolicy,
    pub guarantee_policy: GuaranteePolicy,
    pub currency: String,
    pub hotel: String,
    pub status: String,
    pub room_stays: Vec<RoomStay>,
    pub room_rate: RoomRate,
    pub guests: Vec<Guest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub prefix: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelPolicy {
    pub cancel_penalty_date: Option<DateTime<Utc>>,
    pub charge_threshold: Option<i32>,
    pub charge_type: i32,
    pub description: String,
    pub penalty_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuaranteePolicy {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStay {
    pub crs_confirmation_number: String,
    pub rate_id: String,
    pub rate_name: String,
    pub room_id: String,
    pub room_name: String,
    pub nights: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRate {
    pub average_price: AveragePrice,
    pub price_breakdown: Vec<PriceBreakdown>,
    pub total_price: TotalPrice,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AveragePrice {
    pub amount: Decimal,
    pub amount_with_taxes_and_fees: Decimal,
    pub currency_code: String,
}

/// One product line of the nightly breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub currency_code: String,
    pub fees: Decimal,
    pub product_rate: String,
    pub product_room_name: String,
    pub tax: Decimal,
    pub total: Decimal,
    pub total_with_tax_fees: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalPrice {
    pub fees: Fees,
    pub tax: Tax,
    pub currency: String,
    pub total_amount: Decimal,
    pub total_with_taxes_fees: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    pub amount: Decimal,
    pub stay_fee_amount: Decimal,
    pub charges: Vec<Charge>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tax {
    pub amount: Decimal,
    pub stay_tax_amount: Decimal,
    pub charges: Vec<Charge>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Charge {
    pub amount: Decimal,
    pub name: String,
    #[serde(rename = "type")]
    pub charge_type: i32,
}
