use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Shared envelope pieces
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Code {
    pub code: String,
}

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainRef {
    pub id: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelRef {
    pub id: i32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyRef {
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub language: Code,
}

impl UserDetails {
    pub fn with_language(code: impl Into<String>) -> Self {
        Self {
            preferences: Preferences {
                language: Code::new(code),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingInfo {
    pub booking_source: BookingSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingSource {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub ip_address: String,
    pub primary_channel: Channel,
    pub secondary_channel: Channel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Channel {
    pub code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReservationAction {
    Booked,
    Confirmed,
}

// ============================================================================
// Request room stays and guests
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomStayRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_count: Vec<GuestCount>,
    pub products: Vec<ProductRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeQualifyingCode {
    Adult,
    Child,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCount {
    pub age_qualifying_code: AgeQualifyingCode,
    pub num_guests: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductRef {
    pub rate: Code,
    pub room: Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuestRole {
    Primary,
    Additional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRequest {
    pub role: GuestRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    pub person_name: PersonName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonName {
    pub prefix: String,
    pub given_name: String,
    pub middle_name: String,
    pub surname: String,
}

// ============================================================================
// CreateReservation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRq {
    pub chain: ChainRef,
    pub reservation: CreateReservationPayload,
    pub return_reservation_details: bool,
    pub user_details: UserDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationPayload {
    pub hotel: HotelRef,
    pub action: ReservationAction,
    pub booking_info: BookingInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coupon_offer_code: Option<String>,
    pub currency: CurrencyRef,
    pub room_stay: Vec<RoomStayRequest>,
    pub num_rooms: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateReservationRs {
    pub application_results: ApplicationResults,
    pub reservation_list: Option<ReservationList>,
}

// ============================================================================
// UpdateReservation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationRq {
    pub reservation: UpdateReservationPayload,
    pub return_reservation_details: bool,
    pub user_details: UserDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationPayload {
    pub crs_confirmation_number: String,
    pub action: ReservationAction,
    pub booking_info: BookingInfo,
    pub currency: CurrencyRef,
    pub room_stay: Vec<RoomStayRequest>,
    pub num_rooms: i32,
    pub guest: Vec<GuestRequest>,
}

/// Update answers with the same shape as create.
pub type UpdateReservationRs = CreateReservationRs;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReservationList {
    pub reservation: Option<RemoteReservation>,
}

// ============================================================================
// CancelReservation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationRq {
    pub reservation: CancelTarget,
    pub user_details: UserDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelTarget {
    pub crs_confirmation_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelReservationRs {
    pub application_results: ApplicationResults,
    pub reservation: Option<CancelledReservation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelledReservation {
    pub crs_confirmation_number: String,
    pub crs_cancellation_number: String,
}

// ============================================================================
// QueryReservation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryType {
    ConfirmationNumber,
    ConfirmationNumberAndGuestEmail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryReservationRq {
    pub query: Query,
    pub chain: ChainRef,
    pub user_details: UserDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    #[serde(rename = "type")]
    pub query_type: QueryType,
    pub reservation: QueryReservation,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryReservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs_confirmation_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_list: Option<QueryGuestList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryGuestList {
    pub guest: QueryGuest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryGuest {
    pub email_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryReservationRs {
    pub application_results: ApplicationResults,
    pub reservation_list: Vec<RemoteReservation>,
}

// ============================================================================
// Application results envelope
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationResults {
    pub success: Option<ResultNode>,
    pub warning: Option<Vec<ResultNode>>,
    pub error: Option<Vec<ResultNode>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultNode {
    pub system_specific_results: SystemSpecificResults,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemSpecificResults {
    pub short_text: String,
}

impl ResultNode {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            system_specific_results: SystemSpecificResults {
                short_text: text.into(),
            },
        }
    }

    pub fn short_text(&self) -> &str {
        &self.system_specific_results.short_text
    }
}

// ============================================================================
// Remote reservation
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteReservation {
    pub crs_confirmation_number: String,
    pub crs_cancellation_number: Option<String>,
    pub cancellation_permitted: bool,
    pub guest_list: Option<Vec<RemoteGuest>>,
    pub room_stay: Vec<RemoteRoomStay>,
    pub res_actions_activities: ResActionsActivities,
    pub booking_info: BookingInfo,
    pub cancel_policy: RemoteCancelPolicy,
    pub guarantee_policy: RemoteGuaranteePolicy,
    pub currency: CurrencyRef,
    pub hotel: HotelRef,
    /// Status text as sent by the itinerary manager.
    pub status: String,
    pub room_price_list: RoomPriceList,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteGuest {
    pub person_name: PersonName,
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteRoomStay {
    pub crs_confirmation_number: String,
    pub rate: NamedCode,
    pub room: NamedCode,
    pub num_nights: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub guest_count: Vec<RemoteGuestCount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedCode {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteGuestCount {
    pub age_qualifying_code: Option<AgeQualifyingCode>,
    pub num_guests: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResActionsActivities {
    pub res_activity_list: Vec<ResActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResActivity {
    pub activity_type: String,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteCancelPolicy {
    pub cancel_penalty_date: Option<DateTime<Utc>>,
    pub charge_threshold: Option<i32>,
    pub charge_type: i32,
    pub description: String,
    pub cancel_fee_amount: Option<Amount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Amount {
    pub value: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteGuaranteePolicy {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomPriceList {
    pub average_price_per_night: PricedItem,
    pub price_breakdown_list: Vec<ProductPriceBreakdown>,
    pub total_price: PricedItem,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricedItem {
    pub price: Price,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPriceBreakdown {
    pub product_price_list: Vec<ProductPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductPrice {
    pub price: Price,
    pub product: ProductRef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub currency_code: String,
    pub total_amount: Decimal,
    pub total_amount_including_taxes_fees: Decimal,
    pub fees: FeeSummary,
    pub tax: TaxSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeSummary {
    pub amount: Decimal,
    pub stay_fee_amount: Decimal,
    pub break_down: Vec<ChargeItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaxSummary {
    pub amount: Decimal,
    pub stay_tax_amount: Decimal,
    pub break_down: Vec<ChargeItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChargeItem {
    pub amount: Decimal,
    pub name: String,
    #[serde(rename = "type")]
    pub charge_type: i32,
}
