//! Builders for the itinerary manager request envelopes.
//!
//! Each builder is a pure function of its inputs and returns an owned value.

use concierge_core::itinerary::{
    AgeQualifyingCode, BookingInfo, BookingSource, CancelReservationRq, CancelTarget, ChainRef,
    Channel, Code, CreateReservationPayload, CreateReservationRq, CurrencyRef, GuestCount,
    GuestRequest, GuestRole, HotelRef, PersonName, ProductRef, Query, QueryGuest, QueryGuestList,
    QueryReservation, QueryReservationRq, QueryType, ReservationAction, RoomStayRequest,
    UpdateReservationPayload, UpdateReservationRq, UserDetails,
};
use concierge_core::reservation::{CancelReservationRequest, GuestDetails, ReservationRequest};
use concierge_core::Profile;

use crate::adapter::AdapterDefaults;

/// Search item type that switches the query to a guest-email lookup.
pub const EMAIL_SEARCH_TYPE: &str = "email";

pub fn create_envelope(request: &ReservationRequest, defaults: &AdapterDefaults) -> CreateReservationRq {
    CreateReservationRq {
        chain: ChainRef { id: request.chain_id },
        reservation: CreateReservationPayload {
            hotel: HotelRef {
                id: request.hotel_id,
                name: String::new(),
            },
            action: ReservationAction::Booked,
            booking_info: booking_info(&request.ip_address, defaults),
            comment: request.comment.clone(),
            coupon_offer_code: request.coupon_offer_code.clone(),
            currency: CurrencyRef {
                currency_code: request.currency_code.clone(),
            },
            room_stay: room_stays(request),
            num_rooms: request.occupancy.number_of_rooms,
        },
        return_reservation_details: true,
        user_details: UserDetails::with_language(request.language.clone()),
    }
}

/// Confirm an existing reservation. Comment and coupon code are not resent.
pub fn update_envelope(
    request: &ReservationRequest,
    profile: &Profile,
    defaults: &AdapterDefaults,
) -> UpdateReservationRq {
    UpdateReservationRq {
        reservation: UpdateReservationPayload {
            crs_confirmation_number: request.crs_confirmation_number.clone().unwrap_or_default(),
            action: ReservationAction::Confirmed,
            booking_info: booking_info(&request.ip_address, defaults),
            currency: CurrencyRef {
                currency_code: request.currency_code.clone(),
            },
            room_stay: room_stays(request),
            num_rooms: request.occupancy.number_of_rooms,
            guest: guests_for_update(request, profile),
        },
        return_reservation_details: true,
        user_details: UserDetails::with_language(request.language.clone()),
    }
}

pub fn cancel_envelope(request: &CancelReservationRequest, defaults: &AdapterDefaults) -> CancelReservationRq {
    CancelReservationRq {
        reservation: CancelTarget {
            crs_confirmation_number: request.crs_confirmation_number.clone(),
        },
        user_details: UserDetails::with_language(defaults.language.clone()),
    }
}

pub fn query_type_for(search_item_type: &str) -> QueryType {
    match search_item_type {
        EMAIL_SEARCH_TYPE => QueryType::ConfirmationNumberAndGuestEmail,
        _ => QueryType::ConfirmationNumber,
    }
}

pub fn query_envelope(
    query_type: QueryType,
    chain_id: i32,
    search_item_value: &str,
    defaults: &AdapterDefaults,
) -> QueryReservationRq {
    let reservation = match query_type {
        QueryType::ConfirmationNumber => QueryReservation {
            crs_confirmation_number: Some(search_item_value.to_string()),
            guest_list: None,
        },
        QueryType::ConfirmationNumberAndGuestEmail => QueryReservation {
            crs_confirmation_number: None,
            guest_list: Some(QueryGuestList {
                guest: QueryGuest {
                    email_address: search_item_value.to_string(),
                },
            }),
        },
    };

    QueryReservationRq {
        query: Query {
            query_type,
            reservation,
        },
        chain: ChainRef { id: chain_id },
        user_details: UserDetails::with_language(defaults.language.clone()),
    }
}

// Primary and secondary channel carry the same code.
fn booking_info(ip_address: &str, defaults: &AdapterDefaults) -> BookingInfo {
    let channel = Channel {
        code: defaults.channel_code.clone(),
        description: String::new(),
    };

    BookingInfo {
        booking_source: BookingSource {
            ip_address: ip_address.to_string(),
            primary_channel: channel.clone(),
            secondary_channel: channel,
        },
    }
}

fn room_stays(request: &ReservationRequest) -> Vec<RoomStayRequest> {
    let occupancy = &request.occupancy;
    let stay = &request.room_stay;

    let mut guest_count = vec![GuestCount {
        age_qualifying_code: AgeQualifyingCode::Adult,
        num_guests: occupancy.adults,
    }];
    if occupancy.children > 0 {
        guest_count.push(GuestCount {
            age_qualifying_code: AgeQualifyingCode::Child,
            num_guests: occupancy.children,
        });
    }

    vec![RoomStayRequest {
        start_date: stay.check_in,
        end_date: stay.check_out,
        guest_count,
        products: vec![ProductRef {
            rate: Code::new(stay.rate_code.clone()),
            room: Code::new(stay.room_code.clone()),
        }],
    }]
}

fn guests_for_update(request: &ReservationRequest, profile: &Profile) -> Vec<GuestRequest> {
    let primary = GuestRequest {
        role: GuestRole::Primary,
        profile_id: Some(profile.profile_id.clone()),
        person_name: profile.person_name.clone(),
        email_address: profile.email_address.clone(),
        phone_number: profile.phone_number.clone(),
    };

    std::iter::once(primary)
        .chain(request.guests.iter().map(additional_guest))
        .collect()
}

fn additional_guest(guest: &GuestDetails) -> GuestRequest {
    GuestRequest {
        role: GuestRole::Additional,
        profile_id: None,
        person_name: PersonName {
            prefix: guest.prefix.clone(),
            given_name: guest.first_name.clone(),
            middle_name: guest.middle_name.clone(),
            surname: guest.last_name.clone(),
        },
        email_address: guest.email.clone(),
        phone_number: None,
    }
}
