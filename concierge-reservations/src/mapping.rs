use concierge_core::itinerary::{
    ChargeItem, ProductPriceBreakdown, RemoteGuest, RemoteReservation, RemoteRoomStay, RoomPriceList,
};
use concierge_core::reservation::{
    AveragePrice, CancelPolicy, Charge, Fees, GuaranteePolicy, Guest, PriceBreakdown, Reservation,
    RoomRate, RoomStay, Tax, TotalPrice,
};

use crate::error::AdapterError;

/// Activity type marking when the reservation was booked.
pub const BOOK_DATE_ACTIVITY: &str = "BookDate";

/// Placeholder for fields the itinerary manager does not provide yet.
pub const NOT_YET_IMPLEMENTED: &str = "Not Yet Implemented";

/// Project a remote reservation onto the local model.
///
/// An absent reservation maps to `Reservation::default()`. Values are copied
/// as-is; nothing is recomputed.
pub fn map_reservation(remote: Option<&RemoteReservation>) -> Result<Reservation, AdapterError> {
    let Some(rez) = remote else {
        return Ok(Reservation::default());
    };

    let booked_on = rez
        .res_actions_activities
        .res_activity_list
        .iter()
        .find(|activity| activity.activity_type == BOOK_DATE_ACTIVITY)
        .and_then(|activity| activity.date);

    let cancel_policy = &rez.cancel_policy;

    Ok(Reservation {
        crs_confirmation_number: rez.crs_confirmation_number.clone(),
        crs_cancel_confirmation_number: rez.crs_cancellation_number.clone(),
        cancellation_permitted: rez.cancellation_permitted,
        adults: adults(&rez.room_stay),
        // Child counts are not part of the itinerary response.
        children: 0,
        booked_by: NOT_YET_IMPLEMENTED.to_string(),
        booked_on,
        booking_channel: rez.booking_info.booking_source.primary_channel.description.clone(),
        brand: NOT_YET_IMPLEMENTED.to_string(),
        cancel_policy: CancelPolicy {
            cancel_penalty_date: cancel_policy.cancel_penalty_date,
            charge_threshold: cancel_policy.charge_threshold,
            charge_type: cancel_policy.charge_type,
            description: cancel_policy.description.clone(),
            penalty_amount: cancel_policy.cancel_fee_amount.as_ref().map(|fee| fee.value),
        },
        guarantee_policy: GuaranteePolicy {
            description: rez.guarantee_policy.description.clone(),
        },
        currency: rez.currency.currency_code.clone(),
        hotel: rez.hotel.name.clone(),
        status: rez.status.clone(),
        room_stays: rez.room_stay.iter().map(room_stay).collect(),
        room_rate: room_rate(&rez.room_price_list)?,
        guests: rez
            .guest_list
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(guest)
            .collect(),
    })
}

fn adults(room_stays: &[RemoteRoomStay]) -> i32 {
    room_stays
        .first()
        .and_then(|stay| stay.guest_count.first())
        .map(|count| count.num_guests)
        .unwrap_or(0)
}

fn guest(remote: &RemoteGuest) -> Guest {
    let name = &remote.person_name;
    Guest {
        prefix: name.prefix.clone(),
        first_name: name.given_name.clone(),
        middle_name: name.middle_name.clone(),
        last_name: name.surname.clone(),
    }
}

fn room_stay(remote: &RemoteRoomStay) -> RoomStay {
    RoomStay {
        crs_confirmation_number: remote.crs_confirmation_number.clone(),
        rate_id: remote.rate.code.clone(),
        rate_name: remote.rate.name.clone(),
        room_id: remote.room.code.clone(),
        room_name: remote.room.name.clone(),
        nights: remote.num_nights,
        start_date: remote.start_date,
        end_date: remote.end_date,
    }
}

fn room_rate(prices: &RoomPriceList) -> Result<RoomRate, AdapterError> {
    let average = &prices.average_price_per_night.price;
    let total = &prices.total_price.price;

    let price_breakdown = prices
        .price_breakdown_list
        .iter()
        .enumerate()
        .map(|(index, entry)| price_breakdown(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RoomRate {
        average_price: AveragePrice {
            amount: average.total_amount,
            amount_with_taxes_and_fees: average.total_amount_including_taxes_fees,
            currency_code: average.currency_code.clone(),
        },
        price_breakdown,
        total_price: TotalPrice {
            fees: Fees {
                amount: total.fees.amount,
                stay_fee_amount: total.fees.stay_fee_amount,
                charges: total.fees.break_down.iter().map(charge).collect(),
            },
            tax: Tax {
                amount: total.tax.amount,
                stay_tax_amount: total.tax.stay_tax_amount,
                charges: total.tax.break_down.iter().map(charge).collect(),
            },
            currency: total.currency_code.clone(),
            total_amount: total.total_amount,
            total_with_taxes_fees: total.total_amount_including_taxes_fees,
        },
    })
}

// Only the first product price of each breakdown entry is reported.
fn price_breakdown(index: usize, entry: &ProductPriceBreakdown) -> Result<PriceBreakdown, AdapterError> {
    let product_price = entry.product_price_list.first().ok_or_else(|| {
        AdapterError::MalformedResponse(format!(
            "price breakdown entry {} has no product price",
            index
        ))
    })?;
    let price = &product_price.price;

    Ok(PriceBreakdown {
        currency_code: price.currency_code.clone(),
        fees: price.fees.amount,
        product_rate: product_price.product.rate.code.clone(),
        product_room_name: product_price.product.room.code.clone(),
        tax: price.tax.amount,
        total: price.total_amount,
        total_with_tax_fees: price.total_amount_including_taxes_fees,
    })
}

fn charge(item: &ChargeItem) -> Charge {
    Charge {
        amount: item.amount,
        name: item.name.clone(),
        charge_type: item.charge_type,
    }
}
