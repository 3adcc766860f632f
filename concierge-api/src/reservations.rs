use axum::{extract::State, Json};
use concierge_core::reservation::{
    CancelReservationRequest, CancelReservationResponse, ReservationRequest, ReservationResponse,
};

use crate::error::AppError;
use crate::state::AppState;

pub async fn create_reservation(
    State(state): State<AppState>,
    Json(request): Json<ReservationRequest>,
) -> Result<Json<ReservationResponse>, AppError> {
    let response = state.adapter.create_reservation(&request).await?;
    Ok(Json(response))
}

pub async fn update_reservation(
    State(state): State<AppState>,
    Json(request): Json<ReservationRequest>,
) -> Result<Json<ReservationResponse>, AppError> {
    let response = state
        .adapter
        .update_reservation(&request, state.profiles.as_ref())
        .await?;
    Ok(Json(response))
}

pub async fn cancel_reservation(
    State(state): State<AppState>,
    Json(request): Json<CancelReservationRequest>,
) -> Result<Json<CancelReservationResponse>, AppError> {
    let response = state.adapter.cancel_reservation(&request).await?;
    Ok(Json(response))
}

pub async fn search_reservation(
    State(state): State<AppState>,
    Json(request): Json<ReservationRequest>,
) -> Result<Json<ReservationResponse>, AppError> {
    state
        .adapter
        .search_by_confirmation(&request)
        .await?
        .map(Json)
        .ok_or_else(|| {
            AppError::ValidationError("searchItemType and searchItemValue are required".to_string())
        })
}
