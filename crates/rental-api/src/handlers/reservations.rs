//! Reservation handlers
//!
//! Endpoints for booking, viewing, changing, and removing stays.

use axum::{extract::State, Json};
use rental_service::{
    CreateReservationRequest, ReservationResponse, ReservationService, UpdateReservationRequest,
};

use crate::extractors::{AuthUser, ReservationIdPath, SnowflakePath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create reservation
///
/// POST /reservations
pub async fn create_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> ApiResult<Created<Json<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let response = service.create_reservation(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the caller's reservations, newest first
///
/// GET /reservations/@me
pub async fn get_my_reservations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let service = ReservationService::new(state.service_context());
    let reservations = service.list_user_reservations(auth.user_id).await?;
    Ok(Json(reservations))
}

/// Get reservation by ID
///
/// GET /reservations/{reservation_id}
pub async fn get_reservation(
    State(state): State<AppState>,
    _auth: AuthUser,
    SnowflakePath(path): SnowflakePath<ReservationIdPath>,
) -> ApiResult<Json<ReservationResponse>> {
    let reservation_id = path.reservation_id()?;

    let service = ReservationService::new(state.service_context());
    let response = service.get_reservation(reservation_id).await?;
    Ok(Json(response))
}

/// Update reservation
///
/// PATCH /reservations/{reservation_id}
pub async fn update_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<ReservationIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateReservationRequest>,
) -> ApiResult<Json<ReservationResponse>> {
    let reservation_id = path.reservation_id()?;

    let service = ReservationService::new(state.service_context());
    let response = service
        .update_reservation(reservation_id, auth.user_id, request)
        .await?;
    Ok(Json(response))
}

/// Delete reservation
///
/// DELETE /reservations/{reservation_id}
pub async fn delete_reservation(
    State(state): State<AppState>,
    auth: AuthUser,
    SnowflakePath(path): SnowflakePath<ReservationIdPath>,
) -> ApiResult<NoContent> {
    let reservation_id = path.reservation_id()?;

    let service = ReservationService::new(state.service_context());
    service.delete_reservation(reservation_id, auth.user_id).await?;
    Ok(NoContent)
}
