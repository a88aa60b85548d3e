//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with `crates/rental-db/schema.sql` applied
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    access_token, assert_error, assert_json, assert_status, check_test_env, insert_property,
    test_pool, unique_user, CreateReservationBody, ReservationBody, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

struct Guest {
    token: String,
    id: String,
}

fn guest(server: &TestServer) -> Guest {
    let user = unique_user();
    Guest {
        token: access_token(&server.config().jwt.secret, user).unwrap(),
        id: user.to_string(),
    }
}

async fn book(server: &TestServer, who: &Guest, body: &CreateReservationBody) -> ReservationBody {
    let response = server
        .post_auth("/api/v1/reservations", &who.token, body)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Reservation Tests
// ============================================================================

#[tokio::test]
async fn test_create_reservation() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 120.0).await.unwrap();
    let alice = guest(&server);

    let created = book(&server, &alice, &CreateReservationBody::stay(property, 0, 3)).await;

    assert_eq!(created.user_id, alice.id);
    assert_eq!(created.property_id, property.to_string());
    assert!((created.total_price - 360.0).abs() < 1e-9);
    assert_eq!(created.status, "pending");
    assert_eq!(created.payment_status, "pending");

    let response = server
        .get_auth(&format!("/api/v1/reservations/{}", created.id), &alice.token)
        .await
        .unwrap();
    let fetched: ReservationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.start_date, created.start_date);
}

#[tokio::test]
async fn test_list_my_reservations_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 80.0).await.unwrap();
    let alice = guest(&server);
    let bob = guest(&server);

    let first = book(&server, &alice, &CreateReservationBody::stay(property, 0, 2)).await;
    let second = book(&server, &alice, &CreateReservationBody::stay(property, 10, 2)).await;
    book(&server, &bob, &CreateReservationBody::stay(property, 20, 2)).await;

    let response = server
        .get_auth("/api/v1/reservations/@me", &alice.token)
        .await
        .unwrap();
    let mine: Vec<ReservationBody> = assert_json(response, StatusCode::OK).await.unwrap();

    let ids: Vec<_> = mine.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, [second.id.as_str(), first.id.as_str()]);
}

#[tokio::test]
async fn test_overlapping_reservation_conflicts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 100.0).await.unwrap();
    let alice = guest(&server);
    let bob = guest(&server);

    book(&server, &alice, &CreateReservationBody::stay(property, 0, 4)).await;

    // Starts on the first stay's checkout instant
    let response = server
        .post_auth(
            "/api/v1/reservations",
            &bob.token,
            &CreateReservationBody::stay(property, 4, 2),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "RESERVATION_CONFLICT")
        .await
        .unwrap();

    book(&server, &bob, &CreateReservationBody::stay(property, 5, 2)).await;
}

#[tokio::test]
async fn test_concurrent_overlapping_creates_admit_one() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 100.0).await.unwrap();
    let guests: Vec<Guest> = (0..6).map(|_| guest(&server)).collect();
    let body = CreateReservationBody::stay(property, 30, 3);

    let responses = join_all(
        guests
            .iter()
            .map(|g| server.post_auth("/api/v1/reservations", &g.token, &body)),
    )
    .await;

    let statuses: Vec<StatusCode> = responses.into_iter().map(|r| r.unwrap().status()).collect();
    let created = statuses.iter().filter(|s| **s == StatusCode::CREATED).count();
    let conflicts = statuses.iter().filter(|s| **s == StatusCode::CONFLICT).count();
    assert_eq!(created, 1, "statuses: {statuses:?}");
    assert_eq!(conflicts, guests.len() - 1, "statuses: {statuses:?}");
}

#[tokio::test]
async fn test_cancelled_reservation_frees_dates() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 100.0).await.unwrap();
    let alice = guest(&server);
    let bob = guest(&server);

    let stay = CreateReservationBody::stay(property, 0, 3);
    let created = book(&server, &alice, &stay).await;

    let response = server
        .patch_auth(
            &format!("/api/v1/reservations/{}", created.id),
            &alice.token,
            &json!({ "status": "cancelled" }),
        )
        .await
        .unwrap();
    let cancelled: ReservationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, "cancelled");

    book(&server, &bob, &stay).await;
}

#[tokio::test]
async fn test_update_reprices_and_clears_requests() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 50.0).await.unwrap();
    let alice = guest(&server);

    let mut stay = CreateReservationBody::stay(property, 0, 4);
    stay.special_requests = Some("Late check-in".to_string());
    let created = book(&server, &alice, &stay).await;
    assert!((created.total_price - 200.0).abs() < 1e-9);

    let response = server
        .patch_auth(
            &format!("/api/v1/reservations/{}", created.id),
            &alice.token,
            &json!({ "endDate": stay.start_date + chrono::Duration::days(8), "specialRequests": null }),
        )
        .await
        .unwrap();
    let updated: ReservationBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!((updated.total_price - 400.0).abs() < 1e-9);
    assert_eq!(updated.special_requests, None);
    assert_eq!(updated.guest_count, created.guest_count);
}

#[tokio::test]
async fn test_update_rejects_zero_guests() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 50.0).await.unwrap();
    let alice = guest(&server);
    let created = book(&server, &alice, &CreateReservationBody::stay(property, 0, 2)).await;

    let response = server
        .patch_auth(
            &format!("/api/v1/reservations/{}", created.id),
            &alice.token,
            &json!({ "guestCount": 0 }),
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_GUEST_COUNT")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_only_owner_may_change_or_delete() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 100.0).await.unwrap();
    let alice = guest(&server);
    let mallory = guest(&server);
    let created = book(&server, &alice, &CreateReservationBody::stay(property, 0, 2)).await;
    let path = format!("/api/v1/reservations/{}", created.id);

    let response = server
        .patch_auth(&path, &mallory.token, &json!({ "guestCount": 5 }))
        .await
        .unwrap();
    assert_error(response, StatusCode::FORBIDDEN, "NOT_RESERVATION_OWNER")
        .await
        .unwrap();

    let response = server.delete_auth(&path, &mallory.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth(&path, &alice.token).await.unwrap();
    let unchanged: ReservationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged.guest_count, 2);

    let response = server.delete_auth(&path, &alice.token).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth(&path, &alice.token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "UNKNOWN_RESERVATION")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_past_start_is_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = test_pool().await.unwrap();
    let property = insert_property(&pool, 100.0).await.unwrap();
    let alice = guest(&server);

    let now = chrono::Utc::now();
    let body = CreateReservationBody {
        property_id: property.to_string(),
        start_date: now - chrono::Duration::days(2),
        end_date: now + chrono::Duration::days(2),
        guest_count: 1,
        special_requests: None,
    };

    let response = server
        .post_auth("/api/v1/reservations", &alice.token, &body)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST, "START_DATE_IN_PAST")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_requests_without_token_are_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/reservations/@me").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED, "MISSING_AUTHORIZATION")
        .await
        .unwrap();
}
