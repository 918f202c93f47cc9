use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use crate::core::error::Result;
use crate::features::tickets::dtos::{CreateTicketDto, TicketListResponseDto};
use crate::features::tickets::models::Ticket;
use crate::features::tickets::services::TicketService;
use crate::shared::types::ErrorResponse;

/// List all tickets
#[utoipa::path(
    get,
    path = "/tickets",
    responses(
        (status = 200, description = "All tickets in insertion order", body = TicketListResponseDto),
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(service): State<Arc<TicketService>>,
) -> Json<TicketListResponseDto> {
    Json(service.list().await)
}

/// Create a ticket
///
/// The body is read leniently: an absent or malformed JSON body is treated
/// as an empty object, so the title falls back to its default.
#[utoipa::path(
    post,
    path = "/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = Ticket),
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    body: Bytes,
) -> (StatusCode, Json<Ticket>) {
    let dto: CreateTicketDto = serde_json::from_slice(&body).unwrap_or_default();
    let ticket = service.create(dto).await;
    (StatusCode::CREATED, Json(ticket))
}

/// Update a ticket
///
/// Shallow-merges the provided field map onto the matching ticket. Like
/// create, a malformed body degrades to an empty patch.
#[utoipa::path(
    put,
    path = "/tickets/{id}",
    params(
        ("id" = u64, Path, description = "Ticket id")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Updated ticket", body = Ticket),
        (status = 400, description = "Patched values do not fit the ticket model", body = ErrorResponse),
        (status = 404, description = "Ticket not found", body = ErrorResponse)
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<u64>,
    body: Bytes,
) -> Result<Json<Ticket>> {
    let patch: Map<String, Value> = serde_json::from_slice(&body).unwrap_or_default();
    let ticket = service.update(id, &patch).await?;
    Ok(Json(ticket))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::EnvProfile;
    use crate::features::tickets::routes;
    use crate::features::tickets::stores::{seed_tickets, TicketStore};
    use axum_test::TestServer;
    use chrono::Local;
    use serde_json::json;

    fn dev_server() -> TestServer {
        let store = Arc::new(TicketStore::new(seed_tickets(EnvProfile::Development)));
        let service = Arc::new(TicketService::new(
            store,
            "development".to_string(),
            "dev".to_string(),
        ));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_list_returns_seed_in_insertion_order() {
        let server = dev_server();

        let response = server.get("/tickets").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let listing: TicketListResponseDto = response.json();
        assert_eq!(listing.environment, "development");
        assert_eq!(listing.total, 2);
        let ids: Vec<u64> = listing.tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_create_with_title() {
        let server = dev_server();

        let response = server.post("/tickets").json(&json!({"title": "New Bug"})).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let ticket: Ticket = response.json();
        assert_eq!(ticket.id, 3);
        assert_eq!(ticket.title, "New Bug");
        assert_eq!(ticket.status, "open");
        assert_eq!(ticket.environment, "dev");
        assert_eq!(ticket.created_at, Local::now().date_naive());
    }

    #[tokio::test]
    async fn test_create_with_empty_object_defaults_title() {
        let server = dev_server();

        let response = server.post("/tickets").json(&json!({})).await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let ticket: Ticket = response.json();
        assert_eq!(ticket.title, "Untitled Ticket");
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_defaults_everything() {
        let server = dev_server();

        let response = server.post("/tickets").text("{not json").await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let ticket: Ticket = response.json();
        assert_eq!(ticket.title, "Untitled Ticket");
        assert_eq!(ticket.status, "open");
    }

    #[tokio::test]
    async fn test_create_ignores_unknown_and_protected_fields() {
        let server = dev_server();

        let response = server
            .post("/tickets")
            .json(&json!({"title": "Sneaky", "status": "closed", "environment": "prod"}))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let ticket: Ticket = response.json();
        assert_eq!(ticket.status, "open");
        assert_eq!(ticket.environment, "dev");
    }

    #[tokio::test]
    async fn test_creates_grow_the_listing() {
        let server = dev_server();

        for _ in 0..3 {
            server.post("/tickets").json(&json!({})).await;
        }

        let listing: TicketListResponseDto = server.get("/tickets").await.json();
        assert_eq!(listing.total, 5);
        let ids: Vec<u64> = listing.tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let server = dev_server();

        let response = server
            .put("/tickets/1")
            .json(&json!({"status": "closed"}))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let ticket: Ticket = response.json();
        assert_eq!(ticket.id, 1);
        assert_eq!(ticket.status, "closed");
        assert_eq!(ticket.title, "Fix Login Issue");
        assert_eq!(ticket.environment, "dev");
    }

    #[tokio::test]
    async fn test_update_is_idempotent() {
        let server = dev_server();

        let first: Ticket = server
            .put("/tickets/2")
            .json(&json!({"status": "done"}))
            .await
            .json();
        let second: Ticket = server
            .put("/tickets/2")
            .json(&json!({"status": "done"}))
            .await
            .json();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_404() {
        let server = dev_server();

        let response = server
            .put("/tickets/999")
            .json(&json!({"status": "closed"}))
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = response.json();
        assert_eq!(body.error, "Ticket not found");
    }

    #[tokio::test]
    async fn test_update_type_mismatch_returns_400() {
        let server = dev_server();

        let response = server.put("/tickets/1").json(&json!({"id": "abc"})).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        // And the ticket is untouched.
        let listing: TicketListResponseDto = server.get("/tickets").await.json();
        assert_eq!(listing.tickets[0].id, 1);
    }
}
