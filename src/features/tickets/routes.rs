use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::tickets::handlers;
use crate::features::tickets::services::TicketService;

/// Create routes for the tickets feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<TicketService>) -> Router {
    Router::new()
        .route(
            "/tickets",
            get(handlers::list_tickets).post(handlers::create_ticket),
        )
        .route("/tickets/{id}", put(handlers::update_ticket))
        .with_state(service)
}
