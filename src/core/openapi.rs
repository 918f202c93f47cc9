use utoipa::{Modify, OpenApi};

use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::features::tickets::{
    dtos as tickets_dtos, handlers as tickets_handlers, models as tickets_models,
};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health (public)
        health_handlers::health_check,
        // Tickets (public)
        tickets_handlers::list_tickets,
        tickets_handlers::create_ticket,
        tickets_handlers::update_ticket,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Health
            health_dtos::HealthResponseDto,
            // Tickets
            tickets_models::Ticket,
            tickets_dtos::CreateTicketDto,
            tickets_dtos::TicketListResponseDto,
        )
    ),
    tags(
        (name = "health", description = "Service health check"),
        (name = "tickets", description = "Ticket tracking (public)"),
    ),
    info(
        title = "Ticketflow API",
        version = "0.1.0",
        description = "API documentation for Ticketflow",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
