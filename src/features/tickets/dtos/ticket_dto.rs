use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::tickets::models::Ticket;

/// Request DTO for creating a ticket.
///
/// Everything is optional: an absent or malformed body degrades to the
/// default value of every field. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTicketDto {
    pub title: Option<String>,
}

/// Response DTO for the ticket listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketListResponseDto {
    pub environment: String,
    pub tickets: Vec<Ticket>,
    pub total: usize,
}
