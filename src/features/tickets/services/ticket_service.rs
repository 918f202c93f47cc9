use std::sync::Arc;

use serde_json::{Map, Value};

use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{CreateTicketDto, TicketListResponseDto};
use crate::features::tickets::models::Ticket;
use crate::features::tickets::stores::TicketStore;
use crate::shared::constants::{DEFAULT_TICKET_TITLE, TICKET_NOT_FOUND};

/// Service for ticket operations
pub struct TicketService {
    store: Arc<TicketStore>,
    /// Instance label echoed by the list endpoint.
    environment: String,
    /// Profile tag stamped onto created tickets ("dev" or "prod").
    env_tag: String,
}

impl TicketService {
    pub fn new(store: Arc<TicketStore>, environment: String, env_tag: String) -> Self {
        Self {
            store,
            environment,
            env_tag,
        }
    }

    /// List all tickets in insertion order, unfiltered and unpaginated
    pub async fn list(&self) -> TicketListResponseDto {
        let tickets = self.store.list().await;
        TicketListResponseDto {
            environment: self.environment.clone(),
            total: tickets.len(),
            tickets,
        }
    }

    /// Create a ticket from the (possibly empty) request payload.
    ///
    /// The caller only controls the title; status, environment, id and
    /// creation date are fixed by the service.
    pub async fn create(&self, dto: CreateTicketDto) -> Ticket {
        let title = dto
            .title
            .unwrap_or_else(|| DEFAULT_TICKET_TITLE.to_string());

        let ticket = self.store.create(title, self.env_tag.clone()).await;
        tracing::info!("Ticket created: id={}, title={:?}", ticket.id, ticket.title);
        ticket
    }

    /// Merge the given fields into the ticket with the matching id.
    pub async fn update(&self, id: u64, patch: &Map<String, Value>) -> Result<Ticket> {
        self.store
            .merge_into(id, patch)
            .await
            .ok_or_else(|| AppError::NotFound(TICKET_NOT_FOUND.to_string()))?
            .map_err(|e| AppError::BadRequest(format!("Invalid ticket fields: {}", e)))
    }
}
