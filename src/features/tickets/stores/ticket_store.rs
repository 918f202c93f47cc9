use chrono::{Local, NaiveDate};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::core::config::EnvProfile;
use crate::features::tickets::models::Ticket;
use crate::shared::constants::TICKET_STATUS_OPEN;

struct StoreInner {
    tickets: Vec<Ticket>,
    next_id: u64,
}

/// In-memory ticket store holding process-lifetime state.
///
/// Tickets are kept in insertion order. Ids come from a monotonic counter
/// allocated under the write lock, independent of the collection length,
/// so concurrent creates cannot observe the same id.
pub struct TicketStore {
    inner: RwLock<StoreInner>,
}

impl TicketStore {
    pub fn new(seed: Vec<Ticket>) -> Self {
        let next_id = seed.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(StoreInner {
                tickets: seed,
                next_id,
            }),
        }
    }

    /// Snapshot of all tickets in insertion order.
    pub async fn list(&self) -> Vec<Ticket> {
        self.inner.read().await.tickets.clone()
    }

    pub async fn count(&self) -> usize {
        self.inner.read().await.tickets.len()
    }

    /// Allocate the next id and append a new open ticket dated today.
    pub async fn create(&self, title: String, environment: String) -> Ticket {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let ticket = Ticket {
            id,
            title,
            status: TICKET_STATUS_OPEN.to_string(),
            environment,
            created_at: Local::now().date_naive(),
        };
        inner.tickets.push(ticket.clone());
        ticket
    }

    /// Overlay `patch` onto the ticket whose id matches.
    ///
    /// Returns `None` when no ticket matches. The stored ticket is only
    /// replaced when the merged value still deserializes into a `Ticket`;
    /// a failed merge leaves it untouched.
    pub async fn merge_into(
        &self,
        id: u64,
        patch: &Map<String, Value>,
    ) -> Option<serde_json::Result<Ticket>> {
        let mut inner = self.inner.write().await;
        let slot = inner.tickets.iter_mut().find(|t| t.id == id)?;

        match slot.merged(patch) {
            Ok(merged) => {
                *slot = merged.clone();
                Some(Ok(merged))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Fixed sample tickets each instance starts with.
pub fn seed_tickets(profile: EnvProfile) -> Vec<Ticket> {
    match profile {
        EnvProfile::Development => vec![
            Ticket::seed(1, "Fix Login Issue", "open", "dev", ymd(2024, 1, 15)),
            Ticket::seed(
                2,
                "Update API Documentation",
                "in-progress",
                "dev",
                ymd(2024, 1, 16),
            ),
        ],
        EnvProfile::Production => vec![
            Ticket::seed(1, "Production Deployment", "closed", "prod", ymd(2024, 1, 10)),
            Ticket::seed(2, "Database Optimization", "open", "prod", ymd(2024, 1, 12)),
            Ticket::seed(3, "Security Patch", "in-progress", "prod", ymd(2024, 1, 14)),
        ],
    }
}
