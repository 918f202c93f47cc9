//! Ticket tracking feature.
//!
//! Tickets live in an in-memory store for the lifetime of the process,
//! seeded with fixed sample data for the instance's profile at startup.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/tickets` | No | List all tickets in insertion order |
//! | POST | `/tickets` | No | Create a ticket |
//! | PUT | `/tickets/{id}` | No | Merge fields into a ticket |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;

pub use services::TicketService;
pub use stores::TicketStore;
