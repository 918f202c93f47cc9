mod ticket_store;

pub use ticket_store::{seed_tickets, TicketStore};
