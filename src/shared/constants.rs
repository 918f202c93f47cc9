/// Title given to tickets created without one
pub const DEFAULT_TICKET_TITLE: &str = "Untitled Ticket";

/// Status every ticket starts in
pub const TICKET_STATUS_OPEN: &str = "open";

/// Error message returned when an update targets an unknown ticket id
pub const TICKET_NOT_FOUND: &str = "Ticket not found";

/// Value reported by the health check
pub const HEALTH_STATUS_HEALTHY: &str = "healthy";
