//! Health check feature.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/health` | No | Liveness probe with instance label |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::HealthService;
