//! HTTP surface of the feedback service.
//!
//! - [`routes`]: router construction, CORS, and the `/feedback` and `/health` handlers.
//! - [`response`]: JSON bodies and the error-to-status mapping.
//! - [`middleware`]: request logging.
//! - [`state`]: shared, immutable handler state.

pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
