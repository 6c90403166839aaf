//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, pipeline wiring)
//!     → middleware/ (CORS → body limit → request log → project id check)
//!     → request.rs (query and JSON body extraction)
//!     → handlers.rs (one handler per route, talks to the ProjectStore)
//!     → response.rs (error mapping to JSON bodies)
//!     → Send to client
//! ```

pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use response::ApiError;
pub use server::{AppState, HttpServer};
