//! HTTP front end for the weather proxy.
//!
//! This crate focuses on:
//! - Parsing flags, environment and config file
//! - Serving `GET /weather` and `GET /health`
//! - Turning core errors into `{"Message": ...}` responses

pub mod cli;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

pub use server::build_router;
pub use state::AppState;
