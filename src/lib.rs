//! StyleMate API - outfit recommendations for the StyleMate web app
//!
//! Ranks a clothing catalog against user style preferences, resolves a
//! location to weather and season, and proxies mix & match requests to the
//! external outfit model backend.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

pub use error::{AppError, AppResult};
