//! # API Shared
//!
//! Shared definitions for CareCheck front ends.
//!
//! Contains:
//! - Request/response bodies with OpenAPI schemas (`dto` module)
//! - The user-facing diagnosis report built around engine output
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `carecheck-cli` for common functionality.

pub mod dto;
pub mod health;
pub mod report;

pub use dto::*;
pub use health::HealthService;
pub use report::recommended_actions;
