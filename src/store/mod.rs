//! # Database Accessors
//!
//! One module per entity. Each accessor receives an explicit `&PgPool`
//! handle, translates a validated request into parameterized SQL, and
//! shapes the rows returned. Failures are signaled as [`crate::error::ApiError`]
//! values carrying the status and message the HTTP layer will emit.

pub mod articles;
pub mod comments;
pub mod exists;
pub mod topics;
pub mod users;
