//! newsdesk - a REST API serving news articles, comments, topics, and users
//!
//! The crate is organized by concern:
//!
//! - [`cli`] - command-line entry point
//! - [`config`] - server configuration
//! - [`error`] - the API error taxonomy and its HTTP mapping
//! - [`model`] - entity row types
//! - [`query`] - the articles listing query builder
//! - [`store`] - database accessors and existence validators
//! - [`http`] - routers, handlers, and the server itself

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod query;
pub mod store;
