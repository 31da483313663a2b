//! HTTP/JSON API server for employee and contact records.
//!
//! Provides a REST API for creating, fetching, updating, deleting, and
//! listing employees, with contacts batch-created alongside their owner and
//! removed with it. This crate contains the server framework, API schema
//! types, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
