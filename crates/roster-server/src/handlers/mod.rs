//! HTTP handler modules for the roster API.
//!
//! Handlers are thin: they parse the request, acquire the service lock,
//! delegate to [`EmployeeService`], and return JSON responses. No business
//! logic lives in handlers.

pub mod employees;
