//! Teapot API Library
//!
//! CRUD over teapot resources: domain types and validation, the CRUD
//! service, repository adapters and the HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
