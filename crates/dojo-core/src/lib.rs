//! # dojo-core
//!
//! Shared types for the fixture server:
//! - Entity structs for the records the dashboard UI consumes (students,
//!   organizations, techniques, classes, billing plans)
//! - JSON response envelopes (`HealthResponse`, `ListResponse`)
//! - The literal fixture values served by `dojo-server`

pub mod entities;
pub mod fixtures;
pub mod responses;
