//! Booking portal for federation competitions
//!
//! Club secretaries log in with their email and spend points to reserve places in upcoming
//! competitions. Operations live in [`commands`] as [`tower::Service`]s over the [`ports`], with
//! [`adapters`] providing an in-memory catalog loaded from JSON files.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod domain;
pub mod ports;
