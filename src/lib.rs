//! Whiskey collection recommendation service
//!
//! Scores a bottle (or a whole collection) against a fixed catalog of
//! flavor and usage categories and returns themed anime pairings, plus
//! summary statistics and a per-distillery breakdown for the collection view.

pub mod app_state;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
