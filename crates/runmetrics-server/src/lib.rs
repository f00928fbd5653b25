//! runmetrics server library entry.
//!
//! This crate wires the config loader, the in-memory metric store, and the
//! update route into an axum service. It is intended to be consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
pub mod storage;
