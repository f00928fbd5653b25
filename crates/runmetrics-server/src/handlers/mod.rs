//! HTTP handlers.

pub mod update;
