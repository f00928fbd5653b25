//! Top-level facade crate for runmetrics.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use runmetrics_core::*;
}

pub mod server {
    pub use runmetrics_server::*;
}
