//! Wire encoding of updates.
//!
//! The only encoding is the fixed path-segment form
//! `POST /update/<kind>/<name>/<value>`. The decoder is panic-free: it never
//! indexes segments by position, so a short or odd path is reported as
//! `RouteMatch::Malformed` instead.

pub mod path;

pub use path::{decode, RouteMatch, UpdateRoute};
