//! Update route decoder.
//!
//! Format: `/update/<kind>/<name>/<value>`, method `POST` only.
//! Segment count and emptiness are checked before anything is handed to a
//! store; kind and value are left as strings for the store to validate.
//! Each segment is percent-decoded after the split, so `%2F` stays inside
//! its segment.

use std::borrow::Cow;

use crate::error::{Result, RunMetricsError};

const UPDATE_METHOD: &str = "POST";
const UPDATE_PREFIX: &str = "update";

/// Decoded view of the three update segments. Borrows from the path unless
/// a segment carried percent escapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRoute<'a> {
    pub kind: Cow<'a, str>,
    pub name: Cow<'a, str>,
    pub value: Cow<'a, str>,
}

/// Tagged decode result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch<'a> {
    Update(UpdateRoute<'a>),
    Malformed,
}

impl<'a> RouteMatch<'a> {
    pub fn into_result(self) -> Result<UpdateRoute<'a>> {
        match self {
            RouteMatch::Update(r) => Ok(r),
            RouteMatch::Malformed => Err(RunMetricsError::MalformedPath),
        }
    }
}

/// Percent-decode one non-empty segment. Escapes that are not UTF-8 yield `None`.
fn segment(raw: Option<&str>) -> Option<Cow<'_, str>> {
    let decoded = urlencoding::decode(raw?).ok()?;
    (!decoded.is_empty()).then_some(decoded)
}

/// Decode a request method and URL path. Pure; no side effects.
pub fn decode<'a>(method: &str, path: &'a str) -> RouteMatch<'a> {
    if method != UPDATE_METHOD {
        return RouteMatch::Malformed;
    }
    let Some(rest) = path.strip_prefix('/') else {
        return RouteMatch::Malformed;
    };

    let mut segs = rest.split('/');
    if segment(segs.next()).as_deref() != Some(UPDATE_PREFIX) {
        return RouteMatch::Malformed;
    }

    let kind = segment(segs.next());
    let name = segment(segs.next());
    let value = segment(segs.next());
    match (kind, name, value, segs.next()) {
        (Some(kind), Some(name), Some(value), None) => {
            RouteMatch::Update(UpdateRoute { kind, name, value })
        }
        _ => RouteMatch::Malformed,
    }
}
