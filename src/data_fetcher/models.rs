//! Data types shared across the fetch and projection layers.

use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Opaque course identifier as returned by the directory service.
///
/// The service has been observed returning both integer and string ids, and
/// the two are never coerced into each other: a detail request and a cache key
/// built from `Number(42)` are distinct from ones built from `Text("42")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CourseId {
    Number(i64),
    Text(String),
}

impl CourseId {
    /// Extracts an id from the `id` field of a course object, preserving the
    /// JSON type. Anything that is not an integer or a string yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(CourseId::Number),
            Value::String(s) => Some(CourseId::Text(s.clone())),
            _ => None,
        }
    }

    /// Type-preserving equality against a raw JSON id value.
    pub fn matches_value(&self, value: &Value) -> bool {
        match (self, value) {
            (CourseId::Number(id), Value::Number(n)) => n.as_i64() == Some(*id),
            (CourseId::Text(id), Value::String(s)) => id == s,
            _ => false,
        }
    }

    /// Cache key that keeps `Number(42)` and `Text("42")` apart.
    pub fn cache_key(&self) -> String {
        match self {
            CourseId::Number(n) => format!("num:{n}"),
            CourseId::Text(s) => format!("text:{s}"),
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseId::Number(n) => write!(f, "{n}"),
            CourseId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for CourseId {
    type Err = Infallible;

    /// Command-line ids parse as integers when they look like one, otherwise
    /// they stay text. Matches how the service's own JSON types its ids.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(n) => Ok(CourseId::Number(n)),
            Err(_) => Ok(CourseId::Text(s.to_string())),
        }
    }
}

/// One pickable entry of a search result list, in the order received.
/// Immutable once produced; a new search discards the whole list.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub id: CourseId,
    pub club_name: Option<String>,
    pub course_name: Option<String>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// Human-readable label shown in the selection list, derived from the
    /// name fields with the id's string form as the last resort.
    pub label: String,
}

/// One flattened tee-box record. `group` carries the category tag (for
/// example a gender grouping) when the source grouped its tee data; it stays
/// `None` when the source was already a flat list.
#[derive(Debug, Clone, PartialEq)]
pub struct TeeRow {
    pub group: Option<String>,
    pub fields: Map<String, Value>,
}

/// One hole record, fields in the order the service sent them.
#[derive(Debug, Clone, PartialEq)]
pub struct HoleRow {
    pub fields: Map<String, Value>,
}

/// Whether the course detail carried a tee field at all. "No tee list found"
/// is only the right message when a tee container was present but yielded
/// zero usable rows; a wholly absent field gets no such message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeePresence {
    Absent,
    Present,
}

/// Flattened tee table plus the presence marker for the empty case.
#[derive(Debug, Clone, PartialEq)]
pub struct TeeProjection {
    pub presence: TeePresence,
    pub rows: Vec<TeeRow>,
}

impl TeeProjection {
    pub fn absent() -> Self {
        TeeProjection {
            presence: TeePresence::Absent,
            rows: Vec::new(),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.presence == TeePresence::Absent
    }

    /// Present but without a single usable row.
    pub fn is_present_but_empty(&self) -> bool {
        self.presence == TeePresence::Present && self.rows.is_empty()
    }
}
