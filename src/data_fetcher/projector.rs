//! Projection of the loosely structured directory payloads into flat tables.
//!
//! The remote service has drifted across versions: search responses are
//! either a bare list or wrapped in a `courses` key, tee data comes flat or
//! grouped by category, and name fields vary between `club_name`/`course_name`
//! and a plain `name`. Everything here tolerates those variations and projects
//! them into one stable shape, without sorting, filtering, deduplicating, or
//! converting anything.

use serde_json::Value;
use tracing::debug;

use crate::data_fetcher::models::{
    CourseId, CourseSummary, HoleRow, TeePresence, TeeProjection, TeeRow,
};

/// Tee field spellings observed across service versions, in lookup order.
const TEE_FIELD_NAMES: [&str; 2] = ["tees", "teeBoxes"];

/// Returns the course objects of a search payload, in the order received.
///
/// Tolerates a bare top-level list as well as an object carrying a `courses`
/// key. Anything else yields an empty slice rather than an error.
pub fn course_entries(payload: &Value) -> &[Value] {
    match payload {
        Value::Array(entries) => entries,
        Value::Object(map) => match map.get("courses") {
            Some(Value::Array(entries)) => entries,
            _ => &[],
        },
        _ => &[],
    }
}

/// Projects a search payload into the ordered, pickable summary list.
///
/// Order is preserved exactly as received. Entries without a usable `id`
/// cannot be selected for a detail fetch and are skipped.
pub fn project_summaries(payload: &Value) -> Vec<CourseSummary> {
    let mut summaries = Vec::new();

    for entry in course_entries(payload) {
        let Some(object) = entry.as_object() else {
            debug!("Skipping non-object search entry");
            continue;
        };

        let Some(id) = object.get("id").and_then(CourseId::from_value) else {
            debug!("Skipping search entry without a usable id");
            continue;
        };

        summaries.push(CourseSummary {
            label: display_label(entry),
            club_name: string_field(object.get("club_name")),
            course_name: string_field(object.get("course_name")),
            name: string_field(object.get("name")),
            city: string_field(object.get("city")),
            state: string_field(object.get("state")),
            country: string_field(object.get("country")),
            id,
        });
    }

    summaries
}

/// Derives the human-readable label for one course object.
///
/// `club_name` and `course_name` are joined with an em-dash when at least one
/// is present; otherwise a plain `name` field is used; otherwise the id's
/// string form. A course with none of those renders as an empty label.
pub fn display_label(course: &Value) -> String {
    let club = course.get("club_name").and_then(non_empty_str);
    let name_of_course = course.get("course_name").and_then(non_empty_str);

    match (club, name_of_course) {
        (Some(club), Some(course_name)) => format!("{club} — {course_name}"),
        (Some(club), None) => club.to_string(),
        (None, Some(course_name)) => course_name.to_string(),
        (None, None) => {
            if let Some(name) = course.get("name").and_then(non_empty_str) {
                name.to_string()
            } else if let Some(id) = course.get("id").and_then(CourseId::from_value) {
                id.to_string()
            } else {
                String::new()
            }
        }
    }
}

/// Flattens a course detail's tee data into one table.
///
/// A mapping of group label to tee list is walked in the mapping's own order
/// and each resulting row is tagged with its group key; groups that are empty
/// or not a list contribute nothing. A flat tee list passes through untagged.
/// A detail without any recognizable tee container projects as absent, which
/// callers show differently from a container that yielded zero rows.
pub fn project_tees(detail: &Value) -> TeeProjection {
    let tee_field = TEE_FIELD_NAMES
        .iter()
        .find_map(|name| detail.get(*name))
        .filter(|value| !value.is_null());

    match tee_field {
        Some(Value::Object(groups)) => {
            let mut rows = Vec::new();
            for (group, members) in groups {
                let Some(members) = members.as_array() else {
                    debug!(group = %group, "Skipping tee group that is not a list");
                    continue;
                };
                for member in members {
                    if let Some(fields) = member.as_object() {
                        rows.push(TeeRow {
                            group: Some(group.clone()),
                            fields: fields.clone(),
                        });
                    }
                }
            }
            TeeProjection {
                presence: TeePresence::Present,
                rows,
            }
        }
        Some(Value::Array(members)) => {
            let rows = members
                .iter()
                .filter_map(Value::as_object)
                .map(|fields| TeeRow {
                    group: None,
                    fields: fields.clone(),
                })
                .collect();
            TeeProjection {
                presence: TeePresence::Present,
                rows,
            }
        }
        Some(_) => {
            debug!("Tee field present but neither a mapping nor a list");
            TeeProjection::absent()
        }
        None => TeeProjection::absent(),
    }
}

/// Projects a course detail's hole list, order and field order untouched.
/// Hole order is physical course order, so the sequence is never reordered.
pub fn project_holes(detail: &Value) -> Vec<HoleRow> {
    match detail.get("holes") {
        Some(Value::Array(holes)) => holes
            .iter()
            .filter_map(Value::as_object)
            .map(|fields| HoleRow {
                fields: fields.clone(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(non_empty_str).map(str::to_string)
}
