//! Composition of the finder's two screens from session state.
//!
//! Both the interactive loop and `--once` mode build their output here, so a
//! single search-or-detail round-trip prints exactly what the interactive
//! screen would show. A screen is a pure function of the state passed in.

use serde_json::Value;

use crate::constants::ui::MAX_VISIBLE_RESULTS;
use crate::data_fetcher::projector::{project_holes, project_tees};
use crate::ui::page::FinderPage;
use crate::ui::state::{Focus, SearchSession, StatusLine};
use crate::ui::table::{holes_table, summaries_table, tees_table};

const TITLE: &str = "GOLF COURSE FINDER";

/// Builds the search screen: query input, result table, status line.
///
/// `focus` carries the keyboard owner in interactive mode; `None` drops the
/// input line and footer hints for one-shot plain output. With `plain` the
/// page appends lines into terminal history instead of repainting.
pub fn build_results_page(
    session: &SearchSession,
    focus: Option<Focus>,
    plain: bool,
) -> FinderPage {
    let subheader = match &session.last_query {
        Some(query) => format!("Results for \"{query}\""),
        None => "Course search".to_string(),
    };
    let mut page = FinderPage::new(TITLE, subheader, plain);

    if let Some(focus) = focus {
        page.add_input_line("Search", &session.query, focus == Focus::Input);
        page.add_spacer();
    }

    if session.has_results() {
        let table = summaries_table(&session.summaries);
        let lines = table.render_lines();
        if let Some((header, rows)) = lines.split_first() {
            page.add_column_header(header.clone());

            // Window the rows around the selection in interactive mode so a
            // long result list never pushes the footer off screen.
            let (start, end) = if focus.is_some() && rows.len() > MAX_VISIBLE_RESULTS {
                let start = (session.selected + 1)
                    .saturating_sub(MAX_VISIBLE_RESULTS)
                    .min(rows.len() - MAX_VISIBLE_RESULTS);
                (start, start + MAX_VISIBLE_RESULTS)
            } else {
                (0, rows.len())
            };

            for (i, row) in rows[start..end].iter().enumerate() {
                let selected = focus == Some(Focus::Results) && start + i == session.selected;
                page.add_table_line(row.clone(), selected);
            }

            if end < rows.len() || start > 0 {
                page.add_message(format!(
                    "({} of {} results shown)",
                    end - start,
                    rows.len()
                ));
            }
        }
    }

    match &session.status {
        StatusLine::None => {}
        StatusLine::Info(message) => page.add_message(message.clone()),
        StatusLine::Error(message) => page.add_error_message(message.clone()),
    }

    if let Some(focus) = focus {
        page.set_footer(match focus {
            Focus::Input => "Enter = search  ↓ = results  Esc = quit",
            Focus::Results => "↑/↓ = select  Enter = details  Esc = edit query  q = quit",
        });
    }

    page
}

/// Builds the detail screen for one course: location line plus the tee-box
/// and hole sub-tables. The two empty-tee cases get different messages; a
/// wholly absent tee field is not the same as a container with no usable rows.
pub fn build_detail_page(label: &str, detail: &Value, hints: bool, plain: bool) -> FinderPage {
    let mut page = FinderPage::new(TITLE, label, plain);

    if let Some(line) = location_line(detail) {
        page.add_text(line);
        page.add_spacer();
    }

    page.add_section_header("TEE BOXES");
    let tees = project_tees(detail);
    if tees.is_absent() {
        page.add_message("Tee data not available.");
    } else if tees.is_present_but_empty() {
        page.add_message("No tee list found.");
    } else {
        add_table_lines(&mut page, tees_table(&tees.rows).render_lines());
    }

    page.add_spacer();
    page.add_section_header("HOLES");
    let holes = project_holes(detail);
    if holes.is_empty() {
        page.add_message("No hole data.");
    } else {
        add_table_lines(&mut page, holes_table(&holes).render_lines());
    }

    if hints {
        page.set_footer("Esc = back  q = quit");
    }

    page
}

/// One-shot error screen; `--once` prints this when the round-trip fails.
pub fn build_error_page(message: &str, plain: bool) -> FinderPage {
    let mut page = FinderPage::new(TITLE, "", plain);
    page.add_error_message(message);
    page
}

fn add_table_lines(page: &mut FinderPage, lines: Vec<String>) {
    let mut lines = lines.into_iter();
    if let Some(header) = lines.next() {
        page.add_column_header(header);
    }
    for line in lines {
        page.add_table_line(line, false);
    }
}

/// Joins whichever of address/city/state/country the detail carries. Some
/// service versions nest them under a `location` object, some keep them at
/// the top level.
fn location_line(detail: &Value) -> Option<String> {
    let source = match detail.get("location") {
        Some(nested @ Value::Object(_)) => nested,
        _ => detail,
    };

    let parts: Vec<&str> = ["address", "city", "state", "country"]
        .iter()
        .filter_map(|key| source.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(page: &FinderPage) -> String {
        let mut out: Vec<u8> = Vec::new();
        page.render_buffered(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn session_with(payload: serde_json::Value) -> SearchSession {
        let mut session = SearchSession::new(None);
        session.set_results("Oxmoor".to_string(), payload);
        session
    }

    #[test]
    fn test_results_page_shows_rows_and_query() {
        let session = session_with(json!([
            {"id": 1, "club_name": "Oxmoor", "course_name": "Ridge", "city": "Louisville"}
        ]));

        let rendered = render(&build_results_page(&session, Some(Focus::Results), true));
        assert!(rendered.contains("Results for \"Oxmoor\""));
        assert!(rendered.contains("Oxmoor — Ridge"));
        assert!(rendered.contains("Louisville"));
    }

    #[test]
    fn test_results_page_plain_mode_has_no_input_or_footer() {
        let session = session_with(json!([{"id": 1, "name": "Alpha"}]));

        let rendered = render(&build_results_page(&session, None, true));
        assert!(!rendered.contains("Search:"));
        assert!(!rendered.contains("Enter = search"));
        assert!(rendered.contains("Alpha"));
    }

    #[test]
    fn test_results_page_empty_search_shows_message() {
        let session = session_with(json!([]));

        let rendered = render(&build_results_page(&session, Some(Focus::Input), true));
        assert!(rendered.contains("No courses found."));
    }

    #[test]
    fn test_results_page_windows_long_lists() {
        let entries: Vec<serde_json::Value> = (0..40)
            .map(|i| json!({"id": i, "name": format!("Course {i}")}))
            .collect();
        let mut session = session_with(json!(entries));
        session.selected = 39;

        let rendered = render(&build_results_page(&session, Some(Focus::Results), true));
        assert!(rendered.contains("Course 39"));
        assert!(!rendered.contains("Course 10"));
        assert!(rendered.contains(&format!("({MAX_VISIBLE_RESULTS} of 40 results shown)")));
    }

    #[test]
    fn test_detail_page_distinguishes_absent_and_empty_tees() {
        let absent = render(&build_detail_page(
            "Oxmoor",
            &json!({"holes": [{"par": 4}]}),
            false,
            true,
        ));
        assert!(absent.contains("Tee data not available."));
        assert!(!absent.contains("No tee list found."));

        let present_empty = render(&build_detail_page(
            "Oxmoor",
            &json!({"tees": {"male": [], "female": []}}),
            false,
            true,
        ));
        assert!(present_empty.contains("No tee list found."));
        assert!(!present_empty.contains("Tee data not available."));
    }

    #[test]
    fn test_detail_page_renders_grouped_tees_and_holes() {
        let detail = json!({
            "city": "Louisville",
            "state": "KY",
            "tees": {"male": [{"name": "Blue", "yardage": 6500}]},
            "holes": [{"number": 1, "par": 4}, {"number": 2, "par": 3}]
        });

        let rendered = render(&build_detail_page("Oxmoor — Ridge", &detail, true, true));
        assert!(rendered.contains("Louisville, KY"));
        assert!(rendered.contains("TEE BOXES"));
        assert!(rendered.contains("male"));
        assert!(rendered.contains("Blue"));
        assert!(rendered.contains("HOLES"));
        assert!(rendered.contains("Esc = back"));
    }

    #[test]
    fn test_location_line_reads_nested_location_object() {
        let nested = json!({"location": {"address": "100 Fairway Dr", "country": "USA"}});
        assert_eq!(
            location_line(&nested),
            Some("100 Fairway Dr, USA".to_string())
        );

        let flat = json!({"city": "Louisville", "country": "USA"});
        assert_eq!(location_line(&flat), Some("Louisville, USA".to_string()));

        assert_eq!(location_line(&json!({"name": "x"})), None);
        assert_eq!(location_line(&json!({"city": "  "})), None);
    }

    #[test]
    fn test_error_page_carries_message() {
        let rendered = render(&build_error_page("Request failed: timeout", true));
        assert!(rendered.contains("Request failed: timeout"));
    }
}
