//! Interactive UI loop for the course finder.
//!
//! One screen, request-per-keypress: a submitted search or a detail load
//! runs its network call to completion before the next event is read, so at
//! most one outbound call sequence is ever in flight. Every failure is
//! terminal for that one interaction and lands in the status line; the
//! session stays usable for the next action.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use reqwest::Client;
use serde_json::Value;
use std::io::{Stdout, stdout};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::ui::POLL_INTERVAL_MS;
use crate::data_fetcher::api::{course_detail, search_courses};
use crate::error::AppError;
use crate::ui::screens::{build_detail_page, build_results_page};
use crate::ui::state::{Focus, SearchSession, StatusLine};

/// Which screen is on display.
enum View {
    Search,
    Detail { label: String, detail: Value },
}

enum Action {
    /// Nothing changed, keep polling
    Continue,
    /// State changed, repaint before the next poll
    Render,
    /// Leave the loop
    Quit,
}

/// Runs the interactive finder until the user quits.
///
/// `debug_mode` renders appended plain lines instead of repainting, so the
/// screens stay in terminal history alongside any stdout logging.
pub async fn run_interactive_ui(
    client: &Client,
    config: &Config,
    initial_query: Option<String>,
    debug_mode: bool,
) -> Result<(), AppError> {
    let mut out = stdout();
    let mut session = SearchSession::new(initial_query);
    let mut focus = Focus::Input;
    let mut view = View::Search;
    let mut needs_render = true;

    info!("Starting interactive course finder");

    loop {
        if needs_render {
            render_view(&mut out, &view, &session, focus, debug_mode)?;
            needs_render = false;
        }

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = if matches!(view, View::Search) {
                    handle_search_key(&key, client, config, &mut session, &mut focus, &mut view)
                        .await
                } else {
                    handle_detail_key(&key, &mut view)
                };
                match action {
                    Action::Continue => {}
                    Action::Render => needs_render = true,
                    Action::Quit => break,
                }
            }
            Event::Resize(..) => needs_render = true,
            _ => {}
        }
    }

    info!("Interactive course finder closed");
    Ok(())
}

fn render_view(
    out: &mut Stdout,
    view: &View,
    session: &SearchSession,
    focus: Focus,
    debug_mode: bool,
) -> Result<(), AppError> {
    let page = match view {
        View::Search => build_results_page(session, Some(focus), debug_mode),
        View::Detail { label, detail } => build_detail_page(label, detail, true, debug_mode),
    };
    page.render_buffered(out)
}

async fn handle_search_key(
    key: &KeyEvent,
    client: &Client,
    config: &Config,
    session: &mut SearchSession,
    focus: &mut Focus,
    view: &mut View,
) -> Action {
    if is_ctrl_c(key) {
        return Action::Quit;
    }

    match *focus {
        Focus::Input => match key.code {
            KeyCode::Char(c) => {
                session.query.push(c);
                Action::Render
            }
            KeyCode::Backspace => {
                session.query.pop();
                Action::Render
            }
            KeyCode::Enter => {
                submit_search(client, config, session).await;
                if session.has_results() {
                    *focus = Focus::Results;
                }
                Action::Render
            }
            KeyCode::Down if session.has_results() => {
                *focus = Focus::Results;
                Action::Render
            }
            KeyCode::Esc => Action::Quit,
            _ => Action::Continue,
        },
        Focus::Results => match key.code {
            KeyCode::Up => {
                session.select_previous();
                Action::Render
            }
            KeyCode::Down => {
                session.select_next();
                Action::Render
            }
            KeyCode::Enter => {
                load_detail(client, config, session, view).await;
                Action::Render
            }
            KeyCode::Esc => {
                *focus = Focus::Input;
                Action::Render
            }
            KeyCode::Char('q') => Action::Quit,
            _ => Action::Continue,
        },
    }
}

fn handle_detail_key(key: &KeyEvent, view: &mut View) -> Action {
    if is_ctrl_c(key) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Esc => {
            *view = View::Search;
            Action::Render
        }
        KeyCode::Char('q') => Action::Quit,
        _ => Action::Continue,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Runs one search interaction to completion and records the outcome in the
/// session. Fetch and projection failures alike end up in the status line
/// rather than tearing the session down.
async fn submit_search(client: &Client, config: &Config, session: &mut SearchSession) {
    let query = session.query.trim().to_string();
    info!("Submitting search: {query}");

    match search_courses(client, config, &query).await {
        Ok(payload) => session.set_results(query, payload),
        Err(e) => {
            warn!("Search failed: {e}");
            session.set_search_failure(format!("Request failed: {e}"));
        }
    }
}

/// Loads detail for the selected course and switches to the detail view on
/// success. The cached search payload is consulted before the network.
async fn load_detail(
    client: &Client,
    config: &Config,
    session: &mut SearchSession,
    view: &mut View,
) {
    let Some(summary) = session.selected_summary() else {
        return;
    };
    let id = summary.id.clone();
    let label = summary.label.clone();
    info!("Loading detail for course: {id}");

    match course_detail(client, config, &id, session.payload.as_ref()).await {
        Ok(detail) => {
            session.status = StatusLine::None;
            *view = View::Detail { label, detail };
        }
        Err(e) => {
            warn!("Detail load failed for {id}: {e}");
            session.status = StatusLine::Error(format!("Request failed: {e}"));
        }
    }
}
