//! Buffered page rendering for the finder's single screen.
//!
//! A page is a title bar plus an ordered list of rows. The whole screen is
//! composed into one string buffer and written in a single call, so an
//! interactive re-render never flickers. In non-interactive mode the same
//! page prints as plain lines that stay in terminal history.

use chrono::Local;
use std::io::Write;

use crate::constants::ui::CONTENT_MARGIN;
use crate::error::AppError;
use crate::ui::colors::*;

#[derive(Debug)]
pub enum PageRow {
    /// Plain body text
    Text(String),
    /// Cyan table column header line
    ColumnHeader(String),
    /// One table data line, highlighted when selected
    TableLine { text: String, selected: bool },
    /// Yellow section header (for the tee and hole sub-tables)
    SectionHeader(String),
    /// Neutral status message ("No courses found.")
    Message(String),
    /// Red error message ("Request failed: ...")
    ErrorMessage(String),
    /// The query input line; the block cursor marks keyboard focus
    InputLine {
        label: String,
        value: String,
        focused: bool,
    },
    /// Blank spacer line
    Spacer,
}

#[derive(Debug)]
pub struct FinderPage {
    title: String,
    subheader: String,
    rows: Vec<PageRow>,
    footer: Option<String>,
    ignore_height_limit: bool,
}

impl FinderPage {
    /// Creates a page with the given title and subheader. With
    /// `ignore_height_limit` the page renders as appended plain lines for
    /// non-interactive output instead of repainting the terminal.
    pub fn new(title: impl Into<String>, subheader: impl Into<String>, ignore_height_limit: bool) -> Self {
        FinderPage {
            title: title.into(),
            subheader: subheader.into(),
            rows: Vec::new(),
            footer: None,
            ignore_height_limit,
        }
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.rows.push(PageRow::Text(text.into()));
    }

    pub fn add_column_header(&mut self, text: impl Into<String>) {
        self.rows.push(PageRow::ColumnHeader(text.into()));
    }

    pub fn add_table_line(&mut self, text: impl Into<String>, selected: bool) {
        self.rows.push(PageRow::TableLine {
            text: text.into(),
            selected,
        });
    }

    pub fn add_section_header(&mut self, text: impl Into<String>) {
        self.rows.push(PageRow::SectionHeader(text.into()));
    }

    pub fn add_message(&mut self, text: impl Into<String>) {
        self.rows.push(PageRow::Message(text.into()));
    }

    pub fn add_error_message(&mut self, text: impl Into<String>) {
        self.rows.push(PageRow::ErrorMessage(text.into()));
    }

    pub fn add_input_line(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        focused: bool,
    ) {
        self.rows.push(PageRow::InputLine {
            label: label.into(),
            value: value.into(),
            focused,
        });
    }

    pub fn add_spacer(&mut self) {
        self.rows.push(PageRow::Spacer);
    }

    pub fn set_footer(&mut self, text: impl Into<String>) {
        self.footer = Some(text.into());
    }

    /// Renders the whole page into one buffer and writes it out in a single
    /// call (double buffering).
    pub fn render_buffered<W: Write>(&self, out: &mut W) -> Result<(), AppError> {
        let (width, height) = if self.ignore_height_limit {
            (80u16, 24u16)
        } else {
            crossterm::terminal::size().unwrap_or((80, 24))
        };

        let mut buffer = String::with_capacity(2048);

        if !self.ignore_height_limit {
            buffer.push_str("\x1b[H"); // Move to home position
            buffer.push_str("\x1b[0J"); // Clear from cursor down
        }

        // Header line: title on the left, current date on the right
        let date_text = Local::now().format("%d.%m.%Y").to_string();
        let header_width = (width as usize).saturating_sub(20);
        self.push_line(
            &mut buffer,
            1,
            format!(
                "\x1b[48;5;{}m\x1b[38;5;{}m{:<20}{:>header_width$}\x1b[0m",
                header_bg(),
                header_fg(),
                self.title,
                date_text,
            ),
        );
        self.push_line(
            &mut buffer,
            2,
            format!("\x1b[38;5;{}m{}\x1b[0m", subheader_fg(), self.subheader),
        );

        let mut line = 4usize;
        for row in &self.rows {
            let content = match row {
                PageRow::Text(text) => {
                    format!("\x1b[38;5;{}m{}\x1b[0m", text_fg(), text)
                }
                PageRow::ColumnHeader(text) => {
                    format!("\x1b[38;5;{}m{}\x1b[0m", column_header_fg(), text)
                }
                PageRow::TableLine { text, selected } => {
                    if *selected {
                        format!(
                            "\x1b[48;5;{}m\x1b[38;5;{}m{}\x1b[0m",
                            selected_bg(),
                            text_fg(),
                            text
                        )
                    } else {
                        format!("\x1b[38;5;{}m{}\x1b[0m", text_fg(), text)
                    }
                }
                PageRow::SectionHeader(text) => {
                    format!("\x1b[38;5;{}m{}\x1b[0m", section_fg(), text)
                }
                PageRow::Message(text) => {
                    format!("\x1b[38;5;{}m{}\x1b[0m", text_fg(), text)
                }
                PageRow::ErrorMessage(text) => {
                    format!("\x1b[38;5;{}m{}\x1b[0m", error_fg(), text)
                }
                PageRow::InputLine {
                    label,
                    value,
                    focused,
                } => {
                    let cursor = if *focused { "█" } else { "" };
                    format!(
                        "\x1b[38;5;{}m{}: \x1b[38;5;{}m{}{}\x1b[0m",
                        column_header_fg(),
                        label,
                        text_fg(),
                        value,
                        cursor
                    )
                }
                PageRow::Spacer => String::new(),
            };
            self.push_line(&mut buffer, line, content);
            line += 1;
        }

        if let Some(footer) = &self.footer {
            let footer_line = if self.ignore_height_limit {
                line + 1
            } else {
                height.max(1) as usize
            };
            if self.ignore_height_limit {
                self.push_line(&mut buffer, line, String::new());
            }
            self.push_line(
                &mut buffer,
                footer_line,
                format!("\x1b[38;5;{}m{}\x1b[0m", hint_fg(), footer),
            );
        }

        out.write_all(buffer.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    /// Places content at an absolute line in interactive mode, or appends a
    /// plain line in non-interactive mode.
    fn push_line(&self, buffer: &mut String, line: usize, content: String) {
        if self.ignore_height_limit {
            if content.is_empty() {
                buffer.push('\n');
            } else {
                buffer.push_str(&format!("{:margin$}{content}\n", "", margin = CONTENT_MARGIN));
            }
        } else {
            buffer.push_str(&format!(
                "\x1b[{};{}H{}",
                line,
                CONTENT_MARGIN + 1,
                content
            ));
        }
    }
}
