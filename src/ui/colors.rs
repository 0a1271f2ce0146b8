//! ANSI 256-color codes for the finder's terminal appearance.

/// Dark green title bar background
pub fn header_bg() -> u8 {
    22
}

/// Pure white header text
pub fn header_fg() -> u8 {
    231
}

/// Bright green subheader
pub fn subheader_fg() -> u8 {
    46
}

/// Pure white body text
pub fn text_fg() -> u8 {
    231
}

/// Bright cyan table column headers
pub fn column_header_fg() -> u8 {
    51
}

/// Bright yellow section headers (tee boxes, holes)
pub fn section_fg() -> u8 {
    226
}

/// Background for the selected result row
pub fn selected_bg() -> u8 {
    28
}

/// Bright red error text
pub fn error_fg() -> u8 {
    196
}

/// Grey footer and hint text
pub fn hint_fg() -> u8 {
    244
}
