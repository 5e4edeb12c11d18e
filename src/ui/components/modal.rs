//! Detail modal component renderer.
//!
//! Renders the selected book's full record inside a bordered box: heading,
//! separator, then one label/value line per field (author, genre, price,
//! published date, record id).

use crate::ui::helpers::{position_cursor, truncate_with_ellipsis};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

/// Horizontal margin for the modal box (spaces on left and right).
const MODAL_MARGIN: usize = 6;

/// Width of the label column inside the modal.
const LABEL_WIDTH: usize = 16;

/// Renders the detail modal starting at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌───────────────────┐ [margin]
/// [margin] │ Heading           │
/// [margin] ├───────────────────┤
/// [margin] │ Author    value   │
/// [margin] │ ...               │
/// [margin] └───────────────────┘
/// ```
///
/// # Returns
///
/// The next available row position after the box.
pub fn render_modal(row: usize, modal: &ModalInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(MODAL_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let mut current_row = row;

    print_border_line(current_row, '┌', '┐', inner_width, theme);
    current_row += 1;

    let heading = truncate_with_ellipsis(&modal.heading, inner_width.saturating_sub(2));
    print_content_line(current_row, &format!(" {heading}"), inner_width, theme, true);
    current_row += 1;

    print_border_line(current_row, '├', '┤', inner_width, theme);
    current_row += 1;

    for (label, value) in &modal.fields {
        let line = format!(
            " {:<lw$} {}",
            label,
            truncate_with_ellipsis(value, inner_width.saturating_sub(LABEL_WIDTH + 3)),
            lw = LABEL_WIDTH,
        );
        print_content_line(current_row, &line, inner_width, theme, false);
        current_row += 1;
    }

    print_border_line(current_row, '└', '┘', inner_width, theme);
    current_row + 1
}

fn print_border_line(row: usize, left: char, right: char, inner_width: usize, theme: &Theme) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(MODAL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{left}{}{right}", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

fn print_content_line(row: usize, text: &str, inner_width: usize, theme: &Theme, bold: bool) {
    let padding = inner_width.saturating_sub(text.chars().count());

    position_cursor(row, 1);
    print!("{}", " ".repeat(MODAL_MARGIN));
    print!("{}", Theme::fg(&theme.colors.border));
    print!("│");
    if bold {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.border));
    print!("│");
    print!("{}", Theme::reset());
}
