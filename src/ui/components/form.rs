//! Add/edit form component renderer.
//!
//! Renders one line per field with the focused field marked and accented,
//! followed by the mode-dependent submit hint. Field values arrive
//! pre-sanitized from the view model.

use crate::ui::helpers::{position_cursor, truncate_with_ellipsis};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormInfo;

/// Left margin for the form body.
const FORM_MARGIN: usize = 4;

/// Width of the label column.
const LABEL_WIDTH: usize = 16;

/// Renders the form starting at the specified row.
///
/// # Layout
///
/// ```text
/// ❯ Title           The Great Gatsby_
///   Author          F. Scott Fitzgerald
///   Price           11.99
///   Genre           Fiction
///   Published Date  1925-04-10
///
///   [ Update Book ]  press Enter to submit
/// ```
///
/// The focused field gets the marker, the accent color, and a trailing
/// cursor character.
///
/// # Returns
///
/// The next available row position after the submit hint.
pub fn render_form(row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    let value_width = cols.saturating_sub(FORM_MARGIN + LABEL_WIDTH + 4);

    for field in &form.fields {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(FORM_MARGIN));

        if field.focused {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.form_accent_fg));
            print!("❯ ");
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("  ");
        }
        print!("{:<lw$}", field.label, lw = LABEL_WIDTH);

        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", truncate_with_ellipsis(&field.value, value_width));
        if field.focused {
            print!("{}", Theme::fg(&theme.colors.form_accent_fg));
            print!("_");
        }
        print!("{}", Theme::reset());

        current_row += 1;
    }

    current_row += 1;
    position_cursor(current_row, 1);
    print!("{}", " ".repeat(FORM_MARGIN + 2));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.form_accent_fg));
    print!("[ {} ]", form.submit_label);
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  press Enter to submit");
    print!("{}", Theme::reset());

    current_row + 1
}
