//! Empty state component renderer.
//!
//! Renders the placeholder shown when the (filtered) collection is empty.

use crate::ui::helpers::print_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message at the specified row.
///
/// Displays a centered two-line message: the primary text in the empty
/// state color, the subtitle dimmed below it.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    print_centered_line(row, &empty.message, &theme.colors.empty_state_fg, cols);
    print!("{}", Theme::dim());
    print_centered_line(row + 1, &empty.subtitle, &theme.colors.text_dim, cols);
    row + 2
}
