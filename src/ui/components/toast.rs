//! Toast notification component renderer.
//!
//! Renders the transient notification line just above the footer. The toast
//! replaces whatever occupied the line, mirroring its replace-not-queue
//! semantics.

use crate::ui::helpers::print_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ToastInfo, ToastLevel};

/// Renders the toast message at the specified row, colored by severity.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_toast(row: usize, toast: &ToastInfo, theme: &Theme, cols: usize) -> usize {
    let color = match toast.level {
        ToastLevel::Success => &theme.colors.toast_success_fg,
        ToastLevel::Error => &theme.colors.toast_error_fg,
        ToastLevel::Info => &theme.colors.toast_info_fg,
    };
    print!("{}", Theme::bold());
    print_centered_line(row, &toast.message, color, cols);
    row + 1
}
