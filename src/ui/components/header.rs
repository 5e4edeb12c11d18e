//! Header component renderers: title bar, connection status, navigation tabs.

use crate::ui::helpers::{position_cursor, truncate_with_ellipsis};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ConnectionInfo, HeaderInfo, StatusLevel, TabInfo};

/// Renders the header title bar at the specified row.
///
/// Displays the title centered horizontally with bold styling and theme
/// colors, padding the line to fill the entire terminal width.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = header.title.chars().count();
    let padding = (cols.saturating_sub(title_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the connection status line beneath the title.
///
/// The indicator bullet and message take the status color: ok, error, or
/// dimmed while the startup probe is still outstanding.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_connection(row: usize, connection: &ConnectionInfo, theme: &Theme, cols: usize) -> usize {
    let color = match connection.level {
        StatusLevel::Ok => &theme.colors.status_ok_fg,
        StatusLevel::Err => &theme.colors.status_err_fg,
        StatusLevel::Pending => &theme.colors.text_dim,
    };
    let bullet = match connection.level {
        StatusLevel::Ok => "●",
        StatusLevel::Err => "✖",
        StatusLevel::Pending => "…",
    };

    let line = format!(" {bullet} {}", connection.message);
    let shown = truncate_with_ellipsis(&line, cols);
    let shown_len = shown.chars().count();

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{shown}");
    print!("{}", " ".repeat(cols.saturating_sub(shown_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the navigation tabs; the active tab follows the visible section.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_tabs(row: usize, tabs: &[TabInfo], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    for tab in tabs {
        let label = format!("  {}  ", tab.label);
        if tab.active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.form_accent_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{}", Theme::reset());
        used += label.chars().count();
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
