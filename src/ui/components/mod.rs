//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture, plus the high-level
//! layout functions that compose them per mode.
//!
//! # Components
//!
//! - [`header`]: Title bar, connection status line, navigation tabs
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Book list columns (TITLE, AUTHOR, GENRE, PUBLISHED, PRICE)
//! - [`modal`]: Detail modal box
//! - [`form`]: Add/edit form fields
//! - [`toast`]: Transient notification line
//! - [`empty`]: Empty collection placeholder
//!
//! # Layout modes
//!
//! - [`render_list_mode`]: Chrome + (search bar) + table / placeholder / failure
//! - [`render_modal_mode`]: Chrome + detail modal
//! - [`render_form_mode`]: Chrome + form

mod empty;
mod footer;
mod form;
mod header;
mod modal;
mod search;
mod table;
mod toast;

use crate::ui::helpers::{position_cursor, print_centered_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormInfo, ModalInfo, UiViewModel};

use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::{render_connection, render_header, render_tabs};
use modal::render_modal;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};
use toast::render_toast;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the shared top chrome: title, connection line, tabs, border.
///
/// Rendering starts at row 2 (row 1 stays blank). Returns the first content
/// row below the chrome.
fn render_chrome(vm: &UiViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = 2;
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_connection(current_row, &vm.connection, theme, cols);
    current_row = render_tabs(current_row, &vm.tabs, theme, cols);
    render_border(current_row, &theme.colors.border, cols)
}

/// Renders the shared bottom chrome: toast (when visible), border, footer.
fn render_bottom(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    if let Some(toast) = &vm.toast {
        render_toast(border_row.saturating_sub(1), toast, theme, cols);
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the list section: table, empty placeholder, or load failure,
/// with the search box when search mode is active.
pub fn render_list_mode(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = render_chrome(vm, theme, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(error) = &vm.list_error {
        print_centered_line(current_row + 2, error, &theme.colors.status_err_fg, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme);
        render_table_rows(current_row, &vm.rows, theme, cols);
    }

    render_bottom(vm, theme, cols, rows);
}

/// Renders the detail modal over the list chrome.
pub fn render_modal_mode(
    vm: &UiViewModel,
    modal: &ModalInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let current_row = render_chrome(vm, theme, cols);
    render_modal(current_row + 1, modal, theme, cols);
    render_bottom(vm, theme, cols, rows);
}

/// Renders the add/edit form section.
pub fn render_form_mode(
    vm: &UiViewModel,
    form: &FormInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let current_row = render_chrome(vm, theme, cols);
    render_form(current_row + 1, form, theme, cols);
    render_bottom(vm, theme, cols, rows);
}
