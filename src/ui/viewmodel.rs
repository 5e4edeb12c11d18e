//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain only display-ready data: every text field has already been
//! sanitized and formatted, so components can print without further
//! processing.

/// Complete UI view model for rendering.
///
/// Computed by `AppState::compute_viewmodel`. Exactly one of `form`, `modal`,
/// or the list content (`rows` / `empty_state` / `list_error`) is populated,
/// mirroring the section state machine.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header title (section name, record count).
    pub header: HeaderInfo,

    /// Connection status line shown beneath the title.
    pub connection: ConnectionInfo,

    /// Navigation tabs; the active tab follows the visible section.
    pub tabs: Vec<TabInfo>,

    /// Book rows in the visible window.
    pub rows: Vec<BookRow>,

    /// Index of the selected row within `rows`.
    pub selected_index: usize,

    /// Placeholder when the (filtered) collection is empty.
    pub empty_state: Option<EmptyState>,

    /// Static failure message replacing the list after a failed load.
    pub list_error: Option<String>,

    /// Search input box state, when search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Detail modal content, when open.
    pub modal: Option<ModalInfo>,

    /// Form content, when the form section is visible.
    pub form: Option<FormInfo>,

    /// Transient notification, when visible.
    pub toast: Option<ToastInfo>,

    /// Footer keybinding hints for the current mode.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Severity bucket for the connection status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    /// Probe still outstanding.
    Pending,
    /// Health endpoint answered 2xx.
    Ok,
    /// Health endpoint failed.
    Err,
}

/// Connection status line content.
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub message: String,
    pub level: StatusLevel,
}

/// One navigation tab.
#[derive(Debug, Clone)]
pub struct TabInfo {
    pub label: String,
    pub active: bool,
}

/// Display information for a single book row.
///
/// All fields are sanitized and formatted (price to two decimals, date in
/// long form).
#[derive(Debug, Clone)]
pub struct BookRow {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published: String,
    pub price: String,
    pub is_selected: bool,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Detail modal content: a heading plus label/value lines.
#[derive(Debug, Clone)]
pub struct ModalInfo {
    pub heading: String,
    pub fields: Vec<(String, String)>,
}

/// Form content: mode-dependent labels plus one view per field.
#[derive(Debug, Clone)]
pub struct FormInfo {
    pub heading: String,
    pub submit_label: String,
    pub fields: Vec<FormFieldView>,
}

/// One form field as displayed.
#[derive(Debug, Clone)]
pub struct FormFieldView {
    pub label: String,
    pub value: String,
    pub focused: bool,
}

/// Color bucket for a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// Transient notification content.
#[derive(Debug, Clone)]
pub struct ToastInfo {
    pub message: String,
    pub level: ToastLevel,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}
