//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with methods for filtering, selection management, toast
//! lifecycle, and UI view model generation. It is the single source of truth
//! for all transient UI state.
//!
//! # State components
//!
//! - **Books**: the last-fetched collection from the catalog backend
//! - **Filtered books**: subset after applying the search query
//! - **Selection**: cursor position within filtered results
//! - **Section / input mode**: which view is visible and how keys are read
//! - **Form**: the create/edit controller ([`crate::app::form::FormState`])
//! - **Modal**: the record shown in the detail modal, owned for its open
//!   lifetime (there is no separate "current id" field to drift)
//! - **Connection**: result of the one-shot startup health probe
//! - **Toast**: transient notification with a pending-timer counter
//!
//! # View model computation
//!
//! `compute_viewmodel` transforms state into a renderable representation,
//! handling list windowing around the cursor, text sanitization, and
//! mode-dependent footer hints.

use crate::api::CatalogClient;
use crate::app::form::FormState;
use crate::app::modes::{FormField, InputMode, SearchFocus, Section};
use crate::domain::Book;
use crate::ui::helpers::sanitize_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BookRow, ConnectionInfo, EmptyState, FooterInfo, FormFieldView, FormInfo, HeaderInfo,
    ModalInfo, SearchBarInfo, StatusLevel, TabInfo, ToastInfo, ToastLevel, UiViewModel,
};

/// Outcome of the one-shot startup health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No health response has arrived yet.
    Unknown,
    /// The health endpoint answered 2xx.
    Connected,
    /// The health endpoint answered non-2xx or the request failed outright.
    Disconnected,
}

/// Severity of a toast notification, controlling its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
    Info,
}

/// A transient notification message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: ToastSeverity,
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input and response
/// events. View models are computed on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Request builder/parser for the configured backend.
    pub client: CatalogClient,

    /// Last-fetched collection, in server order.
    pub books: Vec<Book>,

    /// Books matching the current search query. Recomputed by
    /// `apply_search_filter()` after state changes.
    pub filtered_books: Vec<Book>,

    /// Zero-based cursor within `filtered_books`. Clamped by
    /// `apply_search_filter()`, wraps during navigation.
    pub selected_index: usize,

    /// Current search query string.
    pub search_query: String,

    /// Which top-level section is visible.
    pub section: Section,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// The create/edit form controller.
    pub form: FormState,

    /// The record shown in the detail modal, if open. The modal owns its
    /// record for exactly its open lifetime.
    pub modal: Option<Book>,

    /// Result of the startup health probe.
    pub connection: ConnectionStatus,

    /// Currently visible toast, if any.
    pub toast: Option<Toast>,

    /// Static failure message replacing the list area after a failed load.
    pub list_error: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Outstanding toast timeouts. Each toast schedules one; an expiry only
    /// hides the toast when it is the newest, so overlapping notifications
    /// replace the message and restart the clock.
    pending_toast_timers: u32,
}

impl AppState {
    /// Creates a fresh state for the given backend client and theme.
    #[must_use]
    pub fn new(client: CatalogClient, theme: Theme) -> Self {
        Self {
            client,
            books: vec![],
            filtered_books: vec![],
            selected_index: 0,
            search_query: String::new(),
            section: Section::BookList,
            input_mode: InputMode::Normal,
            form: FormState::default(),
            modal: None,
            connection: ConnectionStatus::Unknown,
            toast: None,
            list_error: None,
            theme,
            pending_toast_timers: 0,
        }
    }

    /// Moves the cursor down by one position, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_books.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_books.len();
    }

    /// Moves the cursor up by one position, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_books.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_books.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// The book under the cursor, if any.
    #[must_use]
    pub fn selected_book(&self) -> Option<&Book> {
        self.filtered_books.get(self.selected_index)
    }

    /// Replaces the collection after a successful fetch, clears any previous
    /// load failure, and re-applies the search filter.
    pub fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
        self.list_error = None;
        self.apply_search_filter();
    }

    /// Replaces the list area with a static failure message.
    pub fn mark_list_failed(&mut self) {
        self.list_error = Some(format!(
            "Failed to load books. Make sure the backend server is running on {}",
            self.client.base_url()
        ));
    }

    /// Applies the search query to the collection.
    ///
    /// A blank or whitespace-only query selects the whole collection.
    /// Otherwise a record matches when its title OR author contains the
    /// query as a case-insensitive substring. The cursor is clamped to the
    /// filtered bounds.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_books = self.books.len(),
            query_len = self.search_query.len()
        )
        .entered();

        let query = self.search_query.to_lowercase();
        if query.trim().is_empty() {
            self.filtered_books = self.books.clone();
        } else {
            self.filtered_books = self
                .books
                .iter()
                .filter(|book| {
                    book.title.to_lowercase().contains(&query)
                        || book.author.to_lowercase().contains(&query)
                })
                .cloned()
                .collect();
        }

        if self.filtered_books.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_books.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_books.len(),
            "search filter applied"
        );
    }

    /// Shows a toast, replacing any visible one, and accounts for the timer
    /// the runtime is about to schedule.
    pub fn show_toast(&mut self, message: impl Into<String>, severity: ToastSeverity) {
        self.toast = Some(Toast {
            message: message.into(),
            severity,
        });
        self.pending_toast_timers += 1;
    }

    /// Records a toast timeout expiry. Returns `true` when the toast was
    /// hidden (a re-render is needed); an expiry superseded by a newer toast
    /// is ignored.
    pub fn toast_timer_elapsed(&mut self) -> bool {
        self.pending_toast_timers = self.pending_toast_timers.saturating_sub(1);
        if self.pending_toast_timers == 0 && self.toast.is_some() {
            self.toast = None;
            return true;
        }
        false
    }

    /// Makes a section visible, deactivating the other.
    ///
    /// Entering the form section with no pending edit implicitly resets the
    /// form to create defaults.
    pub fn activate_section(&mut self, section: Section) {
        if section == Section::BookForm && self.form.is_create() {
            self.form.reset();
        }
        self.section = section;
    }

    /// Computes a renderable view model from current state and the terminal
    /// height (column layout is handled by the component renderers).
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UiViewModel {
        let form = (self.section == Section::BookForm).then(|| self.compute_form());
        let modal = if form.is_none() {
            self.modal.as_ref().map(compute_modal)
        } else {
            None
        };

        let (book_rows, selected_display_index) = if form.is_none() && modal.is_none() {
            self.compute_window(rows)
        } else {
            (vec![], 0)
        };

        let empty_state = (form.is_none()
            && modal.is_none()
            && self.list_error.is_none()
            && self.filtered_books.is_empty())
        .then(|| EmptyState {
            message: "No books found. Add a new book to get started!".to_string(),
            subtitle: "Press 'a' to add your first book".to_string(),
        });

        UiViewModel {
            header: self.compute_header(),
            connection: self.compute_connection(),
            tabs: self.compute_tabs(),
            rows: book_rows,
            selected_index: selected_display_index,
            empty_state,
            list_error: self.list_error.clone(),
            search_bar: self.compute_search_bar(),
            modal,
            form,
            toast: self.toast.as_ref().map(compute_toast),
            footer: self.compute_footer(),
        }
    }

    /// Windows the filtered list around the cursor and builds display rows.
    fn compute_window(&self, rows: usize) -> (Vec<BookRow>, usize) {
        if self.filtered_books.is_empty() {
            return (vec![], 0);
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_books.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered_books.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let book_rows = self.filtered_books[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, book)| {
                compute_book_row(book, visible_start + relative_idx == self.selected_index)
            })
            .collect();

        (book_rows, self.selected_index.saturating_sub(visible_start))
    }

    /// Rows left for the list after subtracting UI chrome (header, connection
    /// line, tabs, borders, column headers, footer; search box when active).
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Search(_) => total_rows.saturating_sub(12),
            _ => total_rows.saturating_sub(9),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.section {
            Section::BookList => format!(" Books ({}) ", self.filtered_books.len()),
            Section::BookForm => format!(" {} ", self.form.heading()),
        };
        HeaderInfo { title }
    }

    fn compute_connection(&self) -> ConnectionInfo {
        match self.connection {
            ConnectionStatus::Unknown => ConnectionInfo {
                message: "Checking server connection...".to_string(),
                level: StatusLevel::Pending,
            },
            ConnectionStatus::Connected => ConnectionInfo {
                message: "Server Connected".to_string(),
                level: StatusLevel::Ok,
            },
            ConnectionStatus::Disconnected => ConnectionInfo {
                message: format!(
                    "Cannot connect to server. Make sure the backend is running on {}",
                    self.client.base_url()
                ),
                level: StatusLevel::Err,
            },
        }
    }

    fn compute_tabs(&self) -> Vec<TabInfo> {
        vec![
            TabInfo {
                label: "Books".to_string(),
                active: self.section == Section::BookList,
            },
            TabInfo {
                label: "Add Book".to_string(),
                active: self.section == Section::BookForm,
            },
        ]
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) && self.section == Section::BookList {
            Some(SearchBarInfo {
                query: self.search_query.clone(),
            })
        } else {
            None
        }
    }

    fn compute_form(&self) -> FormInfo {
        FormInfo {
            heading: self.form.heading().to_string(),
            submit_label: self.form.submit_label().to_string(),
            fields: FormField::ALL
                .iter()
                .map(|&field| FormFieldView {
                    label: field.label().to_string(),
                    value: sanitize_text(self.form.value(field)),
                    focused: self.form.focus == field,
                })
                .collect(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if matches!(self.input_mode, InputMode::ConfirmDelete { .. }) {
            "y: confirm delete  any other key: cancel".to_string()
        } else if self.section == Section::BookForm {
            "Tab/Down: next field  Shift+Tab/Up: previous  Enter: submit  ESC: back to list"
                .to_string()
        } else if self.modal.is_some() {
            "e: edit  d: delete  ESC: close".to_string()
        } else {
            match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "ESC: exit search  Enter: results  Type to filter by title or author"
                        .to_string()
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "ESC: exit search  /: edit query  j/k: navigate  Enter: view".to_string()
                }
                _ => "j/k: navigate  /: search  Enter: view  a: add  d: delete  r: refresh  q: quit"
                    .to_string(),
            }
        };
        FooterInfo { keybindings }
    }
}

/// Builds a display row for one record, sanitizing every field so record
/// content cannot inject terminal control sequences.
fn compute_book_row(book: &Book, is_selected: bool) -> BookRow {
    BookRow {
        title: sanitize_text(&book.title),
        author: sanitize_text(&book.author),
        genre: sanitize_text(&book.genre),
        published: sanitize_text(&book.published_display()),
        price: book.price_display(),
        is_selected,
    }
}

fn compute_modal(book: &Book) -> ModalInfo {
    ModalInfo {
        heading: sanitize_text(&book.title),
        fields: vec![
            ("Author".to_string(), sanitize_text(&book.author)),
            ("Genre".to_string(), sanitize_text(&book.genre)),
            ("Price".to_string(), book.price_display()),
            (
                "Published Date".to_string(),
                sanitize_text(&book.published_display()),
            ),
            ("Book ID".to_string(), format!("#{}", book.id)),
        ],
    }
}

fn compute_toast(toast: &Toast) -> ToastInfo {
    ToastInfo {
        message: toast.message.clone(),
        level: match toast.severity {
            ToastSeverity::Success => ToastLevel::Success,
            ToastSeverity::Error => ToastLevel::Error,
            ToastSeverity::Info => ToastLevel::Info,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: "Fiction".to_string(),
            price: 9.5,
            published_date: "2020-01-01".to_string(),
        }
    }

    fn state_with_books(books: Vec<Book>) -> AppState {
        let mut state = AppState::new(CatalogClient::new("http://localhost:8080"), Theme::default());
        state.set_books(books);
        state
    }

    #[test]
    fn blank_query_selects_whole_collection() {
        let mut state = state_with_books(vec![
            book(1, "1984", "George Orwell"),
            book(2, "Emma", "Jane Austen"),
        ]);
        for query in ["", "   "] {
            state.search_query = query.to_string();
            state.apply_search_filter();
            assert_eq!(state.filtered_books.len(), 2);
        }
    }

    #[test]
    fn filter_matches_title_or_author_case_insensitively() {
        let mut state = state_with_books(vec![
            book(1, "1984", "George Orwell"),
            book(2, "Emma", "Jane Austen"),
            book(3, "Animal Farm", "George Orwell"),
        ]);

        state.search_query = "ORWELL".to_string();
        state.apply_search_filter();
        let ids: Vec<i64> = state.filtered_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);

        state.search_query = "emma".to_string();
        state.apply_search_filter();
        let ids: Vec<i64> = state.filtered_books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![2]);

        state.search_query = "zzz".to_string();
        state.apply_search_filter();
        assert!(state.filtered_books.is_empty());
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = state_with_books(vec![
            book(1, "A", "a"),
            book(2, "B", "b"),
            book(3, "C", "c"),
        ]);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn cursor_is_clamped_when_filter_shrinks_results() {
        let mut state = state_with_books(vec![
            book(1, "Alpha", "x"),
            book(2, "Beta", "x"),
            book(3, "Alpha Two", "x"),
        ]);
        state.selected_index = 2;
        state.search_query = "beta".to_string();
        state.apply_search_filter();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn set_books_clears_a_previous_load_failure() {
        let mut state = state_with_books(vec![]);
        state.mark_list_failed();
        assert!(state.list_error.is_some());

        state.set_books(vec![book(1, "A", "a")]);
        assert!(state.list_error.is_none());
        assert_eq!(state.filtered_books.len(), 1);
    }

    #[test]
    fn newer_toast_restarts_the_hide_clock() {
        let mut state = state_with_books(vec![]);
        state.show_toast("first", ToastSeverity::Info);
        state.show_toast("second", ToastSeverity::Success);

        // The first timeout expires while a newer toast is visible.
        assert!(!state.toast_timer_elapsed());
        assert_eq!(state.toast.as_ref().unwrap().message, "second");

        // The second timeout hides the toast.
        assert!(state.toast_timer_elapsed());
        assert!(state.toast.is_none());
    }

    #[test]
    fn entering_form_section_without_pending_edit_resets_the_form() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        state.form.title = "leftover".to_string();
        state.activate_section(Section::BookForm);
        assert_eq!(state.form.title, "");

        state.activate_section(Section::BookList);
        state.form.populate_for_edit(&book(1, "A", "a"));
        state.form.title = "edited".to_string();
        state.activate_section(Section::BookForm);
        assert_eq!(state.form.title, "edited");
    }

    #[test]
    fn viewmodel_renders_special_characters_verbatim_and_price_to_two_decimals() {
        let state = state_with_books(vec![book(1, "A & B", "X")]);
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].title, "A & B");
        assert_eq!(vm.rows[0].price, "$9.50");
        assert_eq!(vm.rows[0].published, "January 1, 2020");
        assert!(vm.rows[0].is_selected);
    }

    #[test]
    fn viewmodel_shows_placeholder_for_empty_collection() {
        let state = state_with_books(vec![]);
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.empty_state.is_some());
        assert!(vm.rows.is_empty());
    }

    #[test]
    fn viewmodel_windows_long_lists_around_the_cursor() {
        let books: Vec<Book> = (0..100)
            .map(|i| book(i, &format!("Book {i}"), "Author"))
            .collect();
        let mut state = state_with_books(books);
        state.selected_index = 50;

        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.rows.len() <= 15);
        assert!(vm.rows[vm.selected_index].is_selected);
        assert_eq!(vm.rows[vm.selected_index].title, "Book 50");
    }

    #[test]
    fn modal_replaces_list_rows_in_the_viewmodel() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        state.modal = Some(book(7, "Gatsby <3", "F."));

        let vm = state.compute_viewmodel(24, 80);
        let modal = vm.modal.unwrap();
        assert_eq!(modal.heading, "Gatsby <3");
        assert!(modal.fields.iter().any(|(label, value)| {
            label == "Book ID" && value == "#7"
        }));
        assert!(vm.rows.is_empty());
    }
}
