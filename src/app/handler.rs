//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and completed HTTP round-trips, translating them into state changes and
//! action sequences. It is the primary control flow coordinator for the
//! plugin.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (mapped keys, `WebRequestResult`
//!    events, timer expiries)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Sequencing
//!
//! Dependent steps within one user action are chained through response
//! events: a successful create or update resets the form and issues a list
//! reload whose `show_list_when_done` flag switches the visible section once
//! the reload settles, reproducing the strict submit → reload → show-list
//! order. There is no guard against stale responses across independently
//! triggered actions; that ordering gap is an accepted limitation.

use crate::api::{ApiResponse, CatalogClient, RequestKind};
use crate::app::modes::{InputMode, SearchFocus, Section};
use crate::app::state::{ConnectionStatus, ToastSeverity};
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events triggered by user input, timer expiry, or completed requests.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Permissions were granted; run the startup probe and initial load.
    Started,

    /// Moves the list cursor down by one position (wraps to top).
    SelectionDown,
    /// Moves the list cursor up by one position (wraps to bottom).
    SelectionUp,

    /// Makes the form section visible (resets the form when no edit is
    /// pending).
    ShowAddForm,
    /// Makes the list section visible.
    ShowBookList,

    /// Enters search mode with typing focus and refreshes the collection.
    SearchMode,
    /// Focuses the search input field (from navigating focus).
    FocusSearchBar,
    /// Focuses the filtered results (from typing focus).
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    SearchChar(char),
    /// Removes the last character from the search query.
    SearchBackspace,

    /// Fetches the record under the cursor for the detail modal.
    ViewDetails,
    /// Hides the modal and drops its record.
    CloseModal,
    /// Fetches the modal's record to populate the edit form.
    BeginEdit,

    /// Asks for confirmation before deleting the targeted record (the
    /// modal's record when open, else the record under the cursor).
    PromptDelete,
    /// Confirms the pending delete and issues the request.
    ConfirmDelete,
    /// Cancels the pending delete; a silent no-op with zero requests.
    CancelDelete,

    /// Appends a character to the focused form field.
    FormChar(char),
    /// Removes the last character from the focused form field.
    FormBackspace,
    /// Moves form focus to the next field.
    FormNextField,
    /// Moves form focus to the previous field.
    FormPrevField,
    /// Submits the form (create or update, following the form mode).
    SubmitForm,

    /// Re-fetches the collection.
    RefreshBooks,

    /// A request issued by this plugin completed (successfully or not).
    ApiResult {
        /// The operation that issued the request.
        kind: RequestKind,
        /// The raw outcome delivered by the host.
        response: ApiResponse,
    },

    /// A toast auto-hide timeout fired.
    ToastTimerElapsed,

    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// A tuple of (should re-render, actions to execute in sequence). The action
/// list is empty when the event requires no side effects.
///
/// # Errors
///
/// Currently infallible in practice: operation failures (bad price, failed
/// requests) are surfaced as toasts rather than errors, so the prior view
/// state is always retained.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Started => {
            tracing::debug!("running startup health probe and initial load");
            Ok((
                true,
                vec![
                    Action::SendRequest(state.client.check_health()),
                    Action::SendRequest(state.client.list_books(false)),
                ],
            ))
        }
        Event::SelectionDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectionUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::ShowAddForm => {
            state.activate_section(Section::BookForm);
            Ok((true, vec![]))
        }
        Event::ShowBookList => {
            state.activate_section(Section::BookList);
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if state.section != Section::BookList {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            state.apply_search_filter();
            // Search filters client-side over a fresh copy of the collection.
            Ok((
                true,
                vec![Action::SendRequest(state.client.list_books(false))],
            ))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_search_filter();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting search mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::SearchChar(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_query.push(*c);
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::SearchBackspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }
            state.search_query.pop();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::ViewDetails => {
            let Some(book) = state.selected_book() else {
                tracing::debug!("no book selected");
                if matches!(state.input_mode, InputMode::Search(_)) {
                    state.input_mode = InputMode::Normal;
                    state.search_query = String::new();
                    state.apply_search_filter();
                    return Ok((true, vec![]));
                }
                return Ok((false, vec![]));
            };
            tracing::debug!(book_id = book.id, "fetching book details");
            Ok((
                false,
                vec![Action::SendRequest(state.client.get_book(book.id))],
            ))
        }
        Event::CloseModal => {
            state.modal = None;
            Ok((true, vec![]))
        }
        Event::BeginEdit => {
            let Some(book) = state.modal.as_ref() else {
                tracing::debug!("edit requested with no open modal");
                return Ok((false, vec![]));
            };
            tracing::debug!(book_id = book.id, "fetching book for edit");
            Ok((
                false,
                vec![Action::SendRequest(state.client.get_book_for_edit(book.id))],
            ))
        }
        Event::PromptDelete => {
            let target = state
                .modal
                .as_ref()
                .map(|book| book.id)
                .or_else(|| state.selected_book().map(|book| book.id));
            let Some(id) = target else {
                tracing::debug!("no book targeted for deletion");
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::ConfirmDelete { id };
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => {
            let InputMode::ConfirmDelete { id } = state.input_mode else {
                return Ok((false, vec![]));
            };
            state.input_mode = InputMode::Normal;
            tracing::debug!(book_id = id, "delete confirmed");
            Ok((
                true,
                vec![Action::SendRequest(state.client.delete_book(id))],
            ))
        }
        Event::CancelDelete => {
            if !matches!(state.input_mode, InputMode::ConfirmDelete { .. }) {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::FormChar(c) => {
            if state.section != Section::BookForm {
                return Ok((false, vec![]));
            }
            state.form.push_char(*c);
            Ok((true, vec![]))
        }
        Event::FormBackspace => {
            if state.section != Section::BookForm {
                return Ok((false, vec![]));
            }
            state.form.backspace();
            Ok((true, vec![]))
        }
        Event::FormNextField => {
            if state.section != Section::BookForm {
                return Ok((false, vec![]));
            }
            state.form.focus_next();
            Ok((true, vec![]))
        }
        Event::FormPrevField => {
            if state.section != Section::BookForm {
                return Ok((false, vec![]));
            }
            state.form.focus_prev();
            Ok((true, vec![]))
        }
        Event::SubmitForm => Ok(submit_form(state)),
        Event::RefreshBooks => Ok((
            false,
            vec![Action::SendRequest(state.client.list_books(false))],
        )),
        Event::ApiResult { kind, response } => Ok(handle_api_result(state, kind, response)),
        Event::ToastTimerElapsed => Ok((state.toast_timer_elapsed(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Builds and issues the create or update request from the form.
///
/// An unbuildable payload (bad price, serialization failure) is a submit
/// failure: the toast carries the specific message and the form, mode, and
/// visible section are left untouched.
fn submit_form(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.section != Section::BookForm {
        return (false, vec![]);
    }

    let request = state.form.draft().and_then(|draft| {
        match state.form.mode {
            crate::app::modes::FormMode::Create => state.client.create_book(&draft),
            crate::app::modes::FormMode::Edit(id) => state.client.update_book(id, &draft),
        }
    });

    match request {
        Ok(request) => {
            tracing::debug!(url = %request.url, "submitting book");
            (false, vec![Action::SendRequest(request)])
        }
        Err(e) => {
            tracing::debug!(error = %e, "submit rejected before any request");
            let mut actions = vec![];
            notify(state, &mut actions, e.to_string(), ToastSeverity::Error);
            (true, actions)
        }
    }
}

/// Routes a completed request back to the operation that issued it.
fn handle_api_result(
    state: &mut AppState,
    kind: &RequestKind,
    response: &ApiResponse,
) -> (bool, Vec<Action>) {
    let mut actions = vec![];

    match kind {
        RequestKind::CheckHealth => {
            state.connection = if response.is_success() {
                ConnectionStatus::Connected
            } else {
                tracing::debug!(status = response.status, "health probe failed");
                ConnectionStatus::Disconnected
            };
            (true, actions)
        }
        RequestKind::LoadBooks { show_list_when_done } => {
            match CatalogClient::parse_book_list(response) {
                Ok(books) => {
                    tracing::debug!(count = books.len(), "books loaded");
                    state.set_books(books);
                }
                Err(e) => {
                    tracing::debug!(error = %e, "failed to load books");
                    state.mark_list_failed();
                    notify(
                        state,
                        &mut actions,
                        "Error loading books. Make sure the backend server is running.",
                        ToastSeverity::Error,
                    );
                }
            }
            // The original waits for the reload to settle before switching
            // back to the list, whether or not the reload succeeded.
            if *show_list_when_done {
                state.activate_section(Section::BookList);
            }
            (true, actions)
        }
        RequestKind::FetchBook { id } => match CatalogClient::parse_book(response) {
            Ok(book) => {
                state.modal = Some(book);
                (true, actions)
            }
            Err(e) => {
                tracing::debug!(book_id = id, error = %e, "failed to fetch book details");
                notify(
                    state,
                    &mut actions,
                    "Error loading book details.",
                    ToastSeverity::Error,
                );
                (true, actions)
            }
        },
        RequestKind::FetchBookForEdit { id } => match CatalogClient::parse_book(response) {
            Ok(book) => {
                state.modal = None;
                state.form.populate_for_edit(&book);
                state.section = Section::BookForm;
                (true, actions)
            }
            Err(e) => {
                tracing::debug!(book_id = id, error = %e, "failed to fetch book for edit");
                notify(
                    state,
                    &mut actions,
                    "Error loading book for edit.",
                    ToastSeverity::Error,
                );
                (true, actions)
            }
        },
        RequestKind::CreateBook | RequestKind::UpdateBook { .. } => {
            match CatalogClient::parse_mutation(response) {
                Ok(_saved) => {
                    let message = if matches!(*kind, RequestKind::CreateBook) {
                        "Book added successfully!"
                    } else {
                        "Book updated successfully!"
                    };
                    notify(state, &mut actions, message, ToastSeverity::Success);
                    state.form.reset();
                    actions.push(Action::SendRequest(state.client.list_books(true)));
                    (true, actions)
                }
                Err(e) => {
                    tracing::debug!(error = %e, "submit failed");
                    notify(state, &mut actions, e.to_string(), ToastSeverity::Error);
                    (true, actions)
                }
            }
        }
        RequestKind::DeleteBook { id } => match CatalogClient::parse_deletion(response) {
            Ok(()) => {
                tracing::debug!(book_id = id, "book deleted");
                state.modal = None;
                notify(
                    state,
                    &mut actions,
                    "Book deleted successfully!",
                    ToastSeverity::Success,
                );
                actions.push(Action::SendRequest(state.client.list_books(false)));
                (true, actions)
            }
            Err(e) => {
                tracing::debug!(book_id = id, error = %e, "failed to delete book");
                notify(state, &mut actions, "Error deleting book.", ToastSeverity::Error);
                (true, actions)
            }
        },
    }
}

/// Shows a toast and queues its auto-hide timer.
fn notify(
    state: &mut AppState,
    actions: &mut Vec<Action>,
    message: impl Into<String>,
    severity: ToastSeverity,
) {
    state.show_toast(message, severity);
    actions.push(Action::StartToastTimer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiRequest, HttpMethod};
    use crate::app::modes::FormMode;
    use crate::domain::Book;
    use crate::ui::theme::Theme;

    fn new_state() -> AppState {
        AppState::new(CatalogClient::new("http://localhost:8080"), Theme::default())
    }

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
        let mut state = new_state();
        state.set_books(books);
        state
    }

    fn json_response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    fn sent_requests(actions: &[Action]) -> Vec<&ApiRequest> {
        actions
            .iter()
            .filter_map(|action| match action {
                Action::SendRequest(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn fill_form(state: &mut AppState) {
        state.form.title = "1984".to_string();
        state.form.author = "George Orwell".to_string();
        state.form.price = "13.99".to_string();
        state.form.genre = "Dystopian".to_string();
        state.form.published_date = "1949-06-08".to_string();
    }

    #[test]
    fn startup_probes_health_and_loads_list_independently() {
        let mut state = new_state();
        let (_, actions) = handle_event(&mut state, &Event::Started).unwrap();

        let requests = sent_requests(&actions);
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].kind, RequestKind::CheckHealth);
        assert_eq!(
            requests[1].kind,
            RequestKind::LoadBooks {
                show_list_when_done: false
            }
        );
    }

    #[test]
    fn failed_health_probe_marks_disconnected_without_touching_books() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        let (_, actions) = handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::CheckHealth,
                response: ApiResponse {
                    status: 503,
                    headers: vec![],
                    body: String::new(),
                },
            },
        )
        .unwrap();

        assert_eq!(state.connection, ConnectionStatus::Disconnected);
        assert_eq!(state.books.len(), 1);
        assert!(actions.is_empty());
    }

    #[test]
    fn successful_health_probe_marks_connected() {
        let mut state = new_state();
        handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::CheckHealth,
                response: ApiResponse {
                    status: 200,
                    headers: vec![],
                    body: "ok".to_string(),
                },
            },
        )
        .unwrap();
        assert_eq!(state.connection, ConnectionStatus::Connected);
    }

    #[test]
    fn loaded_books_replace_the_collection() {
        let mut state = new_state();
        handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::LoadBooks {
                    show_list_when_done: false,
                },
                response: json_response(
                    200,
                    r#"[{"id":1,"title":"A","author":"B","genre":"C","price":1.0,"publishedDate":"2020-01-01"}]"#,
                ),
            },
        )
        .unwrap();

        assert_eq!(state.books.len(), 1);
        assert!(state.list_error.is_none());
    }

    #[test]
    fn failed_load_sets_inline_error_and_toasts() {
        let mut state = new_state();
        let (_, actions) = handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::LoadBooks {
                    show_list_when_done: false,
                },
                response: json_response(500, "boom"),
            },
        )
        .unwrap();

        assert!(state.list_error.is_some());
        assert_eq!(
            state.toast.as_ref().unwrap().severity,
            ToastSeverity::Error
        );
        assert!(actions.contains(&Action::StartToastTimer));
    }

    #[test]
    fn view_details_fetches_the_record_under_the_cursor() {
        let mut state = state_with_books(vec![book(1, "A", "a"), book(2, "B", "b")]);
        state.selected_index = 1;

        let (_, actions) = handle_event(&mut state, &Event::ViewDetails).unwrap();
        let requests = sent_requests(&actions);
        assert_eq!(requests[0].kind, RequestKind::FetchBook { id: 2 });
        assert_eq!(requests[0].method, HttpMethod::Get);
    }

    #[test]
    fn detail_response_opens_the_modal() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::FetchBook { id: 1 },
                response: json_response(
                    200,
                    r#"{"id":1,"title":"A","author":"a","genre":"g","price":2.0,"publishedDate":"2020-01-01"}"#,
                ),
            },
        )
        .unwrap();
        assert_eq!(state.modal.as_ref().unwrap().id, 1);
    }

    #[test]
    fn failed_detail_fetch_leaves_the_modal_closed() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::FetchBook { id: 1 },
                response: json_response(404, ""),
            },
        )
        .unwrap();

        assert!(state.modal.is_none());
        assert_eq!(
            state.toast.as_ref().unwrap().message,
            "Error loading book details."
        );
    }

    #[test]
    fn create_mode_always_submits_post() {
        let mut state = new_state();
        state.activate_section(Section::BookForm);
        fill_form(&mut state);

        let (_, actions) = handle_event(&mut state, &Event::SubmitForm).unwrap();
        let requests = sent_requests(&actions);
        assert_eq!(requests[0].method, HttpMethod::Post);
        assert_eq!(requests[0].url, "http://localhost:8080/books");
        assert_eq!(requests[0].kind, RequestKind::CreateBook);
    }

    #[test]
    fn edit_mode_always_submits_put_to_that_id() {
        let mut state = new_state();
        state.form.populate_for_edit(&book(5, "A", "a"));
        state.activate_section(Section::BookForm);

        let (_, actions) = handle_event(&mut state, &Event::SubmitForm).unwrap();
        let requests = sent_requests(&actions);
        assert_eq!(requests[0].method, HttpMethod::Put);
        assert_eq!(requests[0].url, "http://localhost:8080/books/5");
        assert_eq!(requests[0].kind, RequestKind::UpdateBook { id: 5 });
    }

    #[test]
    fn successful_create_resets_form_reloads_and_shows_list_after_reload() {
        let mut state = new_state();
        state.activate_section(Section::BookForm);
        fill_form(&mut state);

        let (_, actions) = handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::CreateBook,
                response: ApiResponse {
                    status: 201,
                    headers: vec![],
                    body: String::new(),
                },
            },
        )
        .unwrap();

        // Form reset to create defaults, reload queued, toast shown.
        assert!(state.form.is_create());
        assert_eq!(state.form.title, "");
        assert_eq!(state.toast.as_ref().unwrap().message, "Book added successfully!");
        let requests = sent_requests(&actions);
        assert_eq!(
            requests[0].kind,
            RequestKind::LoadBooks {
                show_list_when_done: true
            }
        );

        // The section switches only once the reload settles.
        assert_eq!(state.section, Section::BookForm);
        handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::LoadBooks {
                    show_list_when_done: true,
                },
                response: json_response(200, "[]"),
            },
        )
        .unwrap();
        assert_eq!(state.section, Section::BookList);
    }

    #[test]
    fn failed_update_preserves_form_and_section() {
        let mut state = new_state();
        state.form.populate_for_edit(&book(5, "Old Title", "a"));
        state.activate_section(Section::BookForm);

        let (_, actions) = handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::UpdateBook { id: 5 },
                response: json_response(400, r#"{"message":"title is required"}"#),
            },
        )
        .unwrap();

        assert_eq!(state.section, Section::BookForm);
        assert_eq!(state.form.mode, FormMode::Edit(5));
        assert_eq!(state.form.title, "Old Title");
        assert!(sent_requests(&actions).is_empty());

        // The toast carries the most specific message the backend offered.
        let toast = state.toast.as_ref().unwrap();
        assert!(toast.message.contains("title is required"));
        assert!(toast.message.contains("400"));
    }

    #[test]
    fn unparseable_price_fails_submit_with_no_request_and_no_state_change() {
        let mut state = new_state();
        state.activate_section(Section::BookForm);
        fill_form(&mut state);
        state.form.price = "free".to_string();

        let (_, actions) = handle_event(&mut state, &Event::SubmitForm).unwrap();

        assert!(sent_requests(&actions).is_empty());
        assert_eq!(state.section, Section::BookForm);
        assert_eq!(state.form.price, "free");
        assert_eq!(
            state.toast.as_ref().unwrap().message,
            "Price must be a number, got 'free'"
        );
    }

    #[test]
    fn unconfirmed_delete_performs_zero_requests() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);

        let (_, prompt_actions) = handle_event(&mut state, &Event::PromptDelete).unwrap();
        assert!(sent_requests(&prompt_actions).is_empty());
        assert_eq!(state.input_mode, InputMode::ConfirmDelete { id: 1 });

        let (_, cancel_actions) = handle_event(&mut state, &Event::CancelDelete).unwrap();
        assert!(sent_requests(&cancel_actions).is_empty());
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.books.len(), 1);
    }

    #[test]
    fn confirmed_delete_issues_the_request() {
        let mut state = state_with_books(vec![book(3, "A", "a")]);
        handle_event(&mut state, &Event::PromptDelete).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::ConfirmDelete).unwrap();
        let requests = sent_requests(&actions);
        assert_eq!(requests[0].method, HttpMethod::Delete);
        assert_eq!(requests[0].kind, RequestKind::DeleteBook { id: 3 });
    }

    #[test]
    fn delete_prompt_targets_the_open_modal_first() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        state.modal = Some(book(9, "Modal Book", "m"));

        handle_event(&mut state, &Event::PromptDelete).unwrap();
        assert_eq!(state.input_mode, InputMode::ConfirmDelete { id: 9 });
    }

    #[test]
    fn successful_delete_closes_modal_toasts_and_reloads() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        state.modal = Some(book(1, "A", "a"));

        let (_, actions) = handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::DeleteBook { id: 1 },
                response: ApiResponse {
                    status: 204,
                    headers: vec![],
                    body: String::new(),
                },
            },
        )
        .unwrap();

        assert!(state.modal.is_none());
        assert_eq!(
            state.toast.as_ref().unwrap().message,
            "Book deleted successfully!"
        );
        let requests = sent_requests(&actions);
        assert_eq!(
            requests[0].kind,
            RequestKind::LoadBooks {
                show_list_when_done: false
            }
        );
    }

    #[test]
    fn failed_delete_leaves_state_unchanged() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        state.modal = Some(book(1, "A", "a"));

        let (_, actions) = handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::DeleteBook { id: 1 },
                response: json_response(500, "boom"),
            },
        )
        .unwrap();

        assert!(state.modal.is_some());
        assert_eq!(state.toast.as_ref().unwrap().message, "Error deleting book.");
        assert!(sent_requests(&actions).is_empty());
    }

    #[test]
    fn begin_edit_requires_an_open_modal() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        let (_, actions) = handle_event(&mut state, &Event::BeginEdit).unwrap();
        assert!(actions.is_empty());

        state.modal = Some(book(1, "A", "a"));
        let (_, actions) = handle_event(&mut state, &Event::BeginEdit).unwrap();
        assert_eq!(
            sent_requests(&actions)[0].kind,
            RequestKind::FetchBookForEdit { id: 1 }
        );
    }

    #[test]
    fn edit_fetch_populates_the_form_and_switches_sections() {
        let mut state = state_with_books(vec![book(1, "A", "a")]);
        state.modal = Some(book(1, "A", "a"));

        handle_event(
            &mut state,
            &Event::ApiResult {
                kind: RequestKind::FetchBookForEdit { id: 1 },
                response: json_response(
                    200,
                    r#"{"id":1,"title":"A","author":"a","genre":"g","price":2.5,"publishedDate":"2020-01-01"}"#,
                ),
            },
        )
        .unwrap();

        assert!(state.modal.is_none());
        assert_eq!(state.section, Section::BookForm);
        assert_eq!(state.form.mode, FormMode::Edit(1));
        assert_eq!(state.form.title, "A");
        assert_eq!(state.form.price, "2.5");
    }

    #[test]
    fn search_keystrokes_filter_the_last_fetched_collection() {
        let mut state = state_with_books(vec![
            book(1, "1984", "George Orwell"),
            book(2, "Emma", "Jane Austen"),
        ]);

        let (_, actions) = handle_event(&mut state, &Event::SearchMode).unwrap();
        // Entering search refreshes the collection the filter runs over.
        assert_eq!(
            sent_requests(&actions)[0].kind,
            RequestKind::LoadBooks {
                show_list_when_done: false
            }
        );

        for c in "emma".chars() {
            handle_event(&mut state, &Event::SearchChar(c)).unwrap();
        }
        assert_eq!(state.filtered_books.len(), 1);
        assert_eq!(state.filtered_books[0].id, 2);

        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.filtered_books.len(), 2);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn toast_timer_hides_only_the_newest_toast() {
        let mut state = new_state();
        state.show_toast("one", ToastSeverity::Info);
        state.show_toast("two", ToastSeverity::Info);

        let (rendered, _) = handle_event(&mut state, &Event::ToastTimerElapsed).unwrap();
        assert!(!rendered);
        assert!(state.toast.is_some());

        let (rendered, _) = handle_event(&mut state, &Event::ToastTimerElapsed).unwrap();
        assert!(rendered);
        assert!(state.toast.is_none());
    }
}
