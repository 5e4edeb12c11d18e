//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the zlibrarian
//! library and the Zellij plugin system. It implements the `ZellijPlugin`
//! trait to handle Zellij events and lifecycle.
//!
//! # Plugin lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Timer, `WebRequestResult`, and
//!    `PermissionRequestResult` events
//! 3. **Permissions**: Request `WebAccess`; once granted, run the startup
//!    health probe and the initial collection load
//! 4. **Update**: Translate Zellij events to library events, delegate to
//!    `handle_event`, execute the returned actions
//! 5. **Render**: Call the library render function
//!
//! # I/O
//!
//! HTTP requests run through the host's `web_request` facility with the
//! request's [`RequestKind`] serialized into the call's context map; the
//! completed round-trip returns as a `WebRequestResult` event carrying that
//! same map, which routes the response back to the issuing operation. Toast
//! timeouts use the host's `set_timeout`.
//!
//! # Keybindings
//!
//! Global (list): `Ctrl+n`/`Ctrl+p` move the cursor.
//!
//! In the list: `j`/`k` navigate, `Enter`/`v` view details, `a` add,
//! `d` delete (with confirmation), `/` search, `r` refresh, `q` quit.
//!
//! In the detail modal: `e` edit, `d` delete, `Esc` close.
//!
//! In the form: printable keys type into the focused field, `Tab`/`Down`
//! and `Shift+Tab`/`Up` move focus, `Enter` submits, `Esc` returns to the
//! list.
//!
//! While a delete confirmation is pending: `y` confirms, any other key
//! cancels silently.

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use zlibrarian::api::{ApiResponse, HttpMethod, RequestKind};
use zlibrarian::{handle_event, Action, AppState, Config, Event, InputMode, SearchFocus, Section};

register_plugin!(State);

/// How long a toast stays visible.
const TOAST_SECONDS: f64 = 3.0;

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zlibrarian::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load: parses configuration, initializes
    /// tracing, requests the `WebAccess` permission, and subscribes to
    /// events. The startup probe and initial load wait for the permission
    /// grant.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zlibrarian::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(base_url = %config.base_url, "plugin loading started");
        self.app = zlibrarian::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to
    /// `handle_event`, and executes resulting actions. Returns `true` if the
    /// UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, headers, body, context) => {
                match Self::map_web_request_result(status, headers, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::ToastTimerElapsed,
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => {
                    tracing::debug!("permissions granted - starting up");
                    Event::Started
                }
                PermissionStatus::Denied => {
                    tracing::warn!("web access denied - plugin cannot reach the catalog");
                    return false;
                }
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(&action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI by delegating to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zlibrarian::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events based on the current
    /// section, modal state, and input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        // A pending delete confirmation swallows every key: y confirms,
        // anything else cancels silently.
        if matches!(self.app.input_mode, InputMode::ConfirmDelete { .. }) {
            return Some(match key.bare_key {
                BareKey::Char('y') | BareKey::Char('Y') => Event::ConfirmDelete,
                _ => Event::CancelDelete,
            });
        }

        if self.app.section == Section::BookForm {
            return self.map_form_key(key);
        }

        if self.app.modal.is_some() {
            return match key.bare_key {
                BareKey::Esc => Some(Event::CloseModal),
                BareKey::Char('e') => Some(Event::BeginEdit),
                BareKey::Char('d') => Some(Event::PromptDelete),
                _ => None,
            };
        }

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::SelectionDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::SelectionUp);
        }

        Some(match key.bare_key {
            BareKey::Down | BareKey::Char('j') => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::SearchChar('j'),
                _ => Event::SelectionDown,
            },
            BareKey::Up | BareKey::Char('k') => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::SearchChar('k'),
                _ => Event::SelectionUp,
            },
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                _ => return None,
            },
            BareKey::Enter => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::FocusResults,
                _ => Event::ViewDetails,
            },
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Search(_) => Event::FocusSearchBar,
                _ => Event::SearchMode,
            },
            BareKey::Backspace => Event::SearchBackspace,
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('v') if self.app.input_mode == InputMode::Normal => Event::ViewDetails,
            BareKey::Char('a') if self.app.input_mode == InputMode::Normal => Event::ShowAddForm,
            BareKey::Char('d') if self.app.input_mode == InputMode::Normal => Event::PromptDelete,
            BareKey::Char('r') if self.app.input_mode == InputMode::Normal => Event::RefreshBooks,
            BareKey::Char(c) => match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Event::SearchChar(c),
                _ => return None,
            },
            _ => return None,
        })
    }

    /// Maps keys while the form section is visible.
    fn map_form_key(&self, key: &KeyWithModifier) -> Option<Event> {
        if key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]) {
            return Some(Event::FormPrevField);
        }

        Some(match key.bare_key {
            BareKey::Esc => Event::ShowBookList,
            BareKey::Enter => Event::SubmitForm,
            BareKey::Tab | BareKey::Down => Event::FormNextField,
            BareKey::Up => Event::FormPrevField,
            BareKey::Backspace => Event::FormBackspace,
            BareKey::Char(c) => Event::FormChar(c),
            _ => return None,
        })
    }

    /// Maps a completed host round-trip back to an application event.
    ///
    /// Events whose context map does not carry this plugin's request tag are
    /// ignored.
    fn map_web_request_result(
        status: u16,
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let kind = RequestKind::from_context(context)?;
        tracing::debug!(status = status, kind = ?kind, "web request completed");
        Some(Event::ApiResult {
            kind,
            response: ApiResponse {
                status,
                headers: headers.into_iter().collect(),
                body: String::from_utf8_lossy(&body).into_owned(),
            },
        })
    }

    /// Executes an action returned from event handling by translating it to
    /// Zellij API calls.
    fn execute_action(action: &Action) {
        match action {
            Action::SendRequest(request) => {
                tracing::debug!(url = %request.url, kind = ?request.kind, "sending web request");

                let verb = match request.method {
                    HttpMethod::Get => HttpVerb::Get,
                    HttpMethod::Post => HttpVerb::Post,
                    HttpMethod::Put => HttpVerb::Put,
                    HttpMethod::Delete => HttpVerb::Delete,
                };
                let headers: BTreeMap<String, String> =
                    request.headers.iter().cloned().collect();
                let body = request.body.clone().unwrap_or_default().into_bytes();

                web_request(
                    request.url.clone(),
                    verb,
                    headers,
                    body,
                    request.kind.to_context(),
                );
            }
            Action::StartToastTimer => {
                set_timeout(TOAST_SECONDS);
            }
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
        }
    }
}
