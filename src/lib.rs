//! zlibrarian: a Zellij plugin for managing a book catalog over its REST API.
//!
//! zlibrarian is a terminal pane that provides:
//! - A browsable, searchable view of the catalog's book records
//! - Create, edit, and delete flows with explicit delete confirmation
//! - A one-shot connection probe reflected in the header
//! - Transient toast notifications for operation outcomes
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │
//! ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │
//! │ (ui/)         │   │ (api/)        │
//! │ - Rendering   │   │ - Requests    │
//! │ - Theming     │   │ - Parsing     │
//! │ - Components  │   │ - Routing tag │
//! └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Book model (domain/book)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # I/O model
//!
//! All HTTP runs through the host: the event handler emits
//! [`app::Action::SendRequest`] values, the shim executes them with Zellij's
//! `web_request`, and completed round-trips come back as events carrying a
//! serialized [`api::RequestKind`] tag. The plugin stays single-threaded and
//! responsive while requests are outstanding; dependent steps within one
//! user action are sequenced by chaining through response events.
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zlibrarian.wasm" {
//!         base_url "http://localhost:8080"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`api`]: Catalog request building and response parsing
//! - [`domain`]: Core domain types (Book, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use api::{ApiRequest, ApiResponse, CatalogClient, RequestKind};
pub use app::{handle_event, Action, AppState, Event, FormMode, InputMode, SearchFocus, Section};
pub use domain::{Book, LibrarianError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default backend location when no `base_url` is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zlibrarian.wasm" {
///     base_url "http://localhost:8080"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the catalog backend.
    ///
    /// The collection lives at `{base_url}/books` and the health endpoint at
    /// `{base_url}/health`. Default: `http://localhost:8080`
    pub base_url: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts typed values with
    /// fallback defaults; a blank `base_url` falls back to the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zlibrarian::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("base_url".to_string(), "http://localhost:9000/api".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.base_url, "http://localhost:9000/api");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let base_url = config
            .get("base_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin with configuration.
///
/// Resolves the theme (custom file first, then built-in name, then default)
/// and creates an `AppState` bound to the configured backend. The book list
/// stays empty until the startup load completes.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, "initializing zlibrarian plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(CatalogClient::new(&config.base_url), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_apply_when_map_is_empty() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.theme_name.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn blank_base_url_falls_back_to_default() {
        let mut map = BTreeMap::new();
        map.insert("base_url".to_string(), "   ".to_string());
        assert_eq!(Config::from_zellij(&map).base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn initialize_binds_the_configured_backend() {
        let config = Config {
            base_url: "http://books.internal:8080/".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.client.base_url(), "http://books.internal:8080");
        assert!(state.books.is_empty());
    }
}
