//! Actions representing side effects to be executed by the plugin runtime.
//!
//! This module defines the [`Action`] type, which represents imperative
//! commands produced by the event handler after processing user input or
//! response events. Actions bridge pure state transformations and effectful
//! operations like host HTTP execution and timer scheduling.
//!
//! The event handler returns a `Vec<Action>` after processing each event;
//! the shim in `main.rs` executes them in sequence.

use crate::api::ApiRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Executes an HTTP request through the host's `web_request` facility.
    ///
    /// The request's `kind` is serialized into the call's context map so the
    /// eventual `WebRequestResult` event can be routed back to the issuing
    /// operation.
    SendRequest(ApiRequest),

    /// Schedules the toast auto-hide timeout.
    ///
    /// Emitted alongside every toast; the expiry only clears the toast when
    /// no newer toast has restarted the clock.
    StartToastTimer,

    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,
}
