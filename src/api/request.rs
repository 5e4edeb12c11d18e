//! HTTP request and response data types for host-executed I/O.
//!
//! The plugin never performs network I/O itself: the catalog client builds
//! [`ApiRequest`] values, the shim in `main.rs` hands them to the host via
//! `web_request`, and the completed round-trip comes back as a
//! `WebRequestResult` event that the shim repackages into an [`ApiResponse`].
//! Keeping both sides as plain owned data makes every operation testable
//! without a running host.
//!
//! Each request carries a [`RequestKind`] that is serialized into the host's
//! request context map and recovered from the response event, so the event
//! handler knows which operation a response belongs to.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HTTP method for a catalog request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// Identifies the operation that issued a request.
///
/// Serialized to JSON and stored in the `web_request` context map under
/// [`RequestKind::CONTEXT_KEY`]; the same map is returned verbatim with the
/// response event, which is how responses are routed back to the right
/// handler arm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestKind {
    /// One-shot health probe issued at startup.
    CheckHealth,

    /// Collection fetch. When `show_list_when_done` is set, the list section
    /// becomes visible once this response settles (success or failure),
    /// sequencing the submit → reload → show-list chain.
    LoadBooks { show_list_when_done: bool },

    /// Fetch one record for the detail modal.
    FetchBook { id: i64 },

    /// Fetch one record to populate the edit form.
    FetchBookForEdit { id: i64 },

    /// Create a new record.
    CreateBook,

    /// Update an existing record.
    UpdateBook { id: i64 },

    /// Delete a record.
    DeleteBook { id: i64 },
}

impl RequestKind {
    /// Context map key under which the serialized kind travels.
    pub const CONTEXT_KEY: &'static str = "zlibrarian_request";

    /// Builds the context map to attach to a `web_request` call.
    ///
    /// Serialization of this enum cannot fail; the map always contains
    /// exactly one entry.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        if let Ok(encoded) = serde_json::to_string(self) {
            context.insert(Self::CONTEXT_KEY.to_string(), encoded);
        }
        context
    }

    /// Recovers the kind from a response event's context map.
    ///
    /// Returns `None` for events that did not originate from this plugin's
    /// requests (missing key) or carry an unreadable tag.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let encoded = context.get(Self::CONTEXT_KEY)?;
        match serde_json::from_str(encoded) {
            Ok(kind) => Some(kind),
            Err(e) => {
                tracing::debug!(error = %e, "failed to decode request context tag");
                None
            }
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `CatalogClient::*` methods and executed by the shim. All fields
/// are owned so the value can be queued and moved freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Operation tag propagated through the host's context map.
    pub kind: RequestKind,
}

/// An HTTP response described as plain data.
///
/// Constructed by the shim from a `WebRequestResult` event. A `status` of 0
/// denotes a transport failure reported by the host (no HTTP response was
/// received); in that case `body` holds the transport error text when the
/// host provides one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx success range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether no HTTP response was received at all.
    #[must_use]
    pub fn is_transport_failure(&self) -> bool {
        self.status == 0
    }

    /// Looks up a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether the content-type header indicates a JSON body.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .is_some_and(|value| value.contains("application/json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_context() {
        let kind = RequestKind::UpdateBook { id: 42 };
        let context = kind.to_context();
        assert_eq!(RequestKind::from_context(&context), Some(kind));
    }

    #[test]
    fn foreign_context_is_ignored() {
        let mut context = BTreeMap::new();
        context.insert("other_plugin".to_string(), "payload".to_string());
        assert_eq!(RequestKind::from_context(&context), None);

        context.insert(
            RequestKind::CONTEXT_KEY.to_string(),
            "not json".to_string(),
        );
        assert_eq!(RequestKind::from_context(&context), None);
    }

    #[test]
    fn content_type_lookup_is_case_insensitive() {
        let response = ApiResponse {
            status: 200,
            headers: vec![(
                "Content-Type".to_string(),
                "application/json; charset=utf-8".to_string(),
            )],
            body: String::new(),
        };
        assert!(response.is_json());
        assert!(response.is_success());

        let plain = ApiResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: String::new(),
        };
        assert!(!plain.is_json());
    }

    #[test]
    fn status_zero_is_a_transport_failure() {
        let response = ApiResponse {
            status: 0,
            headers: vec![],
            body: "connection refused".to_string(),
        };
        assert!(response.is_transport_failure());
        assert!(!response.is_success());
    }
}
