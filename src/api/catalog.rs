//! Stateless request builder and response parser for the book catalog API.
//!
//! `CatalogClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a builder that produces an
//! [`ApiRequest`] and a parser that consumes an [`ApiResponse`]; the shim
//! executes the actual HTTP round-trip in between. This keeps the client
//! deterministic, free of I/O dependencies, and testable without a backend.
//!
//! # Success body rules
//!
//! Create and update treat any 2xx as success; a response body is only
//! parsed when the status is not 204 and the content-type indicates JSON,
//! and an unparseable success body is ignored rather than failing the
//! operation. Failed responses are mined for the most specific message
//! available (structured JSON body first, raw text second).

use crate::api::request::{ApiRequest, ApiResponse, HttpMethod, RequestKind};
use crate::domain::{Book, BookDraft, LibrarianError, Result};

/// Synchronous, stateless client for the catalog API.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
}

impl CatalogClient {
    /// Creates a client for the given base URL; a trailing slash is stripped
    /// so path joining stays uniform.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL (without trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the one-shot startup health probe: GET `{base}/health`.
    #[must_use]
    pub fn check_health(&self) -> ApiRequest {
        ApiRequest {
            method: HttpMethod::Get,
            url: format!("{}/health", self.base_url),
            headers: Vec::new(),
            body: None,
            kind: RequestKind::CheckHealth,
        }
    }

    /// Builds the collection fetch: GET `{base}/books`.
    ///
    /// `show_list_when_done` sequences the post-submit flow: the list section
    /// becomes visible only once this reload settles.
    #[must_use]
    pub fn list_books(&self, show_list_when_done: bool) -> ApiRequest {
        ApiRequest {
            method: HttpMethod::Get,
            url: format!("{}/books", self.base_url),
            headers: Vec::new(),
            body: None,
            kind: RequestKind::LoadBooks { show_list_when_done },
        }
    }

    /// Builds a single-record fetch for the detail modal: GET `{base}/books/{id}`.
    #[must_use]
    pub fn get_book(&self, id: i64) -> ApiRequest {
        ApiRequest {
            method: HttpMethod::Get,
            url: format!("{}/books/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
            kind: RequestKind::FetchBook { id },
        }
    }

    /// Builds a single-record fetch that will populate the edit form.
    #[must_use]
    pub fn get_book_for_edit(&self, id: i64) -> ApiRequest {
        ApiRequest {
            method: HttpMethod::Get,
            url: format!("{}/books/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
            kind: RequestKind::FetchBookForEdit { id },
        }
    }

    /// Builds a create request: POST `{base}/books` with a JSON draft body.
    ///
    /// # Errors
    ///
    /// Returns [`LibrarianError::Serialization`] if the draft cannot be
    /// encoded as JSON.
    pub fn create_book(&self, draft: &BookDraft) -> Result<ApiRequest> {
        let body = serde_json::to_string(draft)
            .map_err(|e| LibrarianError::Serialization(e.to_string()))?;
        Ok(ApiRequest {
            method: HttpMethod::Post,
            url: format!("{}/books", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            kind: RequestKind::CreateBook,
        })
    }

    /// Builds an update request: PUT `{base}/books/{id}` with a JSON draft
    /// body. The id travels only in the path, never in the body.
    ///
    /// # Errors
    ///
    /// Returns [`LibrarianError::Serialization`] if the draft cannot be
    /// encoded as JSON.
    pub fn update_book(&self, id: i64, draft: &BookDraft) -> Result<ApiRequest> {
        let body = serde_json::to_string(draft)
            .map_err(|e| LibrarianError::Serialization(e.to_string()))?;
        Ok(ApiRequest {
            method: HttpMethod::Put,
            url: format!("{}/books/{id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
            kind: RequestKind::UpdateBook { id },
        })
    }

    /// Builds a delete request: DELETE `{base}/books/{id}`.
    #[must_use]
    pub fn delete_book(&self, id: i64) -> ApiRequest {
        ApiRequest {
            method: HttpMethod::Delete,
            url: format!("{}/books/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
            kind: RequestKind::DeleteBook { id },
        }
    }

    /// Parses a collection response into a list of books.
    ///
    /// # Errors
    ///
    /// Transport failure, non-2xx status, or an unparseable body.
    pub fn parse_book_list(response: &ApiResponse) -> Result<Vec<Book>> {
        ensure_success(response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| LibrarianError::Deserialization(e.to_string()))
    }

    /// Parses a single-record response.
    ///
    /// # Errors
    ///
    /// Transport failure, non-2xx status, or an unparseable body.
    pub fn parse_book(response: &ApiResponse) -> Result<Book> {
        ensure_success(response)?;
        serde_json::from_str(&response.body)
            .map_err(|e| LibrarianError::Deserialization(e.to_string()))
    }

    /// Parses a create/update response.
    ///
    /// Any 2xx is success. The saved record is returned when the server sent
    /// one (status not 204, JSON content-type, parseable body); otherwise
    /// `None`. A malformed success body is logged and ignored.
    ///
    /// # Errors
    ///
    /// Transport failure or non-2xx status, with the most specific message
    /// the response body offers.
    pub fn parse_mutation(response: &ApiResponse) -> Result<Option<Book>> {
        ensure_success(response)?;
        if response.status == 204 || !response.is_json() || response.body.is_empty() {
            return Ok(None);
        }
        match serde_json::from_str(&response.body) {
            Ok(book) => Ok(Some(book)),
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unparseable success body");
                Ok(None)
            }
        }
    }

    /// Parses a delete response. Any 2xx is success; the body is ignored.
    ///
    /// # Errors
    ///
    /// Transport failure or non-2xx status.
    pub fn parse_deletion(response: &ApiResponse) -> Result<()> {
        ensure_success(response)
    }
}

/// Maps a non-success response to the appropriate error variant.
///
/// Failed responses are mined for the most specific message available: a
/// JSON error body is re-serialized compactly, any other non-empty body is
/// used verbatim.
fn ensure_success(response: &ApiResponse) -> Result<()> {
    if response.is_transport_failure() {
        let detail = if response.body.trim().is_empty() {
            "no response received".to_string()
        } else {
            response.body.trim().to_string()
        };
        return Err(LibrarianError::Transport(detail));
    }
    if response.is_success() {
        return Ok(());
    }
    Err(LibrarianError::Api {
        status: response.status,
        message: extract_error_message(response),
    })
}

/// Pulls the most specific error message out of a failed response body.
fn extract_error_message(response: &ApiResponse) -> String {
    if response.is_json() {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&response.body) {
            return value.to_string();
        }
    }
    response.body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CatalogClient {
        CatalogClient::new("http://localhost:8080")
    }

    fn draft() -> BookDraft {
        BookDraft {
            title: "Pride and Prejudice".to_string(),
            author: "Jane Austen".to_string(),
            price: 10.99,
            genre: "Romance".to_string(),
            published_date: "1813-01-28".to_string(),
        }
    }

    fn json_response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn health_probe_targets_health_endpoint() {
        let req = client().check_health();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/health");
        assert_eq!(req.kind, RequestKind::CheckHealth);
        assert!(req.body.is_none());
    }

    #[test]
    fn list_books_targets_collection() {
        let req = client().list_books(false);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:8080/books");
        assert_eq!(
            req.kind,
            RequestKind::LoadBooks {
                show_list_when_done: false
            }
        );
    }

    #[test]
    fn get_book_targets_record_path() {
        let req = client().get_book(7);
        assert_eq!(req.url, "http://localhost:8080/books/7");
        assert_eq!(req.kind, RequestKind::FetchBook { id: 7 });
    }

    #[test]
    fn create_posts_draft_without_id() {
        let req = client().create_book(&draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:8080/books");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );

        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Pride and Prejudice");
        assert_eq!(body["publishedDate"], "1813-01-28");
        assert!(body.get("id").is_none());
    }

    #[test]
    fn update_puts_to_record_path() {
        let req = client().update_book(3, &draft()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:8080/books/3");
        assert_eq!(req.kind, RequestKind::UpdateBook { id: 3 });

        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert!(body.get("id").is_none());
    }

    #[test]
    fn delete_targets_record_path_without_body() {
        let req = client().delete_book(9);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:8080/books/9");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = CatalogClient::new("http://localhost:8080/");
        assert_eq!(client.list_books(false).url, "http://localhost:8080/books");
    }

    #[test]
    fn parse_book_list_success() {
        let response = json_response(
            200,
            r#"[{"id":1,"title":"A & B","author":"X","genre":"Fi","price":9.5,"publishedDate":"2020-01-01"}]"#,
        );
        let books = CatalogClient::parse_book_list(&response).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "A & B");
        assert_eq!(books[0].price_display(), "$9.50");
    }

    #[test]
    fn parse_book_list_rejects_malformed_body() {
        let response = json_response(200, "not json");
        let err = CatalogClient::parse_book_list(&response).unwrap_err();
        assert!(matches!(err, LibrarianError::Deserialization(_)));
    }

    #[test]
    fn parse_book_list_rejects_server_error() {
        let response = json_response(500, r#"{"error":"boom"}"#);
        let err = CatalogClient::parse_book_list(&response).unwrap_err();
        match err {
            LibrarianError::Api { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("boom"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_mutation_returns_saved_record() {
        let response = json_response(
            201,
            r#"{"id":5,"title":"New","author":"A","genre":"G","price":1.0,"publishedDate":"2021-02-03"}"#,
        );
        let saved = CatalogClient::parse_mutation(&response).unwrap();
        assert_eq!(saved.unwrap().id, 5);
    }

    #[test]
    fn parse_mutation_treats_no_content_as_success() {
        let response = ApiResponse {
            status: 204,
            headers: vec![],
            body: String::new(),
        };
        assert_eq!(CatalogClient::parse_mutation(&response).unwrap(), None);
    }

    #[test]
    fn parse_mutation_ignores_non_json_success_body() {
        let response = ApiResponse {
            status: 200,
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: "saved".to_string(),
        };
        assert_eq!(CatalogClient::parse_mutation(&response).unwrap(), None);
    }

    #[test]
    fn parse_mutation_ignores_malformed_success_body() {
        let response = json_response(200, "{broken");
        assert_eq!(CatalogClient::parse_mutation(&response).unwrap(), None);
    }

    #[test]
    fn parse_mutation_extracts_structured_error_body() {
        let response = json_response(400, r#"{"field":"price","message":"must be positive"}"#);
        let err = CatalogClient::parse_mutation(&response).unwrap_err();
        match err {
            LibrarianError::Api { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("must be positive"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_mutation_uses_plain_text_error_body() {
        let response = ApiResponse {
            status: 500,
            headers: vec![("content-type".to_string(), "text/plain".to_string())],
            body: "internal error\n".to_string(),
        };
        let err = CatalogClient::parse_mutation(&response).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: internal error");
    }

    #[test]
    fn transport_failure_maps_to_transport_error() {
        let response = ApiResponse {
            status: 0,
            headers: vec![],
            body: "connection refused".to_string(),
        };
        let err = CatalogClient::parse_deletion(&response).unwrap_err();
        assert!(matches!(err, LibrarianError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn parse_deletion_accepts_any_success_status() {
        for status in [200, 204] {
            let response = ApiResponse {
                status,
                headers: vec![],
                body: String::new(),
            };
            assert!(CatalogClient::parse_deletion(&response).is_ok());
        }
    }
}
