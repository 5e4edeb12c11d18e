//! Book domain model and display formatting.
//!
//! This module defines the core `Book` type mirroring the catalog backend's
//! wire representation, plus the `BookDraft` payload used for create and
//! update requests. Display helpers format the price to two decimals and the
//! publish date into long form for rendering.

use serde::{Deserialize, Serialize};

/// A book record as returned by the catalog API.
///
/// The `id` is assigned by the server; the client never generates one. Field
/// names follow the backend's camelCase JSON (`publishedDate` on the wire).
///
/// # Examples
///
/// ```
/// use zlibrarian::domain::Book;
///
/// let book: Book = serde_json::from_str(
///     r#"{"id":1,"title":"1984","author":"George Orwell","genre":"Dystopian",
///         "price":13.99,"publishedDate":"1949-06-08"}"#,
/// ).unwrap();
/// assert_eq!(book.price_display(), "$13.99");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub published_date: String,
}

impl Book {
    /// Formats the price for display with a currency symbol and two decimals.
    #[must_use]
    pub fn price_display(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Formats the publish date for display in long form.
    ///
    /// See [`format_published`] for the formatting rules.
    #[must_use]
    pub fn published_display(&self) -> String {
        format_published(&self.published_date)
    }
}

/// Request payload for creating or updating a book.
///
/// Carries the four editable fields plus the publish date; the id is never
/// part of the body (it travels in the URL path for updates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub price: f64,
    pub genre: String,
    pub published_date: String,
}

/// Formats an ISO date string (`YYYY-MM-DD`) into long form, e.g.
/// `"1960-07-11"` becomes `"July 11, 1960"`.
///
/// An unparseable value is returned unchanged; date display is cosmetic and
/// must never fail an otherwise valid record.
#[must_use]
pub fn format_published(iso: &str) -> String {
    chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d").map_or_else(
        |_| iso.to_string(),
        |date| date.format("%B %-d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Book {
        Book {
            id: 1,
            title: "To Kill a Mockingbird".to_string(),
            author: "Harper Lee".to_string(),
            genre: "Fiction".to_string(),
            price: 12.99,
            published_date: "1960-07-11".to_string(),
        }
    }

    #[test]
    fn price_displays_two_decimals() {
        let mut book = sample();
        book.price = 9.5;
        assert_eq!(book.price_display(), "$9.50");
    }

    #[test]
    fn published_displays_long_form() {
        assert_eq!(sample().published_display(), "July 11, 1960");
        assert_eq!(format_published("2020-01-01"), "January 1, 2020");
    }

    #[test]
    fn unparseable_date_passes_through() {
        assert_eq!(format_published("not-a-date"), "not-a-date");
    }

    #[test]
    fn book_round_trips_camel_case_wire_format() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["publishedDate"], "1960-07-11");
        assert!(json.get("published_date").is_none());

        let back: Book = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }

    #[test]
    fn draft_never_carries_an_id() {
        let draft = BookDraft {
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            price: 13.99,
            genre: "Dystopian".to_string(),
            published_date: "1949-06-08".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["publishedDate"], "1949-06-08");
    }
}
