//! Form controller for creating and editing books.
//!
//! One form serves both operations; [`FormMode`] decides whether submitting
//! builds a create or an update request. All field values are kept as text
//! buffers the way the user typed them; conversion to a wire payload happens
//! only at submit time via [`FormState::draft`].

use crate::app::modes::{FormField, FormMode};
use crate::domain::{Book, BookDraft, LibrarianError, Result};

/// State of the add/edit form: mode, field buffers, and focused field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// Create vs. edit, with the update target id carried in the mode.
    pub mode: FormMode,

    pub title: String,
    pub author: String,
    pub price: String,
    pub genre: String,
    pub published_date: String,

    /// The field currently receiving keystrokes.
    pub focus: FormField,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            author: String::new(),
            price: String::new(),
            genre: String::new(),
            published_date: String::new(),
            focus: FormField::Title,
        }
    }
}

impl FormState {
    /// Clears all fields and restores create-mode defaults and labels.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the form is in create mode (no pending edit).
    #[must_use]
    pub const fn is_create(&self) -> bool {
        matches!(self.mode, FormMode::Create)
    }

    /// Populates every field from a fetched record and switches to edit mode
    /// targeting that record's id.
    pub fn populate_for_edit(&mut self, book: &Book) {
        self.mode = FormMode::Edit(book.id);
        self.title = book.title.clone();
        self.author = book.author.clone();
        self.price = trim_price(book.price);
        self.genre = book.genre.clone();
        self.published_date = book.published_date.clone();
        self.focus = FormField::Title;
    }

    /// Heading shown above the form, following the mode.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Book",
            FormMode::Edit(_) => "Edit Book",
        }
    }

    /// Label for the submit control, following the mode.
    #[must_use]
    pub const fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Book",
            FormMode::Edit(_) => "Update Book",
        }
    }

    /// Builds the request payload from the current field buffers.
    ///
    /// # Errors
    ///
    /// Returns [`LibrarianError::InvalidPrice`] when the price buffer does
    /// not parse as a floating-point number; the form is left untouched.
    pub fn draft(&self) -> Result<BookDraft> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| LibrarianError::InvalidPrice(self.price.clone()))?;
        Ok(BookDraft {
            title: self.title.clone(),
            author: self.author.clone(),
            price,
            genre: self.genre.clone(),
            published_date: self.published_date.clone(),
        })
    }

    /// Appends a character to the focused field.
    pub fn push_char(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    /// Removes the last character from the focused field.
    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    /// Moves focus to the next field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field, wrapping.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Read access to a field's buffer, for rendering.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Author => &self.author,
            FormField::Price => &self.price,
            FormField::Genre => &self.genre,
            FormField::PublishedDate => &self.published_date,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Price => &mut self.price,
            FormField::Genre => &mut self.genre,
            FormField::PublishedDate => &mut self.published_date,
        }
    }
}

/// Renders a price into the edit buffer without trailing noise: whole values
/// drop the fraction entirely, matching how a user would have typed them.
fn trim_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        price.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book {
            id: 4,
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            genre: "Fiction".to_string(),
            price: 11.99,
            published_date: "1925-04-10".to_string(),
        }
    }

    #[test]
    fn defaults_to_create_mode_with_create_labels() {
        let form = FormState::default();
        assert!(form.is_create());
        assert_eq!(form.heading(), "Add New Book");
        assert_eq!(form.submit_label(), "Add Book");
    }

    #[test]
    fn populate_switches_to_edit_mode_and_fills_fields() {
        let mut form = FormState::default();
        form.populate_for_edit(&sample_book());

        assert_eq!(form.mode, FormMode::Edit(4));
        assert_eq!(form.title, "The Great Gatsby");
        assert_eq!(form.price, "11.99");
        assert_eq!(form.published_date, "1925-04-10");
        assert_eq!(form.heading(), "Edit Book");
        assert_eq!(form.submit_label(), "Update Book");
    }

    #[test]
    fn reset_restores_create_defaults() {
        let mut form = FormState::default();
        form.populate_for_edit(&sample_book());
        form.reset();

        assert_eq!(form, FormState::default());
        assert!(form.is_create());
    }

    #[test]
    fn draft_parses_price_as_float() {
        let mut form = FormState::default();
        form.title = "1984".to_string();
        form.author = "George Orwell".to_string();
        form.price = " 13.99 ".to_string();
        form.genre = "Dystopian".to_string();
        form.published_date = "1949-06-08".to_string();

        let draft = form.draft().unwrap();
        assert!((draft.price - 13.99).abs() < f64::EPSILON);
        assert_eq!(draft.title, "1984");
    }

    #[test]
    fn draft_rejects_unparseable_price() {
        let mut form = FormState::default();
        form.price = "cheap".to_string();

        let err = form.draft().unwrap_err();
        assert!(matches!(err, LibrarianError::InvalidPrice(_)));
        assert_eq!(err.to_string(), "Price must be a number, got 'cheap'");
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = FormState::default();
        form.push_char('a');
        form.focus_next();
        form.push_char('b');
        assert_eq!(form.title, "a");
        assert_eq!(form.author, "b");

        form.backspace();
        assert_eq!(form.author, "");

        form.focus_prev();
        assert_eq!(form.focus, FormField::Title);
    }

    #[test]
    fn whole_prices_populate_without_fraction() {
        let mut book = sample_book();
        book.price = 15.0;
        let mut form = FormState::default();
        form.populate_for_edit(&book);
        assert_eq!(form.price, "15");
    }
}
