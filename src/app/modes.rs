//! Section and input mode state types for the application.
//!
//! This module defines the state machine enums that control which top-level
//! section is visible, how keyboard input is interpreted, and whether the
//! form creates a new record or updates an existing one.
//!
//! # State machine
//!
//! Exactly one [`Section`] is visible at a time. Within the list section,
//! the [`InputMode`] decides keybinding interpretation:
//! - **Normal**: navigation and commands
//! - **Search**: incremental filtering, with typing or result-navigation focus
//! - **`ConfirmDelete`**: a pending delete that needs explicit confirmation
//!
//! The form's create/update behavior is carried by [`FormMode`] as an
//! explicit tagged state rather than a sentinel field value.

/// Top-level UI section; exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The book list with search and per-record actions.
    BookList,

    /// The add/edit form.
    BookForm,
}

/// Focus state within search mode.
///
/// Determines whether search input is being typed or filtered results are
/// being navigated. Controls which keybindings are active during search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is navigating through filtered results.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),

    /// A delete is pending confirmation for the given record id.
    ///
    /// `y` confirms and issues the request; any other key cancels silently
    /// with zero network activity.
    ConfirmDelete {
        /// Id of the record that would be deleted.
        id: i64,
    },
}

/// Whether the form creates a new record or updates an existing one.
///
/// The update target id is part of the state itself, so the distinction can
/// never drift out of sync with a separately stored selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting creates a new record (POST to the collection).
    Create,

    /// Submitting updates the identified record (PUT to its path).
    Edit(i64),
}

/// The editable fields of the book form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Price,
    Genre,
    PublishedDate,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Author,
        Self::Price,
        Self::Genre,
        Self::PublishedDate,
    ];

    /// Display label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Price => "Price",
            Self::Genre => "Genre",
            Self::PublishedDate => "Published Date",
        }
    }

    /// The field after this one, wrapping to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Price,
            Self::Price => Self::Genre,
            Self::Genre => Self::PublishedDate,
            Self::PublishedDate => Self::Title,
        }
    }

    /// The field before this one, wrapping to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::PublishedDate,
            Self::Author => Self::Title,
            Self::Price => Self::Author,
            Self::Genre => Self::Price,
            Self::PublishedDate => Self::Genre,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle_visits_every_field_once() {
        let mut field = FormField::Title;
        for expected in FormField::ALL {
            assert_eq!(field, expected);
            field = field.next();
        }
        assert_eq!(field, FormField::Title);
    }

    #[test]
    fn prev_inverts_next() {
        for field in FormField::ALL {
            assert_eq!(field.next().prev(), field);
        }
    }
}
