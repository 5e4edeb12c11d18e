//! Book table component renderer.
//!
//! Renders the book list as a five-column table (TITLE, AUTHOR, GENRE,
//! PUBLISHED, PRICE) with selection highlighting. Every cell arrives
//! pre-sanitized from the view model; this module only lays it out.

use crate::ui::helpers::{position_cursor, truncate_with_ellipsis};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BookRow;

const TITLE_WIDTH: usize = 24;
const AUTHOR_WIDTH: usize = 18;
const GENRE_WIDTH: usize = 10;
const PUBLISHED_WIDTH: usize = 16;
const PRICE_WIDTH: usize = 8;

/// Renders the table column headers at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<tw$} {:<aw$} {:<gw$} {:<pw$} {:>prw$}",
        "TITLE",
        "AUTHOR",
        "GENRE",
        "PUBLISHED",
        "PRICE",
        tw = TITLE_WIDTH,
        aw = AUTHOR_WIDTH,
        gw = GENRE_WIDTH,
        pw = PUBLISHED_WIDTH,
        prw = PRICE_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all book rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(row: usize, items: &[BookRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single book row.
///
/// Selection takes the full-width selection background; otherwise the price
/// column gets its own accent color. The row is padded to the terminal width
/// so selection backgrounds render consistently.
fn render_table_row(row: usize, item: &BookRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let title = truncate_with_ellipsis(&item.title, TITLE_WIDTH);
    let author = truncate_with_ellipsis(&item.author, AUTHOR_WIDTH);
    let genre = truncate_with_ellipsis(&item.genre, GENRE_WIDTH);
    let published = truncate_with_ellipsis(&item.published, PUBLISHED_WIDTH);

    print!(
        "{:<tw$} {:<aw$} {:<gw$} {:<pw$} ",
        title,
        author,
        genre,
        published,
        tw = TITLE_WIDTH,
        aw = AUTHOR_WIDTH,
        gw = GENRE_WIDTH,
        pw = PUBLISHED_WIDTH,
    );

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{:>prw$}", item.price, prw = PRICE_WIDTH);

    let line_len = TITLE_WIDTH + AUTHOR_WIDTH + GENRE_WIDTH + PUBLISHED_WIDTH + PRICE_WIDTH + 4;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
