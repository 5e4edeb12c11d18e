//! Shared rendering utilities and helpers.
//!
//! This module provides low-level utilities used across multiple UI
//! components: cursor positioning, record-content sanitization, and
//! character-safe truncation.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Sanitizes record content before it reaches the terminal.
///
/// Book fields come from the backend verbatim, and the rendering target is
/// raw ANSI output, so the injection vector to guard against is control
/// characters: an ESC byte inside a title could recolor, reposition, or
/// clear the rest of the screen. Every control character (including tabs and
/// newlines) is replaced with a space; all printable characters, `&<>"'`
/// included, pass through unchanged.
#[must_use]
pub fn sanitize_text(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Truncates text to `max` characters, appending `...` when shortened.
///
/// Operates on characters rather than bytes so multibyte content can never
/// split a code point.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Prints a horizontally centered, width-padded line in the given color.
///
/// Padding is split evenly on both sides; if the width cannot divide evenly,
/// left padding is slightly larger. Text longer than the width is truncated.
pub fn print_centered_line(row: usize, text: &str, color: &str, cols: usize) {
    let text_len = text.chars().count().min(cols);
    let shown = truncate_with_ellipsis(text, cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{shown}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_specials_round_trip_unchanged() {
        let original = r#"A & B <i>"quoted"</i> 'x'"#;
        assert_eq!(sanitize_text(original), original);
    }

    #[test]
    fn control_characters_cannot_reach_the_terminal() {
        assert_eq!(sanitize_text("red\u{1b}[31malert"), "red [31malert");
        assert_eq!(sanitize_text("a\tb\nc"), "a b c");
    }

    #[test]
    fn truncation_is_character_safe() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("a very long title", 10), "a very ...");
        // Multibyte content must not split a code point.
        assert_eq!(truncate_with_ellipsis("éééééééééé", 8), "ééééé...");
    }
}
