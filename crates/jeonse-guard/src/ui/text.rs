use ratatui::text::Span;

/// Terminal columns taken by `text`; Hangul counts as two.
pub(super) fn display_width(text: &str) -> usize {
    Span::raw(text).width()
}

/// Longest suffix of `text` that fits in `width` columns, so the end of a
/// long address stays visible next to the cursor.
pub(super) fn tail_to_width(text: &str, width: usize) -> &str {
    if display_width(text) <= width {
        return text;
    }
    for (idx, _) in text.char_indices() {
        let tail = &text[idx..];
        if display_width(tail) <= width {
            return tail;
        }
    }
    ""
}
