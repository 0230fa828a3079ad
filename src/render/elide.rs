use super::metrics::Font;

/// Marker appended to right-elided text.
pub const ELLIPSIS: char = '\u{2026}';

/// Truncates `text` from the right so that it fits within `max_width`.
///
/// Returns the text verbatim when its natural width already fits. Otherwise
/// returns the longest prefix whose width plus the ellipsis marker still fits.
/// When not even the marker alone fits, returns an empty string.
pub fn elide_right(text: &str, font: Font, max_width: i32) -> String {
    if font.measure(text) <= max_width {
        return text.to_owned();
    }

    let ellipsis_width = font.advance(ELLIPSIS);
    if ellipsis_width > max_width {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let advance = font.advance(ch);
        if used + advance + ellipsis_width > max_width {
            break;
        }
        used += advance;
        result.push(ch);
    }

    result.push(ELLIPSIS);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT: Font = Font::new(16);

    #[test]
    fn text_that_fits_is_returned_verbatim() {
        let elided = elide_right("General", FONT, 200);

        assert_eq!(elided, "General");
    }

    #[test]
    fn overflowing_text_ends_in_ellipsis() {
        // 26 glyphs at 8 px exceed 100 px.
        let elided = elide_right("abcdefghijklmnopqrstuvwxyz", FONT, 100);

        assert!(elided.ends_with(ELLIPSIS));
        assert!(FONT.measure(&elided) <= 100);
    }

    #[test]
    fn elided_text_uses_all_available_width() {
        // Budget of 100 px: ellipsis takes 8, leaving room for 11 glyphs at 8 px.
        let elided = elide_right("abcdefghijklmnopqrstuvwxyz", FONT, 100);

        assert_eq!(elided, "abcdefghijk…");
        assert_eq!(FONT.measure(&elided), 96);
    }

    #[test]
    fn wide_glyphs_consume_double_budget() {
        let elided = elide_right("文件传输助手", FONT, 50);

        // 16 px per glyph plus an 8 px marker: two glyphs fit in 50.
        assert_eq!(elided, "文件…");
    }

    #[test]
    fn width_too_narrow_for_marker_yields_empty_string() {
        assert_eq!(elide_right("hello", FONT, 4), "");
        assert_eq!(elide_right("hello", FONT, 0), "");
    }

    #[test]
    fn empty_text_stays_empty() {
        assert_eq!(elide_right("", FONT, 100), "");
    }
}
