//! Deterministic text measurement.
//!
//! The renderer needs per-character advance widths to elide text and to
//! right-align the timestamp, but it must stay independent of any real font
//! rasterizer. The model used here: a glyph advances half an em per terminal
//! cell of display width, so at 16 px a Latin glyph advances 8 px and a
//! double-width CJK glyph advances 16 px. Zero-width characters advance 0.

use unicode_width::UnicodeWidthChar;

/// A fixed-size font with advance-based measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    px: i32,
}

impl Font {
    pub const fn new(px: i32) -> Self {
        Self { px }
    }

    pub fn px(&self) -> i32 {
        self.px
    }

    /// Horizontal advance of a single character.
    pub fn advance(&self, ch: char) -> i32 {
        let cells = ch.width().unwrap_or(0) as i32;
        cells * self.px / 2
    }

    /// Natural width of a string: sum of its character advances.
    pub fn measure(&self, text: &str) -> i32 {
        text.chars().map(|ch| self.advance(ch)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_glyph_advances_half_an_em() {
        let font = Font::new(16);

        assert_eq!(font.advance('a'), 8);
        assert_eq!(font.advance('0'), 8);
    }

    #[test]
    fn cjk_glyph_advances_a_full_em() {
        let font = Font::new(16);

        assert_eq!(font.advance('文'), 16);
    }

    #[test]
    fn control_characters_advance_zero() {
        let font = Font::new(16);

        assert_eq!(font.advance('\u{200B}'), 0);
    }

    #[test]
    fn measure_sums_mixed_width_text() {
        let font = Font::new(12);

        // "17:52" is five single-cell glyphs at 6 px each.
        assert_eq!(font.measure("17:52"), 30);
        // Two CJK glyphs and one Latin glyph.
        assert_eq!(font.measure("文件a"), 12 + 12 + 6);
    }

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(Font::new(14).measure(""), 0);
    }
}
