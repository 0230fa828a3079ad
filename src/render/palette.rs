//! Fixed colors used by the row renderer.

use super::color::Rgb;

// =============================================================================
// Row backgrounds
// =============================================================================

/// Background for an unselected, unhovered row.
pub fn base_background() -> Rgb {
    Rgb::new(255, 255, 255)
}

/// Background while the pointer hovers over the row.
pub fn hover_background() -> Rgb {
    Rgb::new(220, 220, 220)
}

/// Background for the selected row. Overrides hover.
pub fn selected_background() -> Rgb {
    Rgb::new(195, 195, 195)
}

// =============================================================================
// Text and chrome
// =============================================================================

/// Color for the chat name (near-black).
pub fn name_color() -> Rgb {
    Rgb::new(25, 25, 25)
}

/// Color for the timestamp column (light gray).
pub fn timestamp_color() -> Rgb {
    Rgb::new(180, 180, 180)
}

/// Color for the last-message preview (mid gray).
pub fn preview_color() -> Rgb {
    Rgb::new(150, 150, 150)
}

/// Color for the separator line at the row's bottom edge.
pub fn separator_color() -> Rgb {
    Rgb::new(230, 230, 230)
}

/// Fill for the unread-count badge.
pub fn badge_background() -> Rgb {
    Rgb::new(255, 0, 0)
}

/// Digit color inside the unread-count badge.
pub fn badge_text_color() -> Rgb {
    Rgb::new(255, 255, 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_background_is_white() {
        assert_eq!(base_background(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn selected_background_is_darker_than_hover() {
        assert!(selected_background().r < hover_background().r);
    }

    #[test]
    fn badge_is_red_with_white_digits() {
        assert_eq!(badge_background(), Rgb::new(255, 0, 0));
        assert_eq!(badge_text_color(), Rgb::new(255, 255, 255));
    }
}
