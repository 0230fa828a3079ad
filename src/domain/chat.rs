use crate::render::color::Rgb;

/// One conversation entry in the chat list.
///
/// Constructed once when the entry is added to the backing store and
/// read-only afterwards. The timestamp is a pre-formatted display string;
/// the renderer never elides it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRow {
    pub name: String,
    pub last_message: String,
    pub timestamp: String,
    pub avatar_color: Rgb,
    /// Unread-message count; values at or below zero draw no badge.
    pub unread_count: i32,
}

impl ChatRow {
    pub fn new(
        name: impl Into<String>,
        last_message: impl Into<String>,
        timestamp: impl Into<String>,
        avatar_color: Rgb,
        unread_count: i32,
    ) -> Self {
        Self {
            name: name.into(),
            last_message: last_message.into(),
            timestamp: timestamp.into(),
            avatar_color,
            unread_count,
        }
    }
}
