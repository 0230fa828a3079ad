use super::chat::ChatRow;
use crate::render::row::ROW_HEIGHT;

/// Backing store and per-frame container state for the chat list.
///
/// The store is append-only: rows are pushed once and never removed or
/// updated. Selection, hover, and scroll are container state recomputed
/// between repaint passes; they never touch the rows themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatListState {
    rows: Vec<ChatRow>,
    selected_index: Option<usize>,
    hovered_index: Option<usize>,
    scroll_offset: i32,
}

impl ChatListState {
    pub fn rows(&self) -> &[ChatRow] {
        &self.rows
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.hovered_index
    }

    /// Scroll offset in pixels from the top of the list.
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    pub fn push(&mut self, row: ChatRow) {
        self.rows.push(row);
    }

    /// Selects the given row; out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected_index = index.filter(|&i| i < self.rows.len());
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            self.selected_index = if self.rows.is_empty() { None } else { Some(0) };
            return;
        };

        let last_index = self.rows.len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }

    /// Marks the row under the pointer; out-of-range indices clear it.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered_index = index.filter(|&i| i < self.rows.len());
    }

    /// Scrolls to a pixel offset, clamped so at least one row stays in view.
    pub fn scroll_to(&mut self, offset: i32) {
        let content_height = self.rows.len() as i32 * ROW_HEIGHT;
        self.scroll_offset = offset.clamp(0, content_height.saturating_sub(ROW_HEIGHT).max(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::color::Rgb;

    fn row(name: &str) -> ChatRow {
        ChatRow::new(name, "Hello", "10:00", Rgb::new(100, 100, 100), 0)
    }

    #[test]
    fn default_state_is_empty_without_selection() {
        let state = ChatListState::default();

        assert!(state.rows().is_empty());
        assert_eq!(state.selected_index(), None);
        assert_eq!(state.hovered_index(), None);
        assert_eq!(state.scroll_offset(), 0);
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut state = ChatListState::default();
        state.push(row("General"));
        state.push(row("Backend"));

        let names: Vec<&str> = state.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["General", "Backend"]);
    }

    #[test]
    fn select_rejects_out_of_range_index() {
        let mut state = ChatListState::default();
        state.push(row("General"));

        state.select(Some(5));

        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn selection_moves_within_bounds() {
        let mut state = ChatListState::default();
        state.push(row("General"));
        state.push(row("Backend"));

        state.select(Some(0));
        state.select_next();
        state.select_next();
        state.select_previous();

        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn select_next_starts_at_first_row_when_nothing_selected() {
        let mut state = ChatListState::default();
        state.push(row("General"));

        state.select_next();

        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn select_next_on_empty_list_stays_unselected() {
        let mut state = ChatListState::default();

        state.select_next();

        assert_eq!(state.selected_index(), None);
    }

    #[test]
    fn hover_rejects_out_of_range_index() {
        let mut state = ChatListState::default();
        state.push(row("General"));

        state.set_hovered(Some(0));
        assert_eq!(state.hovered_index(), Some(0));

        state.set_hovered(Some(9));
        assert_eq!(state.hovered_index(), None);
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        let mut state = ChatListState::default();
        for i in 0..3 {
            state.push(row(&format!("Chat {i}")));
        }

        state.scroll_to(-50);
        assert_eq!(state.scroll_offset(), 0);

        state.scroll_to(10_000);
        assert_eq!(state.scroll_offset(), 2 * ROW_HEIGHT);
    }

    #[test]
    fn scroll_on_empty_list_stays_at_origin() {
        let mut state = ChatListState::default();

        state.scroll_to(500);

        assert_eq!(state.scroll_offset(), 0);
    }
}
