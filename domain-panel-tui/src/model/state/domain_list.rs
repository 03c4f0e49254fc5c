//! Domain list panel state
//!
//! The visible list itself lives in the controller (filter included);
//! this tracks the cursor and the search input.

#[derive(Debug, Default)]
pub struct DomainListState {
    /// Cursor index into the filtered list
    pub selected: usize,
    /// Whether the search prompt is capturing input
    pub search_active: bool,
    pub search_input: String,
}

impl DomainListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.selected = len - 1;
        }
    }

    /// Keeps the cursor inside the list after the list shrank
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_respects_bounds() {
        let mut state = DomainListState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);

        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);

        state.select_last(5);
        assert_eq!(state.selected, 4);
        state.select_first();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn clamp_after_shrink() {
        let mut state = DomainListState::new();
        state.selected = 4;
        state.clamp(2);
        assert_eq!(state.selected, 1);
        state.clamp(0);
        assert_eq!(state.selected, 0);
    }
}
