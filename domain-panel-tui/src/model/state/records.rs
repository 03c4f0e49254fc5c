//! DNS records tab state

#[derive(Debug, Default)]
pub struct RecordsState {
    /// Cursor index into the controller's record list
    pub selected: usize,
}

impl RecordsState {
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

    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
