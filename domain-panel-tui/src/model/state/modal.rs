//! UI-owned modal state
//!
//! The record editor form itself lives in the controller; this holds the
//! field focus for it plus the modals that never touch the API layer.

/// Modals owned entirely by the UI
#[derive(Debug, Clone)]
pub enum UiModal {
    /// Delete guard for the selected DNS record
    ConfirmDelete {
        record_id: u64,
        /// Which button is highlighted; delete only fires when true
        delete_selected: bool,
    },
}

#[derive(Debug, Default)]
pub struct ModalState {
    pub active: Option<UiModal>,
    /// Focused field index inside the record editor
    pub record_field: usize,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_confirm_delete(&mut self, record_id: u64) {
        self.active = Some(UiModal::ConfirmDelete {
            record_id,
            delete_selected: false,
        });
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}
