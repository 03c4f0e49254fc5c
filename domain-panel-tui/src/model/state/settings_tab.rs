//! Settings tab state

/// Rows on the settings tab, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsItem {
    TransferLock,
    AutoRenewal,
    RenewalDays,
}

impl SettingsItem {
    pub const ALL: [Self; 3] = [Self::TransferLock, Self::AutoRenewal, Self::RenewalDays];

    pub fn label(self) -> &'static str {
        match self {
            Self::TransferLock => "Transfer lock",
            Self::AutoRenewal => "Auto-renewal",
            Self::RenewalDays => "Renewal lead time (days)",
        }
    }
}

#[derive(Debug)]
pub struct SettingsTabState {
    pub selected: usize,
    /// Raw day-count input; defaulting happens at submit
    pub days_input: String,
}

impl Default for SettingsTabState {
    fn default() -> Self {
        Self {
            selected: 0,
            days_input: String::new(),
        }
    }
}

impl SettingsTabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_item(&self) -> SettingsItem {
        SettingsItem::ALL[self.selected.min(SettingsItem::ALL.len() - 1)]
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected < SettingsItem::ALL.len() - 1 {
            self.selected += 1;
        }
    }

    pub fn input(&mut self, ch: char) {
        if self.selected_item() == SettingsItem::RenewalDays && ch.is_ascii_digit() {
            self.days_input.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.selected_item() == SettingsItem::RenewalDays {
            self.days_input.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_only_lands_on_days_row() {
        let mut state = SettingsTabState::new();
        state.input('3');
        assert!(state.days_input.is_empty());

        state.selected = 2;
        state.input('3');
        state.input('0');
        state.input('x');
        assert_eq!(state.days_input, "30");
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut state = SettingsTabState::new();
        state.select_previous();
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);
        assert_eq!(state.selected_item(), SettingsItem::RenewalDays);
    }
}
