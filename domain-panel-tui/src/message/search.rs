//! Search prompt messages

#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// `/` pressed: open the prompt
    Start,
    Input(char),
    Backspace,
    /// Enter: keep the filter, close the prompt
    Apply,
    /// Esc: drop the filter, close the prompt
    Cancel,
}
