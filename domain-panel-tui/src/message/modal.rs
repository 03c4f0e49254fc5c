//! Modal messages

#[derive(Debug, Clone)]
pub enum ModalMessage {
    Close,
    NextField,
    PrevField,
    /// Cycle the record type selector
    CycleType,
    Input(char),
    Backspace,
    /// Submit the editor / fire the focused delete button
    Confirm,
    /// Flip the Cancel / Delete selection in the delete guard
    ToggleDeleteFocus,
}
