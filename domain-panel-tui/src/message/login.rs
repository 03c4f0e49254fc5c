//! Login page messages

#[derive(Debug, Clone)]
pub enum LoginMessage {
    NextField,
    PrevField,
    Input(char),
    Backspace,
    /// Switch between sign-in and registration
    SwitchMode,
    Submit,
}
