//! Login / register form state

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    Login,
    Register,
}

impl LoginMode {
    pub fn toggle(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Register => "Create Account",
        }
    }
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Focused field index; register mode prepends the name fields
    pub focus: usize,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_count(&self) -> usize {
        match self.mode {
            LoginMode::Login => 2,
            LoginMode::Register => 4,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        let count = self.field_count();
        self.focus = (self.focus + count - 1) % count;
    }

    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggle();
        self.focus = 0;
        self.error = None;
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match (self.mode, self.focus) {
            (LoginMode::Register, 0) => &mut self.first_name,
            (LoginMode::Register, 1) => &mut self.last_name,
            (LoginMode::Login, 0) | (LoginMode::Register, 2) => &mut self.email,
            _ => &mut self.password,
        }
    }

    pub fn input(&mut self, ch: char) {
        self.focused_field_mut().push(ch);
    }

    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_mode_cycles_two_fields() {
        let mut form = LoginForm::new();
        form.input('a');
        assert_eq!(form.email, "a");
        form.next_field();
        form.input('p');
        assert_eq!(form.password, "p");
        form.next_field();
        assert_eq!(form.focus, 0);
    }

    #[test]
    fn register_mode_targets_name_fields() {
        let mut form = LoginForm::new();
        form.switch_mode();
        assert_eq!(form.mode, LoginMode::Register);
        form.input('A');
        form.next_field();
        form.input('L');
        form.next_field();
        form.input('e');
        assert_eq!(form.first_name, "A");
        assert_eq!(form.last_name, "L");
        assert_eq!(form.email, "e");
    }

    #[test]
    fn prev_field_wraps() {
        let mut form = LoginForm::new();
        form.prev_field();
        assert_eq!(form.focus, 1);
    }

    #[test]
    fn switch_mode_resets_focus_and_error() {
        let mut form = LoginForm::new();
        form.focus = 1;
        form.error = Some("bad".to_string());
        form.switch_mode();
        assert_eq!(form.focus, 0);
        assert!(form.error.is_none());
    }
}
