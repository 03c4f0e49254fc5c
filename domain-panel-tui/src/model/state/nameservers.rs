//! Nameserver batch edit form

/// Number of editable nameserver rows
pub const NS_ROWS: usize = 4;

/// Form with `NS_ROWS` rows of (hostname, optional glue ip) inputs.
///
/// Field focus runs row-major: even indices are names, odd are ips.
#[derive(Debug, Default)]
pub struct NameserverFormState {
    pub rows: [(String, String); NS_ROWS],
    pub focus: usize,
}

impl NameserverFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn field_count() -> usize {
        NS_ROWS * 2
    }

    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % Self::field_count();
    }

    pub fn prev_field(&mut self) {
        self.focus = (self.focus + Self::field_count() - 1) % Self::field_count();
    }

    fn focused_field_mut(&mut self) -> &mut String {
        let row = &mut self.rows[self.focus / 2];
        if self.focus % 2 == 0 {
            &mut row.0
        } else {
            &mut row.1
        }
    }

    pub fn input(&mut self, ch: char) {
        self.focused_field_mut().push(ch);
    }

    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }

    /// Raw rows for submission; empty-name rows are dropped downstream
    pub fn to_rows(&self) -> Vec<(String, String)> {
        self.rows.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_walks_names_and_ips() {
        let mut form = NameserverFormState::new();
        form.input('n');
        form.next_field();
        form.input('1');
        assert_eq!(form.rows[0], ("n".to_string(), "1".to_string()));

        form.next_field();
        form.input('m');
        assert_eq!(form.rows[1].0, "m");
    }

    #[test]
    fn focus_wraps_around() {
        let mut form = NameserverFormState::new();
        form.prev_field();
        assert_eq!(form.focus, NameserverFormState::field_count() - 1);
        form.next_field();
        assert_eq!(form.focus, 0);
    }
}
