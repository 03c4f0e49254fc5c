//! Focus state definition

/// Focused panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// Left domain list
    #[default]
    DomainList,
    /// Right detail panel
    Detail,
}

impl FocusPanel {
    pub fn toggle(self) -> Self {
        match self {
            Self::DomainList => Self::Detail,
            Self::Detail => Self::DomainList,
        }
    }

    pub fn is_domain_list(self) -> bool {
        matches!(self, Self::DomainList)
    }

    pub fn is_detail(self) -> bool {
        matches!(self, Self::Detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates() {
        assert_eq!(FocusPanel::DomainList.toggle(), FocusPanel::Detail);
        assert_eq!(FocusPanel::Detail.toggle(), FocusPanel::DomainList);
    }
}
