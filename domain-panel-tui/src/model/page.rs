//! Page and detail tab definitions

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Login / register screen, shown until a token is available
    Login,
    /// The domain panel itself
    #[default]
    Panel,
}

/// Tabs on the right-hand detail panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    DnsRecords,
    Nameservers,
    Settings,
}

impl DetailTab {
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::DnsRecords,
        Self::Nameservers,
        Self::Settings,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::DnsRecords => "DNS Records",
            Self::Nameservers => "Nameservers",
            Self::Settings => "Settings",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_both_directions() {
        assert_eq!(DetailTab::Overview.next(), DetailTab::DnsRecords);
        assert_eq!(DetailTab::Settings.next(), DetailTab::Overview);
        assert_eq!(DetailTab::Overview.prev(), DetailTab::Settings);
        assert_eq!(DetailTab::DnsRecords.prev(), DetailTab::Overview);
    }
}
