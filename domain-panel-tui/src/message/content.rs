//! Content panel messages

#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ===== List navigation =====
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// Enter: select a domain, toggle a setting, submit a form
    Confirm,

    // ===== Record operations =====
    Add,
    Edit,
    Delete,

    // ===== Overview shortcuts =====
    ToggleLock,
    ToggleAutoRenewal,

    // ===== Inline form editing (settings days, nameserver rows) =====
    Input(char),
    Backspace,
}
