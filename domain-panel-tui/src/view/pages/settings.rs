//! Settings tab

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use domain_panel_core::types::DEFAULT_AUTO_RENEWAL_DAYS;

use crate::model::state::SettingsItem;
use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.focus.is_detail() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Settings ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(domain) = app.controller.current_domain() else {
        frame.render_widget(
            Paragraph::new("Select a domain from the list")
                .style(Style::default().fg(c.muted)),
            inner,
        );
        return;
    };

    let focused = app.focus.is_detail();
    let mut lines = Vec::new();

    for (i, item) in SettingsItem::ALL.iter().enumerate() {
        let selected = focused && app.settings.selected == i;
        let marker = if selected { "▶ " } else { "  " };
        let label_style = if selected {
            Styles::field_focused()
        } else {
            Style::default().fg(c.fg)
        };

        let value = match item {
            SettingsItem::TransferLock => toggle_span(domain.lock_enabled, &c),
            SettingsItem::AutoRenewal => toggle_span(domain.auto_renewal_enabled, &c),
            SettingsItem::RenewalDays => {
                let text = if app.settings.days_input.is_empty() {
                    format!("{DEFAULT_AUTO_RENEWAL_DAYS} (default)")
                } else {
                    app.settings.days_input.clone()
                };
                let cursor = if selected { "█" } else { "" };
                Span::styled(format!("{text}{cursor}"), Style::default().fg(c.fg))
            }
        };

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<28}", item.label()), label_style),
            value,
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " ↑↓ selects a row, Enter applies it",
        Style::default().fg(c.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn toggle_span(enabled: bool, c: &crate::view::theme::ThemeColors) -> Span<'static> {
    if enabled {
        Span::styled("[on]", Style::default().fg(c.success))
    } else {
        Span::styled("[off]", Style::default().fg(c.muted))
    }
}
