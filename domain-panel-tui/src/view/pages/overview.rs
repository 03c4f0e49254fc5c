//! Domain overview tab

use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use domain_panel_core::utils::{days_left, format_date};

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
        .title(" Overview ")
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

    let status_style = if domain.status.is_active() {
        Style::default().fg(c.success)
    } else {
        Style::default().fg(c.warning)
    };
    let remaining = days_left(domain.expiration_date, Utc::now());
    let expiry_style = if remaining <= 30 {
        Style::default().fg(c.error)
    } else {
        Style::default().fg(c.fg)
    };

    let flag = |enabled: bool| {
        if enabled {
            Span::styled("enabled", Style::default().fg(c.success))
        } else {
            Span::styled("disabled", Style::default().fg(c.muted))
        }
    };
    let label = |text: &str| Span::styled(format!(" {text:<16}"), Styles::field_label());

    let lines = vec![
        Line::from(vec![
            label("Domain"),
            Span::styled(domain.name.clone(), Styles::title()),
        ]),
        Line::from(vec![
            label("Status"),
            Span::styled(domain.status.display_name(), status_style),
        ]),
        Line::from(vec![label("TLD"), Span::raw(domain.tld.clone())]),
        Line::default(),
        Line::from(vec![
            label("Registered"),
            Span::raw(format_date(domain.registration_date)),
        ]),
        Line::from(vec![
            label("Expires"),
            Span::raw(format_date(domain.expiration_date)),
            Span::styled(format!("  ({remaining} days left)"), expiry_style),
        ]),
        Line::default(),
        Line::from(vec![label("Transfer lock"), flag(domain.lock_enabled)]),
        Line::from(vec![
            label("Auto-renewal"),
            flag(domain.auto_renewal_enabled),
        ]),
        Line::default(),
        Line::from(Span::styled(
            " Alt+l toggles the lock, Alt+n toggles auto-renewal",
            Style::default().fg(c.muted),
        )),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
