//! Nameservers tab

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::state::NS_ROWS;
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
        .title(" Nameservers ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.controller.current_domain().is_none() {
        frame.render_widget(
            Paragraph::new("Select a domain from the list")
                .style(Style::default().fg(c.muted)),
            inner,
        );
        return;
    }

    let focused = app.focus.is_detail();
    let mut lines = vec![Line::from(Span::styled(
        " Hostname                        Glue IP (optional)",
        Styles::field_label(),
    ))];

    for row in 0..NS_ROWS {
        let (name, ip) = &app.nameservers.rows[row];
        let name_focus = focused && app.nameservers.focus == row * 2;
        let ip_focus = focused && app.nameservers.focus == row * 2 + 1;

        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(format!(" ns{}: ", row + 1), Styles::field_label()),
            field_span(name, name_focus, 27, &c),
            Span::raw("  "),
            field_span(ip, ip_focus, 18, &c),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        " Rows with an empty hostname are skipped. Enter saves.",
        Style::default().fg(c.muted),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_span(value: &str, focused: bool, width: usize, c: &crate::view::theme::ThemeColors) -> Span<'static> {
    let text = if focused {
        format!("{value}█")
    } else if value.is_empty() {
        "·".repeat(width)
    } else {
        value.to_string()
    };
    let style = if focused {
        Style::default().fg(c.fg).bg(c.selected_bg)
    } else if value.is_empty() {
        Style::default().fg(c.border)
    } else {
        Style::default().fg(c.fg)
    };
    Span::styled(format!("{text:<width$}"), style)
}
