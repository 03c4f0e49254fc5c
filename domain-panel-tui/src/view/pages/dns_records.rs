//! DNS records tab

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use domain_panel_core::utils::truncate_text;

use crate::model::App;
use crate::view::theme::{colors, Styles};

/// Widest value column before truncation kicks in
const MAX_VALUE_WIDTH: usize = 40;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.focus.is_detail() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let record_count = app.controller.records().len();
    let block = Block::default()
        .title(format!(" DNS Records ({record_count}) "))
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

    if record_count == 0 {
        frame.render_widget(
            Paragraph::new("No records yet. Alt+a adds one.")
                .style(Style::default().fg(c.muted)),
            inner,
        );
        return;
    }

    let header = Row::new(["Name", "Type", "Value", "TTL", "Prio"])
        .style(Styles::field_label())
        .height(1);

    let rows: Vec<Row> = app
        .controller
        .records()
        .iter()
        .map(|record| {
            let value = if record.value.width() > MAX_VALUE_WIDTH {
                truncate_text(&record.value, MAX_VALUE_WIDTH)
            } else {
                record.value.clone()
            };
            let priority = record
                .priority
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());

            Row::new([
                Cell::from(record.display_name().to_string()),
                Cell::from(record.record_type.as_str()),
                Cell::from(value),
                Cell::from(record.ttl.to_string()),
                Cell::from(priority),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(6),
            Constraint::Min(20),
            Constraint::Length(7),
            Constraint::Length(5),
        ],
    )
    .header(header)
    .row_highlight_style(Styles::selected());

    let mut state = TableState::default();
    state.select(Some(app.records.selected));
    frame.render_stateful_widget(table, inner, &mut state);
}
