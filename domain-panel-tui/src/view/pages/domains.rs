//! Left-hand domain list panel

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let border_style = if app.focus.is_domain_list() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Domains ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    render_search_line(app, frame, rows[0]);
    render_list(app, frame, rows[1]);
}

fn render_search_line(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let line = if app.domain_list.search_active {
        Line::from(vec![
            Span::styled("/", Style::default().fg(c.highlight)),
            Span::raw(app.domain_list.search_input.clone()),
            Span::styled("█", Style::default().fg(c.fg)),
        ])
    } else if !app.controller.query().is_empty() {
        Line::from(vec![
            Span::styled("/", Style::default().fg(c.muted)),
            Span::styled(
                app.controller.query().to_string(),
                Style::default().fg(c.muted),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Press / to search",
            Style::default().fg(c.muted),
        ))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let items: Vec<ListItem> = app
        .controller
        .filtered_domains()
        .map(|domain| {
            let icon = if domain.status.is_active() {
                Span::styled("● ", Style::default().fg(c.success))
            } else {
                Span::styled("○ ", Style::default().fg(c.muted))
            };
            ListItem::new(Line::from(vec![icon, Span::raw(domain.name.clone())]))
        })
        .collect();

    if items.is_empty() {
        let empty = if app.controller.query().is_empty() {
            "No domains"
        } else {
            "No matches"
        };
        frame.render_widget(
            Paragraph::new(empty).style(Style::default().fg(c.muted)),
            area,
        );
        return;
    }

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(Some(app.domain_list.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
