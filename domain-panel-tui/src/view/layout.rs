//! Main layout rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::colors;

/// Renders the whole frame
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // Three rows: title bar, content, status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(frame, title_area);

    match app.page {
        Page::Login => pages::login::render(app, frame, content_area),
        Page::Panel => render_panel(app, frame, content_area),
    }

    components::statusbar::render(app, frame, status_area);

    // Modals draw on top of everything else
    components::modal::render(app, frame);
}

fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(" Domain Panel v0.1.0")
        .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// Domain list on the left, tabbed detail on the right
fn render_panel(app: &App, frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .split(area);

    pages::domains::render(app, frame, columns[0]);
    render_detail(app, frame, columns[1]);
}

fn render_detail(app: &App, frame: &mut Frame, area: Rect) {
    use crate::model::DetailTab;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    components::render_tab_bar(app, frame, rows[0]);

    match app.tab {
        DetailTab::Overview => pages::overview::render(app, frame, rows[1]),
        DetailTab::DnsRecords => pages::dns_records::render(app, frame, rows[1]),
        DetailTab::Nameservers => pages::nameservers::render(app, frame, rows[1]),
        DetailTab::Settings => pages::settings::render(app, frame, rows[1]),
    }
}
