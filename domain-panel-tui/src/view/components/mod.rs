//! Reusable view components

pub mod modal;
pub mod statusbar;

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, DetailTab};

use super::theme::colors;

/// Tab strip above the detail panel
pub fn render_tab_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mut spans = vec![Span::raw(" ")];

    for (i, tab) in DetailTab::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.border)));
        }
        let style = if *tab == app.tab {
            Style::default().bg(c.selected_bg).fg(c.selected_fg)
        } else {
            Style::default().fg(c.muted)
        };
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Centers a `width` x `height` rect inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
