//! Bottom status bar component

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::state::NoticeKind;
use crate::model::{App, DetailTab, FocusPanel, Page};
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if app.controller.is_busy() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled("Working...", Style::default().fg(Color::Yellow)));
    }

    if let Some(notice) = app.notifications.current() {
        let c = colors();
        let style = match notice.kind {
            NoticeKind::Success => Style::default().fg(c.success),
            NoticeKind::Error => Style::default().fg(c.error),
        };
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(notice.text.clone(), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current focus and tab
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.page == Page::Login {
        return vec![
            ("Tab", "Next Field"),
            ("Enter", "Submit"),
            ("Alt+m", "Switch Mode"),
            ("Esc", "Quit"),
        ];
    }

    if app.modal_is_open() {
        return vec![("Tab", "Next Field"), ("Enter", "Confirm"), ("Esc", "Cancel")];
    }

    if app.domain_list.search_active {
        return vec![("Enter", "Apply"), ("Esc", "Cancel")];
    }

    let mut hints = vec![("Tab", "Switch Panel")];

    match app.focus {
        FocusPanel::DomainList => {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Open"));
            hints.push(("/", "Search"));
        }
        FocusPanel::Detail => {
            hints.push(("←→", "Switch Tab"));
            match app.tab {
                DetailTab::Overview => {
                    hints.push(("Alt+l", "Lock"));
                    hints.push(("Alt+n", "Auto-Renew"));
                }
                DetailTab::DnsRecords => {
                    hints.push(("↑↓", "Select"));
                    hints.push(("Alt+a", "Add"));
                    hints.push(("Alt+e", "Edit"));
                    hints.push(("Alt+d", "Delete"));
                }
                DetailTab::Nameservers => {
                    hints.push(("↑↓", "Field"));
                    hints.push(("Enter", "Save"));
                }
                DetailTab::Settings => {
                    hints.push(("↑↓", "Select"));
                    hints.push(("Enter", "Apply"));
                }
            }
        }
    }

    hints.push(("Alt+r", "Refresh"));
    hints.push(("Alt+q", "Quit"));
    hints
}
