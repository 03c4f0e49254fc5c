//! Login / register page

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::state::LoginMode;
use crate::model::App;
use crate::view::components::centered_rect;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let form = &app.login;

    let field_rows = form.field_count() as u16 * 2;
    let area = centered_rect(48, field_rows + 8, area);

    let block = Block::default()
        .title(format!(" {} ", form.mode.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::default()];

    let mut field = |label: &str, value: &str, index: usize, masked: bool| {
        let focused = form.focus == index;
        let label_style = if focused {
            Styles::field_focused()
        } else {
            Styles::field_label()
        };
        let shown = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let cursor = if focused { "█" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!(" {label:<12}"), label_style),
            Span::raw(format!("{shown}{cursor}")),
        ]));
        lines.push(Line::default());
    };

    match form.mode {
        LoginMode::Login => {
            field("Email", &form.email, 0, false);
            field("Password", &form.password, 1, true);
        }
        LoginMode::Register => {
            field("First name", &form.first_name, 0, false);
            field("Last name", &form.last_name, 1, false);
            field("Email", &form.email, 2, false);
            field("Password", &form.password, 3, true);
        }
    }

    if let Some(ref error) = form.error {
        lines.push(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(c.error),
        )));
    } else {
        lines.push(Line::default());
    }

    let switch_hint = match form.mode {
        LoginMode::Login => "Alt+m to create an account",
        LoginMode::Register => "Alt+m to sign in instead",
    };
    lines.push(Line::from(Span::styled(
        format!(" {switch_hint}"),
        Style::default().fg(c.muted),
    )));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}
