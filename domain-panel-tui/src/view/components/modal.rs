//! Modal rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use domain_panel_core::{RecordForm, RecordModal};

use crate::model::state::UiModal;
use crate::model::App;
use crate::view::theme::{colors, Styles};

use super::centered_rect;

/// Renders whichever modal is active, topmost layer
pub fn render(app: &App, frame: &mut Frame) {
    if let Some(ref modal) = app.modal.active {
        match modal {
            UiModal::ConfirmDelete {
                delete_selected, ..
            } => render_confirm_delete(frame, *delete_selected),
        }
        return;
    }

    if let RecordModal::Open { editing, form } = app.controller.modal() {
        render_record_editor(frame, editing.is_some(), form, app.modal.record_field);
    }
}

fn render_confirm_delete(frame: &mut Frame, delete_selected: bool) {
    let c = colors();
    let area = centered_rect(44, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Delete Record ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let prompt = Paragraph::new("Delete this DNS record? This cannot be undone.")
        .alignment(Alignment::Center)
        .style(Style::default().fg(c.fg));
    frame.render_widget(prompt, rows[0]);

    let button = |label: &str, active: bool| {
        if active {
            Span::styled(
                format!("[ {label} ]"),
                Style::default()
                    .bg(c.selected_bg)
                    .fg(c.selected_fg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!("[ {label} ]"), Style::default().fg(c.muted))
        }
    };

    let buttons = Line::from(vec![
        button("Cancel", !delete_selected),
        Span::raw("   "),
        button("Delete", delete_selected),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        rows[1],
    );
}

fn render_record_editor(frame: &mut Frame, editing: bool, form: &RecordForm, focus: usize) {
    let c = colors();
    let show_priority = form.record_type.requires_priority();
    let field_rows = if show_priority { 5 } else { 4 };
    let height = (field_rows as u16) * 2 + 5;

    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let title = if editing {
        " Edit DNS Record "
    } else {
        " Add DNS Record "
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2); field_rows];
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    render_field(frame, rows[0], "Name", &form.name, focus == 0);
    render_type_selector(frame, rows[1], form, focus == 1);
    render_field(frame, rows[2], "Value", &form.value, focus == 2);
    render_field(frame, rows[3], "TTL", &form.ttl, focus == 3);
    if show_priority {
        render_field(frame, rows[4], "Priority", &form.priority, focus == 4);
    }

    let help = Paragraph::new(form.record_type.help_text())
        .style(Style::default().fg(c.muted));
    frame.render_widget(help, rows[field_rows]);
}

fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let label_style = if focused {
        Styles::field_focused()
    } else {
        Styles::field_label()
    };
    let cursor = if focused { "█" } else { "" };

    let line = Line::from(vec![
        Span::styled(format!(" {label:<9}"), label_style),
        Span::raw(format!("{value}{cursor}")),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_type_selector(frame: &mut Frame, area: Rect, form: &RecordForm, focused: bool) {
    let label_style = if focused {
        Styles::field_focused()
    } else {
        Styles::field_label()
    };
    let value = if focused {
        format!("◀ {} ▶", form.record_type)
    } else {
        form.record_type.to_string()
    };

    let line = Line::from(vec![
        Span::styled(" Type     ", label_style),
        Span::raw(value),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
