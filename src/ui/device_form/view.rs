use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::device_form::state::{DeviceFormState, FieldKind, FormField, FormMode, FormPhase};
use crate::ui::device_form::validation::summarize;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

const LABEL_WIDTH: usize = 28;

pub fn render_device_form(frame: &mut Frame, area: Rect, state: &DeviceFormState) {
    let [fields, summary] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .areas(area);

    let title = match state.mode {
        FormMode::Create => " Register New Medical Device ",
        FormMode::Edit(_) => " Edit Medical Device ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.phase == FormPhase::Loading {
        let loading = Paragraph::new(Span::styled(
            "Loading device...",
            Style::default().fg(MUTED_TEXT),
        ))
        .block(block);
        frame.render_widget(loading, fields);
        frame.render_widget(summary_panel(state), summary);
        return;
    }

    let mut lines = Vec::new();
    let mut focused_line = 0;
    for field in FormField::ALL {
        if field == state.focused {
            focused_line = lines.len();
        }
        lines.push(field_line(state, field));
        if let Some(error) = state.error(field) {
            lines.push(Line::from(Span::styled(
                format!("{:width$}  {}", "", error, width = LABEL_WIDTH),
                Style::default().fg(STATUS_ERROR),
            )));
        }
    }
    if state.phase == FormPhase::Submitting {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Saving...",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let visible = fields.height.saturating_sub(2) as usize;
    let scroll = (focused_line + 1).saturating_sub(visible) as u16;
    let form = Paragraph::new(lines).block(block).scroll((scroll, 0));
    frame.render_widget(form, fields);
    frame.render_widget(summary_panel(state), summary);
}

fn field_line(state: &DeviceFormState, field: FormField) -> Line<'static> {
    let focused = field == state.focused;
    let marker = if field.is_required() { "*" } else { " " };
    let label = format!(" {}{}", field.label(), marker);
    let mut value = state.form.display_value(field);
    if focused {
        match field.kind() {
            FieldKind::Select => value = format!("◀ {} ▶", value),
            _ => value.push('▏'),
        }
    }
    if value.is_empty() {
        value = match field.kind() {
            FieldKind::Date => "YYYY-MM-DD".to_string(),
            _ => String::new(),
        };
    }

    let label_style = if state.error(field).is_some() {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(MUTED_TEXT)
    };
    let mut value_style = Style::default().fg(HEADER_TEXT);
    if focused {
        value_style = value_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(format!("{:width$}", label, width = LABEL_WIDTH), label_style),
        Span::raw("  "),
        Span::styled(value, value_style),
    ])
}

fn summary_panel(state: &DeviceFormState) -> Paragraph<'static> {
    let summary = summarize(&state.form);
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let row = |name: &'static str, text: String| {
        Line::from(vec![
            Span::styled(format!(" {name:<14}"), label),
            Span::styled(text, value),
        ])
    };

    let completion = if summary.missing_required == 0 {
        Span::styled(" Device details complete", Style::default().fg(STATUS_OK))
    } else {
        Span::styled(
            format!(" {} required field(s) missing", summary.missing_required),
            Style::default().fg(STATUS_ERROR),
        )
    };

    let lines = vec![
        row("Name", summary.name),
        row("Type", summary.device_type),
        row("Serial", summary.serial_number),
        row("Status", summary.status),
        Line::from(""),
        Line::from(completion),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(" Device Summary ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
