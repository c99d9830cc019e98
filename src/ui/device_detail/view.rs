use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table, Tabs, Wrap};
use ratatui::Frame;

use crate::domain::Device;
use crate::format::{format_amount, format_date, format_timestamp, truncate, MISSING};
use crate::ui::device_detail::state::{DetailTab, DeviceDetailState};
use crate::ui::loadable::Loadable;
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{
    tone_color, ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR,
};

pub fn render_device_detail(frame: &mut Frame, area: Rect, state: &DeviceDetailState) {
    let device = match &state.device {
        Loadable::Loading => {
            frame.render_widget(message("Loading device details...", MUTED_TEXT), area);
            return;
        }
        Loadable::Failed(error) => {
            frame.render_widget(message(error, STATUS_ERROR), area);
            return;
        }
        Loadable::Loaded(device) => device,
    };

    let [title, tabs, content] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

    frame.render_widget(title_bar(device), title);

    let selected = DetailTab::ALL
        .iter()
        .position(|tab| *tab == state.tab)
        .unwrap_or(0);
    let tab_titles = DetailTab::ALL.iter().enumerate().map(|(index, tab)| {
        let count = match tab {
            DetailTab::Specifications => String::new(),
            DetailTab::Maintenance => format!(" ({})", state.maintenance.len()),
            DetailTab::Documents => format!(" ({})", state.documents.len()),
        };
        format!("{} {}{}", index + 1, tab.title(), count)
    });
    let tabs_widget = Tabs::new(tab_titles)
        .select(selected)
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs_widget, tabs);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    match state.tab {
        DetailTab::Specifications => {
            frame.render_widget(
                Paragraph::new(specification_lines(device))
                    .block(block)
                    .wrap(Wrap { trim: false }),
                content,
            );
        }
        DetailTab::Maintenance => render_maintenance(frame, content, state, block),
        DetailTab::Documents => render_documents(frame, content, state, block),
    }

    if state.confirm_delete {
        let lines = vec![
            Line::from(format!("Delete '{}' ({})?", device.name, device.serial_number)),
            Line::from(""),
            Line::from(Span::styled(
                "y: Delete   n/Esc: Cancel",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        PopupDialog::new("Confirm delete", lines)
            .border_color(STATUS_ERROR)
            .render(frame, area);
    }
}

fn message(text: &str, color: ratatui::style::Color) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text.to_string(), Style::default().fg(color))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn title_bar(device: &Device) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            format!(" {}", device.name),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}  ", device.serial_number),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(
            device.status.label(),
            Style::default().fg(tone_color(device.status.tone())),
        ),
    ]);
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn or_missing(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

/// Key/value lines for the specifications tab.
pub fn specification_lines(device: &Device) -> Vec<Line<'static>> {
    let rows = [
        ("Device ID", device.id.to_string()),
        ("Type", device.device_type.label().to_string()),
        ("Manufacturer", or_missing(&device.manufacturer)),
        ("Model", or_missing(&device.model_number)),
        ("Serial Number", device.serial_number.clone()),
        ("Location", or_missing(&device.location)),
        ("Acquisition Date", format_date(device.acquisition_date)),
        ("Warranty Expiration", format_date(device.warranty_expiration)),
        ("Last Maintenance", format_date(device.last_maintenance_date)),
        ("Next Maintenance", format_date(device.next_maintenance_date)),
        ("Purchase Price", format_amount(device.purchase_price)),
        ("Registered", format_timestamp(device.created_at)),
        ("Last Update", format_timestamp(device.updated_at)),
    ];

    let mut lines: Vec<Line<'static>> = rows
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!(" {label:<22}"), Style::default().fg(MUTED_TEXT)),
                Span::styled(value, Style::default().fg(HEADER_TEXT)),
            ])
        })
        .collect();

    if !device.description.trim().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Description",
            Style::default().fg(MUTED_TEXT),
        )));
        lines.push(Line::from(format!(" {}", device.description)));
    }
    lines
}

fn render_maintenance(frame: &mut Frame, area: Rect, state: &DeviceDetailState, block: Block) {
    if state.maintenance.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " No maintenance records",
                Style::default().fg(MUTED_TEXT),
            ))
            .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Date", "Type", "Performed by", "Cost", "Next due", "Notes"])
        .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD));
    let rows = state.maintenance.iter().map(|record| {
        Row::new(vec![
            format_date(Some(record.maintenance_date)),
            record.maintenance_type.label().to_string(),
            or_missing(&record.performed_by),
            format_amount(record.cost),
            format_date(record.next_maintenance_due),
            truncate(&record.description, 40),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });
    let widths = [
        Constraint::Length(11),
        Constraint::Length(14),
        Constraint::Percentage(20),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Min(10),
    ];
    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}

fn render_documents(frame: &mut Frame, area: Rect, state: &DeviceDetailState, block: Block) {
    if state.documents.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " No documents available",
                Style::default().fg(MUTED_TEXT),
            ))
            .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Title", "Type", "Uploaded", "File"])
        .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD));
    let rows = state.documents.iter().map(|document| {
        Row::new(vec![
            truncate(&document.title, 32),
            document.document_type.label().to_string(),
            format_timestamp(document.upload_date),
            truncate(&document.file_path, 48),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });
    let widths = [
        Constraint::Percentage(30),
        Constraint::Length(14),
        Constraint::Length(11),
        Constraint::Min(10),
    ];
    frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
}
