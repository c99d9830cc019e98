use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::format::{format_date, truncate};
use crate::ui::device_list::state::DeviceListState;
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{
    tone_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
    MUTED_TEXT,
};

const ALL_LABEL: &str = "All";

pub fn render_device_list(frame: &mut Frame, area: Rect, state: &DeviceListState) {
    let [filters, table, pages] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

    frame.render_widget(filter_bar(state), filters);
    render_table(frame, table, state);
    if state.show_pagination() {
        frame.render_widget(pagination_line(state), pages);
    }

    if let Some(device) = state.pending_delete_device() {
        let lines = vec![
            Line::from(format!("Delete '{}' ({})?", device.name, device.serial_number)),
            Line::from(""),
            Line::from(Span::styled(
                "y: Delete   n/Esc: Cancel",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        PopupDialog::new("Confirm delete", lines).render(frame, area);
    }
}

fn filter_bar(state: &DeviceListState) -> Paragraph<'static> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let separator = Style::default().fg(HEADER_SEPARATOR);

    let search_style = if state.search_focused {
        value.add_modifier(Modifier::UNDERLINED)
    } else {
        value
    };
    let search_text = if state.search.is_empty() && !state.search_focused {
        Span::styled("Search devices, serial numbers...", label)
    } else {
        Span::styled(
            format!("{}{}", state.search, if state.search_focused { "▏" } else { "" }),
            search_style,
        )
    };

    let line = Line::from(vec![
        Span::styled(" Search: ", label),
        search_text,
        Span::styled("  │  ", separator),
        Span::styled("Status: ", label),
        Span::styled(
            state
                .status
                .map(|s| s.label())
                .unwrap_or(ALL_LABEL)
                .to_string(),
            value,
        ),
        Span::styled("  │  ", separator),
        Span::styled("Type: ", label),
        Span::styled(
            state
                .device_type
                .map(|t| t.label())
                .unwrap_or(ALL_LABEL)
                .to_string(),
            value,
        ),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(" Medical Devices "),
    )
}

fn render_table(frame: &mut Frame, area: Rect, state: &DeviceListState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if state.devices.is_empty() {
        let text = if state.loading {
            "Loading devices..."
        } else {
            "No devices found"
        };
        let message = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(message, area);
        return;
    }

    let header = Row::new(vec![
        "Device",
        "Type",
        "Serial",
        "Location",
        "Status",
        "Next maintenance",
    ])
    .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD));

    let rows = state.devices.iter().map(|device| {
        Row::new(vec![
            Cell::from(truncate(&device.name, 28)),
            Cell::from(device.device_type.label()),
            Cell::from(device.serial_number.clone()),
            Cell::from(truncate(&device.location, 20)),
            Cell::from(Span::styled(
                device.status.label(),
                Style::default().fg(tone_color(device.status.tone())),
            )),
            Cell::from(format_date(device.next_maintenance_date)),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });

    let widths = [
        Constraint::Percentage(24),
        Constraint::Percentage(18),
        Constraint::Percentage(14),
        Constraint::Percentage(16),
        Constraint::Percentage(14),
        Constraint::Percentage(14),
    ];

    let title = if state.loading { " Loading... " } else { "" };
    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title(title))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn pagination_line(state: &DeviceListState) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(" ‹ ", Style::default().fg(MUTED_TEXT))];
    for page in state.page_window() {
        let style = if page == state.current_page {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!(" {page} "), style));
    }
    spans.push(Span::styled(" › ", Style::default().fg(MUTED_TEXT)));
    spans.push(Span::styled(
        format!("  page {} of {}", state.current_page, state.total_pages),
        Style::default().fg(MUTED_TEXT),
    ));
    Paragraph::new(Line::from(spans))
}
