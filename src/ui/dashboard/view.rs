use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::domain::Statistics;
use crate::format::format_timestamp;
use crate::ui::dashboard::state::{status_shares, DashboardState};
use crate::ui::loadable::Loadable;
use crate::ui::theme::{
    tone_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_BUSY,
    STATUS_ERROR, STATUS_OK, STATUS_WARN,
};

pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &DashboardState) {
    let stats = match &state.stats {
        Loadable::Loading => {
            frame.render_widget(notice("Loading statistics...", MUTED_TEXT), area);
            return;
        }
        Loadable::Failed(error) => {
            frame.render_widget(notice(error, STATUS_ERROR), area);
            return;
        }
        Loadable::Loaded(stats) => stats,
    };

    let [cards, breakdown, tables] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(4),
        ])
        .areas(area);

    render_cards(frame, cards, stats);
    render_breakdown(frame, breakdown, stats);

    let [recent, counts] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .areas(tables);
    let [types, statuses] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .areas(counts);
    render_recent_activity(frame, recent, stats, state.selected);
    render_type_distribution(frame, types, stats);
    render_status_distribution(frame, statuses, stats);
}

fn notice(text: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text.to_string(), Style::default().fg(color))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn render_cards(frame: &mut Frame, area: Rect, stats: &Statistics) {
    let cards = [
        ("Total Devices", stats.total_devices, ACCENT),
        ("Active", stats.active_devices, STATUS_OK),
        ("Available", stats.available_devices, STATUS_OK),
        ("In Use", stats.in_use_devices, STATUS_BUSY),
        ("Needs Service", stats.maintenance_needed, STATUS_WARN),
        ("Due in 30 Days", stats.maintenance_due_soon, STATUS_WARN),
    ];
    let slots: [Rect; 6] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .areas(area);

    for ((title, value, color), slot) in cards.into_iter().zip(slots) {
        let card = Paragraph::new(Line::from(Span::styled(
            format!(" {value}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(MUTED_TEXT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        frame.render_widget(card, slot);
    }
}

fn render_breakdown(frame: &mut Frame, area: Rect, stats: &Statistics) {
    let shares = status_shares(stats);
    let segments = [
        ("Available", shares.available, STATUS_OK),
        ("In use", shares.in_use, STATUS_BUSY),
        ("Maintenance", shares.maintenance, STATUS_WARN),
    ];

    let bar_width = area.width.saturating_sub(2) as u32;
    let bar: Vec<Span> = segments
        .iter()
        .map(|(_, percent, color)| {
            let cells = (bar_width * (*percent).min(100) / 100) as usize;
            Span::styled("█".repeat(cells), Style::default().fg(*color))
        })
        .collect();

    let mut legend = Vec::new();
    for (label, percent, color) in segments {
        legend.push(Span::styled(" ■ ", Style::default().fg(color)));
        legend.push(Span::styled(
            format!("{label} {percent}%  "),
            Style::default().fg(HEADER_TEXT),
        ));
    }

    let widget = Paragraph::new(vec![Line::from(bar), Line::from(legend)]).block(
        Block::default()
            .title(" Device Status Breakdown ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);
}

fn render_recent_activity(frame: &mut Frame, area: Rect, stats: &Statistics, selected: usize) {
    let block = Block::default()
        .title(" Recent Activity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if stats.recent_activity.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " No recent activity",
                Style::default().fg(MUTED_TEXT),
            ))
            .block(block),
            area,
        );
        return;
    }

    let header = Row::new(vec!["Device", "Serial", "Status", "Updated"])
        .style(Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD));
    let rows = stats.recent_activity.iter().map(|activity| {
        Row::new(vec![
            Cell::from(activity.name.clone()),
            Cell::from(activity.serial_number.clone()),
            Cell::from(Span::styled(
                activity.status.label(),
                Style::default().fg(tone_color(activity.status.tone())),
            )),
            Cell::from(format_timestamp(Some(activity.updated_at))),
        ])
        .style(Style::default().fg(HEADER_TEXT))
    });
    let widths = [
        Constraint::Percentage(35),
        Constraint::Percentage(25),
        Constraint::Percentage(22),
        Constraint::Percentage(18),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .highlight_symbol("▶ ");
    let mut table_state = TableState::default().with_selected(Some(selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_type_distribution(frame: &mut Frame, area: Rect, stats: &Statistics) {
    let lines: Vec<Line> = if stats.device_types.is_empty() {
        vec![Line::from(Span::styled(
            " No devices registered",
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        stats
            .device_types
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<26}", entry.device_type.label()),
                        Style::default().fg(HEADER_TEXT),
                    ),
                    Span::styled(entry.count.to_string(), Style::default().fg(ACCENT)),
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Devices by Type ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}

fn render_status_distribution(frame: &mut Frame, area: Rect, stats: &Statistics) {
    let lines: Vec<Line> = if stats.status_distribution.is_empty() {
        vec![Line::from(Span::styled(
            " No status data",
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        stats
            .status_distribution
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<26}", entry.status.label()),
                        Style::default().fg(tone_color(entry.status.tone())),
                    ),
                    Span::styled(entry.count.to_string(), Style::default().fg(ACCENT)),
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" Devices by Status ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        area,
    );
}
