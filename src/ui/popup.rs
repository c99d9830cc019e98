use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Bordered dialog centered over an area, sized to its content.
pub struct PopupDialog<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    border: ratatui::style::Color,
    min_width: u16,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: &'a str, lines: Vec<Line<'a>>) -> Self {
        Self {
            title,
            lines,
            border: POPUP_BORDER,
            min_width: 32,
        }
    }

    pub fn border_color(mut self, color: ratatui::style::Color) -> Self {
        self.border = color;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let title_width = self.title.chars().count() as u16;
        let width = content_width
            .max(title_width)
            .saturating_add(4)
            .max(self.min_width);
        let height = (self.lines.len() as u16).saturating_add(2);
        let popup = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(ACCENT),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, popup);
    }
}
