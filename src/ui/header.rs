use crate::ui::app::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SECTIONS: [(&str, &str); 3] = [("F1", "Dashboard"), ("F2", "Devices"), ("F3", "New Device")];

pub struct Header<'a> {
    route: Route,
    base_url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(route: Route, base_url: &'a str) -> Self {
        Self { route, base_url }
    }

    fn active_section(&self) -> &'static str {
        match self.route {
            Route::Dashboard => "Dashboard",
            Route::Devices | Route::DeviceDetail(_) | Route::EditDevice(_) => "Devices",
            Route::NewDevice => "New Device",
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active = self.active_section();

        let mut spans = vec![
            Span::styled(
                "  MedTrack",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
        ];
        for (key, name) in SECTIONS {
            let style = if name == active {
                text_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(format!("{key} "), separator_style));
            spans.push(Span::styled(name, style));
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled("│  ", separator_style));
        spans.push(Span::styled(self.route.title(), text_style));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(self.base_url.to_string(), Style::default().fg(MUTED_TEXT)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
