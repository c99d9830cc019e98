use crate::ui::app::{App, NoticeKind, Route};
use crate::ui::dashboard::view::render_dashboard;
use crate::ui::device_detail::view::render_device_detail;
use crate::ui::device_form::view::render_device_form;
use crate::ui::device_list::view::render_device_list;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{STATUS_ERROR, STATUS_OK};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App, base_url: &str) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.route(), base_url).widget(), header);
    frame.render_widget(Clear, body);
    match app.route() {
        Route::Dashboard => render_dashboard(frame, body, app.dashboard()),
        Route::Devices => render_device_list(frame, body, app.device_list()),
        Route::NewDevice | Route::EditDevice(_) => {
            render_device_form(frame, body, app.device_form())
        }
        Route::DeviceDetail(_) => render_device_detail(frame, body, app.device_detail()),
    }
    frame.render_widget(Footer::new(app.route()).widget(footer), footer);

    if let Some(notice) = app.notice() {
        render_notice(frame, body, &notice.message, notice.kind);
    }
}

fn render_notice(frame: &mut Frame<'_>, body: Rect, message: &str, kind: NoticeKind) {
    let (title, color) = match kind {
        NoticeKind::Info => ("Info", STATUS_OK),
        NoticeKind::Error => ("Error", STATUS_ERROR),
    };
    PopupDialog::new(title, vec![Line::from(message.to_string())])
        .border_color(color)
        .render(frame, body);
}
