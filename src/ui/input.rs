use crate::ui::app::{App, Route};
use crate::ui::dashboard::DashboardIntent;
use crate::ui::device_detail::{DetailTab, DeviceDetailIntent};
use crate::ui::device_form::{DeviceFormIntent, FieldKind};
use crate::ui::device_list::DeviceListIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PageUp/PageDown in tables.
const PAGE_STEP: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    app.dismiss_notice();

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let jump = match key.code {
        KeyCode::F(1) => Some(Route::Dashboard),
        KeyCode::F(2) => Some(Route::Devices),
        KeyCode::F(3) => Some(Route::NewDevice),
        _ => None,
    };
    if let Some(route) = jump {
        app.navigate(route);
        return;
    }

    match app.route() {
        Route::Dashboard => handle_dashboard_key(app, key),
        Route::Devices => handle_list_key(app, key),
        Route::NewDevice | Route::EditDevice(_) => handle_form_key(app, key),
        Route::DeviceDetail(_) => handle_detail_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_dashboard(DashboardIntent::MoveSelection(-1)),
        KeyCode::Down => app.dispatch_dashboard(DashboardIntent::MoveSelection(1)),
        KeyCode::Enter => app.open_selected_activity(),
        KeyCode::Char('d') => app.navigate(Route::Devices),
        KeyCode::Char('n') => app.navigate(Route::NewDevice),
        KeyCode::Char('r') => app.navigate(Route::Dashboard),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    let confirming = app.device_list().pending_delete_device().is_some();
    let searching = app.device_list().search_focused;

    if confirming {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_list_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.dispatch_list(DeviceListIntent::CancelDelete)
            }
            _ => {}
        }
        return;
    }

    if searching {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                app.dispatch_list(DeviceListIntent::BlurSearch)
            }
            KeyCode::Backspace => app.dispatch_list(DeviceListIntent::SearchBackspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_list(DeviceListIntent::SearchInput(ch))
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('/') => app.dispatch_list(DeviceListIntent::FocusSearch),
        KeyCode::Char('s') => app.dispatch_list(DeviceListIntent::CycleStatus),
        KeyCode::Char('t') => app.dispatch_list(DeviceListIntent::CycleDeviceType),
        KeyCode::Char('c') => app.dispatch_list(DeviceListIntent::ClearFilters),
        KeyCode::Up => app.dispatch_list(DeviceListIntent::MoveSelection(-1)),
        KeyCode::Down => app.dispatch_list(DeviceListIntent::MoveSelection(1)),
        KeyCode::PageUp => app.dispatch_list(DeviceListIntent::MoveSelection(-PAGE_STEP)),
        KeyCode::PageDown => app.dispatch_list(DeviceListIntent::MoveSelection(PAGE_STEP)),
        KeyCode::Left | KeyCode::Char('[') => app.dispatch_list(DeviceListIntent::PrevPage),
        KeyCode::Right | KeyCode::Char(']') => app.dispatch_list(DeviceListIntent::NextPage),
        KeyCode::Home => app.dispatch_list(DeviceListIntent::GoToPage(1)),
        KeyCode::End => {
            let last = app.device_list().total_pages;
            app.dispatch_list(DeviceListIntent::GoToPage(last));
        }
        KeyCode::Enter => app.open_selected_device(),
        KeyCode::Char('e') => app.edit_selected_device(),
        KeyCode::Char('x') | KeyCode::Delete => {
            app.dispatch_list(DeviceListIntent::RequestDelete)
        }
        KeyCode::Char('n') => app.navigate(Route::NewDevice),
        KeyCode::Char('r') => app.request_device_list(),
        KeyCode::Esc => app.navigate_back(),
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.submit_form();
        return;
    }

    let select = app.device_form().focused.kind() == FieldKind::Select;
    match key.code {
        KeyCode::Esc => app.navigate_back(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_form(DeviceFormIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_form(DeviceFormIntent::FocusPrev),
        KeyCode::Enter => app.dispatch_form(DeviceFormIntent::FocusNext),
        KeyCode::Left if select => app.dispatch_form(DeviceFormIntent::CyclePrev),
        KeyCode::Right | KeyCode::Char(' ') if select => {
            app.dispatch_form(DeviceFormIntent::CycleNext)
        }
        KeyCode::Backspace => app.dispatch_form(DeviceFormIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_form(DeviceFormIntent::Input(ch))
        }
        _ => {}
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    if app.device_detail().confirm_delete {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_detail_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.dispatch_detail(DeviceDetailIntent::CancelDelete)
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(digit @ '1'..='3') => {
            let index = digit as usize - '1' as usize;
            app.dispatch_detail(DeviceDetailIntent::SelectTab(DetailTab::ALL[index]));
        }
        KeyCode::Left => app.dispatch_detail(DeviceDetailIntent::PrevTab),
        KeyCode::Right | KeyCode::Tab => app.dispatch_detail(DeviceDetailIntent::NextTab),
        KeyCode::Char('e') => {
            if let Route::DeviceDetail(id) = app.route() {
                app.navigate(Route::EditDevice(id));
            }
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            app.dispatch_detail(DeviceDetailIntent::RequestDelete)
        }
        KeyCode::Esc => app.navigate_back(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
