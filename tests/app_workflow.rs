//! Screen workflows driven through `App` with a captured request channel.

mod common;

use common::{device, summary};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use medtrack::api::{ApiCommand, ApiError, ApiEvent, ApiOutcome, ApiRequest, Page};
use medtrack::domain::{DeviceId, DeviceType};
use medtrack::ui::app::{App, NoticeKind, Route};
use medtrack::ui::device_detail::DeviceDetailIntent;
use medtrack::ui::device_form::{FormField, FormPhase};
use medtrack::ui::device_list::DeviceListIntent;
use medtrack::ui::input::handle_key;
use medtrack::ui::loadable::Loadable;
use serde_json::json;
use tokio::sync::mpsc;

fn make_app() -> (App, mpsc::Receiver<ApiRequest>) {
    let (tx, rx) = mpsc::channel(32);
    let mut app = App::new(8);
    app.set_command_sender(tx);
    (app, rx)
}

fn drain(rx: &mut mpsc::Receiver<ApiRequest>) -> Vec<ApiCommand> {
    let mut commands = Vec::new();
    while let Ok(request) = rx.try_recv() {
        commands.push(request.command);
    }
    commands
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

fn event(app: &App, outcome: ApiOutcome) -> ApiEvent {
    ApiEvent {
        generation: app.scope_generation(),
        outcome,
    }
}

fn deliver_list(app: &mut App, ids: &[u64], total: u64) {
    let seq = app.device_list().latest_request;
    let page = Page::paginated(ids.iter().map(|id| summary(*id)).collect(), total);
    let outcome = ApiOutcome::DevicesListed {
        seq,
        result: Ok(page),
    };
    app.on_api_event(event(app, outcome));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press(KeyCode::Char(ch)));
    }
}

/// Name, type, manufacturer and serial number, entered through the keyboard.
fn fill_required(app: &mut App) {
    type_text(app, "Ventilator A");
    handle_key(app, press(KeyCode::Tab));
    handle_key(app, press(KeyCode::Right));
    handle_key(app, press(KeyCode::Right));
    handle_key(app, press(KeyCode::Tab));
    type_text(app, "Draeger");
    handle_key(app, press(KeyCode::Tab));
    handle_key(app, press(KeyCode::Tab));
    type_text(app, "VT-0007");
}

#[test]
fn test_each_filter_change_sends_one_list_request() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Devices);
    assert_eq!(drain(&mut rx).len(), 1);

    handle_key(&mut app, press(KeyCode::Char('s')));
    let commands = drain(&mut rx);
    assert_eq!(commands.len(), 1);
    match &commands[0] {
        ApiCommand::ListDevices { query, .. } => {
            assert_eq!(query.page, 1);
            assert!(query.status.is_some());
        }
        other => panic!("unexpected command: {other:?}"),
    }

    // Focusing the search box is not a filter change.
    handle_key(&mut app, press(KeyCode::Char('/')));
    assert!(drain(&mut rx).is_empty());

    handle_key(&mut app, press(KeyCode::Char('i')));
    handle_key(&mut app, press(KeyCode::Char('c')));
    handle_key(&mut app, press(KeyCode::Char('u')));
    assert_eq!(drain(&mut rx).len(), 3);

    handle_key(&mut app, press(KeyCode::Esc));
    handle_key(&mut app, press(KeyCode::Char('c')));
    let commands = drain(&mut rx);
    assert_eq!(commands.len(), 1);
    match &commands[0] {
        ApiCommand::ListDevices { query, .. } => {
            assert_eq!(query.search, None);
            assert_eq!(query.status, None);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_paging_requests_the_next_page_only_when_it_exists() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Devices);
    drain(&mut rx);
    deliver_list(&mut app, &[1, 2, 3], 25);
    assert_eq!(app.device_list().total_pages, 3);

    handle_key(&mut app, press(KeyCode::End));
    let commands = drain(&mut rx);
    assert!(matches!(
        &commands[..],
        [ApiCommand::ListDevices { query, .. }] if query.page == 3
    ));

    handle_key(&mut app, press(KeyCode::Right));
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_superseded_list_response_is_dropped() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Devices);
    let first_seq = app.device_list().latest_request;
    app.dispatch_list(DeviceListIntent::CycleStatus);
    drain(&mut rx);

    let stale = ApiOutcome::DevicesListed {
        seq: first_seq,
        result: Ok(Page::paginated(vec![summary(1)], 1)),
    };
    app.on_api_event(event(&app, stale));
    assert!(app.device_list().devices.is_empty());
    assert!(app.device_list().loading);

    deliver_list(&mut app, &[2], 1);
    assert_eq!(app.device_list().devices[0].id, DeviceId(2));
    assert!(!app.device_list().loading);
}

#[test]
fn test_invalid_submit_sends_nothing() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::NewDevice);
    type_text(&mut app, "Pump");

    app.submit_form();

    assert!(drain(&mut rx).is_empty());
    let form = app.device_form();
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(
        form.error(FormField::Manufacturer),
        Some("Manufacturer is required.")
    );
    assert_eq!(
        form.error(FormField::DeviceType),
        Some("Device type is required.")
    );
    assert_eq!(form.error(FormField::Name), None);
}

#[test]
fn test_successful_create_returns_to_list() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::NewDevice);
    fill_required(&mut app);

    app.submit_form();
    let commands = drain(&mut rx);
    match &commands[..] {
        [ApiCommand::CreateDevice { payload }] => {
            assert_eq!(payload.serial_number, "VT-0007");
            assert_eq!(payload.device_type, DeviceType::Ventilator);
            assert_eq!(payload.manufacturer, "Draeger");
            assert_eq!(payload.acquisition_date, None);
        }
        other => panic!("unexpected commands: {other:?}"),
    }
    assert_eq!(app.device_form().phase, FormPhase::Submitting);

    let saved = ApiOutcome::DeviceSaved(Ok(device(12, "Ventilator A")));
    app.on_api_event(event(&app, saved));

    assert_eq!(app.route(), Route::Devices);
    let notice = app.notice().expect("confirmation notice");
    assert_eq!(notice.kind, NoticeKind::Info);
    assert!(notice.message.contains("Ventilator A"));
    assert!(matches!(
        &drain(&mut rx)[..],
        [ApiCommand::ListDevices { .. }]
    ));
}

#[test]
fn test_server_field_errors_stay_on_form() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::NewDevice);
    fill_required(&mut app);
    app.submit_form();
    drain(&mut rx);

    let rejected = ApiError::Rejected {
        status: 400,
        payload: Some(json!({
            "serial_number": ["device with this serial number already exists."]
        })),
    };
    app.on_api_event(event(&app, ApiOutcome::DeviceSaved(Err(rejected))));

    assert_eq!(app.route(), Route::NewDevice);
    let form = app.device_form();
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(
        form.error(FormField::SerialNumber),
        Some("device with this serial number already exists.")
    );
    assert_eq!(form.form.name, "Ventilator A");
}

#[test]
fn test_declining_delete_sends_nothing() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Devices);
    deliver_list(&mut app, &[4, 5], 2);
    drain(&mut rx);

    handle_key(&mut app, press(KeyCode::Char('x')));
    assert_eq!(app.device_list().pending_delete, Some(DeviceId(4)));
    handle_key(&mut app, press(KeyCode::Char('n')));

    assert!(drain(&mut rx).is_empty());
    assert_eq!(app.device_list().pending_delete, None);
    assert_eq!(app.device_list().devices.len(), 2);
}

#[test]
fn test_refresh_that_removes_pending_row_cancels_confirmation() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Devices);
    deliver_list(&mut app, &[1, 2], 2);

    handle_key(&mut app, press(KeyCode::Char('r')));
    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Char('x')));
    assert!(app.device_list().pending_delete_device().is_some());

    // Device 2 was removed elsewhere before the refresh answered.
    deliver_list(&mut app, &[1], 1);
    drain(&mut rx);

    assert_eq!(app.device_list().pending_delete, None);
    assert!(app.device_list().pending_delete_device().is_none());

    handle_key(&mut app, press(KeyCode::Char('y')));
    assert!(drain(&mut rx)
        .iter()
        .all(|command| !matches!(command, ApiCommand::DeleteDevice { .. })));

    handle_key(&mut app, press(KeyCode::Char('/')));
    assert!(app.device_list().search_focused);
}

#[test]
fn test_confirmed_delete_reloads_current_page() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::Devices);
    deliver_list(&mut app, &[4, 5], 2);
    drain(&mut rx);

    handle_key(&mut app, press(KeyCode::Down));
    handle_key(&mut app, press(KeyCode::Char('x')));
    handle_key(&mut app, press(KeyCode::Char('y')));
    assert!(matches!(
        &drain(&mut rx)[..],
        [ApiCommand::DeleteDevice { id }] if *id == DeviceId(5)
    ));

    let deleted = ApiOutcome::DeviceDeleted {
        id: DeviceId(5),
        result: Ok(()),
    };
    app.on_api_event(event(&app, deleted));
    assert_eq!(app.route(), Route::Devices);
    assert!(matches!(
        &drain(&mut rx)[..],
        [ApiCommand::ListDevices { .. }]
    ));
}

#[test]
fn test_detail_loads_device_and_related_records() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::DeviceDetail(DeviceId(7)));
    let commands = drain(&mut rx);
    assert_eq!(commands.len(), 3);
    assert!(matches!(commands[0], ApiCommand::GetDevice { id } if id == DeviceId(7)));
    assert!(commands
        .iter()
        .any(|c| matches!(c, ApiCommand::ListMaintenance { .. })));
    assert!(commands
        .iter()
        .any(|c| matches!(c, ApiCommand::ListDocuments { .. })));
}

#[test]
fn test_failed_maintenance_load_keeps_specifications() {
    let (mut app, _rx) = make_app();
    app.navigate(Route::DeviceDetail(DeviceId(7)));

    app.on_api_event(event(&app, ApiOutcome::DeviceLoaded(Ok(device(7, "Monitor")))));
    let failure = ApiError::Rejected {
        status: 500,
        payload: None,
    };
    app.on_api_event(event(&app, ApiOutcome::MaintenanceListed(Err(failure))));

    let detail = app.device_detail();
    assert!(matches!(detail.device, Loadable::Loaded(_)));
    assert!(detail.maintenance.is_empty());
    assert!(app.notice().is_none());
}

#[test]
fn test_missing_device_shows_not_found() {
    let (mut app, _rx) = make_app();
    app.navigate(Route::DeviceDetail(DeviceId(99)));

    let missing = ApiError::Rejected {
        status: 404,
        payload: Some(json!({"detail": "Not found."})),
    };
    app.on_api_event(event(&app, ApiOutcome::DeviceLoaded(Err(missing))));

    assert_eq!(
        app.device_detail().device,
        Loadable::Failed("Device not found".to_string())
    );
}

#[test]
fn test_result_for_left_screen_is_ignored() {
    let (mut app, _rx) = make_app();
    app.navigate(Route::DeviceDetail(DeviceId(7)));
    let old_generation = app.scope_generation();

    app.navigate(Route::Devices);
    app.on_api_event(ApiEvent {
        generation: old_generation,
        outcome: ApiOutcome::DeviceDeleted {
            id: DeviceId(7),
            result: Ok(()),
        },
    });

    assert_eq!(app.route(), Route::Devices);
    assert!(app.notice().is_none());
}

#[test]
fn test_edit_prefills_form_from_loaded_device() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::DeviceDetail(DeviceId(7)));
    app.on_api_event(event(&app, ApiOutcome::DeviceLoaded(Ok(device(7, "Monitor")))));
    drain(&mut rx);

    handle_key(&mut app, press(KeyCode::Char('e')));
    assert_eq!(app.route(), Route::EditDevice(DeviceId(7)));
    assert_eq!(app.device_form().phase, FormPhase::Loading);

    app.on_api_event(event(&app, ApiOutcome::DeviceLoaded(Ok(device(7, "Monitor")))));
    let form = app.device_form();
    assert_eq!(form.phase, FormPhase::Editing);
    assert_eq!(form.form.name, "Monitor");
    assert_eq!(form.form.purchase_price, "15999.9");
    assert_eq!(form.form.acquisition_date, "2022-01-10");
}

#[test]
fn test_notice_expires_after_configured_ticks() {
    let (mut app, _rx) = make_app();
    app.show_error("Failed to delete device");
    for _ in 0..7 {
        app.on_tick();
    }
    assert!(app.notice().is_some());
    app.on_tick();
    assert!(app.notice().is_none());
}

#[test]
fn test_detail_delete_needs_loaded_device() {
    let (mut app, mut rx) = make_app();
    app.navigate(Route::DeviceDetail(DeviceId(7)));
    drain(&mut rx);

    app.dispatch_detail(DeviceDetailIntent::RequestDelete);
    app.confirm_detail_delete();
    assert!(drain(&mut rx).is_empty());
}
