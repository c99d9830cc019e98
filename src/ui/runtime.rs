use crate::api::{worker, ApiClient, REQUEST_CHANNEL_CAPACITY};
use crate::config::Config;
use crate::ui::app::{App, Route};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::time::Duration;
use tokio::sync::mpsc;

/// Grace period for in-flight requests after the UI exits.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// Run the terminal client until the user quits.
///
/// Network calls run on a tokio runtime; the UI loop stays on this thread
/// and only ever blocks on its event channel.
pub fn run(config: &Config, start: Route) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api.base_url)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("medtrack-api")
        .build()
        .context("Failed to start async runtime")?;

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);

    let (request_tx, request_rx) = mpsc::channel(REQUEST_CHANNEL_CAPACITY);
    runtime.spawn(worker::run(client.clone(), request_rx, events.sender()));

    let mut app = App::new(config.ui.notice_ticks);
    app.set_command_sender(request_tx);
    app.navigate(start);

    loop {
        terminal.draw(|frame| draw(frame, &app, client.base_url()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            // Layout is recomputed on every draw.
            Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::Api(event)) => app.on_api_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("medtrack stopped");
    Ok(())
}
