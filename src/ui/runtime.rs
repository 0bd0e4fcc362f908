use crate::config::Config;
use crate::provider::GiphyClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

/// Run the interactive storefront until the user quits.
///
/// Searches are spawned on `runtime`; their results come back through the
/// same channel as key presses, so all state changes happen on this thread.
pub fn run(
    config: Config,
    client: Arc<GiphyClient>,
    runtime: Handle,
    initial_query: Option<String>,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, client, runtime, events.sender());
    info!("Storefront started");

    if let Some(query) = initial_query {
        app.search_for(&query);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::SearchCompleted {
                request_id,
                outcome,
            }) => app.on_search_completed(request_id, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    app.shutdown();
    drop(guard);
    info!("Storefront stopped");
    Ok(())
}
