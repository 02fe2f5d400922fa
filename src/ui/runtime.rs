use crate::api::CatalogApi;
use crate::config::AppConfig;
use crate::ui::app::App;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::io;
use std::sync::Arc;
use tokio::time::MissedTickBehavior;

/// Runs the interactive browser until the user quits.
pub async fn run(config: &AppConfig, api: Arc<dyn CatalogApi>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let (mut app, mut completions) = App::new(api);
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(config.tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(base_url = %config.base_url, "Starting catalog browser");
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            _ = ticker.tick() => app.on_tick(),
            Some(completion) = completions.recv() => app.on_completion(completion),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key)
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::error!("Terminal event stream failed: {}", e);
                    break;
                }
                None => break,
            },
        }
    }

    drop(guard);
    tracing::info!("Catalog browser closed");
    Ok(())
}
