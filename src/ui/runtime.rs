use crate::catalog::{CatalogApi, CatalogWorker, StoreClient};
use crate::config::Config;
use crate::images::{HttpImageSource, ImageSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::Arc;
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("fakestore-net")
        .build()
        .context("Failed to start async runtime")?;

    let api: Arc<dyn CatalogApi> = Arc::new(StoreClient::new(&config.api)?);
    let images: Arc<dyn ImageSource> =
        Arc::new(HttpImageSource::new(&config.api).context("Failed to build image client")?);

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE);
    let outcome_tx = events.sender();
    let fetch_sender = CatalogWorker::spawn(runtime.handle(), api, images, move |outcome| {
        let _ = outcome_tx.send(AppEvent::Fetch(outcome));
    });

    let mut app = App::new(&config.display);
    app.set_fetch_sender(fetch_sender);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(base_url = %config.api.base_url, "Storefront started");
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Fetch(outcome)) => app.on_fetch_outcome(outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(app);
    drop(guard);
    // In-flight requests are abandoned
    runtime.shutdown_timeout(Duration::from_millis(200));
    tracing::info!("Storefront stopped");
    Ok(())
}
