mod audio;
mod config;
mod controller;
mod error;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use rodio::{OutputStream, OutputStreamBuilder};

use view::AppView;
use audio::RodioOutput;
use config::AppConfig;
use controller::AppController;
use model::{fake_data, AppModel};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Appue Starting ===");

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid configuration, using defaults");
        AppConfig::default()
    });
    let tick = Duration::from_millis(config.tick_ms);

    // The stream has to stay alive for as long as anything plays.
    let stream = open_audio_stream();
    let output = RodioOutput::new(
        stream.as_ref().map(|s| s.mixer().clone()),
        config.audio_dir(),
        config.volume,
    );

    let app_model = AppModel::new(fake_data::catalog(), config, Arc::new(output));
    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    controller.load_covers().await;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model.clone(), controller, tick).await;

    // Release any live audio before the stream goes away
    model.lock().await.quit();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    drop(stream);
    tracing::info!("Appue shutting down");
    Ok(())
}

/// `None` when no output device is available; playback then reports
/// "Could not play" instead of aborting startup.
fn open_audio_stream() -> Option<OutputStream> {
    match OutputStreamBuilder::from_default_device().and_then(|b| b.open_stream_or_fallback()) {
        Ok(mut stream) => {
            stream.log_on_drop(false);
            Some(stream)
        }
        Err(e) => {
            tracing::warn!(error = %e, "No audio output device");
            None
        }
    }
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
    tick: Duration,
) -> Result<()> {
    loop {
        let content_rows = AppView::content_rows(terminal.size()?.height);

        // Get current state
        let (view_state, should_quit) = {
            let mut model_guard = model.lock().await;

            model_guard.auto_clear_old_status();
            model_guard.set_viewport_rows(content_rows);

            (model_guard.view_state().await, model_guard.should_quit())
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &view_state);
        })?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
