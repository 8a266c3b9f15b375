mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::ApiConfig;
use controller::AppController;
use model::{AppModel, TmdbClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Movies-RS Client Starting ===");

    let api_config = ApiConfig::from_env()?;
    let client = TmdbClient::new(api_config);

    let mut app_model = AppModel::new();
    app_model.set_gateway(Arc::new(client));

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    // Kick off the one-time home aggregation in the background so the
    // full-screen loading indicator renders while it runs
    let controller_for_init = controller.clone();
    tokio::spawn(async move {
        controller_for_init.load_home().await;
    });

    let res = run_app(&mut terminal, model.clone(), controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Movies-RS Client shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        // Get current state
        let (home_state, search_state, detail_state, view, ui_state, should_quit) = {
            let model_guard = model.lock().await;
            (
                model_guard.get_home_state().await,
                model_guard.get_search_state().await,
                model_guard.get_detail_state().await,
                model_guard.get_view().await,
                model_guard.get_ui_state().await,
                model_guard.should_quit().await,
            )
        };

        // Draw UI
        terminal.draw(|f| {
            AppView::render(f, &home_state, &search_state, &detail_state, view, &ui_state);
        })?;

        // Handle input with shorter poll time for smoother UI updates
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let _ = controller.handle_key_event(key).await;
            }
        }

        if should_quit {
            break;
        }
    }

    Ok(())
}
