//! Postboard - Actor-based users/posts/comments client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP execution

use std::io;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use postboard::constants::LOG_FILTER_ENV_VAR;
use postboard::messages::ui_events::key_to_ui_event;
use postboard::ui::{draw_ui, mouse_to_ui_events, PointerListeners, Regions, UserSelectorView};
use postboard::{
    AppActor, Cli, Config, HttpGateway, NetworkActor, NetworkCommand, NetworkResponse,
    RenderState, UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli).context("failed to load configuration")?;

    // Initialize logging to file
    let dir = config
        .log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = config
        .log_file
        .file_name()
        .context("log file path has no file name")?;
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, _log_guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();

    tracing::info!(base_url = %config.base_url, timeout = ?config.timeout, "Starting");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let gateway = HttpGateway::new(config.base_url.clone(), config.timeout);
    let network_actor = NetworkActor::new(gateway, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    tracing::info!("Exiting");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut regions = Regions::new();
    let mut listeners = PointerListeners::new();
    let selector = UserSelectorView::mount(&mut listeners);

    let result = loop {
        // Draw with current state
        if let Err(e) = terminal.draw(|f| draw_ui(f, &current_state, &mut regions)) {
            break Err(e.into());
        }

        // Poll for events with timeout
        match poll_events(&current_state, &listeners, &regions) {
            Ok(events) => {
                let quit = events.iter().any(|e| matches!(e, UiEvent::Quit));
                for event in events {
                    let _ = ui_tx.send(event);
                }
                if quit {
                    break Ok(());
                }
            }
            Err(e) => break Err(e),
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    };

    selector.unmount(&mut listeners);
    result
}

fn poll_events(
    state: &RenderState,
    listeners: &PointerListeners,
    regions: &Regions,
) -> anyhow::Result<Vec<UiEvent>> {
    if !event::poll(Duration::from_millis(50))? {
        return Ok(Vec::new());
    }
    let events = match event::read()? {
        Event::Key(key) => key_to_ui_event(key, state).into_iter().collect(),
        Event::Mouse(mouse) => mouse_to_ui_events(&mouse, listeners, regions),
        _ => Vec::new(),
    };
    Ok(events)
}
