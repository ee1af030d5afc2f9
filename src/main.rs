use plaza::app::{App, AppMessage};
use plaza::cli::{parse_args, usage, version_string, CliCommand};
use plaza::logging::init_logging;
use plaza::startup::{spawn_seed_loader, AppConfig};
use plaza::terminal::{setup_panic_hook, TerminalManager};
use plaza::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind, MouseButton, MouseEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("{}", version_string());
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", usage());
            return Ok(());
        }
        Ok(CliCommand::RunTui(options)) => options,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, usage());
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = options.apply(AppConfig::from_env());
    if let Some(path) = init_logging(&config) {
        tracing::info!("plaza {} starting, logging to {}", plaza::cli::VERSION, path.display());
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let mut term_manager = TerminalManager::new(config.mouse)?;
    let mut app = App::new();

    let loader = spawn_seed_loader(config.seed_path.clone(), app.message_tx.clone());
    let result = run_app(term_manager.terminal(), &mut app, config.tick_rate).await;

    loader.abort();
    term_manager.restore()?;
    tracing::info!("plaza exiting");
    result
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let tick = tokio::time::sleep(tick_rate);

        tokio::select! {
            _ = tick => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(event)) => handle_event(app, event),
                    Some(Err(e)) => tracing::warn!("terminal event error: {}", e),
                    // Input stream closed
                    None => app.quit(),
                }
            }

            Some(msg) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_event(app: &mut App, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if let Some(action) = app.action_for_key(key) {
                app.dispatch(action);
            }
        }
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            if let Some(action) = app.action_for_click(mouse.column, mouse.row) {
                app.dispatch(action);
            }
        }
        Event::Resize(_, _) => app.mark_dirty(),
        _ => {}
    }
}
