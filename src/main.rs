use askdata::app::{App, AppMessage};
use askdata::cli::{parse_args, CliCommand, USAGE, VERSION};
use askdata::config::ClientConfig;
use askdata::logging;
use askdata::terminal::{setup_panic_hook, TerminalManager};
use askdata::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

/// Interval between animation ticks.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let overrides = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("askdata {}", VERSION);
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(overrides)) => overrides,
        Err(e) => {
            eprintln!("askdata: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = ClientConfig::from_env().with_overrides(&overrides);
    if let Err(e) = config.validate() {
        eprintln!("askdata: {}", e);
        std::process::exit(2);
    }

    color_eyre::install()?;

    // Logs are optional; the client still runs without them
    if let Some(path) = config.resolved_log_file() {
        if let Err(e) = logging::init_file_logging(&path) {
            eprintln!("askdata: logging disabled ({}): {}", path.display(), e);
        }
    }

    setup_panic_hook();

    info!(version = VERSION, endpoint = %config.endpoint, "starting askdata");

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(&config));

    match &result {
        Ok(()) => info!("exited cleanly"),
        Err(e) => error!(error = %e, "exited with error"),
    }
    result
}

async fn run(config: &ClientConfig) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(config);

    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore();
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }
    }
}
