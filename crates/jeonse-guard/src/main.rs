mod cli;
mod config;
mod logging;
mod oneshot;
mod ui;

use crate::cli::Args;
use crate::config::Config;
use crate::logging::{init_tracing, session_span, SessionMode};
use crate::oneshot::run_once;
use crate::ui::{
    draw_ui, finish_session, handle_key_event, restore_terminal, setup_terminal, AppState, Tui,
};
use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event};
use jeonse_core::PriceInput;
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _file_guard = init_tracing(&args.log_dir, args.log_to_stderr)?;

    let config = Config::load(&args.config)
        .with_context(|| format!("failed to load config {}", args.config.display()))?;
    let endpoint = config.search_endpoint();
    let _session = session_span(
        SessionMode::from_once(args.once),
        config.input.step,
        &endpoint,
    )
    .entered();

    if args.once {
        let input = PriceInput::new(args.sale_price, args.deposit);
        let mut stdout = std::io::stdout().lock();
        run_once(input, args.address.as_deref(), &endpoint, &mut stdout)?;
        return Ok(());
    }

    tracing::info!("session started");
    let mut terminal = setup_terminal()?;
    let mut app = AppState::new(config.input.step, endpoint);
    let result = run_session(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);
    tracing::info!("session ended");
    finish_session(result, restored)
}

fn run_session(terminal: &mut Tui, app: &mut AppState) -> anyhow::Result<()> {
    let tick_rate = Duration::from_millis(100);
    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key, app) {
                    break;
                }
            }
        }
    }
    Ok(())
}
