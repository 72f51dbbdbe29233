//! Terminal raycaster runner (default binary).
//!
//! One command per frame: poll a key, step the session, render through the
//! sink for the active shading mode, print the status line, then sleep out
//! the rest of the frame budget.

use std::thread;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use tui_raycaster::config::{AppConfig, Args};
use tui_raycaster::engine::{Session, StepOutcome};
use tui_raycaster::input::{command_for_key, should_quit, KeyPoller, TerminalKeys};
use tui_raycaster::logging;
use tui_raycaster::term::{AsciiSink, ColorSink, FrameBuffer, FrameStats, TerminalRenderer};
use tui_raycaster::types::ShadeMode;

fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args).context("loading configuration")?;
    logging::init(&config.log)?;

    info!(
        config = ?config.source,
        width = config.session.view.width,
        height = config.session.view.height,
        target_fps = config.target_fps,
        "starting"
    );

    let mut session = Session::new(config.map.clone(), config.spawn, config.session)
        .context("creating session")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config, &mut TerminalKeys);

    // Always try to restore terminal state.
    let _ = term.exit();

    match &result {
        Ok(()) => info!(frames = session.frame(), "exiting"),
        Err(e) => error!(error = %e, "exiting with error"),
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    config: &AppConfig,
    keys: &mut dyn KeyPoller,
) -> Result<()> {
    let view = config.session.view;
    let budget = config.frame_budget();
    let started = Instant::now();

    let mut fb = FrameBuffer::new(view.width, view.height);
    let mut stats = FrameStats::default();
    let mut status = String::with_capacity(128);
    let mut last_command = None;

    loop {
        let frame_start = Instant::now();

        let key = keys.poll_key()?;
        if key.is_some_and(should_quit) {
            return Ok(());
        }

        let command = key.and_then(command_for_key);
        last_command = command.or(last_command);
        if let StepOutcome::ShadingToggled(mode) = session.step(command) {
            info!(mode = mode.as_str(), "shading mode changed");
        }

        match session.mode() {
            ShadeMode::Ascii => session.render(&mut AsciiSink::new(&mut fb, term))?,
            ShadeMode::Color => session.render(&mut ColorSink::new(term))?,
        }

        stats.record_frame(started.elapsed().as_millis() as u64);
        stats.write_status(&mut status, &session.pose(), session.mode(), last_command);
        term.queue_line(view.height, "")?;
        term.queue_line(view.height.saturating_add(1), &status)?;
        term.present()?;

        if let Some(rest) = budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
