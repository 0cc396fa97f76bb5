use anyhow::Context;
use catalog_core::{update, AppState, Msg};
use catalog_logging::{catalog_info, catalog_warn};
use crossterm::event::{self, Event};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::input::{map_key, UiCommand};
use super::logging::{self, LOG_FILENAME};
use super::terminal::{setup_terminal, Tui};
use super::ui;
use super::ui::scroll::TableScroll;

pub fn run_app() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let loaded = config::load_config(&cwd);
    let config = loaded.as_ref().cloned().unwrap_or_else(|_| AppConfig::default());

    logging::initialize(config.log_destination, &cwd.join(LOG_FILENAME));
    if let Err(err) = &loaded {
        catalog_warn!("{}; using default configuration", err);
    }

    let page_size = config.page_size()?;
    let mut runner =
        EffectRunner::new(config.engine_config()).context("starting fetch engine")?;

    let (mut terminal, guard) = setup_terminal().context("setting up terminal")?;
    let result = event_loop(&mut terminal, &runner, AppState::with_page_size(page_size));
    drop(guard);

    // Anything still in flight is discarded with the engine.
    runner.shutdown();
    catalog_info!("Exiting");
    result
}

fn event_loop(terminal: &mut Tui, runner: &EffectRunner, initial: AppState) -> anyhow::Result<()> {
    let mut state = initial;
    let mut scroll = TableScroll::default();
    let mut force_redraw = true;
    dispatch(&mut state, runner, Msg::Mounted);

    loop {
        for msg in runner.drain() {
            dispatch(&mut state, runner, msg);
        }

        if state.consume_dirty() || force_redraw {
            let view = state.view();
            terminal.draw(|frame| ui::render::render(frame, &view, &mut scroll))?;
            force_redraw = false;
        }

        if !event::poll(ui::constants::TICK_INTERVAL)? {
            dispatch(&mut state, runner, Msg::Tick);
            continue;
        }
        match event::read()? {
            Event::Key(key) => match map_key(key, &state.view()) {
                Some(UiCommand::Quit) => return Ok(()),
                Some(UiCommand::Dispatch(msg)) => dispatch(&mut state, runner, msg),
                Some(UiCommand::ScrollUp) => {
                    scroll.scroll_up();
                    force_redraw = true;
                }
                Some(UiCommand::ScrollDown) => {
                    scroll.scroll_down();
                    force_redraw = true;
                }
                None => {}
            },
            Event::Resize(..) => force_redraw = true,
            _ => {}
        }
    }
}

fn dispatch(state: &mut AppState, runner: &EffectRunner, msg: Msg) {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.enqueue(effects);
}
