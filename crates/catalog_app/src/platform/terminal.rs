//! Terminal setup and teardown.
//!
//! Raw mode and the alternate screen are undone on drop of the guard and on
//! panic, so a crash never leaves the shell unusable.

use std::io::{self, Stdout};
use std::sync::{Arc, Mutex};

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

type Cleanup = Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>;

pub(crate) struct TerminalGuard {
    cleanup: Cleanup,
}

impl TerminalGuard {
    fn new() -> Self {
        let restore: Box<dyn FnOnce() + Send + 'static> = Box::new(restore);
        let cleanup: Cleanup = Arc::new(Mutex::new(Some(restore)));
        let hook_cleanup = Arc::clone(&cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            run_cleanup(&hook_cleanup);
            default_hook(info);
        }));
        Self { cleanup }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        run_cleanup(&self.cleanup);
    }
}

pub(crate) fn setup_terminal() -> io::Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new();

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

fn run_cleanup(cleanup: &Cleanup) {
    if let Ok(mut slot) = cleanup.lock() {
        if let Some(cleanup) = slot.take() {
            cleanup();
        }
    }
}

fn restore() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}
