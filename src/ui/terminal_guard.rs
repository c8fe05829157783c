//! Raw mode and alternate screen for the lifetime of the browser.

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back exactly once: on [`restore`](Self::restore), on
/// drop, or from the panic hook if the UI thread panics first.
pub struct TerminalGuard {
    active: Arc<AtomicBool>,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<(CrosstermTerminal, Self)> {
        enable_raw_mode()?;
        let guard = Self {
            active: Arc::new(AtomicBool::new(true)),
        };
        guard.install_panic_hook();

        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(Hide)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok((terminal, guard))
    }

    pub fn restore(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            leave_terminal();
        }
    }

    fn install_panic_hook(&self) {
        let active = Arc::clone(&self.active);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if active.swap(false, Ordering::SeqCst) {
                leave_terminal();
            }
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

fn leave_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}
