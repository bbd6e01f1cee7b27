pub mod components;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use crate::error::Result;
use crate::report::Report;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use screens::ReportScreen;
use std::io;
use std::time::Duration;

/// Show the report full-screen until the user presses q or Esc.
pub fn show_report(report: &Report<'_>, degraded_below: u8, healthy_at_least: u8) -> Result<()> {
    with_restore(enable_raw_mode, disable_raw_mode, || {
        with_restore(
            || execute!(io::stdout(), EnterAlternateScreen),
            || execute!(io::stdout(), LeaveAlternateScreen),
            || {
                let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
                let result = run_report(&mut terminal, report, degraded_below, healthy_at_least);
                terminal.show_cursor()?;
                result
            },
        )
    })
}

/// Run `body` after `setup`, then `restore` whenever `setup` succeeded.
/// The body's error wins over a restore error.
fn with_restore<T>(
    setup: impl FnOnce() -> io::Result<()>,
    restore: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T>,
) -> Result<T> {
    setup()?;
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn run_report(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    report: &Report<'_>,
    degraded_below: u8,
    healthy_at_least: u8,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let screen = ReportScreen::new(report).thresholds(degraded_below, healthy_at_least);
            f.render_widget(screen, f.area());
        })?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Ai4FarmError;
    use std::cell::Cell;

    #[test]
    fn restore_runs_when_body_fails() {
        let restored = Cell::new(false);
        let result: Result<()> = with_restore(
            || Ok(()),
            || {
                restored.set(true);
                Ok(())
            },
            || Err(Ai4FarmError::Terminal("no backend".into())),
        );
        assert!(restored.get());
        assert!(matches!(result, Err(Ai4FarmError::Terminal(_))));
    }

    #[test]
    fn nested_setup_failure_still_restores_outer() {
        let outer_restored = Cell::new(false);
        let inner_restored = Cell::new(false);
        let result: Result<()> = with_restore(
            || Ok(()),
            || {
                outer_restored.set(true);
                Ok(())
            },
            || {
                with_restore(
                    || Err(io::Error::other("alternate screen")),
                    || {
                        inner_restored.set(true);
                        Ok(())
                    },
                    || Ok(()),
                )
            },
        );
        assert!(matches!(result, Err(Ai4FarmError::Io(_))));
        assert!(outer_restored.get());
        assert!(!inner_restored.get());
    }

    #[test]
    fn restore_error_surfaces_after_success() {
        let result = with_restore(|| Ok(()), || Err(io::Error::other("restore")), || Ok(7));
        assert!(matches!(result, Err(Ai4FarmError::Io(_))));
    }
}
