//! Interactive terminal session over a playground.

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use log::{debug, error, info, trace};

use crate::app::Playground;
use crate::error::DemoError;
use crate::terminal::TerminalGuard;

const HELP: &str = "Tab/Shift-Tab: focus  Space: toggle  i: indeterminate  q/Esc: quit";

/// What the session does with one key press before the host sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    ToggleIndeterminate,
    Forward,
}

fn command_for(key: &KeyEvent) -> Command {
    if key.kind != KeyEventKind::Press {
        return Command::Forward;
    }
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char('i') => Command::ToggleIndeterminate,
        _ => Command::Forward,
    }
}

fn screen(playground: &Playground) -> Result<Vec<String>, DemoError> {
    let mut lines = vec!["toggles playground".to_string(), String::new()];
    lines.extend(playground.preview()?);
    lines.push(String::new());
    lines.push(HELP.to_string());
    Ok(lines)
}

/// Run until the user quits or the event stream ends.
pub async fn run(mut playground: Playground) -> Result<(), DemoError> {
    let mut terminal = TerminalGuard::new()?;
    let mut events = EventStream::new();
    info!("[session] started");

    terminal.draw(&screen(&playground)?)?;

    while let Some(event) = events.next().await {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                error!("[session] event stream error: {e}");
                continue;
            }
        };
        trace!("[session] {event:?}");

        if let Event::Key(key) = &event {
            match command_for(key) {
                Command::Quit => break,
                Command::ToggleIndeterminate => {
                    if !playground.toggle_indeterminate()? {
                        debug!("[session] indeterminate needs a focused checkbox");
                    }
                    terminal.draw(&screen(&playground)?)?;
                    continue;
                }
                Command::Forward => {}
            }
        }

        playground.handle_terminal_events(std::slice::from_ref(&event))?;
        terminal.draw(&screen(&playground)?)?;
    }

    info!("[session] finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_commands() {
        assert_eq!(command_for(&press(KeyCode::Char('q'))), Command::Quit);
        assert_eq!(command_for(&press(KeyCode::Esc)), Command::Quit);
        assert_eq!(
            command_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Command::Quit
        );
        assert_eq!(
            command_for(&press(KeyCode::Char('i'))),
            Command::ToggleIndeterminate
        );
        assert_eq!(command_for(&press(KeyCode::Char(' '))), Command::Forward);
        assert_eq!(command_for(&press(KeyCode::Tab)), Command::Forward);
    }
}
