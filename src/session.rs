use crate::models::{AppState, ViewerSession};
use crate::navigation::Movement;
use crate::ui::{ViewerLayout, hit};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerCommand {
    Advance,
    Retreat,
    Quit,
}

pub fn command_for_key(key: KeyEvent) -> Option<ViewerCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ViewerCommand::Quit)
        }
        KeyCode::Char(' ') | KeyCode::Right => Some(ViewerCommand::Advance),
        KeyCode::Left => Some(ViewerCommand::Retreat),
        KeyCode::Esc => Some(ViewerCommand::Quit),
        _ => None,
    }
}

pub fn command_for_click(mouse: MouseEvent, layout: &ViewerLayout) -> Option<ViewerCommand> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }

    if hit(layout.next_button, mouse.column, mouse.row) {
        Some(ViewerCommand::Advance)
    } else if hit(layout.prev_button, mouse.column, mouse.row) {
        Some(ViewerCommand::Retreat)
    } else {
        None
    }
}

impl ViewerSession {
    /// Runs one command. Returns the movement made, if any; a
    /// [`Movement::Wrapped`] is the caller's cue to ring the bell.
    pub fn apply(&mut self, command: ViewerCommand) -> Option<Movement> {
        self.wrap_notice = false;

        match command {
            ViewerCommand::Advance => {
                let movement = self.controller.advance();
                self.wrap_notice = movement == Movement::Wrapped;
                Some(movement)
            }
            ViewerCommand::Retreat => {
                self.controller.retreat();
                Some(Movement::Moved)
            }
            ViewerCommand::Quit => {
                tracing::info!(cursor = self.controller.cursor(), "quit requested");
                self.state = AppState::Quit;
                None
            }
        }
    }
}

pub fn handle_viewer_input(session: &mut ViewerSession, key: KeyEvent) -> Option<Movement> {
    command_for_key(key).and_then(|command| session.apply(command))
}

pub fn handle_viewer_click(
    session: &mut ViewerSession,
    mouse: MouseEvent,
    layout: &ViewerLayout,
) -> Option<Movement> {
    command_for_click(mouse, layout).and_then(|command| session.apply(command))
}
