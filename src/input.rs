use ggez::input::keyboard::KeyCode;
use ggez::input::mouse::MouseButton;

use crate::geometry::Layout;
use crate::session::GameState;
use crate::snake::Direction;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Command {
    Start,
    Restart,
    Turn(Direction),
}

pub fn key_command(state: GameState, keycode: KeyCode) -> Option<Command> {
    match state {
        GameState::GetReady => match keycode {
            KeyCode::Return | KeyCode::Space => Some(Command::Start),
            _ => None,
        },
        GameState::Playing => direction_for(keycode).map(Command::Turn),
        GameState::GameOver => match keycode {
            KeyCode::Return | KeyCode::Space => Some(Command::Restart),
            _ => None,
        },
    }
}

/// `x`/`y` are window coordinates. On the game-over screen only the start
/// button restarts.
pub fn click_command(
    state: GameState,
    layout: &Layout,
    button: MouseButton,
    x: f32,
    y: f32,
) -> Option<Command> {
    if button != MouseButton::Left {
        return None;
    }
    match state {
        GameState::GetReady => Some(Command::Start),
        GameState::Playing => None,
        GameState::GameOver if layout.start_button().contains(x, y) => Some(Command::Restart),
        GameState::GameOver => None,
    }
}

fn direction_for(keycode: KeyCode) -> Option<Direction> {
    match keycode {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        _ => None,
    }
}
