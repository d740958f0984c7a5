//! Keyboard input for the terminal shell.
//!
//! Terminals report key presses, not held keys, so steering is latched between
//! ticks: every press in a tick window contributes its axis, and the latch is
//! drained into one `Direction` when the tick runs.

use crate::sim::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Axis signs; `dy < 0` is north.
    Steer { dx: i8, dy: i8 },
    Start,
    Stop,
    Quit,
    Other,
}

/// Map a key event. Releases carry no action.
pub fn map_key(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => KeyAction::Steer { dx: 0, dy: -1 },
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => KeyAction::Steer { dx: 0, dy: 1 },
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => KeyAction::Steer { dx: -1, dy: 0 },
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => KeyAction::Steer { dx: 1, dy: 0 },
        KeyCode::Home => KeyAction::Steer { dx: -1, dy: -1 },
        KeyCode::PageUp => KeyAction::Steer { dx: 1, dy: -1 },
        KeyCode::End => KeyAction::Steer { dx: -1, dy: 1 },
        KeyCode::PageDown => KeyAction::Steer { dx: 1, dy: 1 },
        KeyCode::Char(' ') | KeyCode::Enter => KeyAction::Start,
        KeyCode::Esc => KeyAction::Stop,
        KeyCode::Char('q') | KeyCode::Char('Q') => KeyAction::Quit,
        _ => KeyAction::Other,
    }
}

/// Whether a key ends the game-over hold early. Steering keys are ignored since
/// they are usually still held (or auto-repeating) from the round that just ended.
pub fn skips_game_over(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release && !matches!(map_key(key), KeyAction::Steer { .. })
}

/// Steering collected since the last tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SteerLatch {
    dx: i8,
    dy: i8,
}

impl SteerLatch {
    /// Later presses on the same axis replace earlier ones; a zero axis leaves it alone.
    pub fn press(&mut self, dx: i8, dy: i8) {
        if dx != 0 {
            self.dx = dx.signum();
        }
        if dy != 0 {
            self.dy = dy.signum();
        }
    }

    pub fn peek(&self) -> Direction {
        Direction::from_axes(self.dx, self.dy)
    }

    /// Drain the latch into this tick's direction.
    pub fn take(&mut self) -> Direction {
        let direction = self.peek();
        *self = Self::default();
        direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_steer() {
        assert_eq!(map_key(&press(KeyCode::Up)), KeyAction::Steer { dx: 0, dy: -1 });
        assert_eq!(map_key(&press(KeyCode::Char('d'))), KeyAction::Steer { dx: 1, dy: 0 });
        assert_eq!(map_key(&press(KeyCode::PageDown)), KeyAction::Steer { dx: 1, dy: 1 });
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(&press(KeyCode::Esc)), KeyAction::Stop);
        assert_eq!(map_key(&press(KeyCode::Char(' '))), KeyAction::Start);
        assert_eq!(map_key(&press(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(
            map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
        assert_eq!(map_key(&press(KeyCode::Tab)), KeyAction::Other);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Up);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key), KeyAction::Other);
    }

    #[test]
    fn test_steering_does_not_skip_game_over() {
        assert!(!skips_game_over(&press(KeyCode::Down)));
        assert!(!skips_game_over(&press(KeyCode::Char('w'))));
        assert!(!skips_game_over(&press(KeyCode::PageUp)));

        let mut release = press(KeyCode::Char(' '));
        release.kind = KeyEventKind::Release;
        assert!(!skips_game_over(&release));

        assert!(skips_game_over(&press(KeyCode::Char(' '))));
        assert!(skips_game_over(&press(KeyCode::Esc)));
        assert!(skips_game_over(&press(KeyCode::Tab)));
    }

    #[test]
    fn test_latch_combines_axes() {
        let mut latch = SteerLatch::default();
        latch.press(0, -1);
        latch.press(1, 0);
        assert_eq!(latch.take(), Direction::NE);
        assert_eq!(latch.take(), Direction::None);
    }

    #[test]
    fn test_latch_last_press_wins_per_axis() {
        let mut latch = SteerLatch::default();
        latch.press(0, -1);
        latch.press(0, 1);
        assert_eq!(latch.peek(), Direction::S);
        latch.press(-1, -1);
        assert_eq!(latch.take(), Direction::NW);
    }
}
