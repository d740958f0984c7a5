//! Start and game-over screens.

use crate::sim::round::EndReason;
use crate::ui::game_common::render_overlay;
use ratatui::{layout::Rect, style::Color, Frame};

/// Waiting for the start button.
pub fn render_title(frame: &mut Frame, area: Rect, last_score: Option<u32>) {
    let message = match last_score {
        Some(score) => format!("Last score: {}", score),
        None => "Steer through the gaps. Each tube cleared scores a point.".to_string(),
    };
    render_overlay(
        frame,
        area,
        Color::Cyan,
        "Press Space to start",
        &message,
        "[Space/Enter] Start  [q] Quit",
    );
}

/// Shown for a short hold after a round ends.
pub fn render_game_over(frame: &mut Frame, area: Rect, score: u32, reason: EndReason) {
    let (color, detail) = match reason {
        EndReason::Collision(_) => (Color::Red, "You hit a tube"),
        EndReason::Stopped => (Color::Gray, "Round stopped"),
    };
    render_overlay(
        frame,
        area,
        color,
        "Game Over",
        &format!("{}. Score: {}", detail, score),
        "[Space/Enter] Continue",
    );
}
