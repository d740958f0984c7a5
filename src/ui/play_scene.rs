//! The in-round screen: play field, status bar and info panel.

use crate::render::{draw_list, RenderSink};
use crate::sim::round::Round;
use crate::ui::canvas::PixelCanvas;
use crate::ui::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_status_bar,
};
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const INFO_PANEL_WIDTH: u16 = 22;

/// Render a running round.
pub fn render_round<R: Rng>(frame: &mut Frame, area: Rect, round: &Round<R>, seed: u64) {
    let field = round.field();
    let mut canvas = PixelCanvas::new(field.width, field.height);
    canvas.submit(&draw_list(round));

    let layout = create_game_layout(
        frame,
        area,
        " Tubes ",
        Color::Cyan,
        canvas.cell_rows() as u16,
        INFO_PANEL_WIDTH,
    );

    frame.render_widget(Paragraph::new(canvas.to_lines(Color::Green)), layout.content);

    render_status_bar(
        frame,
        layout.status_bar,
        &format!("Score: {}", round.score()),
        Color::Green,
        &[("[Arrows/WASD]", "Steer"), ("[Esc]", "Stop")],
    );
    render_info_panel(frame, layout.info_panel, round, seed);
}

fn render_info_panel<R: Rng>(frame: &mut Frame, area: Rect, round: &Round<R>, seed: u64) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let live = round.obstacles().iter().filter(|t| t.is_live()).count();
    let entity = round.entity();
    let lines = vec![
        Line::from(Span::styled(
            " Round ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Score", round.score().to_string(), Color::White),
        info_line("Cleared", round.passed().len().to_string(), Color::Yellow),
        info_line("Tubes", live.to_string(), Color::Green),
        info_line("Ticks", round.tick_count().to_string(), Color::Gray),
        Line::from(""),
        info_line(
            "Pos",
            format!("{:.0},{:.0}", entity.x, entity.y),
            Color::Gray,
        ),
        info_line("Seed", seed.to_string(), Color::DarkGray),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
