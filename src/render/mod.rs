//! Draw commands derived from round state.
//!
//! The simulation never draws. After each tick the shell asks for a draw list
//! and hands it to whatever implements [`RenderSink`].

pub mod sprites;

pub use sprites::{EntitySprite, PixelMask, BIRD_DOWN, BIRD_UP};

use crate::constants::{SCORE_BOX_HEIGHT, SCORE_BOX_WIDTH, SCORE_DIGITS_X, SCORE_LABEL};
use crate::sim::round::Round;
use crate::sim::types::Facing;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Outline only.
    Transparent,
    Solid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    BirdUp,
    BirdDown,
}

impl SpriteKind {
    pub fn for_facing(facing: Facing) -> Self {
        match facing {
            Facing::Up => SpriteKind::BirdUp,
            Facing::Down => SpriteKind::BirdDown,
        }
    }

    pub fn mask(self) -> &'static EntitySprite {
        match self {
            SpriteKind::BirdUp => &BIRD_UP,
            SpriteKind::BirdDown => &BIRD_DOWN,
        }
    }
}

/// One primitive in field pixel coordinates, origin top-left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill: Fill,
    },
    Sprite {
        x: i32,
        y: i32,
        sprite: SpriteKind,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
    },
}

/// Anything that can display a frame's draw list.
pub trait RenderSink {
    fn submit(&mut self, commands: &[DrawCommand]);
}

/// Build the draw list for the current state of a round.
///
/// Order: field border, tubes (lower then upper pillar), entity sprite, score box.
pub fn draw_list<R: Rng>(round: &Round<R>) -> Vec<DrawCommand> {
    let field = round.field();
    let geometry = round.geometry();
    let tube_width = geometry.width as i32;
    let mut commands = Vec::with_capacity(4 + round.obstacles().len() * 2);

    commands.push(DrawCommand::Rect {
        x: 0,
        y: 0,
        width: field.width - 1,
        height: field.height - 1,
        fill: Fill::Transparent,
    });

    for tube in round.obstacles().iter().filter(|t| t.is_live()) {
        let x = tube.x as i32;
        commands.push(DrawCommand::Rect {
            x,
            y: geometry.lower_pillar_top(field, tube.gap_height),
            width: tube_width,
            height: tube.gap_height,
            fill: Fill::Solid,
        });
        commands.push(DrawCommand::Rect {
            x,
            y: 0,
            width: tube_width,
            height: geometry.upper_pillar_bottom(field, tube.gap_height),
            fill: Fill::Solid,
        });
    }

    let entity = round.entity();
    commands.push(DrawCommand::Sprite {
        x: entity.x as i32,
        y: entity.y as i32,
        sprite: SpriteKind::for_facing(entity.facing),
    });

    commands.push(DrawCommand::Rect {
        x: 0,
        y: 0,
        width: SCORE_BOX_WIDTH,
        height: SCORE_BOX_HEIGHT,
        fill: Fill::Transparent,
    });
    commands.push(DrawCommand::Text {
        x: 0,
        y: 0,
        text: SCORE_LABEL.to_string(),
    });
    commands.push(DrawCommand::Text {
        x: SCORE_DIGITS_X,
        y: 0,
        text: round.score().to_string(),
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::round::TickInput;
    use crate::sim::types::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_round() -> Round<ChaCha8Rng> {
        Round::new(
            GameConfig::default().round_settings(),
            ChaCha8Rng::seed_from_u64(3),
        )
    }

    #[test]
    fn test_draw_list_layout() {
        let round = new_round();
        let commands = draw_list(&round);
        // border + 3 tubes * 2 + sprite + score box + 2 texts
        assert_eq!(commands.len(), 1 + 6 + 1 + 3);
        assert_eq!(
            commands[0],
            DrawCommand::Rect {
                x: 0,
                y: 0,
                width: 83,
                height: 47,
                fill: Fill::Transparent
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Rect {
                x: 94,
                y: 27,
                width: 5,
                height: 20,
                fill: Fill::Solid
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Rect {
                x: 94,
                y: 0,
                width: 5,
                height: 12,
                fill: Fill::Solid
            }
        );
        assert_eq!(
            commands[7],
            DrawCommand::Sprite {
                x: 42,
                y: 24,
                sprite: SpriteKind::BirdDown
            }
        );
        assert_eq!(
            commands[10],
            DrawCommand::Text {
                x: 36,
                y: 0,
                text: "0".to_string()
            }
        );
    }

    #[test]
    fn test_sprite_follows_facing() {
        let mut round = new_round();
        round.tick(TickInput::steer(Direction::N));
        let commands = draw_list(&round);
        assert!(commands.contains(&DrawCommand::Sprite {
            x: 42,
            y: 23,
            sprite: SpriteKind::BirdUp
        }));
    }

    #[test]
    fn test_sprite_kind_masks() {
        assert_eq!(SpriteKind::BirdUp.mask(), &BIRD_UP);
        assert_eq!(SpriteKind::for_facing(Facing::Down), SpriteKind::BirdDown);
    }

    struct CountingSink {
        frames: usize,
        commands: usize,
    }

    impl RenderSink for CountingSink {
        fn submit(&mut self, commands: &[DrawCommand]) {
            self.frames += 1;
            self.commands += commands.len();
        }
    }

    #[test]
    fn test_sink_receives_draw_list() {
        let round = new_round();
        let mut sink = CountingSink {
            frames: 0,
            commands: 0,
        };
        sink.submit(&draw_list(&round));
        assert_eq!(sink.frames, 1);
        assert_eq!(sink.commands, 11);
    }
}
