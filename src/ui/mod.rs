//! Terminal front end: the render sink and the screens built on it.

pub mod canvas;
pub mod game_common;
pub mod play_scene;
pub mod title_scene;

pub use canvas::PixelCanvas;
pub use play_scene::render_round;
pub use title_scene::{render_game_over, render_title};
