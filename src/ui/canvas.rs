//! Terminal render sink: rasterises draw commands into a pixel grid.
//!
//! Two pixel rows share one terminal cell through half-block glyphs, so an
//! 84x48 field fits in 84 columns by 24 rows.

use crate::render::{DrawCommand, Fill, RenderSink};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Pixels per text character when mapping `Text` commands onto cells.
const GLYPH_WIDTH_PX: i32 = 5;

/// Monochrome frame buffer sized to the field.
pub struct PixelCanvas {
    width: i32,
    height: i32,
    pixels: Vec<bool>,
    /// `(cell column, cell row, text)` overlays.
    texts: Vec<(usize, usize, String)>,
}

impl PixelCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![false; (width * height) as usize],
            texts: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = false);
        self.texts.clear();
    }

    /// Terminal rows needed to show the whole canvas.
    pub fn cell_rows(&self) -> usize {
        (self.height as usize).div_ceil(2)
    }

    /// Out-of-bounds reads are clear.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.pixels[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = true;
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            None
        } else {
            Some((y * self.width + x) as usize)
        }
    }

    /// Covers columns `x..x+width` and rows `y..y+height`.
    fn rect(&mut self, x: i32, y: i32, width: i32, height: i32, fill: Fill) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (right, bottom) = (x + width - 1, y + height - 1);
        for py in y..=bottom {
            for px in x..=right {
                let edge = px == x || px == right || py == y || py == bottom;
                if fill == Fill::Solid || edge {
                    self.set(px, py);
                }
            }
        }
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Rect {
                x,
                y,
                width,
                height,
                fill,
            } => self.rect(*x, *y, *width, *height, *fill),
            DrawCommand::Sprite { x, y, sprite } => {
                for (col, row) in sprite.mask().lit() {
                    self.set(x + col as i32, y + row as i32);
                }
            }
            DrawCommand::Text { x, y, text } => {
                let col = (1 + x / GLYPH_WIDTH_PX).max(0) as usize;
                let row = (1 + y / 2).max(0) as usize;
                self.texts.push((col, row, text.clone()));
            }
        }
    }

    /// One string per terminal row, text overlays applied.
    pub fn to_rows(&self) -> Vec<String> {
        let mut rows: Vec<Vec<char>> = (0..self.cell_rows())
            .map(|row| {
                let top = row as i32 * 2;
                (0..self.width)
                    .map(|x| match (self.get(x, top), self.get(x, top + 1)) {
                        (true, true) => '█',
                        (true, false) => '▀',
                        (false, true) => '▄',
                        (false, false) => ' ',
                    })
                    .collect()
            })
            .collect();

        for (col, row, text) in &self.texts {
            if let Some(cells) = rows.get_mut(*row) {
                for (offset, ch) in text.chars().enumerate() {
                    if let Some(cell) = cells.get_mut(col + offset) {
                        *cell = ch;
                    }
                }
            }
        }

        rows.into_iter().map(|cells| cells.into_iter().collect()).collect()
    }

    pub fn to_lines(&self, color: Color) -> Vec<Line<'static>> {
        self.to_rows()
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(color))))
            .collect()
    }
}

impl RenderSink for PixelCanvas {
    fn submit(&mut self, commands: &[DrawCommand]) {
        self.clear();
        for command in commands {
            self.draw(command);
        }
    }
}
