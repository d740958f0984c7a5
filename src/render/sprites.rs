//! Monochrome sprites as typed pixel masks.

/// Fixed-size grid of lit pixels, `W` columns by `H` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelMask<const W: usize, const H: usize> {
    rows: [[bool; W]; H],
}

impl<const W: usize, const H: usize> PixelMask<W, H> {
    /// Build a mask from art rows separated by newlines: `#` is lit, `.` is clear.
    ///
    /// Panics (at compile time when used in a const) if the art is not exactly `W` x `H`.
    pub const fn from_art(art: &str) -> Self {
        let bytes = art.as_bytes();
        let mut rows = [[false; W]; H];
        let (mut row, mut col, mut i) = (0, 0, 0);
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    if col != W {
                        panic!("sprite row has the wrong width");
                    }
                    row += 1;
                    col = 0;
                }
                b'#' | b'.' => {
                    if row >= H || col >= W {
                        panic!("sprite art is larger than its mask");
                    }
                    rows[row][col] = bytes[i] == b'#';
                    col += 1;
                }
                _ => panic!("sprite art may only contain '#', '.' and newlines"),
            }
            i += 1;
        }
        if row != H - 1 || col != W {
            panic!("sprite art has the wrong number of rows");
        }
        Self { rows }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    pub fn get(&self, col: usize, row: usize) -> bool {
        row < H && col < W && self.rows[row][col]
    }

    /// `(col, row)` of every lit pixel, row-major.
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, lit)| **lit)
                .map(move |(col, _)| (col, row))
        })
    }
}

/// Size shared by the entity sprites: 10 columns, 11 rows.
pub type EntitySprite = PixelMask<10, 11>;

pub const BIRD_UP: EntitySprite = PixelMask::from_art(
    "########..
#......#..
#...#..#..
#.....####
#........#
#.###.####
#......#..
#......#..
#......#..
#......#..
########..",
);

pub const BIRD_DOWN: EntitySprite = PixelMask::from_art(
    "########..
#......#..
#...#..#..
#.....####
#........#
#.#.#.####
#.#.#..#..
#.#.#..#..
#.###..#..
#......#..
########..",
);
