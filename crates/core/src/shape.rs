//! Shape module - square boolean occupancy matrices and their rotation
//!
//! A shape is an N×N row-major matrix (N is 3 or 4 for the catalog pieces).
//! Rotation is a pure transform: one clockwise quarter turn moves element
//! `(row, col)` to `(col, N-1-row)`.

use arrayvec::ArrayVec;

/// Largest matrix side used by any piece.
pub const MAX_SIDE: usize = 4;

/// Occupied `(row, col)` offsets of a shape, relative to its top-left corner.
pub type ShapeBlocks = ArrayVec<(i8, i8), { MAX_SIDE * MAX_SIDE }>;

/// N×N boolean occupancy matrix stored in a fixed 4×4 backing array.
///
/// Only the top-left `side × side` region is meaningful; the rest stays `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    side: u8,
    cells: [[bool; MAX_SIDE]; MAX_SIDE],
}

impl Shape {
    /// Const constructor for catalog data: `#` marks an occupied cell in the
    /// top-left `side × side` region of `rows`; anything past `side` is ignored.
    pub const fn from_ascii(side: usize, rows: [&[u8; MAX_SIDE]; MAX_SIDE]) -> Self {
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        let mut r = 0;
        while r < side {
            let mut c = 0;
            while c < side {
                cells[r][c] = rows[r][c] == b'#';
                c += 1;
            }
            r += 1;
        }
        Self {
            side: side as u8,
            cells,
        }
    }

    /// Build a shape from string rows, `#` marking an occupied cell.
    ///
    /// Panics when the rows do not form a square of side 1 to 4. Intended for
    /// the static catalog and for tests.
    pub fn from_rows(rows: &[&str]) -> Self {
        let side = rows.len();
        assert!(
            (1..=MAX_SIDE).contains(&side),
            "shape side must be 1..=4, got {side}"
        );
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for (r, line) in rows.iter().enumerate() {
            assert_eq!(line.chars().count(), side, "shape rows must be square");
            for (c, ch) in line.chars().enumerate() {
                cells[r][c] = ch == '#';
            }
        }
        Self {
            side: side as u8,
            cells,
        }
    }

    pub fn side(&self) -> usize {
        self.side as usize
    }

    /// Whether `(row, col)` is occupied; out-of-matrix reads are empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.side() && col < self.side() && self.cells[row][col]
    }

    /// One clockwise quarter turn: `(row, col)` → `(col, N-1-row)`.
    pub fn rotate_once(&self) -> Self {
        let n = self.side();
        let mut cells = [[false; MAX_SIDE]; MAX_SIDE];
        for row in 0..n {
            for col in 0..n {
                if self.cells[row][col] {
                    cells[col][n - 1 - row] = true;
                }
            }
        }
        Self {
            side: self.side,
            cells,
        }
    }

    /// Occupied cells in row-major order.
    pub fn blocks(&self) -> ShapeBlocks {
        let n = self.side();
        let mut out = ShapeBlocks::new();
        for row in 0..n {
            for col in 0..n {
                if self.cells[row][col] {
                    out.push((row as i8, col as i8));
                }
            }
        }
        out
    }

    pub fn block_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }
}

/// Rotate `shape` clockwise by `quarter_turns`, each turn applied to the previous result.
pub fn rotate(shape: &Shape, quarter_turns: u8) -> Shape {
    let mut out = *shape;
    for _ in 0..quarter_turns {
        out = out.rotate_once();
    }
    out
}
