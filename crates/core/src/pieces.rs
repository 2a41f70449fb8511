//! Pieces module - shape masks and rotation
//!
//! Every piece is a small rectangular occupancy mask. The catalog holds the
//! seven tetrominoes; [`Shape::from_mask`] accepts any other rectangular mask
//! that fits in a 4x4 box.
//!
//! Rotation is a plain clockwise quarter turn of the mask's bounding box
//! (transpose, then reverse every row). There are no kick tables: a rotation
//! that collides is simply refused by the engine.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest supported mask edge.
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single occupied cell relative to the shape origin (top-left).
pub type CellOffset = (u8, u8);

/// Occupied cells of a shape, row-major.
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Immutable occupancy mask with explicit dimensions.
///
/// Cells outside `width` x `height` are always empty, so equality compares
/// masks exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    width: u8,
    height: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns `None` for empty, ragged or oversized masks, and for masks
    /// with a fully empty border row or column.
    pub fn from_mask(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_DIM || width == 0 || width > MAX_SHAPE_DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }

        let shape = Self {
            width: width as u8,
            height: height as u8,
            cells,
        };
        shape.is_trimmed().then_some(shape)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at `(x, y)` is occupied. Out-of-mask is empty.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.width && y < self.height && self.cells[y as usize][x as usize]
    }

    /// Occupied cell offsets in row-major order.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y as usize][x as usize] {
                    out.push((x, y));
                }
            }
        }
        out
    }

    /// Rotate a quarter turn clockwise.
    ///
    /// Transposes the mask and reverses each resulting row, so a `w x h`
    /// shape becomes `h x w`. Four rotations give back the original mask.
    pub fn rotated(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// No fully empty row or column on the bounding box border.
    fn is_trimmed(&self) -> bool {
        let w = self.width;
        let h = self.height;
        let row_filled = |y: u8| (0..w).any(|x| self.is_filled(x, y));
        let col_filled = |x: u8| (0..h).any(|y| self.is_filled(x, y));
        row_filled(0) && row_filled(h - 1) && col_filled(0) && col_filled(w - 1)
    }
}

const fn mask<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Shape {
    let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
    let mut y = 0;
    while y < H {
        let mut x = 0;
        while x < W {
            cells[y][x] = rows[y][x] != 0;
            x += 1;
        }
        y += 1;
    }
    Shape {
        width: W as u8,
        height: H as u8,
        cells,
    }
}

const I_SHAPE: Shape = mask([[1, 1, 1, 1]]);
const O_SHAPE: Shape = mask([[1, 1], [1, 1]]);
const T_SHAPE: Shape = mask([[0, 1, 0], [1, 1, 1]]);
const S_SHAPE: Shape = mask([[0, 1, 1], [1, 1, 0]]);
const Z_SHAPE: Shape = mask([[1, 1, 0], [0, 1, 1]]);
const J_SHAPE: Shape = mask([[1, 0, 0], [1, 1, 1]]);
const L_SHAPE: Shape = mask([[0, 0, 1], [1, 1, 1]]);

/// Catalog shapes, indexed like [`PieceKind::ALL`].
pub const CATALOG: [Shape; 7] = [I_SHAPE, O_SHAPE, T_SHAPE, S_SHAPE, Z_SHAPE, J_SHAPE, L_SHAPE];

/// Spawn orientation of a catalog piece.
pub fn get_shape(kind: PieceKind) -> Shape {
    CATALOG[kind.index()]
}
