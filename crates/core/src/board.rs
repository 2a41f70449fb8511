//! Board module - manages the grid of locked cells
//!
//! The board is a `width` x `height` grid (10x20 by default) of boolean
//! occupancy. Storage is a single flat row-major buffer allocated once at
//! construction; dimensions never change afterwards.
//! Coordinates: (x, y) where x grows left to right, y grows top to bottom.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        }
    }

    /// Build a board from text rows, aligned to the bottom of the grid.
    ///
    /// `.` and space are empty, any other character is occupied. Rows are
    /// given top to bottom; missing rows above them are empty.
    ///
    /// # Panics
    ///
    /// Panics if there are more rows than `height` or a row is not exactly
    /// `width` characters long.
    pub fn from_rows(width: u8, height: u8, rows: &[&str]) -> Self {
        assert!(rows.len() <= height as usize, "too many rows for board");
        let mut board = Self::new(width, height);
        let top = height as usize - rows.len();
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width as usize, "row {i} has wrong width");
            let y = top + i;
            for (x, ch) in row.chars().enumerate() {
                board.cells[y * width as usize + x] = !matches!(ch, '.' | ' ');
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<bool> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is occupied.
    ///
    /// Rows above the top (`y < 0`) are never occupied. Side and floor bounds
    /// are the caller's concern; out-of-range queries answer `false`.
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Mark every given cell occupied.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate lies outside the board. The engine only
    /// locks cells it has already collision-checked, so this is a bug.
    pub fn lock_cells(&mut self, cells: impl IntoIterator<Item = (i16, i16)>) {
        for (x, y) in cells {
            let Some(idx) = self.index(x, y) else {
                panic!(
                    "lock_cells: ({x}, {y}) outside {}x{} board",
                    self.width, self.height
                );
            };
            self.cells[idx] = true;
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell)
    }

    fn row(&self, y: usize) -> &[bool] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Remove every full row, shift the rest down and refill the top with
    /// empty rows. Returns the number of rows removed.
    ///
    /// Two-pointer compaction; non-full rows keep their relative order.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * width].fill(false);

        cleared
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Copy another board into this one, reusing the allocation.
    pub fn copy_from(&mut self, other: &Board) {
        self.width = other.width;
        self.height = other.height;
        self.cells.clone_from(&other.cells);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
