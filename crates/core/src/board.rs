//! Board module - manages the game grid
//!
//! The board is a grid where each cell is empty or filled with a piece kind.
//! Storage is a flat row-major array for cache locality.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Collision treats everything outside the grid as occupied, so the same
//! check guards the walls, the floor and the space above the top row.

use crate::error::{GridError, Result};
use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Largest side a board may have (cells are addressed with `i8`)
pub const MAX_BOARD_SIDE: u8 = i8::MAX as u8;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create the standard 10x20 board, all cells empty
    pub fn new() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cells: vec![None; BOARD_WIDTH as usize * BOARD_HEIGHT as usize],
        }
    }

    /// Create an empty board of the given size.
    ///
    /// ```
    /// use blocktris_core::Board;
    ///
    /// let board = Board::with_size(4, 3).unwrap();
    /// assert_eq!((board.width(), board.height()), (4, 3));
    /// assert!(Board::with_size(0, 3).is_err());
    /// ```
    pub fn with_size(width: u8, height: u8) -> Result<Self> {
        if width == 0 || height == 0 || width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
            return Err(GridError::InvalidBoardSize {
                width,
                height,
                max: MAX_BOARD_SIDE,
            });
        }
        Ok(Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        })
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Numeric cell value: 0 for empty, the piece's color index otherwise.
    /// Out of bounds reads as 0.
    pub fn value(&self, x: i8, y: i8) -> u8 {
        match self.get(x, y) {
            Some(Some(kind)) => kind.color_index(),
            _ => 0,
        }
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the board and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8
    }

    /// Whether any occupied cell of `piece` lands outside the board or on a
    /// filled cell.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| !self.is_valid(x, y))
    }

    /// Write the piece's kind into every cell it occupies.
    ///
    /// Nothing is written (and `false` is returned) if the piece collides, so
    /// locked cells are never overwritten.
    pub fn merge(&mut self, piece: &Piece) -> bool {
        if self.collides(piece) {
            return false;
        }
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
        true
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    fn row(&self, y: usize) -> &[Cell] {
        let width = self.width as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// Remove row `y`, shift every row above it down by one and empty the top row
    fn remove_row(&mut self, y: usize) {
        let width = self.width as usize;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);
    }

    /// Remove every full row, scanning bottom to top.
    ///
    /// After a removal the same row index is checked again, since the row
    /// above has just shifted into it. Returns the number of rows removed.
    ///
    /// ```
    /// use blocktris_core::Board;
    /// use blocktris_types::PieceKind;
    ///
    /// let mut board = Board::with_size(3, 3).unwrap();
    /// for x in 0..3 {
    ///     board.set(x, 2, Some(PieceKind::I));
    /// }
    /// assert_eq!(board.sweep_lines(), 1);
    /// assert!(board.is_empty());
    /// ```
    pub fn sweep_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut y = self.height as usize;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy cell values into a fixed-size grid (row-major, `[y][x]`).
    ///
    /// Only the overlapping region is written; the rest of `out` is zeroed.
    pub fn write_u8_grid<const W: usize, const H: usize>(&self, out: &mut [[u8; W]; H]) {
        for (y, out_row) in out.iter_mut().enumerate() {
            for (x, v) in out_row.iter_mut().enumerate() {
                *v = if x < self.width as usize && y < self.height as usize {
                    self.value(x as i8, y as i8)
                } else {
                    0
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..board.width() as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_with_size_rejects_degenerate_dimensions() {
        assert!(Board::with_size(0, 20).is_err());
        assert!(Board::with_size(10, 0).is_err());
        assert_eq!(
            Board::with_size(200, 20),
            Err(GridError::InvalidBoardSize {
                width: 200,
                height: 20,
                max: 127
            })
        );
        assert!(Board::with_size(127, 127).is_ok());
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::with_size(2, 3).unwrap();
        board.set(0, 0, Some(PieceKind::T));
        board.set(1, 1, Some(PieceKind::Z));
        fill_row(&mut board, 2, PieceKind::I);

        board.remove_row(2);

        assert_eq!(board.get(0, 0), Some(None));
        assert_eq!(board.get(1, 0), Some(None));
        assert_eq!(board.get(0, 1), Some(Some(PieceKind::T)));
        assert_eq!(board.get(1, 2), Some(Some(PieceKind::Z)));
    }

    #[test]
    fn test_sweep_rescans_same_index_for_stacked_full_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        fill_row(&mut board, 18, PieceKind::J);
        board.set(0, 17, Some(PieceKind::T));

        assert_eq!(board.sweep_lines(), 2);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_sweep_clears_fully_occupied_board() {
        let mut board = Board::with_size(4, 5).unwrap();
        for y in 0..5 {
            fill_row(&mut board, y, PieceKind::O);
        }
        assert_eq!(board.sweep_lines(), 5);
        assert!(board.is_empty());
    }

    #[test]
    fn test_sweep_handles_non_adjacent_full_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        board.set(3, 18, Some(PieceKind::S));
        fill_row(&mut board, 17, PieceKind::L);

        assert_eq!(board.sweep_lines(), 2);
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::S)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_write_u8_grid_uses_color_indices() {
        let mut board = Board::new();
        board.set(0, 19, Some(PieceKind::T));
        board.set(9, 0, Some(PieceKind::J));

        let mut grid = [[0u8; 10]; 20];
        board.write_u8_grid(&mut grid);

        assert_eq!(grid[19][0], 1);
        assert_eq!(grid[0][9], 7);
        assert_eq!(grid.iter().flatten().filter(|&&v| v != 0).count(), 2);
    }
}
