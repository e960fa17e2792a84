//! Pieces module - shape catalog, shape grids and the active piece
//!
//! Shapes are small binary grids (at most 4x4). The catalog entries are
//! `const` values; a [`Piece`] owns a copy of its grid, so rotating a piece
//! never touches the catalog.
//!
//! Rotation is the in-place "transpose the leading square, then reverse the
//! rows" transform. Grid dimensions are never corrected, which means
//! non-square shapes rotate around an implicit pivot:
//!
//! - the 1x4 I bar never changes,
//! - 2x3 shapes cycle through four forms, two of which are not the usual
//!   tetromino outlines (T becomes `110/101` after two turns),
//! - square grids get a true quarter turn.
//!
//! Four rotations always give back the original grid.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{GridError, Result};
use crate::types::PieceKind;

/// Largest side of a shape grid
pub const MAX_SHAPE_SIDE: usize = 4;

/// Offset of a single mino relative to the grid origin
pub type MinoOffset = (i8, i8);

/// Occupied cells of a grid; a 4x4 grid has at most 16
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

type Rows = [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];

const EMPTY_ROW: [bool; MAX_SHAPE_SIDE] = [false; MAX_SHAPE_SIDE];

const fn row(bits: [u8; MAX_SHAPE_SIDE]) -> [bool; MAX_SHAPE_SIDE] {
    [bits[0] != 0, bits[1] != 0, bits[2] != 0, bits[3] != 0]
}

/// A binary grid of at most 4x4 cells, stored row-major as `cells[y][x]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeGrid {
    cells: Rows,
    rows: u8,
    cols: u8,
}

const T_GRID: ShapeGrid = ShapeGrid::from_const(
    2,
    3,
    [row([0, 1, 0, 0]), row([1, 1, 1, 0]), EMPTY_ROW, EMPTY_ROW],
);

const Z_GRID: ShapeGrid = ShapeGrid::from_const(
    2,
    3,
    [row([1, 1, 0, 0]), row([0, 1, 1, 0]), EMPTY_ROW, EMPTY_ROW],
);

const S_GRID: ShapeGrid = ShapeGrid::from_const(
    2,
    3,
    [row([0, 1, 1, 0]), row([1, 1, 0, 0]), EMPTY_ROW, EMPTY_ROW],
);

const I_GRID: ShapeGrid = ShapeGrid::from_const(
    1,
    4,
    [row([1, 1, 1, 1]), EMPTY_ROW, EMPTY_ROW, EMPTY_ROW],
);

const O_GRID: ShapeGrid = ShapeGrid::from_const(
    2,
    2,
    [row([1, 1, 0, 0]), row([1, 1, 0, 0]), EMPTY_ROW, EMPTY_ROW],
);

const L_GRID: ShapeGrid = ShapeGrid::from_const(
    2,
    3,
    [row([0, 0, 1, 0]), row([1, 1, 1, 0]), EMPTY_ROW, EMPTY_ROW],
);

const J_GRID: ShapeGrid = ShapeGrid::from_const(
    2,
    3,
    [row([1, 0, 0, 0]), row([1, 1, 1, 0]), EMPTY_ROW, EMPTY_ROW],
);

/// Get the canonical grid for a piece kind.
///
/// The returned value is a copy; mutating it leaves the catalog untouched.
pub fn get_shape(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => I_GRID,
        PieceKind::J => J_GRID,
        PieceKind::L => L_GRID,
        PieceKind::O => O_GRID,
        PieceKind::S => S_GRID,
        PieceKind::T => T_GRID,
        PieceKind::Z => Z_GRID,
    }
}

impl ShapeGrid {
    const fn from_const(rows: u8, cols: u8, cells: Rows) -> Self {
        Self { cells, rows, cols }
    }

    /// Build a grid from rows of `0`/`1` values.
    ///
    /// ```
    /// use blocktris_core::ShapeGrid;
    ///
    /// let grid = ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    /// assert!(ShapeGrid::from_rows(&[&[2]]).is_err());
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 || height > MAX_SHAPE_SIDE || width > MAX_SHAPE_SIDE {
            return Err(GridError::InvalidShapeSize {
                rows: height,
                cols: width,
            });
        }

        let mut cells = [EMPTY_ROW; MAX_SHAPE_SIDE];
        for (y, src) in rows.iter().enumerate() {
            if src.len() != width {
                return Err(GridError::RaggedShape {
                    row: y,
                    len: src.len(),
                    expected: width,
                });
            }
            for (x, &value) in src.iter().enumerate() {
                cells[y][x] = match value {
                    0 => false,
                    1 => true,
                    _ => return Err(GridError::NonBinaryCell { x, y, value }),
                };
            }
        }

        Ok(Self {
            cells,
            rows: height as u8,
            cols: width as u8,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at local `(x, y)` is occupied; outside the grid is empty.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.cols as usize && y < self.rows as usize && self.cells[y][x]
    }

    /// Occupied cells as local `(x, y)` offsets, row by row.
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for y in 0..self.rows as usize {
            for x in 0..self.cols as usize {
                if self.cells[y][x] {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rotate in place: transpose the leading square, then reverse the rows.
    ///
    /// ```
    /// use blocktris_core::ShapeGrid;
    ///
    /// let mut t = ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
    /// t.rotate();
    /// assert_eq!(t, ShapeGrid::from_rows(&[&[1, 1, 1], &[0, 1, 0]]).unwrap());
    /// ```
    pub fn rotate(&mut self) {
        let side = self.rows.min(self.cols) as usize;
        for y in 0..side {
            for x in 0..y {
                let tmp = self.cells[x][y];
                self.cells[x][y] = self.cells[y][x];
                self.cells[y][x] = tmp;
            }
        }
        self.cells[..self.rows as usize].reverse();
    }

    /// Rotated copy
    pub fn rotated(mut self) -> Self {
        self.rotate();
        self
    }
}

impl fmt::Display for ShapeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows as usize {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.cols as usize {
                f.write_str(if self.cells[y][x] { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub grid: ShapeGrid,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece with its canonical grid at `(x, y)`
    pub fn new(kind: PieceKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            grid: get_shape(kind),
            x,
            y,
        }
    }

    /// Create a piece at the spawn position for a board of the given width:
    /// horizontally centered with integer division, top row.
    ///
    /// ```
    /// use blocktris_core::Piece;
    /// use blocktris_types::PieceKind;
    ///
    /// assert_eq!(Piece::spawn(PieceKind::I, 10).x, 3);
    /// assert_eq!(Piece::spawn(PieceKind::T, 10).x, 4);
    /// ```
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let grid = get_shape(kind);
        let x = (board_width / 2) as i8 - (grid.cols() / 2) as i8;
        Self { kind, grid, x, y: 0 }
    }

    /// Grid width in cells (the wall-kick bound)
    pub fn width(&self) -> u8 {
        self.grid.cols()
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.grid
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Same piece moved by `(dx, dy)`
    pub fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_four_minos_per_shape() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).minos().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn four_rotations_restore_every_catalog_shape() {
        for kind in PieceKind::ALL {
            let original = get_shape(kind);
            let mut grid = original;
            for _ in 0..4 {
                grid.rotate();
            }
            assert_eq!(grid, original, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_preserves_mino_count_and_dimensions() {
        for kind in PieceKind::ALL {
            let original = get_shape(kind);
            let rotated = original.rotated();
            assert_eq!(rotated.minos().len(), 4);
            assert_eq!(rotated.rows(), original.rows());
            assert_eq!(rotated.cols(), original.cols());
        }
    }

    #[test]
    fn i_bar_is_unchanged_by_rotation() {
        assert_eq!(I_GRID.rotated(), I_GRID);
    }

    #[test]
    fn o_square_is_unchanged_by_rotation() {
        assert_eq!(O_GRID.rotated(), O_GRID);
    }

    #[test]
    fn l_rotation_follows_transpose_then_reverse() {
        // 001/111 -> swap (0,1)<->(1,0) -> 011/011 -> reversed rows are equal
        let expected = ShapeGrid::from_rows(&[&[0, 1, 1], &[0, 1, 1]]).unwrap();
        assert_eq!(L_GRID.rotated(), expected);
    }

    #[test]
    fn square_grid_gets_a_quarter_turn() {
        let grid = ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]).unwrap();
        let expected = ShapeGrid::from_rows(&[&[0, 1, 0], &[1, 1, 0], &[0, 1, 0]]).unwrap();
        assert_eq!(grid.rotated(), expected);
    }

    #[test]
    fn rotating_a_copy_leaves_catalog_alone() {
        let mut piece = Piece::new(PieceKind::T, 0, 0);
        piece.grid.rotate();
        assert_ne!(piece.grid, T_GRID);
        assert_eq!(get_shape(PieceKind::T), T_GRID);
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert_eq!(
            ShapeGrid::from_rows(&[]),
            Err(GridError::InvalidShapeSize { rows: 0, cols: 0 })
        );
        assert_eq!(
            ShapeGrid::from_rows(&[&[1, 1, 1, 1, 1]]),
            Err(GridError::InvalidShapeSize { rows: 1, cols: 5 })
        );
        assert_eq!(
            ShapeGrid::from_rows(&[&[1, 1], &[1]]),
            Err(GridError::RaggedShape {
                row: 1,
                len: 1,
                expected: 2
            })
        );
        assert_eq!(
            ShapeGrid::from_rows(&[&[1, 3]]),
            Err(GridError::NonBinaryCell { x: 1, y: 0, value: 3 })
        );
    }

    #[test]
    fn display_renders_rows() {
        assert_eq!(T_GRID.to_string(), ".#.\n###");
    }

    #[test]
    fn piece_cells_are_offset_by_position() {
        let piece = Piece::new(PieceKind::O, 4, 7);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 7), (5, 7), (4, 8), (5, 8)]);
    }

    #[test]
    fn spawn_centers_with_integer_division() {
        assert_eq!(Piece::spawn(PieceKind::I, 10).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O, 10).x, 4);
        assert_eq!(Piece::spawn(PieceKind::L, 10).x, 4);
        assert_eq!(Piece::spawn(PieceKind::L, 10).y, 0);
    }
}
