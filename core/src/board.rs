use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The toggled cell first, then its four orthogonal neighbours.
const CROSS: [(i8, i8); 5] = [(0, 0), (0, -1), (-1, 0), (0, 1), (1, 0)];

/// Grid of lights, `true` meaning lit.
///
/// The dimensions are fixed on construction, only [`Board::toggle`] changes the cells afterwards.
/// Deserializing goes through [`Board::from_cells`], so stored grids get the same shape check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// Creates a fully unlit board, dimensions are clamped to `1..=Coord::MAX`.
    pub fn new((rows, cols): Coord2) -> Self {
        let size = (rows.max(1), cols.max(1));
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Creates a board lit with `lit` on every cell.
    pub fn filled(size: Coord2, lit: bool) -> Self {
        let mut board = Self::new(size);
        board.cells.fill(lit);
        board
    }

    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let max = Coord::MAX.into();
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self::from_cells_unchecked(cells))
    }

    /// Caller guarantees both dimensions are in `1..=Coord::MAX`.
    pub(crate) fn from_cells_unchecked(cells: Array2<bool>) -> Self {
        debug_assert!(cells.nrows() >= 1 && cells.nrows() <= Coord::MAX.into());
        debug_assert!(cells.ncols() >= 1 && cells.ncols() <= Coord::MAX.into());
        Self { cells }
    }

    /// Builds a board from row slices, all rows must have the same non-zero length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }
        let cells = Array2::from_shape_fn((rows.len(), cols), |(row, col)| {
            rows[row].as_ref()[col]
        });
        Self::from_cells(cells)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    /// Whether the cell is lit, off-board positions count as unlit.
    pub fn is_lit(&self, coords: Coord2) -> bool {
        self.cells
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells.iter().filter(|&&lit| lit).count() as CellCount
    }

    /// Lit cells in row-major order.
    pub fn iter_lit(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &lit)| lit)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// True when no cell is lit, stops at the first lit cell found.
    pub fn is_won(&self) -> bool {
        !self.cells.iter().any(|&lit| lit)
    }

    /// Positions that toggling `coords` would flip.
    ///
    /// Every position is bounds-checked, the center included, so an off-board center still yields its in-range
    /// neighbours.
    pub fn cross(&self, (row, col): Coord2) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        CROSS.iter().filter_map(move |&(d_row, d_col)| {
            let row = row.checked_add_signed(d_row)?;
            let col = col.checked_add_signed(d_col)?;
            (row < rows && col < cols).then_some((row, col))
        })
    }

    /// Flips the cell at `coords` and its orthogonal neighbours in place, returning whether the board is now clear.
    ///
    /// Positions outside the board are skipped, this never fails.
    pub fn toggle(&mut self, coords: Coord2) -> bool {
        for pos in self.cross(coords) {
            let cell = &mut self.cells[pos.to_nd_index()];
            *cell = !*cell;
        }
        self.is_won()
    }

    /// Copying variant of [`Board::toggle`], leaves `self` untouched.
    pub fn toggled(&self, coords: Coord2) -> (Self, bool) {
        let mut board = self.clone();
        let won = board.toggle(coords);
        (board, won)
    }

    pub(crate) fn cells(&self) -> &Array2<bool> {
        &self.cells
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

/// One line per row, `O` for lit and `.` for unlit cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.rows().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &lit in row {
                f.write_str(if lit { "O" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    const O: bool = true;
    const X: bool = false;

    fn changed_cells(before: &Board, after: &Board) -> Vec<Coord2> {
        let (rows, cols) = before.size();
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&pos| before[pos] != after[pos])
            .collect()
    }

    fn sample_board() -> Board {
        Board::from_rows(&[
            [X, O, X, X, O],
            [O, O, X, O, X],
            [X, X, X, X, X],
            [X, O, X, X, O],
            [O, X, X, O, O],
        ])
        .unwrap()
    }

    #[test]
    fn cross_in_the_middle_has_five_positions() {
        let cells: Vec<_> = Board::new((5, 5)).cross((2, 2)).collect();
        assert_eq!(cells, [(2, 2), (2, 1), (1, 2), (2, 3), (3, 2)]);
    }

    #[test]
    fn cross_skips_positions_outside_the_board() {
        let board = Board::new((5, 5));
        let corner: Vec<_> = board.cross((0, 0)).collect();
        assert_eq!(corner, [(0, 0), (0, 1), (1, 0)]);

        let far_corner: Vec<_> = board.cross((4, 4)).collect();
        assert_eq!(far_corner, [(4, 4), (4, 3), (3, 4)]);
    }

    #[test]
    fn cross_with_off_board_center_keeps_in_range_neighbours() {
        let board = Board::new((5, 5));
        let cells: Vec<_> = board.cross((5, 0)).collect();
        assert_eq!(cells, [(4, 0)]);

        assert_eq!(board.cross((200, 200)).count(), 0);
        assert_eq!(board.cross((255, 255)).count(), 0);
    }

    #[test]
    fn single_cell_board_cross_is_the_center() {
        let cells: Vec<_> = Board::new((1, 1)).cross((0, 0)).collect();
        assert_eq!(cells, [(0, 0)]);
    }

    #[test]
    fn won_iff_no_cell_is_lit() {
        assert!(Board::new((5, 5)).is_won());
        assert!(!Board::filled((5, 5), true).is_won());

        let mut board = Board::new((3, 4));
        board.cells[[2, 3]] = true;
        assert!(!board.is_won());
        assert_eq!(board.lit_count(), 1);
    }

    #[test]
    fn toggle_in_the_middle_changes_the_cross() {
        let before = sample_board();
        let (after, won) = before.toggled((2, 2));

        assert!(!won);
        assert_eq!(
            changed_cells(&before, &after),
            [(1, 2), (2, 1), (2, 2), (2, 3), (3, 2)]
        );
    }

    #[test]
    fn toggle_never_changes_more_than_the_cross() {
        let before = sample_board();
        for row in 0..5 {
            for col in 0..5 {
                let (after, _) = before.toggled((row, col));
                let changed = changed_cells(&before, &after);
                assert!(changed.len() <= 5);
                for (r, c) in changed {
                    let distance = r.abs_diff(row) + c.abs_diff(col);
                    assert!(distance <= 1, "({r}, {c}) changed by toggling ({row}, {col})");
                }
            }
        }
    }

    #[test]
    fn toggle_corner_skips_off_board_neighbours() {
        let before = Board::new((5, 5));
        let (after, won) = before.toggled((0, 0));

        assert!(!won);
        assert_eq!(changed_cells(&before, &after), [(0, 0), (0, 1), (1, 0)]);
        assert_eq!(after.lit_count(), 3);
    }

    #[test]
    fn toggle_twice_restores_the_board() {
        let original = sample_board();
        let mut board = original.clone();

        board.toggle((3, 1));
        assert_ne!(board, original);
        board.toggle((3, 1));
        assert_eq!(board, original);
    }

    #[test]
    fn toggled_leaves_the_original_untouched() {
        let board = Board::new((2, 2));
        let (after, _) = board.toggled((1, 1));

        assert!(board.is_won());
        assert_eq!(after.lit_count(), 3);
    }

    #[test]
    fn toggle_off_board_is_a_no_op() {
        let mut board = sample_board();
        let won = board.toggle((9, 9));

        assert!(!won);
        assert_eq!(board, sample_board());
    }

    #[test]
    fn toggle_reports_win_when_board_clears() {
        let mut board = Board::from_rows(&[[X, O, X], [O, O, O], [X, O, X]]).unwrap();
        assert!(board.toggle((1, 1)));
        assert!(board.is_won());
    }

    #[test]
    fn dimensions_are_clamped_to_at_least_one() {
        assert_eq!(Board::new((0, 0)).size(), (1, 1));
        assert_eq!(Board::new((0, 7)).size(), (1, 7));
    }

    #[test]
    fn ragged_or_empty_rows_are_rejected() {
        let empty: [[bool; 0]; 0] = [];
        assert_eq!(Board::from_rows(&empty), Err(GameError::InvalidBoardShape));
        assert_eq!(
            Board::from_rows(&[&[O, X][..], &[O][..]]),
            Err(GameError::InvalidBoardShape)
        );
        assert_eq!(
            Board::from_rows(&[[X; 0]]),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn iter_lit_is_row_major() {
        let board = Board::from_rows(&[[X, O], [O, O]]).unwrap();
        let lit: Vec<_> = board.iter_lit().collect();
        assert_eq!(lit, [(0, 1), (1, 0), (1, 1)]);
        assert!(board.is_lit((1, 0)));
        assert!(!board.is_lit((0, 0)));
        assert!(!board.is_lit((5, 5)));
    }

    #[test]
    fn displays_lit_cells_as_o() {
        let board = Board::from_rows(&[[X, X, X], [O, O, X], [X, X, X]]).unwrap();
        assert_eq!(board.to_string(), "...\nOO.\n...");
    }
}
