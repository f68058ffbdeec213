//! Press-pattern solver.
//!
//! Pressing a cell twice cancels out and the order of presses does not matter, so a solution is a set of cells over
//! GF(2). Once the presses of the first row are fixed every later row is forced ("light chasing"): a lit cell in row
//! `r` can only be switched off by pressing the cell below it. Tracking each cell as an affine combination of the
//! first-row presses, the last row yields a `cols × cols` linear system that is solved by Gaussian elimination.

use alloc::vec;
use alloc::vec::Vec;
use ndarray::Array2;

use crate::*;

/// Set of cells that clears a board when each of them is toggled once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    presses: Array2<bool>,
}

impl Solution {
    pub fn presses(&self) -> &Array2<bool> {
        &self.presses
    }

    pub fn press_count(&self) -> CellCount {
        self.presses.iter().filter(|&&press| press).count() as CellCount
    }

    pub fn is_pressed(&self, coords: Coord2) -> bool {
        self.presses
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    /// Cells to press, in row-major order.
    pub fn iter_presses(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.presses
            .indexed_iter()
            .filter(|&(_, &press)| press)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    /// Toggles every pressed cell on a copy of `board`.
    pub fn apply(&self, board: &Board) -> Board {
        let mut board = board.clone();
        for coords in self.iter_presses() {
            board.toggle(coords);
        }
        board
    }
}

/// Finds a press pattern that turns every light off, `None` when the board cannot be cleared.
pub fn solve(board: &Board) -> Option<Solution> {
    let (rows, cols) = board.size();
    let (rows, cols) = (usize::from(rows), usize::from(cols));
    let cells = board.cells();
    let constant = cols;
    let words = (cols + 1).div_ceil(64);

    // presses of the previous and the current row, as affine forms over the first-row presses
    let mut prev = vec![Gf2Row::zero(words); cols];
    let mut cur: Vec<_> = (0..cols)
        .map(|col| {
            let mut form = Gf2Row::zero(words);
            form.flip(col);
            form
        })
        .collect();

    let mut residual = Vec::with_capacity(cols);
    for row in 0..rows {
        residual.clear();
        for col in 0..cols {
            let mut form = cur[col].clone();
            form ^= &prev[col];
            if col > 0 {
                form ^= &cur[col - 1];
            }
            if col + 1 < cols {
                form ^= &cur[col + 1];
            }
            if cells[[row, col]] {
                form.flip(constant);
            }
            residual.push(form);
        }
        if row + 1 < rows {
            // the press below has to cancel whatever is left lit in this row
            prev = core::mem::replace(&mut cur, residual.clone());
        }
    }

    let first_row = eliminate(residual, cols)?;

    let mut chased = board.clone();
    let mut presses: Array2<bool> = Array2::default((rows, cols));
    for (col, &press) in first_row.iter().enumerate() {
        if press {
            chased.toggle((0, col as Coord));
            presses[[0, col]] = true;
        }
    }
    for row in 1..rows {
        for col in 0..cols {
            if chased[((row - 1) as Coord, col as Coord)] {
                chased.toggle((row as Coord, col as Coord));
                presses[[row, col]] = true;
            }
        }
    }

    if !chased.is_won() {
        log::warn!("Chased solution left {} cells lit", chased.lit_count());
        return None;
    }
    Some(Solution { presses })
}

/// Solves `equations` (one per last-row cell, `form == 0`) for the first-row presses, free variables set to 0.
fn eliminate(mut equations: Vec<Gf2Row>, vars: usize) -> Option<Vec<bool>> {
    let constant = vars;
    let mut pivots = Vec::new();
    let mut next_pivot = 0;

    for var in 0..vars {
        let Some(found) = (next_pivot..equations.len()).find(|&i| equations[i].get(var)) else {
            continue;
        };
        equations.swap(found, next_pivot);
        let pivot = equations[next_pivot].clone();
        for (i, equation) in equations.iter_mut().enumerate() {
            if i != next_pivot && equation.get(var) {
                *equation ^= &pivot;
            }
        }
        pivots.push((var, next_pivot));
        next_pivot += 1;
    }

    // remaining equations have no variables left, a set constant means 0 == 1
    if equations[next_pivot..].iter().any(|eq| eq.get(constant)) {
        log::debug!("Board is not solvable");
        return None;
    }

    let mut solution = vec![false; vars];
    for (var, row) in pivots {
        solution[var] = equations[row].get(constant);
    }
    Some(solution)
}

/// Bit vector over GF(2), addition is xor.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Gf2Row(Vec<u64>);

impl Gf2Row {
    fn zero(words: usize) -> Self {
        Self(vec![0; words])
    }

    fn get(&self, bit: usize) -> bool {
        self.0[bit / 64] & (1 << (bit % 64)) != 0
    }

    fn flip(&mut self, bit: usize) {
        self.0[bit / 64] ^= 1 << (bit % 64);
    }
}

impl core::ops::BitXorAssign<&Gf2Row> for Gf2Row {
    fn bitxor_assign(&mut self, rhs: &Gf2Row) {
        for (word, other) in self.0.iter_mut().zip(&rhs.0) {
            *word ^= other;
        }
    }
}
