use alloc::{format, string::String};

use crate::{GameError, Result};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Formats coordinates as the `"row-col"` label used to identify cells in the view.
pub fn coord_label((row, col): Coord2) -> String {
    format!("{row}-{col}")
}

/// Parses a `"row-col"` label back into coordinates.
pub fn parse_coord_label(label: &str) -> Result<Coord2> {
    let (row, col) = label
        .trim()
        .split_once('-')
        .ok_or(GameError::InvalidCoordLabel)?;
    let row = row.parse().map_err(|_| GameError::InvalidCoordLabel)?;
    let col = col.parse().map_err(|_| GameError::InvalidCoordLabel)?;
    Ok((row, col))
}
