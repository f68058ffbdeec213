use super::*;
use ndarray::Array2;

/// Lights each cell independently with the configured probability, drawing from a seeded RNG in row-major order so
/// a seed always reproduces the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Board {
        use rand::prelude::*;

        // re-clamp, the fields are public and may have been set directly
        let config = BoardConfig::new(config.size, config.chance_lit);
        let (rows, cols) = config.size;

        // optimize for the extremes, no randomness involved
        if config.chance_lit <= 0.0 || config.chance_lit >= 1.0 {
            return Board::filled(config.size, config.chance_lit >= 1.0);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let cells = Array2::from_shape_fn((rows.into(), cols.into()), |_| {
            rng.random::<f64>() < config.chance_lit
        });

        let board = Board::from_cells_unchecked(cells);
        log::debug!(
            "Generated {}x{} board with {} lit cells",
            rows,
            cols,
            board.lit_count()
        );
        board
    }
}
