use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Food entity currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Spawns food at a uniformly random cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self {
            position: random_cell(rng, bounds),
        }
    }

    /// Creates food at a fixed position.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Redraws the position uniformly over the full grid, both axes
    /// independent.
    ///
    /// Placement is independent of the snake: the new cell may coincide
    /// with the old one or land under a body segment.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, bounds: GridSize) {
        self.position = random_cell(rng, bounds);
    }

    /// Returns the current position.
    #[must_use]
    pub fn position(self) -> Position {
        self.position
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(0..i32::from(bounds.width)),
        y: rng.gen_range(0..i32::from(bounds.height)),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::GridSize;
    use crate::snake::Position;

    use super::Food;

    const BOUNDS: GridSize = GridSize {
        width: 8,
        height: 6,
    };

    #[test]
    fn respawn_always_lands_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::spawn(&mut rng, BOUNDS);

        for _ in 0..500 {
            food.respawn(&mut rng, BOUNDS);
            assert!(food.position().is_within_bounds(BOUNDS));
        }
    }

    #[test]
    fn same_seed_yields_same_placement_sequence() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        let mut left = Food::spawn(&mut first, BOUNDS);
        let mut right = Food::spawn(&mut second, BOUNDS);
        assert_eq!(left, right);

        for _ in 0..20 {
            left.respawn(&mut first, BOUNDS);
            right.respawn(&mut second, BOUNDS);
            assert_eq!(left.position(), right.position());
        }
    }

    #[test]
    fn fixed_position_constructor_is_exact() {
        let food = Food::at(Position { x: 3, y: 4 });
        assert_eq!(food.position(), Position { x: 3, y: 4 });
    }
}
