use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{GridSize, POINTS_PER_FOOD};
use crate::food::Food;
use crate::input::GameInput;
use crate::snake::Snake;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    GameOver,
}

/// What ended the run, shown on the game-over screen.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
///
/// Owns the snake, the food, and the session fields; the presentation layer
/// drives it once per fixed tick and reads state back through immutable
/// queries.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub status: GameStatus,
    pub death_reason: Option<DeathReason>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a new session with an entropy-seeded RNG.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic session for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, mut rng: StdRng) -> Self {
        let snake = Snake::new(bounds);
        let food = Food::spawn(&mut rng, bounds);

        Self {
            snake,
            food,
            score: 0,
            status: GameStatus::Running,
            death_reason: None,
            bounds,
            rng,
        }
    }

    /// Advances the simulation by one gameplay tick. No-op unless running.
    ///
    /// Food overlap is resolved before the self-collision check: a tick
    /// that both eats and collides still scores and respawns the food.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }

        if !self.snake.advance(self.bounds) {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::WallCollision);
            return;
        }

        if self.snake.head() == self.food.position() {
            self.score += POINTS_PER_FOOD;
            self.snake.grow();
            self.food.respawn(&mut self.rng, self.bounds);
        }

        if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver;
            self.death_reason = Some(DeathReason::SelfCollision);
        }
    }

    /// Applies one external input event.
    ///
    /// Direction requests are forwarded only while running; after game over
    /// the only effective command is [`GameInput::Restart`].
    pub fn apply_input(&mut self, input: GameInput) {
        match input {
            GameInput::Direction(direction) => {
                if self.status == GameStatus::Running {
                    self.snake.set_direction(direction);
                }
            }
            GameInput::Restart => {
                if self.status == GameStatus::GameOver {
                    self.reset();
                }
            }
            GameInput::Quit => {}
        }
    }

    /// Restores the freshly-constructed session state: initial snake,
    /// respawned food, zero score, running.
    pub fn reset(&mut self) {
        self.snake.reset(self.bounds);
        self.food.respawn(&mut self.rng, self.bounds);
        self.score = 0;
        self.status = GameStatus::Running;
        self.death_reason = None;
    }

    /// Returns the logical grid bounds.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::food::Food;
    use crate::input::{Direction, GameInput};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus};

    const BOUNDS: GridSize = GridSize {
        width: 10,
        height: 10,
    };

    fn running_state(head: Position, heading: Direction) -> GameState {
        let mut state = GameState::new_with_seed(BOUNDS, 1);
        state.snake = Snake::from_segments(vec![head], heading);
        // Park the food out of the snake's path.
        state.food = Food::at(Position { x: 9, y: 9 });
        state
    }

    #[test]
    fn eating_food_scores_ten_and_grows_by_one() {
        let mut state = running_state(Position { x: 1, y: 1 }, Direction::Right);
        state.food = Food::at(Position { x: 2, y: 1 });

        state.tick();
        assert_eq!(state.score, 10);
        assert_eq!(state.status, GameStatus::Running);
        // Growth is deferred; the length lands on the next tick.
        assert_eq!(state.snake.len(), 1);

        state.food = Food::at(Position { x: 9, y: 9 });
        state.tick();
        assert_eq!(state.snake.len(), 2);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn wall_collision_sets_game_over_with_reason() {
        let mut state = running_state(Position { x: 9, y: 1 }, Direction::Right);

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
        assert_eq!(state.snake.head(), Position { x: 9, y: 1 });
    }

    #[test]
    fn self_collision_sets_game_over_with_reason() {
        let mut state = GameState::new_with_seed(BOUNDS, 3);
        state.snake = Snake::from_segments(
            vec![
                Position { x: 2, y: 2 },
                Position { x: 1, y: 2 },
                Position { x: 1, y: 3 },
                Position { x: 2, y: 3 },
                Position { x: 3, y: 3 },
                Position { x: 3, y: 2 },
            ],
            Direction::Left,
        );
        state.food = Food::at(Position { x: 9, y: 9 });

        state.tick();

        assert_eq!(state.status, GameStatus::GameOver);
        assert_eq!(state.death_reason, Some(DeathReason::SelfCollision));
    }

    #[test]
    fn direction_and_ticks_are_ignored_after_game_over() {
        let mut state = running_state(Position { x: 9, y: 1 }, Direction::Right);
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        let head_before = state.snake.head();
        state.apply_input(GameInput::Direction(Direction::Down));
        state.tick();

        assert_eq!(state.snake.head(), head_before);
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.status, GameStatus::GameOver);
    }

    #[test]
    fn restart_from_game_over_restores_initial_session() {
        let mut state = running_state(Position { x: 9, y: 1 }, Direction::Right);
        state.score = 70;
        state.tick();
        assert_eq!(state.status, GameStatus::GameOver);

        state.apply_input(GameInput::Restart);

        assert_eq!(state.status, GameStatus::Running);
        assert_eq!(state.score, 0);
        assert_eq!(state.death_reason, None);
        assert_eq!(state.snake.head(), Position { x: 5, y: 5 });
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.direction(), Direction::Left);
        assert_eq!(state.snake.pending_growth(), 3);
    }

    #[test]
    fn restart_is_a_no_op_while_running() {
        let mut state = running_state(Position { x: 1, y: 1 }, Direction::Right);
        state.score = 30;

        state.apply_input(GameInput::Restart);

        assert_eq!(state.score, 30);
        assert_eq!(state.snake.head(), Position { x: 1, y: 1 });
    }

    #[test]
    fn same_seed_and_moves_produce_identical_sessions() {
        let mut left = GameState::new_with_seed(BOUNDS, 9);
        let mut right = GameState::new_with_seed(BOUNDS, 9);
        assert_eq!(left.food.position(), right.food.position());

        for _ in 0..4 {
            left.tick();
            right.tick();
        }

        assert_eq!(left.snake.head(), right.snake.head());
        assert_eq!(left.food.position(), right.food.position());
        assert_eq!(left.score, right.score);
    }
}
