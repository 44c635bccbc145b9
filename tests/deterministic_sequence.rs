use grid_snake::config::GridSize;
use grid_snake::food::Food;
use grid_snake::game::{DeathReason, GameState, GameStatus};
use grid_snake::input::{Direction, GameInput};
use grid_snake::snake::{Position, Snake};

#[test]
fn stepwise_food_collection_turn_and_wall_collision() {
    let mut state = GameState::new_with_seed(
        GridSize {
            width: 6,
            height: 4,
        },
        42,
    );
    state.snake = Snake::from_segments(vec![Position { x: 1, y: 1 }], Direction::Right);
    state.food = Food::at(Position { x: 2, y: 1 });

    // Eats on the first tick; growth is owed, not applied yet.
    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.head(), Position { x: 2, y: 1 });
    assert_eq!(state.snake.len(), 1);

    // Park the food away from the path so the rest stays scripted.
    state.food = Food::at(Position { x: 0, y: 3 });

    state.tick();
    assert_eq!(state.snake.head(), Position { x: 3, y: 1 });
    assert_eq!(state.snake.len(), 2);

    state.apply_input(GameInput::Direction(Direction::Up));
    state.tick();
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 3, y: 0 });

    // Next step leaves the top edge.
    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.snake.head(), Position { x: 3, y: 0 });
    assert_eq!(state.score, 10);

    // Restart returns to the initial session on the same grid.
    state.apply_input(GameInput::Restart);
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.head(), Position { x: 3, y: 2 });
    assert_eq!(state.snake.len(), 1);
}

#[test]
fn default_grid_run_grows_to_four_then_dies_on_left_wall() {
    let bounds = GridSize {
        width: 40,
        height: 30,
    };
    let mut state = GameState::new_with_seed(bounds, 7);
    // Off the snake's straight-left path along row 15.
    state.food = Food::at(Position { x: 0, y: 0 });

    assert_eq!(state.snake.head(), Position { x: 20, y: 15 });
    assert_eq!(state.snake.direction(), Direction::Left);
    assert_eq!(state.snake.len(), 1);

    for _ in 0..3 {
        state.tick();
    }
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.snake.pending_growth(), 0);
    assert_eq!(state.snake.head(), Position { x: 17, y: 15 });
    assert_eq!(state.score, 0);

    for _ in 0..17 {
        state.tick();
    }
    assert_eq!(state.status, GameStatus::Running);
    assert_eq!(state.snake.head(), Position { x: 0, y: 15 });

    state.tick();
    assert_eq!(state.status, GameStatus::GameOver);
    assert_eq!(state.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(state.snake.len(), 4);
}
