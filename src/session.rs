// Game state machine and everything a single game needs, owned by the loop driver.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::Food;
use crate::geometry::Grid;
use crate::input::Command;
use crate::score::Score;
use crate::snake::{Direction, Snake, Step};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum GameState {
    GetReady,
    Playing,
    GameOver,
}

/// Side effects a tick asks the driver to perform (sounds).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Effect {
    Scored,
    Died,
}

pub struct GameSession {
    state: GameState,
    snake: Snake,
    food: Food,
    score: Score,
    grid: Grid,
    rng: StdRng,
}

impl GameSession {
    pub fn new(grid: Grid, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = Snake::new(grid.center(), Direction::Right);
        let food = Food::spawn(&mut rng, grid, &snake);

        GameSession {
            state: GameState::GetReady,
            snake,
            food,
            score: Score::default(),
            grid,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Food {
        self.food
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns `true` if the command changed anything.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::Restart => self.restart(),
            Command::Turn(direction) => self.turn(direction),
        }
    }

    pub fn start(&mut self) -> bool {
        if self.state != GameState::GetReady {
            return false;
        }
        self.state = GameState::Playing;
        info!("game started");
        true
    }

    /// Back to GET_READY with a fresh snake, food and score. Best is kept.
    pub fn restart(&mut self) -> bool {
        if self.state != GameState::GameOver {
            return false;
        }
        self.reset();
        self.state = GameState::GetReady;
        info!("game reset, best {}", self.score.best);
        true
    }

    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.state != GameState::Playing {
            return false;
        }
        self.snake.set_direction(direction)
    }

    /// One simulation step. Does nothing outside PLAYING.
    pub fn tick(&mut self) -> Option<Effect> {
        if self.state != GameState::Playing {
            return None;
        }

        match self.snake.step(self.grid, self.food.cell) {
            Step::Moved => None,
            Step::Grew => {
                self.score.increment();
                self.food.respawn(&mut self.rng, self.grid, &self.snake);
                debug!("scored, now {}", self.score.value);
                Some(Effect::Scored)
            }
            Step::Crashed => {
                self.state = GameState::GameOver;
                let new_best = self.score.settle();
                info!(
                    "game over with {} (best {}{})",
                    self.score.value,
                    self.score.best,
                    if new_best { ", new" } else { "" }
                );
                Some(Effect::Died)
            }
        }
    }

    fn reset(&mut self) {
        self.snake = Snake::new(self.grid.center(), Direction::Right);
        self.food = Food::spawn(&mut self.rng, self.grid, &self.snake);
        self.score.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Cell;

    const GRID: Grid = Grid {
        width: 20,
        height: 20,
    };

    fn playing(body: &[(i16, i16)], direction: Direction, food: (i16, i16)) -> GameSession {
        let mut session = GameSession::new(GRID, Some(42));
        session.snake = Snake::from_cells(body.iter().map(|&(x, y)| Cell::new(x, y)), direction);
        session.food = Food {
            cell: Cell::new(food.0, food.1),
        };
        assert!(session.start());
        session
    }

    fn body(session: &GameSession) -> Vec<Cell> {
        session.snake().body().iter().copied().collect()
    }

    #[test]
    fn starts_ready_with_centered_snake() {
        let session = GameSession::new(GRID, Some(1));
        assert_eq!(session.state(), GameState::GetReady);
        assert_eq!(body(&session), vec![Cell::new(10, 10)]);
        assert!(GRID.contains(session.food().cell));
        assert_eq!(session.score().value, 0);
    }

    #[test]
    fn eating_grows_and_scores() {
        let mut session = playing(&[(5, 5)], Direction::Right, (6, 5));
        assert_eq!(session.tick(), Some(Effect::Scored));
        assert_eq!(body(&session), vec![Cell::new(6, 5), Cell::new(5, 5)]);
        assert_eq!(session.score().value, 1);
        let food = session.food().cell;
        assert!(GRID.contains(food));
        assert!(!session.snake().contains(food));
    }

    #[test]
    fn walking_off_the_left_edge_ends_the_game() {
        let mut session = playing(&[(0, 5), (1, 5)], Direction::Left, (10, 10));
        assert_eq!(session.tick(), Some(Effect::Died));
        assert_eq!(session.state(), GameState::GameOver);
        // Further ticks are inert, so the transition fires once.
        assert_eq!(session.tick(), None);
        assert_eq!(session.state(), GameState::GameOver);
    }

    #[test]
    fn game_over_records_best() {
        let mut session = playing(&[(18, 5)], Direction::Right, (19, 5));
        session.score.best = 3;
        session.score.value = 4;
        assert_eq!(session.tick(), Some(Effect::Scored));
        assert_eq!(session.score().value, 5);
        assert_eq!(session.tick(), Some(Effect::Died));
        assert_eq!(session.score().best, 5);

        assert!(session.restart());
        session.score.value = 2;
        session.state = GameState::Playing;
        session.snake = Snake::new(Cell::new(19, 0), Direction::Up);
        assert_eq!(session.tick(), Some(Effect::Died));
        assert_eq!(session.score().best, 5);
    }

    #[test]
    fn length_grows_only_on_food() {
        let mut session = GameSession::new(GRID, Some(9));
        session.start();
        let mut turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right]
            .into_iter()
            .cycle();
        for i in 0..200 {
            if session.state() != GameState::Playing {
                break;
            }
            if i % 3 == 0 {
                session.turn(turns.next().unwrap());
            }
            let before = session.snake().len();
            let food = session.food().cell;
            let next = session.snake().next_head();
            match session.tick() {
                Some(Effect::Scored) => {
                    assert_eq!(next, food);
                    assert_eq!(session.snake().len(), before + 1);
                }
                None => {
                    assert_ne!(next, food);
                    assert_eq!(session.snake().len(), before);
                }
                Some(Effect::Died) => assert_eq!(session.snake().len(), before),
            }
        }
    }

    #[test]
    fn restart_resets_everything_but_best() {
        let mut session = playing(&[(0, 5), (1, 5)], Direction::Left, (10, 10));
        session.score.value = 7;
        session.tick();
        assert_eq!(session.score().best, 7);

        assert!(session.restart());
        assert_eq!(session.state(), GameState::GetReady);
        assert_eq!(session.score().value, 0);
        assert_eq!(session.score().best, 7);
        assert_eq!(body(&session), vec![GRID.center()]);
        assert_eq!(session.snake().direction(), Direction::Right);
        assert!(GRID.contains(session.food().cell));
    }

    #[test]
    fn transitions_only_fire_from_their_state() {
        let mut session = GameSession::new(GRID, Some(5));
        assert!(!session.restart());
        assert!(!session.turn(Direction::Up));
        assert_eq!(session.tick(), None);

        assert!(session.apply(Command::Start));
        assert!(!session.apply(Command::Start));
        assert!(!session.apply(Command::Restart));
        assert!(session.apply(Command::Turn(Direction::Up)));
        assert!(!session.apply(Command::Turn(Direction::Left)));
        assert_eq!(session.snake().direction(), Direction::Up);
    }
}
