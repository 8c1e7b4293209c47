use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::geometry::{Cell, Grid};
use crate::snake::Snake;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Food {
    pub cell: Cell,
}

impl Food {
    pub fn spawn<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Self {
        let cell = pick_cell(rng, grid, snake);
        debug!("food placed at ({}, {})", cell.x, cell.y);
        Food { cell }
    }

    pub fn respawn<R: Rng>(&mut self, rng: &mut R, grid: Grid, snake: &Snake) {
        *self = Food::spawn(rng, grid, snake);
    }
}

/// Uniform over the cells the snake doesn't cover. A snake filling the whole
/// grid leaves nothing free, so any cell will do.
fn pick_cell<R: Rng>(rng: &mut R, grid: Grid, snake: &Snake) -> Cell {
    if snake.len() < grid.area() {
        if let Some(cell) = grid.cells().filter(|c| !snake.contains(*c)).choose(rng) {
            return cell;
        }
    }
    Cell::new(rng.gen_range(0..grid.width), rng.gen_range(0..grid.height))
}
