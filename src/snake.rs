use std::collections::VecDeque;

use crate::geometry::{Cell, Grid};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    fn delta(self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Step {
    Moved,
    Grew,
    Crashed,
}

/// Body cells with the head at the front.
///
/// `direction` is what the next step will use; `heading` is the direction
/// of the last step taken. Turns are checked against `heading` so two quick
/// key presses between ticks can't fold the snake back onto its neck.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    heading: Direction,
}

impl Snake {
    pub fn new(head: Cell, direction: Direction) -> Self {
        Snake::from_cells([head], direction)
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>, direction: Direction) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "snake needs at least a head");
        Snake {
            body,
            direction,
            heading: direction,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns `false` when the turn is a reversal and was ignored.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == self.heading.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn next_head(&self) -> Cell {
        let (dx, dy) = self.direction.delta();
        self.head().offset(dx, dy)
    }

    /// Advances one cell. On a crash the body is left untouched.
    pub fn step(&mut self, grid: Grid, food: Cell) -> Step {
        let new_head = self.next_head();
        let grows = new_head == food;

        if !grid.contains(new_head) || self.hits_body(new_head, grows) {
            return Step::Crashed;
        }

        if !grows {
            self.body.pop_back();
        }
        self.body.push_front(new_head);
        self.heading = self.direction;

        if grows {
            Step::Grew
        } else {
            Step::Moved
        }
    }

    // The tail moves out of the way this tick unless the snake is growing.
    fn hits_body(&self, cell: Cell, grows: bool) -> bool {
        let checked = if grows {
            self.body.len()
        } else {
            self.body.len() - 1
        };
        self.body.iter().take(checked).any(|c| *c == cell)
    }
}
