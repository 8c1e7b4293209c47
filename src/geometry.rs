// Grid cells, pixel regions and the fixed screen layout.

use serde::{Deserialize, Serialize};

/// Edge length of one grid cell in pixels.
pub const CELL_SIZE: i16 = 20;
/// Inset applied on every side of a snake segment.
pub const CELL_PADDING: i16 = 1;
/// Visible size of a snake segment (18x18).
pub const PIECE_SIZE: i16 = CELL_SIZE - 2 * CELL_PADDING;

const PANEL_WIDTH: f32 = 240.0;
const PANEL_HEIGHT: f32 = 180.0;
const BUTTON_WIDTH: f32 = 100.0;
const BUTTON_HEIGHT: f32 = 36.0;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
}

impl Cell {
    pub const fn new(x: i16, y: i16) -> Self {
        Cell { x, y }
    }

    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Size of the play area in cells.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
}

impl Grid {
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

/// Axis-aligned rectangle in window pixels.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Region {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Region {
            x,
            y,
            width,
            height,
        }
    }

    /// Edges are inclusive, matching how clicks on a button border count as hits.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// The scoreboard strip on top and the play area below it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Layout {
    pub canvas: Region,
    pub scoreboard: Region,
    pub play_area: Region,
}

impl Layout {
    pub fn new(canvas_width: u32, canvas_height: u32, scoreboard_height: u32) -> Self {
        let (w, h, sb) = (canvas_width as f32, canvas_height as f32, scoreboard_height as f32);
        Layout {
            canvas: Region::new(0.0, 0.0, w, h),
            scoreboard: Region::new(0.0, 0.0, w, sb),
            play_area: Region::new(0.0, sb, w, h - sb),
        }
    }

    pub fn grid(&self) -> Grid {
        Grid {
            width: (self.play_area.width / CELL_SIZE as f32) as i16,
            height: (self.play_area.height / CELL_SIZE as f32) as i16,
        }
    }

    /// Top-left pixel of a cell.
    pub fn cell_origin(&self, cell: Cell) -> (f32, f32) {
        (
            self.play_area.x + (cell.x * CELL_SIZE) as f32,
            self.play_area.y + (cell.y * CELL_SIZE) as f32,
        )
    }

    pub fn cell_region(&self, cell: Cell) -> Region {
        let (x, y) = self.cell_origin(cell);
        Region::new(x, y, CELL_SIZE as f32, CELL_SIZE as f32)
    }

    /// The padded square a snake segment occupies inside its cell.
    pub fn piece_region(&self, cell: Cell) -> Region {
        let (x, y) = self.cell_origin(cell);
        let pad = CELL_PADDING as f32;
        Region::new(x + pad, y + pad, PIECE_SIZE as f32, PIECE_SIZE as f32)
    }

    pub fn game_over_panel(&self) -> Region {
        Region::new(
            (self.canvas.width - PANEL_WIDTH) / 2.0,
            self.play_area.y + (self.play_area.height - PANEL_HEIGHT) / 2.0,
            PANEL_WIDTH,
            PANEL_HEIGHT,
        )
    }

    pub fn start_button(&self) -> Region {
        let panel = self.game_over_panel();
        Region::new(
            panel.center_x() - BUTTON_WIDTH / 2.0,
            panel.y + panel.height - BUTTON_HEIGHT - 12.0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    }
}
