use super::Cell;
use rand::Rng;
use rayon::prelude::*;
use std::fmt;

/// Default alive probability used when seeding a fresh grid
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.3;

/// Default edge length of the life grid
pub const DEFAULT_GRID_SIZE: usize = 25;

/// Precondition violations rejected when a grid is constructed
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// Grid edge length must be at least 1
    ZeroSize,
    /// Alive probability must lie in [0, 1]
    InvalidProbability(f64),
    /// Cell buffer does not hold exactly size * size cells
    CellCount { size: usize, cells: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroSize => write!(f, "grid size must be positive"),
            GridError::InvalidProbability(p) => {
                write!(f, "alive probability {p} is outside [0, 1]")
            }
            GridError::CellCount { size, cells } => write!(
                f,
                "expected {} cells for a {size}x{size} grid, got {cells}",
                size * size
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// Grid is a square, toroidal field of aged cells.
/// Every step returns a new snapshot and leaves `self` untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell dead
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        Ok(Self {
            size,
            cells: vec![Cell::DEAD; size * size],
        })
    }

    /// Seed a grid where each cell is alive with `alive_probability`.
    /// Seeded cells start at age 0 whether alive or not.
    pub fn random<R: Rng>(
        size: usize,
        alive_probability: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&alive_probability) {
            return Err(GridError::InvalidProbability(alive_probability));
        }
        let mut grid = Self::new(size)?;
        grid.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(alive_probability) {
                Cell::SEEDED
            } else {
                Cell::DEAD
            };
        });
        Ok(grid)
    }

    /// Build a grid from a row-major cell buffer
    pub fn from_cells(size: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        if cells.len() != size * size {
            return Err(GridError::CellCount {
                size,
                cells: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Build a grid with the given positions alive (age 0), all others dead
    pub fn from_alive(size: usize, alive: &[(usize, usize)]) -> Result<Self, GridError> {
        Ok(alive
            .iter()
            .fold(Self::new(size)?, |grid, &(x, y)| grid.with_cell(x, y, Cell::SEEDED)))
    }

    /// Return the grid with one cell replaced. Out-of-range positions are ignored.
    pub fn with_cell(mut self, x: usize, y: usize, cell: Cell) -> Self {
        if x < self.size && y < self.size {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
        self
    }

    /// Edge length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Get grid dimensions as (width, height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.size && y < self.size).then(|| self.cells[self.index(x, y)])
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors, wrapping both axes like a torus
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let n = self.size;

        (0..3)
            .flat_map(|dy| (0..3).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 1 || dy != 1)
            .map(|(dx, dy)| {
                // offsets 0..3 stand for -1..=1; adding n - 1 keeps it unsigned
                let nx = (x + dx + n - 1) % n;
                let ny = (y + dy + n - 1) % n;
                self.cells[self.index(nx, ny)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, idx: usize) -> Cell {
        let (x, y) = (idx % self.size, idx / self.size);
        self.cells[idx].evolve(self.count_live_neighbors(x, y))
    }

    /// Advance one generation (serial)
    pub fn step(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Advance one generation using rayon; identical result to `step`
    pub fn step_parallel(&self) -> Self {
        let cells = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.size, idx / self.size, cell))
    }
}
