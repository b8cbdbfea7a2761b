use log::{debug, info};
use rand::rngs::StdRng;

use super::scheduler::IntervalTask;
use crate::domain::{Grid, GridError};

/// Grids at least this wide step with rayon
pub const PARALLEL_THRESHOLD: usize = 128;

/// LifeTile orchestrates the simulation shown in the Game of Life node.
/// It owns the current generation, retains the previous one and drives
/// stepping from its own interval task.
pub struct LifeTile {
    grid: Grid,
    previous: Option<Grid>,
    generation: u64,
    alive_probability: f64,
    timer: IntervalTask,
    rng: StdRng,
}

impl LifeTile {
    /// Seed a fresh grid and start ticking
    pub fn new(
        size: usize,
        alive_probability: f64,
        tick_ms: u64,
        mut rng: StdRng,
    ) -> Result<Self, GridError> {
        let grid = Grid::random(size, alive_probability, &mut rng)?;
        let mut timer = IntervalTask::new(tick_ms);
        timer.start();
        info!("Life grid {}x{} seeded ({} alive)", size, size, grid.population());

        Ok(Self {
            grid,
            previous: None,
            generation: 0,
            alive_probability,
            timer,
            rng,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generation before the current one, if any step has happened
    pub fn previous(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Feed frame time; steps as many generations as the timer says are due
    pub fn update(&mut self, delta_time: f32) {
        for _ in 0..self.timer.advance(delta_time) {
            self.advance();
        }
    }

    /// Step exactly one generation
    pub fn advance(&mut self) {
        let next = if self.grid.size() >= PARALLEL_THRESHOLD {
            self.grid.step_parallel()
        } else {
            self.grid.step()
        };
        self.previous = Some(std::mem::replace(&mut self.grid, next));
        self.generation += 1;
    }

    /// Pause or resume ticking
    pub fn toggle_running(&mut self) {
        if self.timer.is_running() {
            self.timer.stop();
            debug!("Life paused at generation {}", self.generation);
        } else {
            self.timer.start();
            debug!("Life resumed at generation {}", self.generation);
        }
    }

    /// Tear down and start over with a freshly seeded grid of a new size.
    /// On error the current grid keeps running.
    pub fn resize(&mut self, size: usize) -> Result<(), GridError> {
        let grid = Grid::random(size, self.alive_probability, &mut self.rng)?;
        let was_running = self.timer.is_running();
        self.timer.stop();
        self.grid = grid;
        self.previous = None;
        self.generation = 0;
        if was_running {
            self.timer.start();
        }
        info!("Life grid resized to {}x{}", size, size);
        Ok(())
    }

    /// Re-seed at the current size
    pub fn reseed(&mut self) {
        // size and probability were validated when this tile was built
        if let Err(e) = self.resize(self.grid.size()) {
            log::error!("Reseed failed: {}", e);
        }
    }
}
