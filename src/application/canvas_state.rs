use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::config::Config;
use super::graph::NodeGraph;
use super::life_tile::LifeTile;
use super::mesh_tile::SpinningMesh;
use super::theme_store::{Storage, ThemeContext};

/// Sizes offered by the grid-size selector
pub const LIFE_SIZES: &[usize] = &[10, 25, 50, 100, 200];

/// CanvasState orchestrates everything on screen.
/// This is the application layer that coordinates the tiles and the theme.
pub struct CanvasState<S: Storage> {
    pub graph: NodeGraph,
    pub life: LifeTile,
    pub mesh: SpinningMesh,
    pub theme: ThemeContext<S>,
    pub last_update_time_ms: f32,
    pub last_render_time_ms: f32,
}

impl<S: Storage> CanvasState<S> {
    /// Build the default canvas from validated settings
    pub fn new(config: &Config, mut theme: ThemeContext<S>) -> Result<Self, String> {
        let rng = match config.seed {
            Some(seed) => {
                info!("Using seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        let life = LifeTile::new(
            config.grid_size,
            config.alive_probability,
            config.tick_ms,
            rng,
        )
        .map_err(|e| e.to_string())?;

        if let Some(forced) = config.theme {
            theme.set_theme(forced);
        }

        Ok(Self {
            graph: NodeGraph::initial(),
            life,
            mesh: SpinningMesh::new(),
            theme,
            last_update_time_ms: 0.0,
            last_render_time_ms: 0.0,
        })
    }

    /// Advance both scheduled tasks and the edge animation by one frame
    pub fn update(&mut self, delta_time: f32) {
        let start = std::time::Instant::now();
        self.life.update(delta_time);
        self.mesh.update();
        self.graph.advance_flow(delta_time);
        self.last_update_time_ms = start.elapsed().as_secs_f32() * 1000.0;
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle_theme();
    }

    pub fn toggle_life(&mut self) {
        self.life.toggle_running();
    }

    pub fn reseed_life(&mut self) {
        self.life.reseed();
    }

    /// Switch to one of `LIFE_SIZES` by index; out-of-range indices are ignored
    pub fn select_life_size(&mut self, index: usize) {
        if let Some(&size) = LIFE_SIZES.get(index) {
            if let Err(e) = self.life.resize(size) {
                log::error!("Resize to {} failed: {}", size, e);
            }
        }
    }

    /// Position of the current grid size in `LIFE_SIZES`, if it is one of them
    pub fn life_size_index(&self) -> Option<usize> {
        LIFE_SIZES.iter().position(|&size| size == self.life.size())
    }
}
