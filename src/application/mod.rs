mod camera;
mod canvas_state;
pub mod config;
pub mod graph;
mod life_tile;
mod mesh_tile;
pub mod scheduler;
pub mod theme_store;

pub use camera::Camera;
pub use canvas_state::{CanvasState, LIFE_SIZES};
pub use config::{Cli, Config};
pub use graph::{Edge, Node, NodeGraph, NodeKind};
pub use life_tile::LifeTile;
pub use mesh_tile::SpinningMesh;
pub use theme_store::{IniStorage, MemoryStorage, Storage, ThemeContext};
