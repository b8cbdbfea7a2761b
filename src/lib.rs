// Domain layer - Life engine, palettes, themes, mesh geometry
pub mod domain;

// Application layer - Tiles, scheduling, theme persistence, config
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, ThemeId};
pub use application::{CanvasState, Camera, Config, ThemeContext};
