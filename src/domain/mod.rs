mod cell;
mod grid;
mod palette;
mod theme;
pub mod mesh;

pub use cell::Cell;
pub use grid::{Grid, GridError, DEFAULT_ALIVE_PROBABILITY, DEFAULT_GRID_SIZE};
pub use palette::{Palette, age_bucket, AGE_BUCKET_WIDTH};
pub use theme::{ThemeId, ThemeStyle};
