//! Age-based coloring for life cells.
//!
//! The engine only exposes `alive` and `age`; a theme supplies the colors.
//! Ages are bucketed in steps of [`AGE_BUCKET_WIDTH`] generations and the
//! bucket is clamped to the last live color.

use macroquad::color::Color;

use super::Cell;

/// Generations per palette entry
pub const AGE_BUCKET_WIDTH: u32 = 5;

/// Map an age to a palette index: `min(age / 5, len - 1)`.
/// An empty palette maps everything to 0.
pub fn age_bucket(age: u32, palette_len: usize) -> usize {
    let bucket = (age / AGE_BUCKET_WIDTH) as usize;
    bucket.min(palette_len.saturating_sub(1))
}

/// Dead color plus ordered live colors, youngest first
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub dead: Color,
    pub live: &'static [Color],
}

impl Palette {
    /// Color for a cell; a palette with no live entries draws live cells as dead
    pub fn color_for(&self, cell: Cell) -> Color {
        if !cell.alive {
            return self.dead;
        }
        self.live
            .get(age_bucket(cell.age, self.live.len()))
            .copied()
            .unwrap_or(self.dead)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIVE: [Color; 5] = [
        Color::new(0.1, 0.0, 0.0, 1.0),
        Color::new(0.2, 0.0, 0.0, 1.0),
        Color::new(0.3, 0.0, 0.0, 1.0),
        Color::new(0.4, 0.0, 0.0, 1.0),
        Color::new(0.5, 0.0, 0.0, 1.0),
    ];

    #[test]
    fn test_age_buckets() {
        assert_eq!(age_bucket(0, 5), 0);
        assert_eq!(age_bucket(4, 5), 0);
        assert_eq!(age_bucket(5, 5), 1);
        assert_eq!(age_bucket(24, 5), 4);
        assert_eq!(age_bucket(1000, 5), 4);
    }

    #[test]
    fn test_bucket_on_degenerate_palettes() {
        assert_eq!(age_bucket(100, 1), 0);
        assert_eq!(age_bucket(100, 0), 0);
    }

    #[test]
    fn test_color_for_cells() {
        let dead = Color::new(0.0, 0.0, 0.0, 1.0);
        let palette = Palette { dead, live: &LIVE };

        assert_eq!(palette.color_for(Cell::DEAD), dead);
        assert_eq!(palette.color_for(Cell::NEWBORN), LIVE[0]);
        assert_eq!(palette.color_for(Cell { alive: true, age: 12 }), LIVE[2]);
        assert_eq!(palette.color_for(Cell { alive: true, age: 500 }), LIVE[4]);
    }

    #[test]
    fn test_empty_live_palette_falls_back_to_dead() {
        let dead = Color::new(0.0, 0.0, 0.0, 1.0);
        let palette = Palette { dead, live: &[] };
        assert_eq!(palette.color_for(Cell::NEWBORN), dead);
    }
}
