mod button;
mod dropdown;

pub use button::Button;
pub use dropdown::Dropdown;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::LIFE_SIZES;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const PANEL_MARGIN: f32 = 10.0;

/// X position where the control panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the node canvas area
pub fn canvas_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

pub fn canvas_area_height() -> f32 {
    screen_height()
}

/// Inner width available to panel widgets
pub fn widget_width() -> f32 {
    PANEL_WIDTH - 2.0 * PANEL_MARGIN
}

/// Left edge of panel widgets
pub fn widget_x() -> f32 {
    panel_x() + PANEL_MARGIN
}

/// Which action a panel button triggers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    ToggleTheme,
    ToggleLife,
    Reseed,
}

/// Labels for the grid-size selector, in `LIFE_SIZES` order
pub fn life_size_labels() -> Vec<String> {
    LIFE_SIZES
        .iter()
        .map(|size| format!("{}×{}", size, size))
        .collect()
}

/// Panel buttons for the current frame
pub fn create_buttons(theme_name: &str, life_running: bool) -> Vec<(ButtonAction, Button)> {
    let x = widget_x();
    let w = widget_width();
    vec![
        (
            ButtonAction::ToggleTheme,
            Button::new(x, 100.0, w, BUTTON_HEIGHT, format!("Theme: {}", theme_name)),
        ),
        (
            ButtonAction::ToggleLife,
            Button::new(
                x,
                150.0,
                w,
                BUTTON_HEIGHT,
                if life_running { "Pause" } else { "Play" },
            ),
        ),
        (
            ButtonAction::Reseed,
            Button::new(x, 200.0, w, BUTTON_HEIGHT, "Reseed"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_size_labels_match_sizes() {
        let labels = life_size_labels();
        assert_eq!(labels.len(), LIFE_SIZES.len());
        assert_eq!(labels[1], "25×25");
    }
}
