use macroquad::prelude::*;

use crate::domain::ThemeStyle;
use crate::rendering::draw_frame;

/// Dropdown selector UI component
#[derive(Clone)]
pub struct Dropdown {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    items: Vec<String>,
    selected: usize,
    is_open: bool,
    label: String,
}

impl Dropdown {
    pub fn new(x: f32, y: f32, width: f32, label: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            x,
            y,
            width,
            height: 30.0,
            items,
            selected: 0,
            is_open: false,
            label: label.into(),
        }
    }

    /// Get currently selected index
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set selected index
    pub fn set_selected(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Update position for responsive layout
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    /// Draw dropdown without handling interaction
    pub fn draw(&self, style: &ThemeStyle, mouse_pos: (f32, f32)) {
        draw_text(&self.label, self.x, self.y - 5.0, 14.0, style.card_text);

        let button_color = if self.is_hovered_main(mouse_pos) {
            style.button_hover
        } else {
            style.button
        };
        draw_rectangle(self.x, self.y, self.width, self.height, button_color);
        draw_frame(self.x, self.y, self.width, self.height, style, style.card_border);

        if let Some(text) = self.items.get(self.selected) {
            draw_text(text, self.x + 5.0, self.y + 21.0, 16.0, style.button_text);
        }
        draw_text("v", self.x + self.width - 16.0, self.y + 20.0, 16.0, style.button_text);

        if !self.is_open {
            return;
        }

        let menu_height = self.items.len() as f32 * self.height;
        draw_rectangle(self.x, self.y + self.height, self.width, menu_height, style.panel);

        for (i, item) in self.items.iter().enumerate() {
            let item_y = self.y + self.height + (i as f32 * self.height);
            let item_color = if self.is_hovered_item(mouse_pos, i) {
                style.button_hover
            } else if i == self.selected {
                style.button
            } else {
                style.panel
            };

            draw_rectangle(self.x, item_y, self.width, self.height, item_color);
            draw_text(item, self.x + 5.0, item_y + 21.0, 16.0, style.button_text);
        }

        draw_frame(
            self.x,
            self.y + self.height,
            self.width,
            menu_height,
            style,
            style.card_border,
        );
    }

    /// Handle interaction and return true if selection changed
    pub fn update(&mut self, mouse_pos: (f32, f32)) -> bool {
        self.handle_click(mouse_pos, is_mouse_button_pressed(MouseButton::Left))
    }

    fn handle_click(&mut self, mouse_pos: (f32, f32), clicked: bool) -> bool {
        if !clicked {
            return false;
        }

        if self.is_hovered_main(mouse_pos) {
            self.is_open = !self.is_open;
            return false; // Opening/closing dropdown is not a selection change
        }

        if !self.is_open {
            return false;
        }

        let hit = (0..self.items.len()).find(|&i| self.is_hovered_item(mouse_pos, i));
        self.is_open = false;
        match hit {
            Some(i) if i != self.selected => {
                self.selected = i;
                true
            }
            _ => false,
        }
    }

    /// Whether `mouse_pos` is over any part of the dropdown
    pub fn contains(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered_main(mouse_pos)
            || (self.is_open && (0..self.items.len()).any(|i| self.is_hovered_item(mouse_pos, i)))
    }

    fn is_hovered_main(&self, mouse_pos: (f32, f32)) -> bool {
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= self.y
            && mouse_pos.1 <= self.y + self.height
    }

    fn is_hovered_item(&self, mouse_pos: (f32, f32), index: usize) -> bool {
        let item_y = self.y + self.height + (index as f32 * self.height);
        mouse_pos.0 >= self.x
            && mouse_pos.0 <= self.x + self.width
            && mouse_pos.1 >= item_y
            && mouse_pos.1 <= item_y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Dropdown {
        Dropdown::new(0.0, 0.0, 100.0, "Grid", vec!["10".into(), "25".into(), "50".into()])
    }

    #[test]
    fn test_click_main_toggles_open() {
        let mut dd = sizes();
        assert!(!dd.handle_click((50.0, 15.0), true));
        assert!(dd.is_open());
        assert!(!dd.handle_click((50.0, 15.0), true));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_selecting_item_reports_change() {
        let mut dd = sizes();
        dd.handle_click((50.0, 15.0), true);
        // third item spans y 90..120
        assert!(dd.handle_click((50.0, 100.0), true));
        assert_eq!(dd.selected(), 2);
        assert!(!dd.is_open());
    }

    #[test]
    fn test_reselecting_same_item_is_not_a_change() {
        let mut dd = sizes();
        dd.handle_click((50.0, 15.0), true);
        assert!(!dd.handle_click((50.0, 40.0), true));
        assert_eq!(dd.selected(), 0);
    }

    #[test]
    fn test_click_outside_closes() {
        let mut dd = sizes();
        dd.handle_click((50.0, 15.0), true);
        assert!(!dd.handle_click((500.0, 500.0), true));
        assert!(!dd.is_open());
    }

    #[test]
    fn test_set_selected_ignores_out_of_range() {
        let mut dd = sizes();
        dd.set_selected(7);
        assert_eq!(dd.selected(), 0);
        dd.set_selected(1);
        assert_eq!(dd.selected(), 1);
    }
}
