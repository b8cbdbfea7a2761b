use macroquad::math::Vec2;

/// Camera maps between the node canvas and the screen (pan and zoom)
pub struct Camera {
    pub offset: Vec2,
    pub zoom: f32, // 1.0 = normal, 2.0 = 2x zoomed in
}

impl Camera {
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Zoom by factor, keeping the canvas point under `anchor` fixed on screen
    pub fn zoom_at(&mut self, anchor: Vec2, factor: f32) {
        let before = self.screen_to_canvas(anchor);
        self.zoom = (self.zoom * factor).clamp(0.25, 4.0);
        self.offset = anchor - before * self.zoom;
    }

    /// Pan camera by a screen-space delta
    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.offset) / self.zoom
    }

    pub fn canvas_to_screen(&self, canvas: Vec2) -> Vec2 {
        canvas * self.zoom + self.offset
    }

    /// Convert a screen-space drag into canvas units
    pub fn screen_delta_to_canvas(&self, delta: Vec2) -> Vec2 {
        delta / self.zoom
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
        self.zoom = 1.0;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
