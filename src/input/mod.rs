use macroquad::prelude::*;

use crate::application::{Camera, CanvasState, NodeGraph, Storage};
use crate::ui::{Button, ButtonAction, canvas_area_width};

/// What the left/middle button is currently dragging
#[derive(Clone, Copy, Debug, PartialEq)]
enum Drag {
    Node(usize),
    Pan,
}

/// Pointer drag tracking across frames
#[derive(Debug, Default)]
pub struct PointerState {
    drag: Option<Drag>,
    last: Vec2,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Left press: pick up the topmost node under the cursor and raise it
    pub fn press_node(&mut self, graph: &mut NodeGraph, camera: &Camera, screen: Vec2) {
        let canvas = camera.screen_to_canvas(screen);
        if let Some(index) = graph.node_at(canvas) {
            let index = graph.bring_to_front(index);
            self.drag = Some(Drag::Node(index));
            self.last = screen;
        }
    }

    /// Middle press: start panning
    pub fn press_pan(&mut self, screen: Vec2) {
        self.drag = Some(Drag::Pan);
        self.last = screen;
    }

    /// Cursor moved while a button is held
    pub fn drag_to(&mut self, graph: &mut NodeGraph, camera: &mut Camera, screen: Vec2) {
        let delta = screen - self.last;
        self.last = screen;
        match self.drag {
            Some(Drag::Node(index)) => graph.move_node(index, camera.screen_delta_to_canvas(delta)),
            Some(Drag::Pan) => camera.pan(delta),
            None => {}
        }
    }

    pub fn release(&mut self) {
        self.drag = None;
    }
}

/// Node dragging with the left button, panning with the middle button
pub fn handle_pointer<S: Storage>(
    state: &mut CanvasState<S>,
    camera: &mut Camera,
    pointer: &mut PointerState,
    mouse_pos: (f32, f32),
) {
    let screen = Vec2::new(mouse_pos.0, mouse_pos.1);
    let on_canvas = mouse_pos.0 < canvas_area_width();

    if on_canvas && is_mouse_button_pressed(MouseButton::Left) {
        pointer.press_node(&mut state.graph, camera, screen);
    } else if on_canvas && is_mouse_button_pressed(MouseButton::Middle) {
        pointer.press_pan(screen);
    }

    if pointer.is_dragging() {
        if is_mouse_button_down(MouseButton::Left) || is_mouse_button_down(MouseButton::Middle) {
            pointer.drag_to(&mut state.graph, camera, screen);
        } else {
            pointer.release();
        }
    }
}

/// Zoom around the cursor with the mouse wheel
pub fn handle_zoom(camera: &mut Camera, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= canvas_area_width() {
        return;
    }
    let wheel = mouse_wheel().1;
    let anchor = Vec2::new(mouse_pos.0, mouse_pos.1);
    if wheel > 0.0 {
        camera.zoom_at(anchor, 1.1);
    } else if wheel < 0.0 {
        camera.zoom_at(anchor, 1.0 / 1.1);
    }
}

/// Keyboard shortcuts
pub fn process_keyboard_input<S: Storage>(state: &mut CanvasState<S>, camera: &mut Camera) {
    let actions: [(KeyCode, fn(&mut CanvasState<S>)); 3] = [
        (KeyCode::T, CanvasState::toggle_theme),
        (KeyCode::Space, CanvasState::toggle_life),
        (KeyCode::R, CanvasState::reseed_life),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(state));

    // Reset camera with 'H' (home)
    if is_key_pressed(KeyCode::H) {
        camera.reset();
    }
}

/// Dispatch panel button clicks
pub fn process_button_clicks<S: Storage>(
    state: &mut CanvasState<S>,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: (f32, f32),
) {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .for_each(|(action, _)| apply_button(state, *action));
}

fn apply_button<S: Storage>(state: &mut CanvasState<S>, action: ButtonAction) {
    match action {
        ButtonAction::ToggleTheme => state.toggle_theme(),
        ButtonAction::ToggleLife => state.toggle_life(),
        ButtonAction::Reseed => state.reseed_life(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::graph::{CARD_HEIGHT, CARD_WIDTH};

    #[test]
    fn test_drag_moves_topmost_node() {
        let mut graph = NodeGraph::initial();
        let mut camera = Camera::new();
        let mut pointer = PointerState::new();
        let start = graph.node("2").unwrap().position;

        pointer.press_node(&mut graph, &camera, start + Vec2::new(10.0, 10.0));
        assert!(pointer.is_dragging());
        pointer.drag_to(&mut graph, &mut camera, start + Vec2::new(40.0, 30.0));
        pointer.release();

        assert_eq!(graph.node("2").unwrap().position, start + Vec2::new(30.0, 20.0));
        assert_eq!(graph.nodes().last().unwrap().id, "2");
        assert!(!pointer.is_dragging());
    }

    #[test]
    fn test_drag_respects_zoom() {
        let mut graph = NodeGraph::initial();
        let mut camera = Camera::new();
        camera.zoom = 2.0;
        let mut pointer = PointerState::new();
        let node = graph.node("1").unwrap().clone();
        let grab = camera.canvas_to_screen(node.position + Vec2::new(CARD_WIDTH, CARD_HEIGHT) / 2.0);

        pointer.press_node(&mut graph, &camera, grab);
        pointer.drag_to(&mut graph, &mut camera, grab + Vec2::new(20.0, 0.0));

        assert_eq!(graph.node("1").unwrap().position, node.position + Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_press_on_empty_canvas_does_nothing() {
        let mut graph = NodeGraph::initial();
        let before = graph.clone();
        let mut pointer = PointerState::new();
        pointer.press_node(&mut graph, &Camera::new(), Vec2::new(5.0, 5.0));
        assert!(!pointer.is_dragging());
        assert_eq!(graph, before);
    }

    #[test]
    fn test_pan_moves_camera() {
        let mut graph = NodeGraph::initial();
        let mut camera = Camera::new();
        let mut pointer = PointerState::new();
        pointer.press_pan(Vec2::new(100.0, 100.0));
        pointer.drag_to(&mut graph, &mut camera, Vec2::new(90.0, 120.0));
        assert_eq!(camera.offset, Vec2::new(-10.0, 20.0));
    }
}
