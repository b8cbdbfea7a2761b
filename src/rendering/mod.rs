use macroquad::prelude::*;

use crate::application::graph::{CARD_HEIGHT, CARD_WIDTH, bezier_path, dashes};
use crate::application::{Camera, CanvasState, LifeTile, Node, NodeKind, SpinningMesh, Storage};
use crate::domain::ThemeStyle;
use crate::ui::{Button, ButtonAction, Dropdown, PANEL_WIDTH, canvas_area_height, canvas_area_width, panel_x};

const DOT_SPACING: f32 = 20.0;
const HANDLE_RADIUS: f32 = 7.0;
const CARD_PADDING: f32 = 12.0;
const BODY_TOP: f32 = 92.0;
const EDGE_SEGMENTS: usize = 32;
const DESCRIPTION_CHARS: usize = 36;

const BEVEL_LIGHT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
const BEVEL_SHADOW: Color = Color::new(0.5, 0.5, 0.5, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Greedy word wrap to at most `max_chars` per line
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Outline a box: bevelled for the retro skin, a plain line otherwise
pub fn draw_frame(x: f32, y: f32, w: f32, h: f32, style: &ThemeStyle, color: Color) {
    if style.square_corners {
        draw_line(x, y, x + w, y, 2.0, BEVEL_LIGHT);
        draw_line(x, y, x, y + h, 2.0, BEVEL_LIGHT);
        draw_line(x, y + h, x + w, y + h, 2.0, BEVEL_SHADOW);
        draw_line(x + w, y, x + w, y + h, 2.0, BEVEL_SHADOW);
    } else {
        draw_rectangle_lines(x, y, w, h, 2.0, color);
    }
}

/// Dotted background covering the visible canvas
fn draw_background(style: &ThemeStyle, camera: &Camera) {
    clear_background(style.canvas_background);

    let spacing = DOT_SPACING * camera.zoom;
    if spacing < 6.0 {
        return;
    }
    let start_x = camera.offset.x.rem_euclid(spacing);
    let start_y = camera.offset.y.rem_euclid(spacing);
    let (w, h) = (canvas_area_width(), canvas_area_height());

    let mut y = start_y;
    while y < h {
        let mut x = start_x;
        while x < w {
            draw_circle(x, y, 1.0, style.canvas_dots);
            x += spacing;
        }
        y += spacing;
    }
}

fn draw_edges<S: Storage>(state: &CanvasState<S>, style: &ThemeStyle, camera: &Camera) {
    let thickness = (2.0 * camera.zoom).max(1.0);
    let phase = state.graph.flow_phase();

    for edge in state.graph.edges() {
        let Some((from, to)) = state.graph.handle_points(edge) else {
            continue;
        };
        let path: Vec<Vec2> = bezier_path(from, to, EDGE_SEGMENTS)
            .into_iter()
            .map(|p| camera.canvas_to_screen(p))
            .collect();

        if edge.animated {
            // dashes flow from source to target
            for (a, b) in dashes(&path, phase * camera.zoom) {
                draw_line(a.x, a.y, b.x, b.y, thickness, style.edge);
            }
        } else {
            for pair in path.windows(2) {
                draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, thickness, style.edge);
            }
        }
    }
}

fn draw_life_body(life: &LifeTile, style: &ThemeStyle, body: Rect) {
    let side = body.w.min(body.h) - 8.0;
    if side <= 0.0 {
        return;
    }
    let origin = vec2(body.x + (body.w - side) / 2.0, body.y + (body.h - side) / 2.0);
    let cell_size = side / life.size() as f32;

    for (x, y, cell) in life.grid().iter_cells() {
        draw_rectangle(
            origin.x + x as f32 * cell_size,
            origin.y + y as f32 * cell_size,
            cell_size,
            cell_size,
            style.life.color_for(cell),
        );
    }
}

fn draw_mesh_body(mesh: &SpinningMesh, style: &ThemeStyle, body: Rect) {
    let center = vec2(body.x + body.w / 2.0, body.y + body.h / 2.0);
    let half = vec2(body.w / 2.0, body.h / 2.0);
    for face in mesh.faces(style.mesh, center, half) {
        let [a, b, c] = face.points;
        draw_triangle(a, b, c, face.color);
    }
}

fn draw_centered_text(text: &str, body: Rect, size: f32, color: Color) {
    let measure = measure_text(text, None, size as u16, 1.0);
    draw_text(
        text,
        body.x + (body.w - measure.width) / 2.0,
        body.y + (body.h + measure.height) / 2.0,
        size,
        color,
    );
}

fn draw_source_icon(style: &ThemeStyle, body: Rect, zoom: f32) {
    let c = vec2(body.x + body.w / 2.0, body.y + body.h / 2.0);
    let r = 20.0 * zoom;
    draw_circle_lines(c.x, c.y, r, 2.0 * zoom, style.handle_target);
    draw_line(c.x, c.y - r * 0.6, c.x, c.y + r * 0.5, 2.0 * zoom, style.handle_target);
    draw_line(c.x - r * 0.4, c.y + r * 0.1, c.x, c.y + r * 0.5, 2.0 * zoom, style.handle_target);
    draw_line(c.x + r * 0.4, c.y + r * 0.1, c.x, c.y + r * 0.5, 2.0 * zoom, style.handle_target);
}

fn draw_node<S: Storage>(node: &Node, state: &CanvasState<S>, style: &ThemeStyle, camera: &Camera) {
    let z = camera.zoom;
    let p = camera.canvas_to_screen(node.position);
    let (w, h) = (CARD_WIDTH * z, CARD_HEIGHT * z);

    draw_rectangle(p.x, p.y, w, h, style.card_fill);
    if style.square_corners {
        draw_rectangle(p.x + 3.0, p.y + 3.0, w - 6.0, 28.0 * z, style.title_bar);
    }
    draw_frame(p.x, p.y, w, h, style, style.card_border);

    let pad = CARD_PADDING * z;
    draw_text(node.kind.title(), p.x + pad, p.y + 23.0 * z, 19.0 * z, style.card_title);
    for (i, line) in wrap_text(node.kind.description(), DESCRIPTION_CHARS).iter().enumerate() {
        draw_text(
            line,
            p.x + pad,
            p.y + (48.0 + i as f32 * 15.0) * z,
            14.0 * z,
            style.card_text,
        );
    }

    let body = Rect::new(
        p.x + pad,
        p.y + BODY_TOP * z,
        w - 2.0 * pad,
        h - BODY_TOP * z - pad,
    );
    draw_rectangle(body.x, body.y, body.w, body.h, style.body_fill);

    match node.kind {
        NodeKind::GameOfLife => draw_life_body(&state.life, style, body),
        NodeKind::MainTile => draw_mesh_body(&state.mesh, style, body),
        NodeKind::GraphTile => {
            draw_centered_text("[Graph Visualization Placeholder]", body, 14.0 * z, style.card_text)
        }
        NodeKind::DataSource => draw_source_icon(style, body, z),
    }

    let r = HANDLE_RADIUS * z;
    if node.kind.has_target_handle() {
        let t = camera.canvas_to_screen(node.target_handle());
        draw_circle(t.x, t.y, r, style.handle_target);
    }
    if node.kind.has_source_handle() {
        let s = camera.canvas_to_screen(node.source_handle());
        draw_circle(s.x, s.y, r, style.handle_source);
    }
}

/// Draw the node canvas: background, edges, then nodes in stacking order
pub fn draw_canvas<S: Storage>(state: &CanvasState<S>, camera: &Camera) {
    let style = state.theme.style();
    draw_background(style, camera);
    draw_edges(state, style, camera);
    for node in state.graph.nodes() {
        draw_node(node, state, style, camera);
    }
}

/// Draw the control panel with buttons, the size selector and stats
pub fn draw_controls<S: Storage>(
    state: &CanvasState<S>,
    camera: &Camera,
    buttons: &[(ButtonAction, Button)],
    size_dropdown: &Dropdown,
    mouse_pos: (f32, f32),
) {
    let style = state.theme.style();
    let px = panel_x() + 10.0;

    draw_rectangle(panel_x(), 0.0, PANEL_WIDTH, screen_height(), style.panel);
    draw_text("Synestia", px, 30.0, 24.0, style.card_title);

    buttons.iter().for_each(|(_, btn)| btn.draw(style, mouse_pos));

    let life = &state.life;
    let stats = [
        ("Generation:", format!("{}", life.generation())),
        ("Population:", format_number(life.population())),
        (
            "Status:",
            if life.is_running() { "Running" } else { "Paused" }.to_owned(),
        ),
        ("Update:", format!("{:.2}ms", state.last_update_time_ms)),
        ("Render:", format!("{:.1}ms", state.last_render_time_ms)),
        ("FPS:", format!("{}", get_fps())),
        ("Zoom:", format!("{:.1}x", camera.zoom)),
    ];
    stats.iter().enumerate().for_each(|(i, (label, value))| {
        let y = 320.0 + i as f32 * 22.0;
        draw_text(label, px, y, 16.0, style.card_text);
        draw_text(value, px + 90.0, y, 16.0, style.card_title);
    });

    let controls = [
        "Controls:",
        "LMB drag: Move tile",
        "Mid drag: Pan",
        "Wheel: Zoom",
        "T: Theme  Space: Pause",
        "R: Reseed  H: Home",
    ];
    controls.iter().enumerate().for_each(|(i, text)| {
        draw_text(text, px, 500.0 + i as f32 * 15.0, 13.0, style.card_text);
    });

    // drawn last so the open menu sits on top
    size_dropdown.draw(style, mouse_pos);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(2_500), "2.5K");
        assert_eq!(format_number(3_000_000), "3.0M");
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text(NodeKind::GameOfLife.description(), DESCRIPTION_CHARS);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= DESCRIPTION_CHARS));
        assert_eq!(lines.join(" "), NodeKind::GameOfLife.description());
    }

    #[test]
    fn test_wrap_text_keeps_long_words_whole() {
        let lines = wrap_text("a supercalifragilistic b", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "b"]);
    }
}
