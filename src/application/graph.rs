//! Node graph laid out on the canvas: tiles connected by animated edges.

use macroquad::math::{Rect, Vec2};

/// Card dimensions in canvas units
pub const CARD_WIDTH: f32 = 260.0;
pub const CARD_HEIGHT: f32 = 290.0;

/// Canvas units per second the edge dashes travel
const EDGE_FLOW_SPEED: f32 = 40.0;
/// Length of one dash plus one gap
pub const DASH_PERIOD: f32 = 10.0;

/// What a node shows in its body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    DataSource,
    GameOfLife,
    MainTile,
    GraphTile,
}

impl NodeKind {
    pub fn title(self) -> &'static str {
        match self {
            NodeKind::DataSource => "Data Source",
            NodeKind::GameOfLife => "Game of Life",
            NodeKind::MainTile => "Main Tile (LLM Placeholder)",
            NodeKind::GraphTile => "Graph Tile",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NodeKind::DataSource => "A simple data source node to demonstrate data flow.",
            NodeKind::GameOfLife => {
                "Cellular automata where patterns are mapped to a 'synesthesia' color scale."
            }
            NodeKind::MainTile => "A central hub for complex data synthesis and output.",
            NodeKind::GraphTile => "Placeholder for a data visualization component.",
        }
    }

    /// Sources only emit
    pub fn has_target_handle(self) -> bool {
        self != NodeKind::DataSource
    }

    pub fn has_source_handle(self) -> bool {
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    /// Top-left corner in canvas space
    pub position: Vec2,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Vec2::new(x, y),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, CARD_WIDTH, CARD_HEIGHT)
    }

    /// Left-edge connection point
    pub fn target_handle(&self) -> Vec2 {
        self.position + Vec2::new(0.0, CARD_HEIGHT / 2.0)
    }

    /// Right-edge connection point
    pub fn source_handle(&self) -> Vec2 {
        self.position + Vec2::new(CARD_WIDTH, CARD_HEIGHT / 2.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            animated: true,
        }
    }
}

/// Nodes in draw order (last is on top) plus the edges between them
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    flow_phase: f32,
}

impl NodeGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            flow_phase: 0.0,
        }
    }

    /// Default canvas: a data source feeding the life and graph tiles,
    /// both feeding the main tile
    pub fn initial() -> Self {
        Self::new(
            vec![
                Node::new("1", NodeKind::DataSource, 50.0, 150.0),
                Node::new("2", NodeKind::GameOfLife, 400.0, 50.0),
                Node::new("3", NodeKind::MainTile, 800.0, 150.0),
                Node::new("4", NodeKind::GraphTile, 400.0, 400.0),
            ],
            vec![
                Edge::new("e1-2", "1", "2"),
                Edge::new("e1-4", "1", "4"),
                Edge::new("e2-3", "2", "3"),
                Edge::new("e4-3", "4", "3"),
            ],
        )
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Index of the topmost node under `point`
    pub fn node_at(&self, point: Vec2) -> Option<usize> {
        self.nodes
            .iter()
            .rposition(|node| node.rect().contains(point))
    }

    /// Move a node to the top of the draw order; returns its new index
    pub fn bring_to_front(&mut self, index: usize) -> usize {
        if index < self.nodes.len() {
            let node = self.nodes.remove(index);
            self.nodes.push(node);
        }
        self.nodes.len().saturating_sub(1)
    }

    pub fn move_node(&mut self, index: usize, delta: Vec2) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.position += delta;
        }
    }

    /// Source and target handle positions; `None` if either end is missing
    /// or the target cannot accept an edge
    pub fn handle_points(&self, edge: &Edge) -> Option<(Vec2, Vec2)> {
        let source = self.node(&edge.source)?;
        let target = self.node(&edge.target)?;
        if !source.kind.has_source_handle() || !target.kind.has_target_handle() {
            return None;
        }
        Some((source.source_handle(), target.target_handle()))
    }

    /// Scroll animated edges
    pub fn advance_flow(&mut self, delta_time: f32) {
        self.flow_phase = (self.flow_phase + delta_time * EDGE_FLOW_SPEED).rem_euclid(DASH_PERIOD);
    }

    pub fn flow_phase(&self) -> f32 {
        self.flow_phase
    }
}

/// Horizontal cubic bezier between two handles, sampled into a polyline
pub fn bezier_path(from: Vec2, to: Vec2, segments: usize) -> Vec<Vec2> {
    let segments = segments.max(1);
    let reach = ((to.x - from.x).abs() * 0.5).max(40.0);
    let c1 = from + Vec2::new(reach, 0.0);
    let c2 = to - Vec2::new(reach, 0.0);

    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let u = 1.0 - t;
            from * (u * u * u) + c1 * (3.0 * u * u * t) + c2 * (3.0 * u * t * t) + to * (t * t * t)
        })
        .collect()
}

/// Split a polyline into dash segments. The pattern repeats every
/// `DASH_PERIOD` units, half dash and half gap, shifted forward by `phase`.
pub fn dashes(points: &[Vec2], phase: f32) -> Vec<(Vec2, Vec2)> {
    let dash = DASH_PERIOD / 2.0;
    let mut out = Vec::new();
    // path distance, shifted back by the phase
    let mut walked = -phase.rem_euclid(DASH_PERIOD);

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = a.distance(b);
        if length <= f32::EPSILON {
            continue;
        }
        let dir = (b - a) / length;
        let start = walked;
        let end = walked + length;

        // first period that can overlap this segment
        let mut period = (start / DASH_PERIOD).floor() * DASH_PERIOD;
        while period < end {
            let from = period.max(start);
            let to = (period + dash).min(end);
            if to > from {
                out.push((a + dir * (from - start), a + dir * (to - start)));
            }
            period += DASH_PERIOD;
        }
        walked = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let graph = NodeGraph::initial();
        assert_eq!(graph.nodes().len(), 4);
        assert_eq!(graph.edges().len(), 4);
        assert!(graph.edges().iter().all(|e| graph.handle_points(e).is_some()));
    }

    #[test]
    fn test_node_at_prefers_topmost() {
        let mut graph = NodeGraph::new(
            vec![
                Node::new("a", NodeKind::GraphTile, 0.0, 0.0),
                Node::new("b", NodeKind::GraphTile, 100.0, 100.0),
            ],
            vec![],
        );
        let overlap = Vec2::new(150.0, 150.0);
        assert_eq!(graph.node_at(overlap), Some(1));

        let idx = graph.bring_to_front(0);
        assert_eq!(idx, 1);
        assert_eq!(graph.nodes()[idx].id, "a");
        assert_eq!(graph.node_at(overlap), Some(1));
        assert_eq!(graph.node_at(Vec2::new(-5.0, -5.0)), None);
    }

    #[test]
    fn test_move_node_shifts_handles() {
        let mut graph = NodeGraph::initial();
        let edge = graph.edges()[0].clone();
        let (from, _) = graph.handle_points(&edge).unwrap();
        graph.move_node(0, Vec2::new(10.0, -20.0));
        let (moved, _) = graph.handle_points(&edge).unwrap();
        assert_eq!(moved - from, Vec2::new(10.0, -20.0));
    }

    #[test]
    fn test_edges_into_data_source_are_not_drawn() {
        let graph = NodeGraph::new(
            vec![
                Node::new("1", NodeKind::GraphTile, 0.0, 0.0),
                Node::new("2", NodeKind::DataSource, 400.0, 0.0),
            ],
            vec![Edge::new("e", "1", "2"), Edge::new("dangling", "1", "9")],
        );
        assert!(graph.edges().iter().all(|e| graph.handle_points(e).is_none()));
    }

    #[test]
    fn test_flow_phase_wraps() {
        let mut graph = NodeGraph::initial();
        graph.advance_flow(1.0);
        assert!(graph.flow_phase() >= 0.0 && graph.flow_phase() < DASH_PERIOD);
    }

    #[test]
    fn test_bezier_endpoints() {
        let from = Vec2::new(0.0, 0.0);
        let to = Vec2::new(200.0, 100.0);
        let path = bezier_path(from, to, 16);
        assert_eq!(path.len(), 17);
        assert!(path[0].distance(from) < 1e-4);
        assert!(path[16].distance(to) < 1e-4);
    }

    #[test]
    fn test_dashes_cover_half_the_line() {
        let line = [Vec2::ZERO, Vec2::new(100.0, 0.0)];
        let total: f32 = dashes(&line, 0.0).iter().map(|(a, b)| a.distance(*b)).sum();
        assert!((total - 50.0).abs() < 1e-3);

        let shifted: f32 = dashes(&line, 2.5).iter().map(|(a, b)| a.distance(*b)).sum();
        assert!((shifted - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_dash_phase_moves_pattern() {
        let line = [Vec2::ZERO, Vec2::new(20.0, 0.0)];
        let still = dashes(&line, 0.0);
        let moved = dashes(&line, 2.0);
        assert_eq!(still[0].0, Vec2::ZERO);
        assert!((moved[0].0.x - 2.0).abs() < 1e-4);
        assert!((moved[0].1.x - 7.0).abs() < 1e-4);
        assert_eq!(moved.len(), 2);
    }
}
