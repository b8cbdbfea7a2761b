use macroquad::color::Color;
use macroquad::math::Vec2;

use super::scheduler::FrameTask;
use crate::domain::mesh::{Icosahedron, Rotation, ShadedFace, SPIN_PER_FRAME};

/// The rotating icosahedron shown in the main tile.
/// Spins once per frame while its frame task runs.
pub struct SpinningMesh {
    mesh: Icosahedron,
    rotation: Rotation,
    task: FrameTask,
}

impl SpinningMesh {
    /// New mesh, already spinning
    pub fn new() -> Self {
        let mut task = FrameTask::new();
        task.start();
        Self {
            mesh: Icosahedron::new(),
            rotation: Rotation::default(),
            task,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        self.task.is_running()
    }

    pub fn start(&mut self) {
        self.task.start();
    }

    pub fn stop(&mut self) {
        self.task.stop();
    }

    /// Call once per rendered frame
    pub fn update(&mut self) {
        if self.task.advance() {
            self.rotation = self.rotation.spun(SPIN_PER_FRAME);
        }
    }

    /// Triangles to draw for the given viewport, back to front
    pub fn faces(&self, color: Color, center: Vec2, half_extent: Vec2) -> Vec<ShadedFace> {
        self.mesh
            .shaded_faces(self.rotation, color, center, half_extent)
    }
}

impl Default for SpinningMesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spins_every_frame() {
        let mut mesh = SpinningMesh::new();
        for _ in 0..100 {
            mesh.update();
        }
        assert!((mesh.rotation().x - 0.5).abs() < 1e-4);
        assert!((mesh.rotation().y - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_stopped_mesh_holds_pose() {
        let mut mesh = SpinningMesh::new();
        mesh.update();
        mesh.stop();
        let pose = mesh.rotation();
        mesh.update();
        assert_eq!(mesh.rotation(), pose);
        assert!(!mesh.is_spinning());
        mesh.start();
        mesh.update();
        assert_ne!(mesh.rotation(), pose);
    }

    #[test]
    fn test_faces_follow_rotation() {
        let mut mesh = SpinningMesh::new();
        let color = Color::new(0.0, 1.0, 0.0, 1.0);
        let before = mesh.faces(color, Vec2::ZERO, Vec2::splat(50.0));
        for _ in 0..30 {
            mesh.update();
        }
        let after = mesh.faces(color, Vec2::ZERO, Vec2::splat(50.0));
        assert_ne!(before, after);
    }
}
