//! Flat-shaded icosahedron projected to screen triangles.
//!
//! Software projection keeps the spinning tile inside the 2D canvas: the
//! mesh is rotated, back faces are culled, the rest is depth sorted and lit
//! by an ambient term plus one directional light.

use macroquad::color::Color;
use macroquad::math::{Mat3, Vec2, Vec3};

/// Radians added to both rotation axes per frame
pub const SPIN_PER_FRAME: f32 = 0.005;

const CAMERA_Z: f32 = 3.0;
const FOV_Y_DEGREES: f32 = 75.0;
const AMBIENT: f32 = 0.35;
const DIFFUSE: f32 = 0.65;

const PHI: f32 = 1.618_034;

const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Euler rotation, applied X then Y
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub x: f32,
    pub y: f32,
}

impl Rotation {
    pub fn spun(self, delta: f32) -> Self {
        Self {
            x: self.x + delta,
            y: self.y + delta,
        }
    }

    fn matrix(self) -> Mat3 {
        Mat3::from_rotation_x(self.x) * Mat3::from_rotation_y(self.y)
    }
}

/// One visible triangle, ready to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadedFace {
    pub points: [Vec2; 3],
    pub color: Color,
    /// View-space depth of the face centroid (larger is closer)
    pub depth: f32,
}

/// Unit-radius regular icosahedron
pub struct Icosahedron {
    vertices: [Vec3; 12],
}

impl Icosahedron {
    pub fn new() -> Self {
        let raw = [
            Vec3::new(-1.0, PHI, 0.0),
            Vec3::new(1.0, PHI, 0.0),
            Vec3::new(-1.0, -PHI, 0.0),
            Vec3::new(1.0, -PHI, 0.0),
            Vec3::new(0.0, -1.0, PHI),
            Vec3::new(0.0, 1.0, PHI),
            Vec3::new(0.0, -1.0, -PHI),
            Vec3::new(0.0, 1.0, -PHI),
            Vec3::new(PHI, 0.0, -1.0),
            Vec3::new(PHI, 0.0, 1.0),
            Vec3::new(-PHI, 0.0, -1.0),
            Vec3::new(-PHI, 0.0, 1.0),
        ];
        Self {
            vertices: raw.map(Vec3::normalize),
        }
    }

    pub fn vertices(&self) -> &[Vec3; 12] {
        &self.vertices
    }

    pub fn faces(&self) -> &'static [[usize; 3]; 20] {
        &FACES
    }

    /// Project the rotated mesh into a viewport centred on `center` with the
    /// given half width/height. Returned faces are sorted back to front.
    pub fn shaded_faces(
        &self,
        rotation: Rotation,
        base: Color,
        center: Vec2,
        half_extent: Vec2,
    ) -> Vec<ShadedFace> {
        let matrix = rotation.matrix();
        let rotated = self.vertices.map(|v| matrix * v);
        let light = Vec3::new(5.0, 5.0, 5.0).normalize();
        let camera = Vec3::new(0.0, 0.0, CAMERA_Z);
        let focal = 1.0 / (FOV_Y_DEGREES.to_radians() / 2.0).tan();
        let aspect = half_extent.x / half_extent.y.max(f32::EPSILON);

        let project = |v: Vec3| {
            let distance = CAMERA_Z - v.z;
            let ndc_x = v.x * focal / (distance * aspect);
            let ndc_y = v.y * focal / distance;
            Vec2::new(
                center.x + ndc_x * half_extent.x,
                center.y - ndc_y * half_extent.y,
            )
        };

        let mut faces: Vec<ShadedFace> = FACES
            .iter()
            .filter_map(|&[a, b, c]| {
                let (va, vb, vc) = (rotated[a], rotated[b], rotated[c]);
                let centroid = (va + vb + vc) / 3.0;
                let mut normal = (vb - va).cross(vc - va).normalize();
                // mesh is centred on the origin, so outward means away from it
                if normal.dot(centroid) < 0.0 {
                    normal = -normal;
                }
                if normal.dot(camera - centroid) <= 0.0 {
                    return None;
                }
                let brightness = AMBIENT + DIFFUSE * normal.dot(light).max(0.0);
                Some(ShadedFace {
                    points: [project(va), project(vb), project(vc)],
                    color: Color::new(
                        (base.r * brightness).min(1.0),
                        (base.g * brightness).min(1.0),
                        (base.b * brightness).min(1.0),
                        base.a,
                    ),
                    depth: centroid.z,
                })
            })
            .collect();

        faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
        faces
    }
}

impl Default for Icosahedron {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const GREEN: Color = Color::new(0.0, 1.0, 0.0, 1.0);

    #[test]
    fn test_vertices_on_unit_sphere() {
        let mesh = Icosahedron::new();
        for v in mesh.vertices() {
            assert!((v.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_faces_form_closed_surface() {
        let mut edges: HashMap<(usize, usize), u32> = HashMap::new();
        for &[a, b, c] in Icosahedron::new().faces() {
            for (p, q) in [(a, b), (b, c), (c, a)] {
                *edges.entry((p.min(q), p.max(q))).or_default() += 1;
            }
        }
        assert_eq!(edges.len(), 30);
        assert!(edges.values().all(|&count| count == 2));
    }

    #[test]
    fn test_back_faces_are_culled() {
        let mesh = Icosahedron::new();
        for step in 0..50 {
            let rotation = Rotation::default().spun(step as f32 * 0.1);
            let faces = mesh.shaded_faces(rotation, GREEN, Vec2::ZERO, Vec2::new(100.0, 100.0));
            assert!(!faces.is_empty());
            assert!(faces.len() < 20, "{} faces visible", faces.len());
        }
    }

    #[test]
    fn test_faces_sorted_back_to_front() {
        let faces = Icosahedron::new().shaded_faces(
            Rotation { x: 0.3, y: 1.1 },
            GREEN,
            Vec2::new(50.0, 50.0),
            Vec2::new(50.0, 50.0),
        );
        assert!(faces.windows(2).all(|pair| pair[0].depth <= pair[1].depth));
    }

    #[test]
    fn test_projection_stays_in_viewport() {
        let center = Vec2::new(200.0, 100.0);
        let half = Vec2::new(80.0, 60.0);
        let faces = Icosahedron::new().shaded_faces(Rotation::default(), GREEN, center, half);
        for face in faces {
            for p in face.points {
                assert!((p.x - center.x).abs() <= half.x);
                assert!((p.y - center.y).abs() <= half.y);
            }
        }
    }

    #[test]
    fn test_shading_never_brightens_past_base() {
        let faces =
            Icosahedron::new().shaded_faces(Rotation::default(), GREEN, Vec2::ZERO, Vec2::ONE);
        for face in faces {
            assert_eq!(face.color.r, 0.0);
            assert!(face.color.g >= AMBIENT - 1e-6 && face.color.g <= 1.0);
        }
    }

    #[test]
    fn test_spin_accumulates() {
        let r = Rotation::default().spun(SPIN_PER_FRAME).spun(SPIN_PER_FRAME);
        assert!((r.x - 0.01).abs() < 1e-6);
        assert!((r.y - 0.01).abs() < 1e-6);
    }
}
