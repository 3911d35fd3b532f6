//! Shape tessellation into coloured triangle lists

use glam::Vec2;
use std::f32::consts::TAU;

/// Vertex structure for rendering colored shapes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4
    ];

    pub fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Triangle list built up shape by shape, in draw order
#[derive(Debug, Default, Clone)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        self.vertices.extend([
            Vertex::new(a, color),
            Vertex::new(b, color),
            Vertex::new(c, color),
        ]);
    }

    /// Convex quad given in winding order.
    pub fn quad(&mut self, corners: [Vec2; 4], color: [f32; 4]) {
        let [a, b, c, d] = corners;
        self.triangle(a, b, c, color);
        self.triangle(a, c, d, color);
    }

    /// Axis-aligned rectangle from its top-left corner.
    pub fn rect(&mut self, min: Vec2, size: Vec2, color: [f32; 4]) {
        self.quad(
            [
                min,
                min + Vec2::new(size.x, 0.0),
                min + size,
                min + Vec2::new(0.0, size.y),
            ],
            color,
        );
    }

    /// Filled disc as a triangle fan.
    pub fn circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        if radius <= 0.0 {
            return;
        }
        let segments = circle_segments(radius);
        let mut prev = center + Vec2::X * radius;
        for i in 1..=segments {
            let angle = i as f32 / segments as f32 * TAU;
            let next = center + Vec2::from_angle(angle) * radius;
            self.triangle(center, prev, next, color);
            prev = next;
        }
    }

    /// Straight stroke of total `width` with butt ends.
    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        let dir = to - from;
        let len = dir.length();
        if len < 1e-4 {
            return;
        }
        let normal = dir.perp() / len * (width * 0.5);
        self.quad(
            [from + normal, to + normal, to - normal, from - normal],
            color,
        );
    }

    /// Stroke with round caps; a zero-length stroke still draws a dot.
    pub fn round_line(&mut self, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
        self.line(from, to, width, color);
        self.circle(from, width * 0.5, color);
        self.circle(to, width * 0.5, color);
    }

    /// Outline through `points`, closing back to the first.
    pub fn closed_polyline(&mut self, points: &[Vec2], width: f32, color: [f32; 4]) {
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.line(from, to, width, color);
        }
    }
}

/// Enough fan segments that edges stay under ~2px long, within sane bounds.
fn circle_segments(radius: f32) -> u32 {
    ((TAU * radius / 2.0).ceil() as u32).clamp(8, 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn quad_is_two_triangles() {
        let mut mesh = Mesh::new();
        mesh.rect(Vec2::new(10.0, 20.0), Vec2::new(60.0, 30.0), RED);
        assert_eq!(mesh.len(), 6);
        let xs: Vec<f32> = mesh.vertices().iter().map(|v| v.position[0]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 70.0));
    }

    #[test]
    fn circle_vertices_lie_on_or_inside_radius() {
        let mut mesh = Mesh::new();
        let center = Vec2::new(100.0, 100.0);
        mesh.circle(center, 20.0, RED);
        assert_eq!(mesh.len() % 3, 0);
        assert!(mesh.len() >= 8 * 3);
        for v in mesh.vertices() {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn line_has_requested_width() {
        let mut mesh = Mesh::new();
        mesh.line(Vec2::ZERO, Vec2::new(10.0, 0.0), 4.0, RED);
        assert_eq!(mesh.len(), 6);
        for v in mesh.vertices() {
            assert!((v.position[1].abs() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn degenerate_shapes_are_skipped_or_dotted() {
        let mut mesh = Mesh::new();
        mesh.line(Vec2::ONE, Vec2::ONE, 2.0, RED);
        mesh.circle(Vec2::ONE, 0.0, RED);
        assert!(mesh.is_empty());

        mesh.round_line(Vec2::ONE, Vec2::ONE, 2.0, RED);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let binding = [Vertex::new(Vec2::ZERO, RED)];
        let bytes: &[u8] = bytemuck::cast_slice(&binding);
        assert_eq!(bytes.len(), 24);
    }
}
