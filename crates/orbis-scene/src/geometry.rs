//! Geometry generation for the blob mesh and the particle field.
//!
//! Both are produced on the CPU once, at first render, and never change
//! afterwards; only uniforms animate.

use bytemuck::{Pod, Zeroable};
use std::f32::consts::PI;

use crate::math::{self, Vec3};

/// Mesh vertex: position plus outward normal.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Particle vertex: a single position.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ParticleVertex {
    pub position: [f32; 3],
}

impl ParticleVertex {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── icosphere ──────────────────────────────────────────────────────────────

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
    [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
    [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
    [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
];

fn icosahedron_vertices() -> [Vec3; 12] {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    [
        [-1.0, t, 0.0], [1.0, t, 0.0], [-1.0, -t, 0.0], [1.0, -t, 0.0],
        [0.0, -1.0, t], [0.0, 1.0, t], [0.0, -1.0, -t], [0.0, 1.0, -t],
        [t, 0.0, -1.0], [t, 0.0, 1.0], [-t, 0.0, -1.0], [-t, 0.0, 1.0],
    ]
}

/// Subdivided icosahedron projected onto a sphere of `radius`.
///
/// Each of the 20 faces is split into `(detail + 1)^2` triangles in a single
/// (non-recursive) step. Output is a flat triangle list with no index buffer,
/// so the vertex count is `20 * (detail + 1)^2 * 3`.
pub fn icosphere(radius: f32, detail: u32) -> Vec<MeshVertex> {
    let base = icosahedron_vertices();
    let cols = detail as usize + 1;

    let mut out = Vec::with_capacity(20 * cols * cols * 3);
    let mut emit = |p: Vec3| {
        let n = math::normalize(p);
        out.push(MeshVertex {
            position: math::scale(n, radius),
            normal: n,
        });
    };

    for face in ICOSAHEDRON_FACES {
        let [a, b, c] = face.map(|i| base[i]);

        // Row i holds cols - i + 1 points between the a-c and b-c edges.
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let aj = math::lerp(a, c, i as f32 / cols as f32);
            let bj = math::lerp(b, c, i as f32 / cols as f32);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        math::lerp(aj, bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            grid.push(row);
        }

        for i in 0..cols {
            for j in 0..2 * (cols - i) - 1 {
                let k = j / 2;
                if j % 2 == 0 {
                    emit(grid[i][k + 1]);
                    emit(grid[i + 1][k]);
                    emit(grid[i][k]);
                } else {
                    emit(grid[i][k + 1]);
                    emit(grid[i + 1][k + 1]);
                    emit(grid[i + 1][k]);
                }
            }
        }
    }

    out
}

// ── particles ──────────────────────────────────────────────────────────────

/// `count` points spread quasi-uniformly over a sphere of `radius` using the
/// golden-angle (Fibonacci) spiral. Points are ordered by ascending `y`.
pub fn fibonacci_sphere(count: u32, radius: f32) -> Vec<ParticleVertex> {
    if count == 0 {
        return Vec::new();
    }

    let inc = PI * (3.0 - 5f32.sqrt());
    let offset = 2.0 / count as f32;

    (0..count)
        .map(|i| {
            let i = i as f32;
            let y = i * offset - 1.0 + offset / 2.0;
            let r = (1.0 - y * y).max(0.0).sqrt();
            let phi = i * inc;
            ParticleVertex {
                position: [radius * phi.cos() * r, radius * y, radius * phi.sin() * r],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icosphere_vertex_count() {
        assert_eq!(icosphere(1.0, 0).len(), 20 * 3);
        assert_eq!(icosphere(1.0, 1).len(), 20 * 4 * 3);
        assert_eq!(icosphere(2.0, 3).len(), 20 * 16 * 3);
    }

    #[test]
    fn icosphere_points_lie_on_radius() {
        for v in icosphere(2.0, 4) {
            assert!((math::length(v.position) - 2.0).abs() < 1e-4);
            assert!((math::length(v.normal) - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn icosphere_triangles_face_outward() {
        for tri in icosphere(1.0, 2).chunks_exact(3) {
            let [a, b, c] = [tri[0].position, tri[1].position, tri[2].position];
            let n = math::cross(math::sub(b, a), math::sub(c, a));
            let center = math::scale(math::add(math::add(a, b), c), 1.0 / 3.0);
            assert!(math::dot(n, center) > 0.0);
        }
    }

    #[test]
    fn fibonacci_points_on_radius_with_rising_y() {
        let pts = fibonacci_sphere(7000, 2.5);
        assert_eq!(pts.len(), 7000);
        for p in &pts {
            assert!((math::length(p.position) - 2.5).abs() < 1e-3);
        }
        for w in pts.windows(2) {
            assert!(w[1].position[1] > w[0].position[1]);
        }
    }

    #[test]
    fn fibonacci_first_point() {
        let pts = fibonacci_sphere(4, 1.0);
        // offset = 0.5, y0 = -0.75, phi0 = 0
        let p = pts[0].position;
        assert!((p[1] + 0.75).abs() < 1e-6);
        assert!((p[0] - (1.0f32 - 0.75 * 0.75).sqrt()).abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn fibonacci_empty() {
        assert!(fibonacci_sphere(0, 2.5).is_empty());
    }
}
