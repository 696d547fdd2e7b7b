// Vertex structure for the presentation quad

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Clip-space corner of the canvas quad with its texture coordinate
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub tex_coords: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2];

    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub const QUAD_INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

/// Quad showing the whole canvas at its aspect ratio, centred in the window
///
/// The spare axis is left as black bars. Texture `(0, 0)` is the canvas
/// top-left.
pub fn letterbox_quad(window: Vec2, canvas: Vec2) -> [Vertex; 4] {
    let window = window.max(Vec2::ONE);
    let canvas = canvas.max(Vec2::ONE);

    let fit = (window.x / canvas.x).min(window.y / canvas.y);
    let half = canvas * fit / window;

    [
        Vertex::new(Vec2::new(-half.x, -half.y), Vec2::new(0.0, 1.0)),
        Vertex::new(Vec2::new(half.x, -half.y), Vec2::new(1.0, 1.0)),
        Vertex::new(Vec2::new(half.x, half.y), Vec2::new(1.0, 0.0)),
        Vertex::new(Vec2::new(-half.x, half.y), Vec2::new(0.0, 0.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 4 * 4);
        assert_eq!(Vertex::desc().array_stride, 16);
    }

    #[test]
    fn test_matching_aspect_fills_window() {
        let quad = letterbox_quad(Vec2::new(2048.0, 1152.0), Vec2::new(1024.0, 576.0));
        assert_eq!(quad[3].position, [-1.0, 1.0]);
        assert_eq!(quad[3].tex_coords, [0.0, 0.0]);
        assert_eq!(quad[1].position, [1.0, -1.0]);
    }

    #[test]
    fn test_tall_window_gets_bars_top_and_bottom() {
        let quad = letterbox_quad(Vec2::new(1024.0, 1024.0), Vec2::new(1024.0, 576.0));
        assert_relative_eq!(quad[2].position[0], 1.0);
        assert_relative_eq!(quad[2].position[1], 576.0 / 1024.0);
    }

    #[test]
    fn test_wide_window_gets_bars_left_and_right() {
        let quad = letterbox_quad(Vec2::new(2000.0, 576.0), Vec2::new(1024.0, 576.0));
        assert_relative_eq!(quad[2].position[0], 1024.0 / 2000.0);
        assert_relative_eq!(quad[2].position[1], 1.0);
    }

    #[test]
    fn test_indices_cover_quad() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < 4));
    }
}
