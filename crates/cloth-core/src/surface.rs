use glam::Vec3;

/// GPU-compatible vertex: 12 bytes, tightly packed `vec3<f32>`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
}

/// CPU-side mirror of the renderer's vertex and index buffers.
///
/// The cloth refreshes the vertices once per completed step or edit window;
/// whoever owns the GPU reads them back as bytes. Indices are generated once:
/// two counter-clockwise triangles per quad cell.
pub struct Surface {
    rows: usize,
    cols: usize,
    vertices: Vec<SurfaceVertex>,
    indices: Vec<u32>,
    uploads: u64,
}

impl Surface {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            vertices: vec![SurfaceVertex::default(); rows * cols],
            indices: gen_indices(rows, cols),
            uploads: 0,
        }
    }

    /// Copy row-major grid positions into the vertex buffer.
    pub fn upload(&mut self, positions: &[Vec3]) {
        debug_assert_eq!(positions.len(), self.vertices.len());
        for (v, p) in self.vertices.iter_mut().zip(positions) {
            v.position = p.to_array();
        }
        self.uploads += 1;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn vertices(&self) -> &[SurfaceVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// How many times vertices have been refreshed since construction.
    pub fn upload_count(&self) -> u64 {
        self.uploads
    }
}

/// Triangle list for a `rows x cols` grid: `(rows-1) * (cols-1) * 6` indices.
pub fn gen_indices(rows: usize, cols: usize) -> Vec<u32> {
    let cell_rows = rows.saturating_sub(1);
    let cell_cols = cols.saturating_sub(1);
    let mut indices = Vec::with_capacity(cell_rows * cell_cols * 6);

    for i in 0..cell_rows {
        for j in 0..cell_cols {
            let k = (i * cols + j) as u32;
            let c = cols as u32;
            indices.extend_from_slice(&[k, k + 1, k + c, k + c, k + 1, k + c + 1]);
        }
    }

    indices
}
