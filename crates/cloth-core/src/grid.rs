use glam::Vec3;

use crate::error::{ClothError, ClothResult};

/// Which rest length a structural neighbour uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Neighbour in the same row (`j +- 1`), rest length `dist_to_left`.
    Horizontal,
    /// Neighbour in the same column (`i +- 1`), rest length `dist_to_bottom`.
    Vertical,
}

/// Fixed topology of a regular `rows x cols` cloth grid.
///
/// Particles are stored row-major: `(i, j)` lives at `i * cols + j`.
/// Adjacency is implicit (4-connected, no wraparound) and rest lengths are
/// uniform per axis, derived once from the cloth extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    rows: usize,
    cols: usize,
    width: f32,
    height: f32,
    dist_to_left: f32,
    dist_to_bottom: f32,
}

impl GridLayout {
    pub fn new(width: f32, height: f32, rows: usize, cols: usize) -> ClothResult<Self> {
        if rows < 2 || cols < 2 {
            return Err(ClothError::InvalidGridDimensions { rows, cols });
        }
        if !(width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite()) {
            return Err(ClothError::InvalidExtent { width, height });
        }

        Ok(Self {
            rows,
            cols,
            width,
            height,
            dist_to_left: width / (cols as f32 - 1.0),
            dist_to_bottom: height / (rows as f32 - 1.0),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Total particle count, `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Horizontal rest length, `width / (cols - 1)`.
    #[inline]
    pub fn dist_to_left(&self) -> f32 {
        self.dist_to_left
    }

    /// Vertical rest length, `height / (rows - 1)`.
    #[inline]
    pub fn dist_to_bottom(&self) -> f32 {
        self.dist_to_bottom
    }

    #[inline]
    pub fn rest_length(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.dist_to_left,
            Axis::Vertical => self.dist_to_bottom,
        }
    }

    /// Flat index of cell `(i, j)`. Panics if the cell is outside the grid.
    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "cell ({i}, {j}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }

    /// Visit the structural neighbours of `(i, j)`: below, left, above,
    /// right. Cells on the border simply have fewer.
    #[inline]
    pub fn for_each_neighbor<F: FnMut(usize, Axis)>(&self, i: usize, j: usize, mut f: F) {
        let idx = i * self.cols + j;
        if i > 0 {
            f(idx - self.cols, Axis::Vertical);
        }
        if j > 0 {
            f(idx - 1, Axis::Horizontal);
        }
        if i + 1 < self.rows {
            f(idx + self.cols, Axis::Vertical);
        }
        if j + 1 < self.cols {
            f(idx + 1, Axis::Horizontal);
        }
    }

    /// Position of `(i, j)` in the flat rest layout: an XY sheet centred on
    /// the origin with exact rest spacing.
    pub fn sheet_position(&self, i: usize, j: usize) -> Vec3 {
        Vec3::new(
            self.dist_to_left * j as f32 - self.width * 0.5,
            self.dist_to_bottom * i as f32 - self.height * 0.5,
            0.0,
        )
    }

    /// Number of horizontal plus vertical structural constraints.
    pub fn constraint_count(&self) -> usize {
        self.rows * (self.cols - 1) + (self.rows - 1) * self.cols
    }
}
