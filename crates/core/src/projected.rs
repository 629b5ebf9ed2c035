use crate::CoreError;

/// LiDAR points projected onto an image plane.
///
/// `u` and `v` are pixel coordinates, `z` is the depth kept for coloring.
/// The three columns always have the same length and index `i` refers to
/// the same point in each of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedPoints {
    u: Vec<f32>,
    v: Vec<f32>,
    z: Vec<f32>,
}

impl ProjectedPoints {
    pub fn new(u: Vec<f32>, v: Vec<f32>, z: Vec<f32>) -> Result<Self, CoreError> {
        if u.len() != v.len() || u.len() != z.len() {
            return Err(CoreError::LengthMismatch {
                u: u.len(),
                v: v.len(),
                z: z.len(),
            });
        }
        Ok(Self { u, v, z })
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    pub fn u(&self) -> &[f32] {
        &self.u
    }

    pub fn v(&self) -> &[f32] {
        &self.v
    }

    pub fn z(&self) -> &[f32] {
        &self.z
    }

    /// `[u, v, z]` of point `i`.
    pub fn point(&self, i: usize) -> [f32; 3] {
        [self.u[i], self.v[i], self.z[i]]
    }

    pub fn iter_points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.u
            .iter()
            .zip(&self.v)
            .zip(&self.z)
            .map(|((u, v), z)| [*u, *v, *z])
    }

    /// Copies the points at `indices` in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut u = Vec::with_capacity(indices.len());
        let mut v = Vec::with_capacity(indices.len());
        let mut z = Vec::with_capacity(indices.len());

        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            u.push(self.u[idx]);
            v.push(self.v[idx]);
            z.push(self.z[idx]);
        }

        Self { u, v, z }
    }
}

/// Pixel dimensions of the image the points were projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half-open bounds check: `0 <= u < width` and `0 <= v < height`.
    /// NaN is never inside.
    pub fn contains(&self, u: f32, v: f32) -> bool {
        u >= 0.0 && u < self.width as f32 && v >= 0.0 && v < self.height as f32
    }
}

impl From<(u32, u32)> for ImageSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}
