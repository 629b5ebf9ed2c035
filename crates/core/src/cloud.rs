use crate::CoreError;

#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
        }
    }

    pub fn from_xyz(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>) -> Self {
        assert_eq!(x.len(), y.len(), "x and y must have same length");
        assert_eq!(x.len(), z.len(), "x and z must have same length");

        Self { x, y, z }
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.x.len(), self.y.len());
        debug_assert_eq!(self.x.len(), self.z.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn point(&self, i: usize) -> [f32; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    pub fn iter_points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| [*x, *y, *z])
    }

    /// Copies the points at `indices`, in the order given.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut x = Vec::with_capacity(indices.len());
        let mut y = Vec::with_capacity(indices.len());
        let mut z = Vec::with_capacity(indices.len());

        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            x.push(self.x[idx]);
            y.push(self.y[idx]);
            z.push(self.z[idx]);
        }

        Self { x, y, z }
    }

    /// Mask-based selection used to split a cloud into a segment and the rest.
    ///
    /// Unlike [`select`](Self::select), the result always follows point order,
    /// duplicate indices count once, and an out-of-range index is reported as
    /// an error. With `invert` set, the complement is returned.
    pub fn select_by_index(&self, indices: &[usize], invert: bool) -> Result<Self, CoreError> {
        let n = self.len();
        let mut mask = vec![false; n];
        for &index in indices {
            if index >= n {
                return Err(CoreError::IndexOutOfRange { index, len: n });
            }
            mask[index] = true;
        }

        let kept: Vec<usize> = (0..n).filter(|&i| mask[i] != invert).collect();
        Ok(self.select(&kept))
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new()
    }
}
