use crate::math::{Real, DIM};
use approx::{AbsDiffEq, RelativeEq};
use num::Zero;

/// A dense 3-dimensional grid of per-voxel occupancy fractions.
///
/// To each voxel corresponds an occupancy factor, i.e., how much of that
/// voxel the scatterer occupies. This number is not necessarily limited to
/// the `[0, 1]` range: it can be any real, and its interpretation is left to
/// the consumer imaging the scatterer. Values are never clamped.
///
/// Storage is a flat buffer in axis-order-stable `(x, y, z)` convention,
/// with the first axis varying fastest.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct VoxelGrid {
    dimensions: [usize; DIM],
    data: Vec<Real>,
}

impl VoxelGrid {
    /// Creates a grid with the given dimensions, filled with zeros.
    pub fn zeros(dimensions: [usize; DIM]) -> Self {
        let len = dimensions[0] * dimensions[1] * dimensions[2];
        VoxelGrid {
            dimensions,
            data: vec![Real::zero(); len],
        }
    }

    /// The number of voxels along each of the three axes.
    pub fn dimensions(&self) -> [usize; DIM] {
        self.dimensions
    }

    /// The number of voxels along the given axis.
    pub fn extent(&self, axis: usize) -> usize {
        self.dimensions[axis]
    }

    /// The total number of voxels in this grid.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Does this grid contain no voxels at all?
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
        i + j * self.dimensions[0] + k * self.dimensions[0] * self.dimensions[1]
    }

    /// The occupancy value of the voxel at grid coordinates `(i, j, k)`.
    pub fn voxel(&self, i: usize, j: usize, k: usize) -> Real {
        self.data[self.linear_index(i, j, k)]
    }

    /// Mutable access to the voxel at grid coordinates `(i, j, k)`.
    pub fn voxel_mut(&mut self, i: usize, j: usize, k: usize) -> &mut Real {
        let idx = self.linear_index(i, j, k);
        &mut self.data[idx]
    }

    /// All voxel values in memory order (first axis fastest).
    pub fn values(&self) -> &[Real] {
        &self.data
    }

    /// Mutable access to all voxel values in memory order.
    pub fn values_mut(&mut self) -> &mut [Real] {
        &mut self.data
    }

    /// The sum of all occupancy values.
    pub fn total_occupancy(&self) -> Real {
        self.data.iter().fold(Real::zero(), |acc, v| acc + v)
    }

    /// Is the slice at `index` along `axis` (fixing that axis, varying the
    /// two others) entirely zero?
    ///
    /// Panics if `axis >= 3`.
    pub fn slice_is_empty(&self, axis: usize, index: usize) -> bool {
        assert!(axis < DIM, "axis index out of range: {axis}");
        let [nx, ny, nz] = self.dimensions;
        match axis {
            0 => (0..nz).all(|k| (0..ny).all(|j| self.voxel(index, j, k) == 0.0)),
            1 => (0..nz).all(|k| (0..nx).all(|i| self.voxel(i, index, k) == 0.0)),
            _ => (0..ny).all(|j| (0..nx).all(|i| self.voxel(i, j, index) == 0.0)),
        }
    }
}

impl AbsDiffEq for VoxelGrid {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.dimensions == other.dimensions
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| Real::abs_diff_eq(a, b, epsilon))
    }
}

impl RelativeEq for VoxelGrid {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.dimensions == other.dimensions
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| Real::relative_eq(a, b, epsilon, max_relative))
    }
}
