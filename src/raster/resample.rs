use crate::math::{Real, DIM};
use crate::raster::{AxisMask, VoxelGrid};

/// Downsamples a supersampled occupancy grid by `factor` along the axes
/// selected by `axes`, using a box filter.
///
/// Each output voxel is the mean occupancy of its `factor^k` block of input
/// voxels, where `k` is the number of downsampled axes. Input extents that
/// are not a multiple of `factor` are implicitly zero-padded at the trailing
/// edge rather than truncated, so boundary occupancy is never discarded:
/// partial blocks still divide by the full block size.
///
/// With `factor == 1` or an empty axis mask the grid is returned unchanged.
pub fn downsample(grid: VoxelGrid, factor: u32, axes: AxisMask) -> VoxelGrid {
    if factor == 1 || axes.is_empty() {
        return grid;
    }

    let factor = factor as usize;
    let in_dims = grid.dimensions();
    let mut out_dims = [0; DIM];
    for (axis, out_dim) in out_dims.iter_mut().enumerate() {
        *out_dim = if axes.contains_axis(axis) {
            in_dims[axis].div_ceil(factor)
        } else {
            in_dims[axis]
        };
    }

    let mut out = VoxelGrid::zeros(out_dims);
    for k in 0..in_dims[2] {
        let ko = if axes.contains_axis(2) { k / factor } else { k };
        for j in 0..in_dims[1] {
            let jo = if axes.contains_axis(1) { j / factor } else { j };
            for i in 0..in_dims[0] {
                let io = if axes.contains_axis(0) { i / factor } else { i };
                *out.voxel_mut(io, jo, ko) += grid.voxel(i, j, k);
            }
        }
    }

    let block_len = (factor as Real).powi(axes.count() as i32);
    out.values_mut().iter_mut().for_each(|v| *v /= block_len);
    out
}
