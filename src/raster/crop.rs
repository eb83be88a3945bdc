use crate::math::DIM;
use crate::raster::VoxelGrid;

/// Removes every all-zero slice of `grid`, one axis at a time.
///
/// Axes are processed sequentially (0, then 1, then 2), each operating on
/// the already-cropped result of the previous axis. A slice is removed iff
/// every voxel in it is exactly zero, so a non-zero voxel is never dropped.
/// No distinction is made between boundary and interior slices; for the
/// supported shapes only contiguous margins are ever fully empty in
/// practice. The operation is idempotent.
pub fn crop_empty_slices(mut grid: VoxelGrid) -> VoxelGrid {
    for axis in 0..DIM {
        grid = retain_nonempty_slices(grid, axis);
    }
    grid
}

fn retain_nonempty_slices(grid: VoxelGrid, axis: usize) -> VoxelGrid {
    let kept: Vec<usize> = (0..grid.extent(axis))
        .filter(|idx| !grid.slice_is_empty(axis, *idx))
        .collect();

    if kept.len() == grid.extent(axis) {
        return grid;
    }

    let mut dims = grid.dimensions();
    dims[axis] = kept.len();
    let mut out = VoxelGrid::zeros(dims);
    let [nx, ny, nz] = dims;

    for k in 0..nz {
        for j in 0..ny {
            for i in 0..nx {
                let mut src = [i, j, k];
                src[axis] = kept[src[axis]];
                *out.voxel_mut(i, j, k) = grid.voxel(src[0], src[1], src[2]);
            }
        }
    }

    out
}

#[cfg(test)]
mod test {
    use super::crop_empty_slices;
    use crate::raster::VoxelGrid;

    fn padded_grid() -> VoxelGrid {
        // A 2x2x2 non-zero interior surrounded by one empty slice on every
        // side of every axis.
        let mut grid = VoxelGrid::zeros([4, 4, 4]);
        for k in 1..3 {
            for j in 1..3 {
                for i in 1..3 {
                    *grid.voxel_mut(i, j, k) = 1.0;
                }
            }
        }
        grid
    }

    #[test]
    fn strips_empty_margins() {
        let cropped = crop_empty_slices(padded_grid());
        assert_eq!(cropped.dimensions(), [2, 2, 2]);
        assert!(cropped.values().iter().all(|v| *v == 1.0));
    }

    #[test]
    fn idempotent() {
        let once = crop_empty_slices(padded_grid());
        let twice = crop_empty_slices(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn drops_interior_empty_slices_too() {
        let mut grid = VoxelGrid::zeros([3, 1, 1]);
        *grid.voxel_mut(0, 0, 0) = 1.0;
        *grid.voxel_mut(2, 0, 0) = 2.0;

        let cropped = crop_empty_slices(grid);
        assert_eq!(cropped.dimensions(), [2, 1, 1]);
        assert_eq!(cropped.voxel(0, 0, 0), 1.0);
        assert_eq!(cropped.voxel(1, 0, 0), 2.0);
    }

    #[test]
    fn all_zero_grid_collapses() {
        let cropped = crop_empty_slices(VoxelGrid::zeros([3, 3, 3]));
        assert_eq!(cropped.dimensions(), [0, 0, 0]);
        assert!(cropped.is_empty());
    }
}
