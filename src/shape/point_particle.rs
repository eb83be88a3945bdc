use crate::raster::VoxelGrid;

/// A point scatterer, approximated by the extent of a single voxel.
///
/// Sub-voxel positioning is the concern of the downstream consumer placing
/// the grid into a scene. Because a point has no extent to refine,
/// supersampling is disabled for this shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointParticle;

impl PointParticle {
    /// Creates a new point scatterer.
    pub fn new() -> Self {
        PointParticle
    }

    /// Rasterizes this point as a fully occupied `1x1x1` grid, independent
    /// of the voxel size.
    pub fn rasterize_raw(&self) -> VoxelGrid {
        let mut grid = VoxelGrid::zeros([1, 1, 1]);
        *grid.voxel_mut(0, 0, 0) = 1.0;
        grid
    }
}
