use crate::error::RasterizationError;
use crate::math::{Real, Vector, DIM};

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// A subset of the three voxel-grid axes.
pub struct AxisMask(u8);

bitflags::bitflags! {
    /// Flags identifying a subset of the three voxel-grid axes.
    impl AxisMask: u8 {
        /// The first grid axis.
        const X = 1 << 0;
        /// The second grid axis.
        const Y = 1 << 1;
        /// The third grid axis.
        const Z = 1 << 2;
    }
}

impl AxisMask {
    /// The mask selecting only the axis with the given index.
    ///
    /// Panics if `axis >= 3`.
    pub fn from_axis(axis: usize) -> AxisMask {
        assert!(axis < DIM, "axis index out of range: {axis}");
        AxisMask::from_bits_truncate(1u8 << axis)
    }

    /// Does this mask contain the axis with the given index?
    pub fn contains_axis(self, axis: usize) -> bool {
        self.intersects(Self::from_axis(axis))
    }

    /// The number of axes selected by this mask.
    pub fn count(self) -> u32 {
        self.bits().count_ones()
    }
}

/// Configuration shared by every rasterization call.
///
/// The voxel size is supplied externally by the scene being rendered; it is
/// not a property of any single scatterer. The remaining fields control the
/// anti-aliasing quality and output trimming of one call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RasterConfig {
    /// Physical length covered by one voxel along each axis.
    ///
    /// All components must be strictly positive.
    pub voxel_size: Vector<Real>,
    /// Supersampling factor: the rasterization grid is refined by this
    /// integer factor before being box-filtered back down, approximating
    /// sub-voxel coverage. Must be at least 1 (1 disables supersampling).
    pub upsample: u32,
    /// The grid axes refined by supersampling.
    pub upsample_axes: AxisMask,
    /// Whether entirely empty boundary slices are removed from the result.
    pub crop_empty: bool,
}

impl RasterConfig {
    /// Creates a configuration with the given voxel size, no supersampling
    /// and empty-slice cropping enabled.
    pub fn new(voxel_size: Vector<Real>) -> Self {
        RasterConfig {
            voxel_size,
            upsample: 1,
            upsample_axes: AxisMask::all(),
            crop_empty: true,
        }
    }

    /// Sets the supersampling factor.
    pub fn with_upsample(mut self, upsample: u32) -> Self {
        self.upsample = upsample;
        self
    }

    /// Sets the axes refined by supersampling.
    pub fn with_upsample_axes(mut self, axes: AxisMask) -> Self {
        self.upsample_axes = axes;
        self
    }

    /// Enables or disables empty-slice cropping.
    pub fn with_crop_empty(mut self, crop_empty: bool) -> Self {
        self.crop_empty = crop_empty;
        self
    }

    /// Checks this configuration against the rasterizer's contract.
    pub fn validate(&self) -> Result<(), RasterizationError> {
        check_voxel_size(&self.voxel_size)?;
        if self.upsample < 1 {
            return Err(RasterizationError::InvalidUpsample);
        }
        Ok(())
    }
}

pub(crate) fn check_voxel_size(voxel_size: &Vector<Real>) -> Result<(), RasterizationError> {
    if voxel_size.iter().all(|v| *v > 0.0) {
        Ok(())
    } else {
        Err(RasterizationError::InvalidVoxelSize)
    }
}

#[cfg(test)]
mod test {
    use super::{AxisMask, RasterConfig};
    use crate::error::RasterizationError;
    use crate::math::Vector;

    #[test]
    fn axis_mask_indices() {
        assert!(AxisMask::all().contains_axis(0));
        assert!(AxisMask::all().contains_axis(2));
        assert!(!(AxisMask::X | AxisMask::Y).contains_axis(2));
        assert_eq!((AxisMask::X | AxisMask::Z).count(), 2);
        assert_eq!(AxisMask::from_axis(1), AxisMask::Y);
    }

    #[test]
    fn validation() {
        let config = RasterConfig::new(Vector::new(1.0, 1.0, 1.0));
        assert_eq!(config.validate(), Ok(()));

        let config = RasterConfig::new(Vector::new(1.0, 0.0, 1.0));
        assert_eq!(config.validate(), Err(RasterizationError::InvalidVoxelSize));

        let config = RasterConfig::new(Vector::new(1.0, 1.0, 1.0)).with_upsample(0);
        assert_eq!(config.validate(), Err(RasterizationError::InvalidUpsample));
    }
}
