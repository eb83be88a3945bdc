use crate::error::RasterizationError;
use crate::math::{Real, DIM};
use crate::raster::{crop, resample, RasterConfig, VoxelGrid};
use crate::shape::{Particle, Scatterer};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rasterizes a single scatterer shape into a voxel occupancy grid.
///
/// The shape is evaluated on a sampling grid refined by the configured
/// supersampling factor along the supersampled axes, box-filtered back down
/// to the native resolution, and finally stripped of entirely empty boundary
/// slices when `crop_empty` is set.
///
/// The returned grid is freshly allocated and owned outright by the caller;
/// the computation is pure and calls are independent, so callers rendering
/// many scatterers may freely parallelize across calls.
pub fn rasterize(
    shape: &Scatterer,
    config: &RasterConfig,
) -> Result<VoxelGrid, RasterizationError> {
    config.validate()?;

    let upsample = shape.effective_upsample(config.upsample);
    let axes = shape.effective_upsample_axes(config.upsample_axes);

    // Refine the sampling grid along the supersampled axes.
    let mut voxel_size = config.voxel_size;
    if upsample > 1 {
        for axis in 0..DIM {
            if axes.contains_axis(axis) {
                voxel_size[axis] /= upsample as Real;
            }
        }
    }

    let raw = shape.rasterize_raw(&voxel_size)?;
    log::trace!(
        "rasterized raw grid with dimensions {:?} (upsample {})",
        raw.dimensions(),
        upsample
    );

    let grid = resample::downsample(raw, upsample, axes);

    if config.crop_empty {
        Ok(crop::crop_empty_slices(grid))
    } else {
        Ok(grid)
    }
}

/// Rasterizes a batch of particles sequentially with a shared configuration.
///
/// Fails on the first invalid particle, rasterizing none of the remainder.
pub fn rasterize_batch(
    particles: &[Particle],
    config: &RasterConfig,
) -> Result<Vec<VoxelGrid>, RasterizationError> {
    particles
        .iter()
        .map(|particle| rasterize(&particle.shape, config))
        .collect()
}

/// Rasterizes a batch of particles in parallel with a shared configuration.
///
/// Calls are independent and side-effect free, so no synchronization is
/// involved beyond the join.
#[cfg(feature = "parallel")]
pub fn par_rasterize_batch(
    particles: &[Particle],
    config: &RasterConfig,
) -> Result<Vec<VoxelGrid>, RasterizationError> {
    particles
        .par_iter()
        .map(|particle| rasterize(&particle.shape, config))
        .collect()
}
