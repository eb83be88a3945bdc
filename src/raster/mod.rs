//! Rasterization of scatterer shapes into dense voxel occupancy grids.

pub(crate) use self::config::check_voxel_size;
pub use self::config::{AxisMask, RasterConfig};
pub use self::crop::crop_empty_slices;
pub use self::grid::VoxelGrid;
#[cfg(feature = "parallel")]
pub use self::rasterize::par_rasterize_batch;
pub use self::rasterize::{rasterize, rasterize_batch};
pub use self::resample::downsample;

mod config;
mod crop;
mod grid;
mod rasterize;
mod resample;
