use crate::error::RasterizationError;
use crate::math::{Real, Rotation, Vector};
use crate::raster::VoxelGrid;

/// A triaxial ellipsoidal scatterer with an arbitrary orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    /// The three semi-axes, in physical units.
    pub radius: Vector<Real>,
    /// Intrinsic rotation angles in radians: the body is rotated about the
    /// third, second and first grid axis, composed as
    /// `R_z(rotation[0]) * R_y(rotation[1]) * R_x(rotation[2])`.
    pub rotation: Vector<Real>,
}

impl Ellipsoid {
    /// Creates an ellipsoid with the given semi-axes and rotation angles.
    pub fn new(radius: Vector<Real>, rotation: Vector<Real>) -> Result<Self, RasterizationError> {
        if radius.iter().any(|r| *r <= 0.0) {
            return Err(RasterizationError::InvalidRadius);
        }
        Ok(Ellipsoid { radius, rotation })
    }

    /// Creates an ellipsoid from variable-arity radius and rotation inputs.
    ///
    /// A single radius value yields a sphere; two values `(a, b)` duplicate
    /// the minor axis into `(a, b, min(a, b))`; three are used as-is. The
    /// rotation is right-padded with zeros to three angles (none at all
    /// meaning no rotation). Inputs longer than three components are a
    /// contract violation, not a promotion case.
    pub fn from_params(radius: &[Real], rotation: &[Real]) -> Result<Self, RasterizationError> {
        let radius = match *radius {
            [] => return Err(RasterizationError::EmptyParameter),
            [r] => Vector::repeat(r),
            [a, b] => Vector::new(a, b, a.min(b)),
            [a, b, c] => Vector::new(a, b, c),
            _ => {
                return Err(RasterizationError::TooManyRadii {
                    len: radius.len(),
                    max: 3,
                })
            }
        };

        let rotation = match *rotation {
            [] => Vector::zeros(),
            [a] => Vector::new(a, 0.0, 0.0),
            [a, b] => Vector::new(a, b, 0.0),
            [a, b, c] => Vector::new(a, b, c),
            _ => {
                return Err(RasterizationError::TooManyRotations {
                    len: rotation.len(),
                })
            }
        };

        Self::new(radius, rotation)
    }

    /// Rasterizes this ellipsoid on a grid with the given voxel size,
    /// without any resampling or cropping.
    ///
    /// The grid spans `[-c_i, c_i)` voxels along axis `i` with
    /// `c_i = ceil(max(radius) / voxel_size_i)`: the overall maximum radius
    /// sizes a cube-like bounding grid, so the rotated body is never
    /// clipped. Each unscaled grid point is rotated by the composed
    /// rotation matrix, and a voxel belongs to the ellipsoid iff the sum of
    /// `(p_i/rad_i)^2` over the rotated coordinates is strictly below 1.
    pub fn rasterize_raw(
        &self,
        voxel_size: &Vector<Real>,
    ) -> Result<VoxelGrid, RasterizationError> {
        crate::raster::check_voxel_size(voxel_size)?;

        let rad = self.radius.component_div(voxel_size);
        let max_radius = self.radius.max();
        let c = voxel_size.map(|size| (max_radius / size).ceil() as i64);

        // R_z(rot.x) * R_y(rot.y) * R_x(rot.z).
        let rot = Rotation::from_euler_angles(self.rotation.z, self.rotation.y, self.rotation.x);

        let mut grid = VoxelGrid::zeros([(2 * c.x) as usize, (2 * c.y) as usize, (2 * c.z) as usize]);
        let [nx, ny, nz] = grid.dimensions();

        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    let p = Vector::new(
                        (i as i64 - c.x) as Real,
                        (j as i64 - c.y) as Real,
                        (k as i64 - c.z) as Real,
                    );
                    let p = rot * p;

                    if (p.x / rad.x).powi(2) + (p.y / rad.y).powi(2) + (p.z / rad.z).powi(2) < 1.0
                    {
                        *grid.voxel_mut(i, j, k) = 1.0;
                    }
                }
            }
        }

        Ok(grid)
    }
}
