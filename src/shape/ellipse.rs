use crate::error::RasterizationError;
use crate::math::{Real, Rotation2, Vector, Vector2};
use crate::raster::VoxelGrid;

/// An elliptical disk scatterer, occupying a single slice along the third
/// grid axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Ellipse {
    /// The in-plane semi-axes, in physical units.
    pub radius: Vector2<Real>,
    /// The orientation angle of the disk in its plane, in radians.
    pub rotation: Real,
}

impl Ellipse {
    /// Creates an ellipse with the given semi-axes and orientation.
    pub fn new(radius: Vector2<Real>, rotation: Real) -> Result<Self, RasterizationError> {
        if radius.iter().any(|r| *r <= 0.0) {
            return Err(RasterizationError::InvalidRadius);
        }
        Ok(Ellipse { radius, rotation })
    }

    /// Creates an ellipse from a variable-arity radius.
    ///
    /// A single value yields a circular disk; with two or more values the
    /// first two entries become the semi-axes.
    pub fn from_radii(radius: &[Real], rotation: Real) -> Result<Self, RasterizationError> {
        let radius = match *radius {
            [] => return Err(RasterizationError::EmptyParameter),
            [r] => Vector2::new(r, r),
            [a, b, ..] => Vector2::new(a, b),
        };
        Self::new(radius, rotation)
    }

    /// Rasterizes this disk on a grid with the given voxel size, without
    /// any resampling or cropping.
    ///
    /// The grid spans `[-c, c)` voxels on both in-plane axes with
    /// `c = ceil(max(radius / voxel_size))`, and has a single slice along
    /// the third axis. A voxel belongs to the disk iff
    /// `(x/rad_x)^2 + (y/rad_y)^2 < 1` after rotating the sampling grid by
    /// `-rotation` (a passive rotation, equivalent to rotating the disk by
    /// `+rotation`). The rotation is skipped entirely when the angle is
    /// zero, avoiding floating-point drift from the trigonometric
    /// evaluation.
    pub fn rasterize_raw(
        &self,
        voxel_size: &Vector<Real>,
    ) -> Result<VoxelGrid, RasterizationError> {
        crate::raster::check_voxel_size(voxel_size)?;

        let rad = self.radius.component_div(&voxel_size.xy());
        let c = rad.max().ceil() as i64;
        let n = (2 * c) as usize;

        let rot = (self.rotation != 0.0).then(|| Rotation2::new(-self.rotation));

        let mut grid = VoxelGrid::zeros([n, n, 1]);
        for j in 0..n {
            for i in 0..n {
                let p = Vector2::new((i as i64 - c) as Real, (j as i64 - c) as Real);
                let p = match &rot {
                    Some(rot) => rot * p,
                    None => p,
                };

                if (p.x / rad.x).powi(2) + (p.y / rad.y).powi(2) < 1.0 {
                    *grid.voxel_mut(i, j, 0) = 1.0;
                }
            }
        }

        Ok(grid)
    }
}

#[cfg(test)]
mod test {
    use super::Ellipse;
    use crate::error::RasterizationError;
    use crate::math::{Vector, Vector2};

    #[test]
    fn radius_promotion() {
        let circle = Ellipse::from_radii(&[2.0], 0.0).unwrap();
        assert_eq!(circle.radius, Vector2::new(2.0, 2.0));

        let truncated = Ellipse::from_radii(&[2.0, 3.0, 4.0], 0.0).unwrap();
        assert_eq!(truncated.radius, Vector2::new(2.0, 3.0));

        assert_eq!(
            Ellipse::from_radii(&[], 0.0),
            Err(RasterizationError::EmptyParameter)
        );
        assert_eq!(
            Ellipse::from_radii(&[-1.0], 0.0),
            Err(RasterizationError::InvalidRadius)
        );
    }

    #[test]
    fn raw_extent_and_center() {
        let disk = Ellipse::from_radii(&[2.0, 2.0], 0.0).unwrap();
        let grid = disk
            .rasterize_raw(&Vector::new(1.0, 1.0, 1.0))
            .unwrap();

        assert_eq!(grid.dimensions(), [4, 4, 1]);
        // The voxel at integer offset (0, 0) from the disk center.
        assert_eq!(grid.voxel(2, 2, 0), 1.0);
    }

    #[test]
    fn quarter_turn_swaps_semi_axes() {
        // No lattice point falls exactly on this boundary, so the inexact
        // cos(pi/2) of the rotated evaluation cannot flip a membership test.
        let flat = Ellipse::from_radii(&[2.5, 1.5], 0.0).unwrap();
        let upright = Ellipse::from_radii(&[2.5, 1.5], std::f64::consts::FRAC_PI_2).unwrap();
        let voxel_size = Vector::new(1.0, 1.0, 1.0);

        let flat = flat.rasterize_raw(&voxel_size).unwrap();
        let upright = upright.rasterize_raw(&voxel_size).unwrap();

        let n = flat.extent(0);
        for j in 0..n {
            for i in 0..n {
                assert_eq!(flat.voxel(i, j, 0), upright.voxel(j, i, 0));
            }
        }
    }
}
