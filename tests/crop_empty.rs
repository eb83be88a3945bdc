use scattervox::math::Vector;
use scattervox::raster::{crop_empty_slices, rasterize, RasterConfig, VoxelGrid};
use scattervox::shape::Scatterer;

#[test]
fn margins_are_stripped_and_the_interior_is_untouched() {
    // Non-zero 3x2x1 interior with one empty slice on every side.
    let mut grid = VoxelGrid::zeros([5, 4, 3]);
    for j in 1..3 {
        for i in 1..4 {
            *grid.voxel_mut(i, j, 1) = 0.5;
        }
    }

    let cropped = crop_empty_slices(grid);
    assert_eq!(cropped.dimensions(), [3, 2, 1]);
    assert!(cropped.values().iter().all(|v| *v == 0.5));

    let again = crop_empty_slices(cropped.clone());
    assert_eq!(again, cropped);
}

#[test]
fn cropping_never_drops_occupancy() {
    let sphere = Scatterer::sphere(2.5).unwrap();
    let voxel_size = Vector::new(1.0, 1.0, 1.0);

    let kept = rasterize(&sphere, &RasterConfig::new(voxel_size)).unwrap();
    let full = rasterize(
        &sphere,
        &RasterConfig::new(voxel_size).with_crop_empty(false),
    )
    .unwrap();

    // ceil(2.5) = 3 gives a 6x6x6 raw grid whose leading slices are empty.
    assert_eq!(full.dimensions(), [6, 6, 6]);
    assert_eq!(kept.dimensions(), [5, 5, 5]);
    assert_eq!(kept.total_occupancy(), full.total_occupancy());
}
