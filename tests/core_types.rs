use corrfilter::image::border::{clamp_coord, sample_clamped};
use corrfilter::{FilterError, Kernel, PixelGrid};

#[test]
fn pixel_grid_rejects_invalid_dimensions() {
    let err = PixelGrid::new(vec![0u8; 4], 3, 1).unwrap_err();
    assert_eq!(
        err,
        FilterError::InvalidDimensions {
            width: 3,
            height: 1,
            len: 4,
        }
    );

    let err = PixelGrid::new(vec![0u8; 4], 0, 4).unwrap_err();
    assert_eq!(
        err,
        FilterError::InvalidDimensions {
            width: 0,
            height: 4,
            len: 4,
        }
    );

    assert!(PixelGrid::new(vec![0u8; 2], usize::MAX, 2).is_err());
}

#[test]
fn pixel_grid_indexes_row_major() {
    let data: Vec<u8> = (0u8..12).collect();
    let grid = PixelGrid::new(data.clone(), 4, 3).unwrap();
    assert_eq!(grid.len(), 12);
    assert_eq!(grid.as_slice(), data.as_slice());
    assert_eq!(grid.get(3, 0), Some(3));
    assert_eq!(grid.get(0, 1), Some(4));
    assert_eq!(grid.get(3, 2), Some(11));
    assert_eq!(grid.get(4, 0), None);
    assert_eq!(grid.row(2).unwrap(), &[8, 9, 10, 11]);
    assert!(grid.row(3).is_none());
    assert_eq!(grid.into_vec(), data);
}

#[test]
fn boundary_sampler_replicates_edges() {
    let grid = PixelGrid::from_fn(3, 2, |x, y| (10 * y + x) as u8).unwrap();
    assert_eq!(sample_clamped(&grid, -4, 0), 0);
    assert_eq!(sample_clamped(&grid, 9, 0), 2);
    assert_eq!(sample_clamped(&grid, 1, -1), 1);
    assert_eq!(sample_clamped(&grid, 1, 5), 11);
    assert_eq!(sample_clamped(&grid, 3, 2), 12);
    assert_eq!(clamp_coord(-1, 1), 0);
    assert_eq!(clamp_coord(1, 1), 0);
}

#[test]
fn kernel_shape_is_checked_before_use() {
    let err = Kernel::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap_err();
    assert_eq!(err, FilterError::KernelShape { rows: 2, cols: 2 });

    let err = Kernel::new(vec![vec![1.0, 0.0, 0.0]]).unwrap_err();
    assert_eq!(err, FilterError::KernelShape { rows: 1, cols: 3 });

    let err = Kernel::from_slice(3, &[0.0; 6]).unwrap_err();
    assert_eq!(err, FilterError::KernelShape { rows: 3, cols: 2 });

    let laplacian = [[0.0, 1.0, 0.0], [1.0, -4.0, 1.0], [0.0, 1.0, 0.0]];
    let kernel = Kernel::from_array(laplacian).unwrap();
    assert_eq!(kernel.size(), 3);
    assert_eq!(kernel.sum(), 0.0);
}

#[test]
fn errors_render_readable_messages() {
    let err = FilterError::KernelShape { rows: 4, cols: 4 };
    assert_eq!(
        err.to_string(),
        "invalid kernel shape: 4 rows by 4 columns (expected odd square)"
    );
    let err = FilterError::UnsupportedColorMode {
        mode: "Rgb16".to_string(),
    };
    assert_eq!(err.to_string(), "unsupported color mode: Rgb16");
}
