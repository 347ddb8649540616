use super::*;

fn small() -> GridSpec {
    GridSpec {
        width: 8.0,
        depth: 4.0,
        segments_x: 4,
        segments_z: 2,
        center: Vec2::new(1.0, -1.0),
    }
}

#[test]
fn vertices_span_the_plane() {
    let spec = small();
    assert_eq!(spec.vertex(0, 0), Vec2::new(-3.0, -3.0));
    assert_eq!(spec.vertex(4, 2), Vec2::new(5.0, 1.0));
    assert_eq!(spec.vertex(2, 1), Vec2::new(1.0, -1.0));
}

#[test]
fn parallel_sampling_matches_direct_calls() {
    let field = WaveField::diorama();
    let spec = small();
    let grid = HeightGrid::sample(&field, spec, 2.75).unwrap();
    assert_eq!(grid.heights.len(), 15);
    for row in 0..spec.rows() {
        for col in 0..spec.columns() {
            let p = spec.vertex(col, row);
            let expected = field.height(p.x, p.y, 2.75);
            assert_eq!(grid.get(col, row).unwrap().to_bits(), expected.to_bits());
        }
    }
    assert_eq!(grid.get(5, 0), None);
    assert_eq!(grid.get(0, 3), None);
}

#[test]
fn oversized_grid_is_rejected_without_overflow() {
    let spec = GridSpec {
        segments_x: u32::MAX,
        segments_z: u32::MAX,
        ..small()
    };
    let err = HeightGrid::sample(&WaveField::diorama(), spec, 0.0).unwrap_err();
    assert!(matches!(err, SwellError::Validation(_)), "{err}");
}

#[test]
fn range_stays_within_amplitude() {
    let field = WaveField::diorama();
    let grid = HeightGrid::sample(&field, GridSpec::water_box(), 11.0).unwrap();
    let (lo, hi) = grid.range().unwrap();
    assert!(lo >= -field.amplitude && hi <= field.amplitude);
    assert!(lo < hi);
}

#[test]
fn heightmap_maps_extremes() {
    let spec = GridSpec {
        width: 2.0,
        depth: 2.0,
        segments_x: 1,
        segments_z: 1,
        center: Vec2::ZERO,
    };
    let grid = HeightGrid {
        spec,
        time: 0.0,
        heights: vec![-1.0, 0.0, 1.0, 5.0],
    };
    let img = grid.to_image(1.0).unwrap();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(0, 0).0, [0]);
    assert_eq!(img.get_pixel(1, 0).0, [128]);
    assert_eq!(img.get_pixel(0, 1).0, [255]);
    assert_eq!(img.get_pixel(1, 1).0, [255]);
    assert!(grid.to_image(0.0).is_err());
}

#[test]
fn invalid_specs_are_rejected() {
    let field = WaveField::diorama();
    let mut spec = small();
    spec.segments_x = 0;
    assert!(HeightGrid::sample(&field, spec, 0.0).is_err());
    let mut spec = small();
    spec.width = f64::NAN;
    assert!(HeightGrid::sample(&field, spec, 0.0).is_err());
}
