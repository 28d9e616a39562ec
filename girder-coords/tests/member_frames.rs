use girder_coords::{gcs_to_lcs, lcs_to_gcs, CoordError, LcsFrame, LocalAxes, Point3, Vector3};
use girder_core::constants::{ORTHO_TOL, ROUNDTRIP_TOL};

const LCS_ORIGIN: Point3 = Point3 {
    x: 500_000.0,
    y: 300_000.0,
    z: 100_000.0,
};

const DETAILING_OFFSET: Point3 = Point3 {
    x: -100.0,
    y: -40.0,
    z: 50.0,
};

fn horizontal_frame() -> LcsFrame {
    LcsFrame::from_directions(LCS_ORIGIN, Vector3::y_axis(), Vector3::z_axis()).unwrap()
}

fn vertical_frame() -> LcsFrame {
    LcsFrame::from_directions(LCS_ORIGIN, Vector3::z_axis(), Vector3::y_axis()).unwrap()
}

fn assert_close(actual: Point3, expected: Point3) {
    assert!(
        (actual - expected).magnitude() < ROUNDTRIP_TOL,
        "expected {}, got {}",
        expected,
        actual
    );
}

// --- Axis construction ---

#[test]
fn horizontal_member_matrix_columns() {
    let frame = horizontal_frame();
    let rotation = frame.rotation();

    assert_eq!(rotation.column(0), Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(rotation.column(1), Vector3::new(-1.0, 0.0, 0.0));
    assert_eq!(rotation.column(2), Vector3::new(0.0, 0.0, 1.0));
}

#[test]
fn vertical_member_matrix_columns() {
    let frame = vertical_frame();
    let rotation = frame.rotation();

    assert_eq!(rotation.column(0), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(rotation.column(1), Vector3::new(1.0, 0.0, 0.0));
    assert_eq!(rotation.column(2), Vector3::new(0.0, 1.0, 0.0));
}

#[test]
fn parallel_directions_are_rejected() {
    let result = LcsFrame::from_directions(LCS_ORIGIN, Vector3::x_axis(), Vector3::x_axis());
    assert!(matches!(
        result,
        Err(CoordError::DegenerateDirection { .. })
    ));
}

#[test]
fn zero_direction_is_rejected() {
    let result = LcsFrame::from_directions(LCS_ORIGIN, Vector3::zeros(), Vector3::z_axis());
    assert!(matches!(
        result,
        Err(CoordError::DegenerateDirection { .. })
    ));
}

#[test]
fn constructed_frames_are_orthonormal_and_right_handed() {
    let skewed = [
        (Vector3::new(1.0, 2.0, 0.0), Vector3::new(0.0, 0.0, 3.0)),
        (Vector3::new(0.0, 5.0, 0.0), Vector3::new(0.0, 0.0, 0.1)),
        (Vector3::new(1.0, 0.0, 1.0), Vector3::new(-1.0, 0.0, 1.0)),
    ];

    for (x_dir, z_dir) in skewed {
        let axes = LocalAxes::from_directions(x_dir, z_dir).unwrap();
        assert!(axes.to_matrix().is_rotation_matrix(ORTHO_TOL));

        let xy = axes.x().cross(&axes.y());
        assert!(
            (xy - axes.z()).magnitude() < ORTHO_TOL,
            "X × Y != Z for x={} z={}",
            x_dir,
            z_dir
        );
    }
}

// --- Worked setting-out positions ---

#[test]
fn horizontal_member_detailed_position() {
    let frame = horizontal_frame();

    let gcs = frame.to_global(DETAILING_OFFSET);
    assert_close(gcs, Point3::new(500_040.0, 299_900.0, 100_050.0));

    let recomputed = frame.to_local(gcs);
    assert_close(recomputed, DETAILING_OFFSET);
}

#[test]
fn vertical_member_detailed_position() {
    let frame = vertical_frame();

    let gcs = frame.to_global(DETAILING_OFFSET);
    assert_close(gcs, Point3::new(499_960.0, 300_050.0, 99_900.0));

    let recomputed = frame.to_local(gcs);
    assert_close(recomputed, DETAILING_OFFSET);
}

#[test]
fn free_functions_match_frame_methods() {
    let frame = horizontal_frame();

    let via_fn = lcs_to_gcs(DETAILING_OFFSET, frame.origin(), frame.rotation());
    assert_eq!(via_fn, frame.to_global(DETAILING_OFFSET));

    let back = gcs_to_lcs(via_fn, frame.origin(), frame.rotation());
    assert_eq!(back, frame.to_local(via_fn));
}

// --- Round-trip idempotence ---

#[test]
fn roundtrip_over_assorted_frames_and_points() {
    let frames = [
        horizontal_frame(),
        vertical_frame(),
        LcsFrame::from_directions(
            Point3::new(-2_500.0, 14_000.0, -80.0),
            Vector3::new(1.0, 2.0, 0.0),
            Vector3::new(0.0, 0.0, 3.0),
        )
        .unwrap(),
        LcsFrame::from_directions(
            Point3::zeros(),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(-1.0, 0.0, 1.0),
        )
        .unwrap(),
    ];

    let points = [
        Point3::zeros(),
        DETAILING_OFFSET,
        Point3::new(0.001, -0.002, 0.003),
        Point3::new(12_345.0, -9_876.0, 42.0),
    ];

    for frame in &frames {
        for point in points {
            let there_and_back = frame.to_local(frame.to_global(point));
            assert_close(there_and_back, point);

            let other_way = frame.to_global(frame.to_local(point));
            assert_close(other_way, point);
        }
    }
}
