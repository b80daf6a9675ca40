//! Integration tests for bootstrap uncertainty overlays.

use mapscope::*;

fn viewer_with_points(n: usize) -> Viewer {
    let mut viewer = Viewer::new(MapData::default());
    for i in 0..n {
        let kind = if i % 2 == 0 {
            PointKind::Antigen
        } else {
            PointKind::Serum
        };
        viewer.add_point(kind, i / 2);
    }
    viewer
}

fn cloud(samples: usize) -> CloudData {
    CloudData {
        ag_noise: vec![0.0; samples],
        coords: (0..samples).map(|i| vec![i as f32, 0.0]).collect(),
    }
}

#[test]
fn test_overlay_stays_hidden_until_selected() {
    let mut viewer = viewer_with_points(1);
    let map = viewer.map;
    viewer.points[0].add_cloud_overlay(&cloud(4), &map, &mut viewer.scene);

    let node = viewer.points[0].overlay().unwrap().node;
    assert!(!viewer.scene.contains(node));

    viewer.set_point_selected(0, true);
    assert!(viewer.scene.contains(node));

    viewer.set_point_selected(0, false);
    assert!(!viewer.scene.contains(node));
}

#[test]
fn test_overlay_shows_immediately_if_already_selected() {
    let mut viewer = viewer_with_points(1);
    viewer.set_point_selected(0, true);

    let map = viewer.map;
    viewer.points[0].add_cloud_overlay(&cloud(4), &map, &mut viewer.scene);
    let node = viewer.points[0].overlay().unwrap().node;
    assert!(viewer.scene.contains(node));
}

#[test]
fn test_show_hide_idempotent_and_remove_is_terminal() {
    let mut viewer = viewer_with_points(1);
    let map = viewer.map;
    viewer.points[0].add_cloud_overlay(&cloud(2), &map, &mut viewer.scene);
    let node = viewer.points[0].overlay().unwrap().node;

    viewer.points[0].show_overlay(&mut viewer.scene);
    viewer.points[0].show_overlay(&mut viewer.scene);
    assert_eq!(viewer.scene.members().len(), 1);

    viewer.points[0].hide_overlay(&mut viewer.scene);
    viewer.points[0].hide_overlay(&mut viewer.scene);
    assert!(!viewer.scene.contains(node));

    viewer.points[0].show_overlay(&mut viewer.scene);
    assert!(viewer.scene.contains(node));

    viewer.points[0].remove_overlay(&mut viewer.scene);
    assert!(viewer.points[0].overlay().is_none());
    // Nothing left to show.
    viewer.points[0].show_overlay(&mut viewer.scene);
    assert!(viewer.scene.members().is_empty());
}

#[test]
fn test_new_data_replaces_previous_representation() {
    let mut viewer = viewer_with_points(1);
    viewer.set_point_selected(0, true);
    let map = viewer.map;

    viewer.points[0].add_cloud_overlay(&cloud(2), &map, &mut viewer.scene);
    let old_node = viewer.points[0].overlay().unwrap().node;

    let contour = ContourData {
        x: vec![0.0, 1.0, 1.0],
        y: vec![0.0, 0.0, 1.0],
    };
    viewer.points[0].add_contour_overlay(&contour, &map, &mut viewer.scene);
    let new_node = viewer.points[0].overlay().unwrap().node;

    assert_ne!(old_node, new_node);
    assert!(!viewer.scene.contains(old_node));
    assert!(viewer.scene.contains(new_node));
    assert!(matches!(
        viewer.points[0].overlay().unwrap().repr,
        OverlayRepr::Contour { .. }
    ));
}

#[test]
fn test_bootstrap_points_fan_out_columns() {
    let mut viewer = viewer_with_points(2);
    // Two resamples, one column per point.
    let data = BootstrapData {
        ag_noise: vec![vec![6.0, 0.0], vec![-6.0, 0.0]],
        coords: vec![
            vec![vec![0.0, 0.0], vec![10.0, 0.0]],
            vec![vec![1.0, 1.0], vec![11.0, 1.0]],
        ],
    };
    viewer.show_bootstrap_points(&data).unwrap();

    let OverlayRepr::Cloud { positions, colors } = &viewer.points[0].overlay().unwrap().repr
    else {
        panic!("expected a cloud");
    };
    assert_eq!(positions[0], Vec3::new(0.0, 0.0, -0.2));
    assert_eq!(positions[1], Vec3::new(1.0, 1.0, -0.2));
    // Antigen column 0 saw errors 6 and -6: saturated red then blue.
    assert_eq!(colors[0], Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(colors[1], Vec3::new(0.0, 0.0, 1.0));

    // Point 1 is a serum: no error coloring despite nonzero noise.
    let OverlayRepr::Cloud { colors, .. } = &viewer.points[1].overlay().unwrap().repr else {
        panic!("expected a cloud");
    };
    assert_eq!(colors, &vec![Vec3::ZERO; 2]);
}

#[test]
fn test_bootstrap_points_ragged_rows_fail() {
    let mut viewer = viewer_with_points(2);
    let data = BootstrapData {
        ag_noise: vec![vec![0.0]],
        coords: vec![vec![vec![0.0, 0.0]]],
    };
    let err = viewer.show_bootstrap_points(&data).unwrap_err();
    assert!(matches!(
        err,
        MapscopeError::BootstrapSizeMismatch { expected: 2, actual: 1 }
    ));
}

#[test]
fn test_bootstrap_contours_take_first_entry_only() {
    let mut viewer = viewer_with_points(1);
    let data = vec![vec![
        ContourData {
            x: vec![0.0, 1.0],
            y: vec![0.0, 1.0],
        },
        ContourData {
            x: vec![9.0],
            y: vec![9.0],
        },
    ]];
    viewer.show_bootstrap_contours(&data).unwrap();

    let OverlayRepr::Contour { positions } = &viewer.points[0].overlay().unwrap().repr else {
        panic!("expected a contour");
    };
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[1], Vec3::new(1.0, 1.0, 0.0));
}

#[test]
fn test_bootstrap_contours_length_must_match_points() {
    let mut viewer = viewer_with_points(3);
    let err = viewer.show_bootstrap_contours(&[]).unwrap_err();
    assert!(matches!(
        err,
        MapscopeError::BootstrapSizeMismatch { expected: 3, actual: 0 }
    ));
}

#[test]
fn test_coords_pass_through_map_transform() {
    let map = MapData::new(
        Mat3::from_rotation_z(std::f32::consts::PI),
        Vec3::new(1.0, 0.0, 0.0),
    );
    let mut viewer = Viewer::new(map);
    viewer.add_point(PointKind::Antigen, 0);

    let data = BootstrapData {
        ag_noise: vec![vec![0.0]],
        coords: vec![vec![vec![1.0, 0.0]]],
    };
    viewer.show_bootstrap_points(&data).unwrap();

    let OverlayRepr::Cloud { positions, .. } = &viewer.points[0].overlay().unwrap().repr else {
        panic!("expected a cloud");
    };
    // Half turn maps (1,0) to (-1,0), translation brings it to the origin,
    // then the cloud filler supplies the depth.
    assert!((positions[0] - Vec3::new(0.0, 0.0, -0.2)).length() < 1e-5);
}

#[test]
fn test_clear_bootstrap_discards_everything() {
    let mut viewer = viewer_with_points(2);
    let data = BootstrapData {
        ag_noise: vec![vec![0.0, 0.0]],
        coords: vec![vec![vec![0.0, 0.0], vec![1.0, 1.0]]],
    };
    viewer.show_bootstrap_points(&data).unwrap();
    viewer.set_point_selected(0, true);

    viewer.clear_bootstrap();
    assert!(viewer.points.iter().all(|p| p.overlay().is_none()));
    assert!(viewer.scene.members().is_empty());
}
