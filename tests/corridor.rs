//! End-to-end corridor construction

use trackbox::{CorridorBuilder, CorridorConfig, CorridorSet, GeoPoint, build_corridor};

/// Heading north with a small east-west wiggle so no point is simplified away
fn wiggly_north() -> Vec<GeoPoint> {
    (0..=10)
        .map(|i| GeoPoint::new(i as f64 * 0.01, (i % 2) as f64 * 0.0003))
        .collect()
}

/// Gentle S-curves heading north from (47, 8)
fn sine_track() -> Vec<GeoPoint> {
    (0..80)
        .map(|i| GeoPoint::new(47.0 + i as f64 * 0.002, 8.0 + 0.01 * (i as f64 * 0.2).sin()))
        .collect()
}

#[test]
fn test_straight_north_strip() {
    let track = wiggly_north();
    let corridor = build_corridor(&track, 1.0).unwrap();
    let points = corridor.points();

    // ten offsets per side plus the final track point
    assert_eq!(points.len(), 21);
    assert_eq!(points[10], GeoPoint::new(0.1, 0.0));

    for p in &points[..10] {
        assert!(p.lon < -0.0085 && p.lon > -0.0095, "left rail at {:?}", p);
    }
    for p in &points[11..] {
        assert!(p.lon > 0.0085 && p.lon < 0.0095, "right rail at {:?}", p);
    }

    assert!(corridor.self_intersections().is_empty());
    for p in &track[1..track.len() - 1] {
        assert!(corridor.contains(p));
    }
}

#[test]
fn test_three_point_north_track() {
    let track = vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.01, 0.0),
        GeoPoint::new(0.02, 0.0),
    ];
    let corridor = build_corridor(&track, 1.0).unwrap();

    assert_eq!(corridor.len(), 3);
    assert!((corridor.points()[0].lon + 0.008993).abs() < 1e-5);
    assert!((corridor.points()[2].lon - 0.008993).abs() < 1e-5);
    assert!(corridor.self_intersections().is_empty());
    assert!(corridor.contains(&track[1]));
}

#[test]
fn test_gentle_curves_stay_simple_and_cover_track() {
    let track = sine_track();
    for distance in [0.25, 1.0] {
        let corridor = build_corridor(&track, distance).unwrap();
        assert!(corridor.len() > 3);
        assert!(
            corridor.self_intersections().is_empty(),
            "crossings at {} km",
            distance
        );
        for p in &track[1..track.len() - 1] {
            assert!(corridor.contains(p), "{:?} outside {} km corridor", p, distance);
        }
    }
}

#[test]
fn test_hard_turn_leaves_no_crossing() {
    // south, a slight bend, then a ~170 degree turn back north-east
    let track = vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(-0.02, 0.0),
        GeoPoint::new(-0.025, -0.002),
        GeoPoint::new(-0.02, 0.001),
    ];
    for distance in [0.5, 1.0] {
        let corridor = build_corridor(&track, distance).unwrap();
        assert!(corridor.len() >= 3);
        assert!(corridor.self_intersections().is_empty());
    }
}

#[test]
fn test_any_track_of_two_or_more_points_gives_a_polygon() {
    let tracks = vec![
        vec![GeoPoint::new(10.0, 10.0), GeoPoint::new(10.001, 10.0)],
        vec![GeoPoint::new(-45.0, 170.0), GeoPoint::new(-45.0, 170.5)],
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.05, 0.0),
            GeoPoint::new(0.04, 0.004),
            GeoPoint::new(0.0, 0.004),
        ],
        sine_track(),
        wiggly_north(),
    ];
    for track in &tracks {
        for distance in [0.05, 0.5, 5.0] {
            let corridor = build_corridor(track, distance).unwrap();
            assert!(
                corridor.len() >= 3,
                "{} points for {:?} at {} km",
                corridor.len(),
                track,
                distance
            );
        }
    }
}

#[test]
fn test_builds_are_independent() {
    let track = sine_track();
    let builder = CorridorBuilder::new(0.5).unwrap();
    let first = builder.build(&track);
    let second = builder.build(&track);
    assert_eq!(first, second);

    let wider = CorridorBuilder::new(1.0).unwrap().build(&track);
    assert_ne!(first, wider);
    assert_eq!(wider.distance_km(), 1.0);
}

#[test]
fn test_degenerate_tracks() {
    assert!(build_corridor(&[], 1.0).unwrap().is_empty());
    assert!(build_corridor(&[GeoPoint::new(1.0, 2.0)], 1.0).unwrap().is_empty());
    assert!(build_corridor(&[GeoPoint::new(1.0, 2.0); 3], 1.0).unwrap().is_empty());
    assert!(build_corridor(&wiggly_north(), 0.0).is_err());
}

#[test]
fn test_disabling_simplification_keeps_collinear_points() {
    let track = vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.01, 0.0),
        GeoPoint::new(0.02, 0.0),
    ];
    let config = CorridorConfig {
        simplify_tolerance: 0.0,
        ..Default::default()
    };
    let corridor = CorridorBuilder::with_config(1.0, config)
        .unwrap()
        .build(&track);
    assert_eq!(corridor.len(), 5);
}

#[test]
fn test_corridor_set_matches_direct_build() {
    let track = sine_track();
    let mut set = CorridorSet::new(&track, CorridorConfig::default());
    let cached = set.get_or_build(1.0).unwrap().clone();
    assert_eq!(cached, build_corridor(&track, 1.0).unwrap());
    assert_eq!(set.track().len(), track.len());
}

#[test]
fn test_poly_filter_for_built_corridor() {
    let corridor = build_corridor(&wiggly_north(), 1.0).unwrap();
    let filter = corridor.to_poly_filter();

    assert!(filter.starts_with("poly:\""));
    assert!(filter.ends_with('"'));
    let body = filter.trim_start_matches("poly:\"").trim_end_matches('"');
    assert_eq!(body.split(' ').count(), corridor.len() * 2);
    assert!(body.contains("0.100 0.000"));
}
