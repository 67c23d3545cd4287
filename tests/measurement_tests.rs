use approx::assert_relative_eq;
use map_measure::{
    path_length, polygon_area, AreaDisplay, MeasureIntent, MeasureOptions, MeasurePoint,
    MeasureState, MeasurementController, MeasurementTool, NumberFormat, PointSequence,
    SessionState,
};

const ARC_MINUTE: f64 = 1.0 / 60.0;

#[test]
fn test_arc_minute_triangle_through_controller() {
    let mut controller = MeasurementController::new();
    let mut state = MeasureState::new();
    controller
        .handle_intent(
            &mut state,
            MeasureIntent::ToolSelected {
                tool: Some(MeasurementTool::Area),
            },
        )
        .expect("ToolSelected sollte funktionieren");

    for (lat, lon) in [(0.0, 0.0), (0.0, ARC_MINUTE), (ARC_MINUTE, 0.0)] {
        controller
            .on_point_add(&mut state, lat, lon)
            .expect("PointPlaced sollte funktionieren");
    }

    let area = state.view.area_m2.expect("Flaeche erwartet");
    assert_relative_eq!(area, 1852.0 * 1852.0 / 2.0, max_relative = 0.03);
    assert_eq!(
        state.view.area,
        Some(AreaDisplay::from_square_meters(area, &NumberFormat::default()))
    );
}

#[test]
fn test_sentinel_below_minimum_point_counts() {
    let pts: Vec<MeasurePoint> = (0..3).map(|i| MeasurePoint::new(i as f64, 0.0)).collect();

    assert_eq!(path_length(&pts[..0]), None);
    assert_eq!(path_length(&pts[..1]), None);
    assert!(path_length(&pts[..2]).is_some());
    assert_eq!(polygon_area(&pts[..2]), None);
    assert!(polygon_area(&pts).is_some());
}

#[test]
fn test_path_length_additivity_on_sequence() {
    let seq = PointSequence::set_points(vec![
        MeasurePoint::new(48.14, 17.10),
        MeasurePoint::new(49.19, 18.75),
        MeasurePoint::new(48.71, 21.26),
    ])
    .expect("gueltige Folge");
    let pts = seq.as_slice();

    let whole = path_length(pts).expect("Laenge erwartet");
    let legs = path_length(&pts[..2]).expect("Laenge erwartet")
        + path_length(&pts[1..]).expect("Laenge erwartet");
    assert_eq!(whole, legs);
}

#[test]
fn test_set_points_roundtrip_is_idempotent() {
    let points = vec![MeasurePoint::new(10.0, 20.0), MeasurePoint::new(11.0, 21.0)];
    let once = PointSequence::set_points(points).expect("gueltig");
    let twice = PointSequence::set_points(once.as_slice().to_vec()).expect("gueltig");
    assert_eq!(once, twice);
}

#[test]
fn test_custom_number_format_from_options() {
    let options = MeasureOptions {
        decimal_separator: '.',
        group_separator: ",".to_string(),
        ..MeasureOptions::default()
    };
    let mut controller = MeasurementController::new();
    let mut state = MeasureState::with_options(options);
    let session = SessionState {
        points: vec![MeasurePoint::new(0.0, 0.0), MeasurePoint::new(1.0, 0.0)],
    };

    controller
        .handle_intent(
            &mut state,
            MeasureIntent::ToolSelected {
                tool: Some(MeasurementTool::Distance),
            },
        )
        .expect("ToolSelected sollte funktionieren");
    controller
        .handle_intent(&mut state, MeasureIntent::SessionRestored { session })
        .expect("SessionRestored sollte funktionieren");

    let length = state.view.length.as_ref().expect("Laenge erwartet");
    // 1° Breite auf der Kugel mit mittlerem Erdradius: 111 195,080 m
    assert_eq!(length.meters, "111,195.080");
    assert_eq!(length.kilometers, "111.195");
}

#[test]
fn test_session_file_roundtrip() {
    let file_name = format!("map_measure_session_{}.json", std::process::id());
    let path = std::env::temp_dir().join(file_name);
    let session = SessionState {
        points: vec![MeasurePoint::new(48.1, 17.1), MeasurePoint::new(48.2, 17.3)],
    };

    session.save_to_file(&path).expect("Speichern sollte funktionieren");
    let loaded = SessionState::load_from_file(&path).expect("Laden sollte funktionieren");
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, session);
}
