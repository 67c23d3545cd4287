use map_measure::{
    MeasureCommand, MeasureIntent, MeasurePoint, MeasureState, MeasurementController,
    MeasurementTool, PointId, SessionState,
};

fn active_state(tool: MeasurementTool) -> (MeasurementController, MeasureState) {
    let mut controller = MeasurementController::new();
    let mut state = MeasureState::new();
    controller
        .handle_intent(&mut state, MeasureIntent::ToolSelected { tool: Some(tool) })
        .expect("ToolSelected sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn place(controller: &mut MeasurementController, state: &mut MeasureState, lat: f64, lon: f64) {
    controller
        .on_point_add(state, lat, lon)
        .expect("PointPlaced sollte funktionieren");
}

#[test]
fn test_placing_points_appends_and_publishes_length() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);

    place(&mut controller, &mut state, 48.14, 17.10);
    assert_eq!(state.view.points.len(), 1);
    assert_eq!(state.view.length_m, None);
    assert!(!state.view.has_result());

    place(&mut controller, &mut state, 48.15, 17.12);
    assert_eq!(state.points().len(), 2);
    assert_eq!(state.points().as_slice()[1].lat, 48.15);
    assert!(state.view.length_m.expect("Laenge erwartet") > 0.0);
    assert!(state.view.length.is_some());
    assert!(state.view.show_path);
}

#[test]
fn test_placed_points_get_unique_ids_never_reused() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);

    place(&mut controller, &mut state, 1.0, 1.0);
    place(&mut controller, &mut state, 2.0, 2.0);
    let first_id = state.points().as_slice()[0].id.expect("ID erwartet");

    controller
        .handle_intent(&mut state, MeasureIntent::PointRemoved { id: first_id })
        .expect("PointRemoved sollte funktionieren");
    place(&mut controller, &mut state, 3.0, 3.0);

    let ids: Vec<_> = state.points().as_slice().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![Some(PointId(2)), Some(PointId(3))]);
}

#[test]
fn test_drag_updates_index_and_recomputes_area() {
    let (mut controller, mut state) = active_state(MeasurementTool::Area);

    place(&mut controller, &mut state, 0.0, 0.0);
    place(&mut controller, &mut state, 0.0, 0.01);
    place(&mut controller, &mut state, 0.01, 0.0);
    let before = state.view.area_m2.expect("Flaeche erwartet");
    let dragged_id = state.points().as_slice()[2].id;

    controller
        .on_point_update(&mut state, 2, 0.02, 0.0)
        .expect("PointDragged sollte funktionieren");

    let after = state.view.area_m2.expect("Flaeche erwartet");
    assert!((after / before - 2.0).abs() < 1e-3);
    assert_eq!(state.points().as_slice()[2].id, dragged_id);
    assert_eq!(state.points().len(), 3);
}

#[test]
fn test_drag_out_of_range_fails_and_keeps_sequence() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);
    place(&mut controller, &mut state, 1.0, 1.0);
    let before = state.points().clone();

    let err = controller
        .on_point_update(&mut state, 5, 2.0, 2.0)
        .expect_err("Index ausserhalb muss fehlschlagen");

    assert!(err.to_string().contains("Index 5"));
    assert_eq!(state.points(), &before);
    assert_eq!(state.view.points, before);
}

#[test]
fn test_failed_command_is_not_logged() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);
    place(&mut controller, &mut state, 1.0, 1.0);
    let logged = state.command_log.len();

    assert!(controller.on_point_update(&mut state, 3, 2.0, 2.0).is_err());
    assert!(controller.on_point_add(&mut state, 0.0, 181.0).is_err());

    assert_eq!(state.command_log.len(), logged);
    let last = state.command_log.last().expect("Eintrag erwartet");
    assert!(matches!(last.command, MeasureCommand::AddPoint { position: None, .. }));
    assert_eq!(last.point_count, 1);
}

#[test]
fn test_out_of_range_coordinate_is_rejected() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);

    let result = controller.on_point_add(&mut state, 91.0, 0.0);

    assert!(result.is_err());
    assert!(state.points().is_empty());
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);
    place(&mut controller, &mut state, 1.0, 1.0);
    place(&mut controller, &mut state, 2.0, 2.0);
    let before = state.points().clone();

    controller
        .handle_intent(&mut state, MeasureIntent::PointRemoved { id: PointId(99) })
        .expect("Unbekannte ID ist kein Fehler");

    assert_eq!(state.points(), &before);
}

#[test]
fn test_insert_between_markers_shifts_tail() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);
    place(&mut controller, &mut state, 1.0, 1.0);
    place(&mut controller, &mut state, 3.0, 3.0);

    controller
        .handle_intent(
            &mut state,
            MeasureIntent::PointInserted {
                position: 1,
                lat: 2.0,
                lon: 2.0,
            },
        )
        .expect("PointInserted sollte funktionieren");

    let lats: Vec<f64> = state.points().as_slice().iter().map(|p| p.lat).collect();
    assert_eq!(lats, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_map_cleared_resets_to_empty() {
    let (mut controller, mut state) = active_state(MeasurementTool::Area);
    place(&mut controller, &mut state, 1.0, 1.0);
    place(&mut controller, &mut state, 2.0, 2.0);

    controller
        .handle_intent(&mut state, MeasureIntent::MapCleared)
        .expect("MapCleared sollte funktionieren");

    assert!(state.points().is_empty());
    assert_eq!(state.session(), SessionState::default());
    assert!(!state.view.show_polygon);
}

#[test]
fn test_tool_switch_discards_points_and_logs_commands() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);
    place(&mut controller, &mut state, 1.0, 1.0);

    controller
        .handle_intent(&mut state, MeasureIntent::ToolSelected { tool: None })
        .expect("Deaktivieren sollte funktionieren");

    assert!(state.points().is_empty());
    assert_eq!(state.tool, None);
    let recent: Vec<_> = state.command_log.entries().rev().take(2).collect();
    assert!(matches!(
        &recent[0].command,
        MeasureCommand::SetPoints { points } if points.is_empty()
    ));
    assert_eq!(recent[1].command, MeasureCommand::SetTool { tool: None });
    assert_eq!(recent[0].point_count, 0);

    // ohne Werkzeug werden Klicks ignoriert
    place(&mut controller, &mut state, 2.0, 2.0);
    assert!(state.points().is_empty());
}

#[test]
fn test_session_restore_advances_id_allocator() {
    let (mut controller, mut state) = active_state(MeasurementTool::Area);
    let session = SessionState {
        points: vec![
            MeasurePoint::with_id(PointId(10), 48.0, 17.0),
            MeasurePoint::new(48.0, 17.1),
            MeasurePoint::with_id(PointId(4), 48.1, 17.0),
        ],
    };

    controller
        .handle_intent(&mut state, MeasureIntent::SessionRestored { session: session.clone() })
        .expect("SessionRestored sollte funktionieren");
    assert_eq!(state.session(), session);
    assert!(state.view.area.is_some());

    place(&mut controller, &mut state, 48.1, 17.1);
    assert_eq!(state.points().as_slice()[3].id, Some(PointId(11)));
}

#[test]
fn test_restored_max_id_blocks_new_points_instead_of_reusing() {
    let (mut controller, mut state) = active_state(MeasurementTool::Distance);
    let last_id = PointId(u64::MAX);
    let session = SessionState {
        points: vec![MeasurePoint::with_id(last_id, 1.0, 1.0)],
    };
    controller
        .handle_intent(&mut state, MeasureIntent::SessionRestored { session })
        .expect("SessionRestored sollte funktionieren");

    let err = controller
        .on_point_add(&mut state, 2.0, 2.0)
        .expect_err("ohne freie ID darf kein Punkt entstehen");
    assert!(err.to_string().contains("Punkt-ID"));
    assert_eq!(state.points().len(), 1);

    controller
        .handle_intent(&mut state, MeasureIntent::PointRemoved { id: last_id })
        .expect("PointRemoved sollte funktionieren");
    assert!(state.points().is_empty());
}
