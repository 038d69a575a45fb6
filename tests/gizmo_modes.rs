mod common;

use common::TestScene;
use glam::{Quat, Vec2, Vec3};
use osprey_editor::gizmo::{
    euler_degrees_to_quat, quat_to_euler_degrees, CapturedValue, DragCapture, GizmoAxis,
    GizmoContext, GizmoManager, GizmoMode, GizmoSettings, PropertyEdit, MODE_MOVE, MODE_ROTATE,
    MODE_SCALE, MODE_SELECT,
};
use osprey_editor::overlay::OverlayFrame;
use osprey_editor::store::{properties, EntityId, PropertyValue, WorldTransform};
use winit::window::CursorIcon;

const EPS: f32 = 1e-4;

fn settings() -> GizmoSettings {
    GizmoSettings::default()
}

fn select_scene(position: Vec2) -> (TestScene, EntityId) {
    let mut scene = TestScene::new();
    let entity = scene.spawn(1, position, 40.0, 40.0);
    scene.store.select(&[entity]);
    (scene, entity)
}

#[test]
fn builtin_modes_iterate_in_registration_order() {
    let gizmos = GizmoManager::with_builtin_modes();
    let ids: Vec<_> = gizmos.modes().map(|m| m.id()).collect();
    assert_eq!(ids, vec![MODE_SELECT, MODE_MOVE, MODE_ROTATE, MODE_SCALE]);
    assert_eq!(gizmos.active_mode().id(), MODE_SELECT);
}

struct VertexMode;

impl GizmoMode for VertexMode {
    fn id(&self) -> &'static str {
        "vertex"
    }

    fn shortcut(&self) -> Option<char> {
        Some('v')
    }

    fn hit_test(&self, _ctx: &GizmoContext, _pointer_world: Vec2) -> Option<GizmoAxis> {
        None
    }

    fn capture(&self, ctx: &GizmoContext, _pointer_world: Vec2, _axis: GizmoAxis) -> CapturedValue {
        CapturedValue::Position(ctx.transform.position)
    }

    fn drag_edit(
        &self,
        _ctx: &GizmoContext,
        _capture: &DragCapture,
        _pointer_world: Vec2,
    ) -> Option<PropertyEdit> {
        None
    }

    fn draw(&self, _ctx: &GizmoContext, _hover: Option<GizmoAxis>, _frame: &mut OverlayFrame) {}
}

#[test]
fn custom_modes_register_after_builtins_and_resolve_shortcuts() {
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.register_mode(Box::new(VertexMode));

    let ids: Vec<_> = gizmos.modes().map(|m| m.id()).collect();
    assert_eq!(ids.last().copied(), Some("vertex"));
    assert_eq!(gizmos.mode_for_shortcut('v'), Some("vertex"));
    assert_eq!(gizmos.mode_for_shortcut('w'), Some(MODE_MOVE));
    assert_eq!(gizmos.mode_for_shortcut('x'), None);
    assert!(gizmos.set_active_mode("vertex"));
    assert!(!gizmos.set_active_mode("bezier"));
}

#[test]
fn x_axis_move_drag_never_touches_y() {
    let (mut scene, entity) = select_scene(Vec2::new(100.0, 50.0));
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_MOVE);

    // Down on the X arm, 30 px out from the pivot.
    assert!(gizmos.on_mouse_down(&scene.store, 1.0, false, false, &settings(), Vec2::new(130.0, 50.0)));
    // Pointer wanders diagonally.
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(140.0, 75.0));
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(155.0, 20.0));
    gizmos.on_mouse_up();

    let position = scene.store.position(entity);
    assert!((position.x - 125.0).abs() < EPS, "x is {}", position.x);
    assert!((position.y - 50.0).abs() < EPS, "y drifted to {}", position.y);

    // Every intermediate edit carried the true previous value.
    assert_eq!(scene.store.edits.len(), 2);
    assert_eq!(scene.store.edits[0].old_value, PropertyValue::Vec2(Vec2::new(100.0, 50.0)));
    assert_eq!(scene.store.edits[0].new_value, PropertyValue::Vec2(Vec2::new(110.0, 50.0)));
    assert_eq!(scene.store.edits[1].old_value, PropertyValue::Vec2(Vec2::new(110.0, 50.0)));
}

#[test]
fn free_move_drag_follows_pointer_and_shift_locks_dominant_axis() {
    let (mut scene, entity) = select_scene(Vec2::new(100.0, 50.0));
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_MOVE);

    // Down on the center disc claims the free axis.
    assert!(gizmos.on_mouse_down(&scene.store, 1.0, false, false, &settings(), Vec2::new(100.0, 50.0)));
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(103.0, 57.0));
    assert_eq!(scene.store.position(entity), Vec2::new(103.0, 57.0));

    // Shift mid-drag locks to the dominant axis of the total delta.
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, true, &settings(), Vec2::new(104.0, 62.0));
    let position = scene.store.position(entity);
    assert!((position.x - 100.0).abs() < EPS, "x should return to start, is {}", position.x);
    assert!((position.y - 62.0).abs() < EPS);
    gizmos.on_mouse_up();
}

#[test]
fn move_drag_snaps_to_grid_when_snap_held() {
    let (mut scene, entity) = select_scene(Vec2::new(100.0, 50.0));
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_MOVE);
    let settings = GizmoSettings { grid_size: 5.0, ..GizmoSettings::default() };

    assert!(gizmos.on_mouse_down(&scene.store, 1.0, true, false, &settings, Vec2::new(130.0, 50.0)));
    gizmos.on_mouse_move(&mut scene.store, 1.0, true, false, &settings, Vec2::new(142.4, 50.0));
    assert_eq!(scene.store.position(entity), Vec2::new(110.0, 50.0));
    gizmos.on_mouse_up();
}

#[test]
fn rotate_drag_applies_angular_delta_about_pivot() {
    let (mut scene, entity) = select_scene(Vec2::ZERO);
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_ROTATE);

    // The ring lives between 40 and 54 px from the pivot.
    assert!(gizmos.on_mouse_down(&scene.store, 1.0, false, false, &settings(), Vec2::new(45.0, 0.0)));
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(0.0, 45.0));
    gizmos.on_mouse_up();

    let expected = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
    assert!(
        scene.store.rotation(entity).abs_diff_eq(expected, 1e-4),
        "rotation is {:?}",
        scene.store.rotation(entity)
    );

    let edit = scene.store.edits.last().expect("rotation edit recorded");
    assert_eq!(edit.property, properties::ROTATION);
    assert_eq!(edit.old_value, PropertyValue::Quat(Quat::IDENTITY));
}

#[test]
fn rotate_drag_snaps_to_angle_step() {
    let (mut scene, entity) = select_scene(Vec2::ZERO);
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_ROTATE);

    assert!(gizmos.on_mouse_down(&scene.store, 1.0, true, false, &settings(), Vec2::new(45.0, 0.0)));
    let fifty = 50.0_f32.to_radians();
    let pointer = Vec2::new(45.0 * fifty.cos(), 45.0 * fifty.sin());
    gizmos.on_mouse_move(&mut scene.store, 1.0, true, false, &settings(), pointer);
    gizmos.on_mouse_up();

    let z = quat_to_euler_degrees(scene.store.rotation(entity)).z;
    assert!((z - 45.0).abs() < 1e-3, "snapped angle is {z}");
}

#[test]
fn rotate_preserves_non_z_euler_angles() {
    let (mut scene, entity) = select_scene(Vec2::ZERO);
    let tilted = euler_degrees_to_quat(Vec3::new(10.0, 20.0, 0.0));
    scene.store.set_transform(
        entity,
        WorldTransform { rotation: tilted, ..WorldTransform::default() },
    );
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_ROTATE);

    assert!(gizmos.on_mouse_down(&scene.store, 1.0, false, false, &settings(), Vec2::new(45.0, 0.0)));
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(0.0, 45.0));
    gizmos.on_mouse_up();

    let euler = quat_to_euler_degrees(scene.store.rotation(entity));
    assert!((euler.x - 10.0).abs() < 1e-2, "roll drifted: {euler:?}");
    assert!((euler.y - 20.0).abs() < 1e-2, "pitch drifted: {euler:?}");
    assert!((euler.z - 90.0).abs() < 1e-2, "yaw is {euler:?}");
}

#[test]
fn scale_drag_uses_sensitivity_and_respects_axis() {
    let (mut scene, entity) = select_scene(Vec2::ZERO);
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_SCALE);

    assert!(gizmos.on_mouse_down(&scene.store, 1.0, false, false, &settings(), Vec2::new(50.0, 0.0)));
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(150.0, 0.0));
    gizmos.on_mouse_up();

    let scale = scene.store.scale(entity);
    assert!((scale.x - 3.0).abs() < EPS, "scale.x is {}", scale.x);
    assert!((scale.y - 1.0).abs() < EPS, "scale.y is {}", scale.y);
}

#[test]
fn scale_never_reaches_zero_under_extreme_negative_drag() {
    let (mut scene, entity) = select_scene(Vec2::ZERO);
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_SCALE);

    assert!(gizmos.on_mouse_down(&scene.store, 1.0, false, false, &settings(), Vec2::new(50.0, 0.0)));
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(-5000.0, 0.0));
    gizmos.on_mouse_up();

    let scale = scene.store.scale(entity);
    assert!(scale.x > 0.0 && scale.x <= 0.01 + EPS, "scale.x is {}", scale.x);
    assert!(scale.y > 0.0, "scale.y is {}", scale.y);
}

#[test]
fn shift_makes_axis_scale_uniform() {
    let (mut scene, entity) = select_scene(Vec2::ZERO);
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_SCALE);

    assert!(gizmos.on_mouse_down(&scene.store, 1.0, false, true, &settings(), Vec2::new(50.0, 0.0)));
    gizmos.on_mouse_move(&mut scene.store, 1.0, false, true, &settings(), Vec2::new(150.0, 0.0));
    gizmos.on_mouse_up();

    let scale = scene.store.scale(entity);
    assert!((scale.x - 3.0).abs() < EPS && (scale.y - 3.0).abs() < EPS, "scale is {scale:?}");
}

#[test]
fn handles_scale_with_inverse_zoom() {
    let (scene, _) = select_scene(Vec2::ZERO);
    let gizmos = {
        let mut g = GizmoManager::with_builtin_modes();
        g.set_active_mode(MODE_MOVE);
        g
    };

    // At zoom 4 the 56 px arm covers only 14 world units.
    assert!(gizmos.hit_test(&scene.store, 4.0, &settings(), Vec2::new(10.0, 0.0)));
    assert!(!gizmos.hit_test(&scene.store, 4.0, &settings(), Vec2::new(30.0, 0.0)));
    // At zoom 1 the same world point is inside the arm.
    assert!(gizmos.hit_test(&scene.store, 1.0, &settings(), Vec2::new(30.0, 0.0)));
}

#[test]
fn select_mode_exposes_no_handles() {
    let (scene, _) = select_scene(Vec2::ZERO);
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_SELECT);

    assert!(!gizmos.hit_test(&scene.store, 1.0, &settings(), Vec2::ZERO));
    assert!(!gizmos.on_mouse_down(&scene.store, 1.0, false, false, &settings(), Vec2::ZERO));
}

#[test]
fn hover_reports_redraw_only_on_change() {
    let (mut scene, _) = select_scene(Vec2::ZERO);
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_MOVE);

    let on_arm = Vec2::new(30.0, 0.0);
    let first = gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), on_arm);
    assert!(first.redraw);
    assert_eq!(first.cursor, CursorIcon::EwResize);

    let second = gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), on_arm);
    assert!(!second.redraw, "no hover change must not redraw");

    let off = gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(500.0, 0.0));
    assert!(off.redraw);
    assert_eq!(off.cursor, CursorIcon::Default);
}

#[test]
fn entity_deleted_mid_drag_ends_without_panic() {
    let (mut scene, entity) = select_scene(Vec2::ZERO);
    let mut gizmos = GizmoManager::with_builtin_modes();
    gizmos.set_active_mode(MODE_MOVE);

    assert!(gizmos.on_mouse_down(&scene.store, 1.0, false, false, &settings(), Vec2::ZERO));
    scene.store.remove_entity(entity);

    let response = gizmos.on_mouse_move(&mut scene.store, 1.0, false, false, &settings(), Vec2::new(10.0, 0.0));
    assert!(response.redraw);
    assert!(!gizmos.is_dragging());
    assert!(scene.store.edits.is_empty());
}

#[test]
fn quat_euler_round_trip_for_z_rotations() {
    for degrees in (-179..180).step_by(7) {
        let degrees = degrees as f32;
        let q = Quat::from_rotation_z(degrees.to_radians());
        let euler = quat_to_euler_degrees(q);
        assert!((euler.x).abs() < 1e-3 && (euler.y).abs() < 1e-3, "spurious tilt at {degrees}");
        assert!((euler.z - degrees).abs() < 1e-3, "z is {} for {degrees}", euler.z);

        let back = euler_degrees_to_quat(euler);
        assert!(
            back.abs_diff_eq(q, 1e-5) || back.abs_diff_eq(-q, 1e-5),
            "round trip failed at {degrees}"
        );
    }
}

#[test]
fn euler_extraction_is_finite_at_gimbal_lock() {
    let q = euler_degrees_to_quat(Vec3::new(0.0, 90.0, 30.0));
    let euler = quat_to_euler_degrees(q);
    assert!(euler.x.is_finite() && euler.y.is_finite() && euler.z.is_finite());
    assert!((euler.y - 90.0).abs() < 1e-2, "pitch is {}", euler.y);
}
