// Host-side tests for the orbit controller state machine and frame update.

use glam::Vec3;
use plenum_core::{
    InteractionState, OrbitConfig, OrbitController, OrbitDelta, PlenumError, Spherical, Viewport,
};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

const VIEW: Viewport = Viewport {
    width: 800.0,
    height: 400.0,
};

fn controller(damping: bool, position: Vec3) -> OrbitController {
    let config = OrbitConfig {
        enable_damping: damping,
        ..OrbitConfig::default()
    };
    OrbitController::new(config, position, Vec3::ZERO).expect("valid config")
}

fn spherical_of(c: &OrbitController) -> Spherical {
    let cam = c.camera();
    Spherical::from_offset(cam.position - cam.target).expect("camera off target")
}

#[test]
fn drag_without_damping_applies_once_then_zeroes() {
    let mut c = controller(false, Vec3::new(15.0, 15.0, 20.0));
    let before = spherical_of(&c);

    c.on_pointer_down(100.0, 100.0);
    c.on_pointer_move(200.0, 100.0, VIEW);
    let pending = c.pending_delta();
    let expected = -TAU * 100.0 / 800.0;
    assert!((pending.theta - expected).abs() < 1e-6);
    assert!((pending.theta + 0.785).abs() < 1e-3);
    assert_eq!(pending.phi, 0.0);

    assert!(c.update());
    assert_eq!(c.pending_delta(), OrbitDelta::default());

    let after = spherical_of(&c);
    assert!((after.theta - (before.theta + expected)).abs() < 1e-4);
    assert!((after.phi - before.phi).abs() < 1e-4);
    assert!((after.radius - before.radius).abs() < 1e-3);

    // nothing pending: the camera stays put
    let settled = c.camera().position;
    c.update();
    assert!(c.camera().position.abs_diff_eq(settled, 1e-4));
}

#[test]
fn vertical_drag_changes_polar_angle_by_viewport_height() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.on_pointer_down(0.0, 0.0);
    c.on_pointer_move(0.0, 40.0, VIEW);
    let pending = c.pending_delta();
    assert!((pending.phi - (-TAU * 40.0 / 400.0)).abs() < 1e-6);
    c.update();
    let s = spherical_of(&c);
    assert!((s.phi - (FRAC_PI_2 - TAU * 0.1)).abs() < 1e-4);
}

#[test]
fn pointer_moves_are_incremental() {
    let mut split = controller(false, Vec3::new(0.0, 5.0, 10.0));
    split.on_pointer_down(10.0, 10.0);
    split.on_pointer_move(60.0, 30.0, VIEW);
    split.on_pointer_move(110.0, 50.0, VIEW);

    let mut single = controller(false, Vec3::new(0.0, 5.0, 10.0));
    single.on_pointer_down(10.0, 10.0);
    single.on_pointer_move(110.0, 50.0, VIEW);

    let a = split.pending_delta();
    let b = single.pending_delta();
    assert!((a.theta - b.theta).abs() < 1e-6);
    assert!((a.phi - b.phi).abs() < 1e-6);
}

#[test]
fn moves_are_ignored_unless_rotating() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.on_pointer_move(300.0, 300.0, VIEW);
    assert_eq!(c.state(), InteractionState::Idle);
    assert_eq!(c.pending_delta(), OrbitDelta::default());

    c.on_pointer_down(0.0, 0.0);
    assert_eq!(c.state(), InteractionState::Rotating);
    c.on_pointer_up();
    assert_eq!(c.state(), InteractionState::Idle);
    c.on_pointer_move(50.0, 0.0, VIEW);
    assert_eq!(c.pending_delta(), OrbitDelta::default());
}

#[test]
fn pointer_up_keeps_pending_motion_animating() {
    let mut c = controller(true, Vec3::new(0.0, 0.0, 10.0));
    c.on_pointer_down(0.0, 0.0);
    c.on_pointer_move(80.0, 0.0, VIEW);
    c.on_pointer_up();
    assert!(c.pending_delta().theta != 0.0);
    assert!(c.update());
    assert!(c.pending_delta().theta != 0.0);
}

#[test]
fn damping_decays_monotonically_and_converges() {
    let mut c = controller(true, Vec3::new(12.0, 10.0, 20.0));
    c.on_pointer_down(0.0, 0.0);
    // nudge away from the pole so the azimuth stays well defined
    c.on_pointer_move(60.0, -1.0, VIEW);
    c.on_pointer_up();

    let mut prev = c.pending_delta();
    let mut prev_pos = c.camera().position;
    let mut last_step = f32::MAX;
    for _ in 0..600 {
        c.update();
        let d = c.pending_delta();
        assert!(d.theta.abs() < prev.theta.abs());
        assert!(d.phi.abs() < prev.phi.abs());
        let pos = c.camera().position;
        assert!(pos.is_finite());
        last_step = (pos - prev_pos).length();
        prev = d;
        prev_pos = pos;
    }
    assert!(prev.theta.abs() < 1e-6);
    assert!(prev.phi.abs() < 1e-6);
    assert!(last_step < 1e-3, "camera still moving by {last_step}");
}

#[test]
fn damping_keeps_rotating_after_the_drag() {
    let mut damped = controller(true, Vec3::new(0.0, 0.0, 10.0));
    let mut snappy = controller(false, Vec3::new(0.0, 0.0, 10.0));
    for c in [&mut damped, &mut snappy] {
        c.on_pointer_down(0.0, 0.0);
        c.on_pointer_move(20.0, 0.0, VIEW);
        c.on_pointer_up();
    }
    // first frame applies the same amount
    damped.update();
    snappy.update();
    let d1 = spherical_of(&damped).theta;
    let s1 = spherical_of(&snappy).theta;
    assert!((d1 - s1).abs() < 1e-4);
    // later frames only move the damped camera
    damped.update();
    snappy.update();
    assert!((spherical_of(&damped).theta - d1).abs() > 1e-4);
    assert!((spherical_of(&snappy).theta - s1).abs() < 1e-4);
}

#[test]
fn wheel_up_zooms_in_and_wheel_down_zooms_out() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.on_wheel(-120.0);
    c.update();
    assert!((c.camera().radius() - 10.0 / 1.1).abs() < 1e-3);

    c.on_wheel(53.0);
    c.update();
    assert!((c.camera().radius() - 10.0).abs() < 1e-3);
}

#[test]
fn only_the_latest_wheel_request_counts() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.on_wheel(-1.0);
    c.on_wheel(-1.0);
    c.on_wheel(1.0);
    assert_eq!(c.pending_zoom().map(|z| z.scale_factor), Some(1.1));
    c.update();
    assert!(c.pending_zoom().is_none());
    assert!((c.camera().radius() - 11.0).abs() < 1e-3);
}

#[test]
fn zero_wheel_delta_is_ignored() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.on_wheel(0.0);
    assert!(c.pending_zoom().is_none());
}

#[test]
fn radius_stays_within_distance_bounds() {
    let mut c = controller(true, Vec3::new(3.0, 4.0, 12.0));
    let (min, max) = (c.config().min_distance, c.config().max_distance);
    for _ in 0..120 {
        c.on_wheel(-1.0);
        c.update();
        let r = c.camera().radius();
        assert!(r >= min - 1e-4 && r <= max + 1e-3, "radius {r}");
    }
    assert!((c.camera().radius() - min).abs() < 1e-4);

    for i in 0..400 {
        c.on_wheel(if i % 7 == 0 { -3.0 } else { 3.0 });
        c.update();
        let r = c.camera().radius();
        assert!(r >= min - 1e-4 && r <= max + 1e-3, "radius {r}");
    }
    c.on_wheel(1.0);
    c.update();
    assert!((c.camera().radius() - max).abs() < 0.05);
}

#[test]
fn polar_angle_respects_configured_limits() {
    let config = OrbitConfig {
        enable_damping: false,
        min_polar_angle: 0.4,
        max_polar_angle: 1.2,
        ..OrbitConfig::default()
    };
    let mut c = OrbitController::new(config, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO).unwrap();
    c.on_pointer_down(0.0, 0.0);
    c.on_pointer_move(0.0, -300.0, VIEW);
    c.update();
    assert!((spherical_of(&c).phi - 1.2).abs() < 1e-4);

    c.on_pointer_move(0.0, 500.0, VIEW);
    c.update();
    assert!((spherical_of(&c).phi - 0.4).abs() < 1e-4);
}

#[test]
fn dragging_over_the_pole_never_flips_the_camera() {
    let mut c = controller(false, Vec3::new(0.0, 2.0, 10.0));
    c.on_pointer_down(0.0, 0.0);
    c.on_pointer_move(0.0, 2000.0, VIEW);
    c.update();
    let cam = c.camera();
    assert!(cam.position.is_finite());
    let s = spherical_of(&c);
    assert!(s.phi < 0.01);
    assert!(cam.position.y > 0.0);
    // the camera is still off the target
    assert!(cam.radius() > c.config().min_distance - 1e-4);
}

#[test]
fn camera_on_target_recovers_to_min_distance() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.update();
    c.set_position(Vec3::ZERO);
    c.update();
    let cam = c.camera();
    assert!(cam.position.is_finite());
    assert!((cam.radius() - c.config().min_distance).abs() < 1e-4);
    // last-known azimuth was +Z
    assert!(cam.position.abs_diff_eq(Vec3::new(0.0, 0.0, 1.0), 1e-4));
}

#[test]
fn radius_is_clamped_even_without_zoom() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.set_position(Vec3::new(0.0, 0.0, 0.2));
    c.update();
    assert!((c.camera().radius() - 1.0).abs() < 1e-4);
}

#[test]
fn reset_clears_pending_motion_without_moving() {
    let mut c = controller(true, Vec3::new(5.0, 6.0, 7.0));
    c.on_pointer_down(0.0, 0.0);
    c.on_pointer_move(90.0, 30.0, VIEW);
    c.on_wheel(-1.0);
    let pos = c.camera().position;

    c.reset();
    assert_eq!(c.pending_delta(), OrbitDelta::default());
    assert!(c.pending_zoom().is_none());
    assert_eq!(c.pan_offset(), Vec3::ZERO);
    assert_eq!(c.state(), InteractionState::Idle);
    assert_eq!(c.camera().position, pos);

    // fixed point once nothing is pending
    c.update();
    let a = c.camera().position;
    c.update();
    assert!(a.abs_diff_eq(pos, 1e-4));
    assert!(c.camera().position.abs_diff_eq(a, 1e-4));
}

#[test]
fn panning_moves_target_and_camera_together() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.on_pan_down(0.0, 0.0);
    assert_eq!(c.state(), InteractionState::Panning);
    c.on_pointer_move(40.0, 0.0, VIEW);
    assert_eq!(c.pending_delta(), OrbitDelta::default());
    let pan = c.pan_offset();
    // camera looks down -Z, so its right is +X; dragging right slides the view left
    assert!(pan.x < 0.0);
    assert!(pan.y.abs() < 1e-6 && pan.z.abs() < 1e-6);

    c.update();
    let cam = c.camera();
    assert!(cam.target.abs_diff_eq(pan, 1e-5));
    assert!((cam.position - cam.target).abs_diff_eq(Vec3::new(0.0, 0.0, 10.0), 1e-4));
    assert_eq!(c.pan_offset(), Vec3::ZERO);
}

#[test]
fn pan_scales_with_distance_and_fov() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.on_pan_down(0.0, 0.0);
    c.on_pointer_move(0.0, 20.0, VIEW);
    let fov = c.config().fov_y_radians;
    let expected = 2.0 * 20.0 * 10.0 * (fov * 0.5).tan() / 400.0;
    assert!((c.pan_offset().y - expected).abs() < 1e-4);
}

#[test]
fn pan_can_be_disabled() {
    let config = OrbitConfig {
        enable_pan: false,
        ..OrbitConfig::default()
    };
    let mut c = OrbitController::new(config, Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO).unwrap();
    c.on_pan_down(0.0, 0.0);
    assert_eq!(c.state(), InteractionState::Idle);
    c.on_pointer_move(40.0, 40.0, VIEW);
    assert_eq!(c.pan_offset(), Vec3::ZERO);
}

#[test]
fn home_rehomes_and_clears_pending() {
    let mut c = controller(true, Vec3::new(0.0, 0.0, 10.0));
    c.on_pointer_down(0.0, 0.0);
    c.on_pointer_move(70.0, 0.0, VIEW);
    c.home(Vec3::new(12.0, 10.0, 20.0), Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(c.pending_delta(), OrbitDelta::default());
    assert_eq!(c.camera().target, Vec3::new(1.0, 0.0, 0.0));
    c.update();
    assert!(c
        .camera()
        .position
        .abs_diff_eq(Vec3::new(12.0, 10.0, 20.0), 1e-3));
}

#[test]
fn tiny_viewport_does_not_divide_by_zero() {
    let mut c = controller(false, Vec3::new(0.0, 0.0, 10.0));
    c.on_pointer_down(0.0, 0.0);
    c.on_pointer_move(1.0, 1.0, Viewport::new(0.0, 0.0));
    let d = c.pending_delta();
    assert!(d.theta.is_finite() && d.phi.is_finite());
    c.update();
    assert!(c.camera().position.is_finite());
}

#[test]
fn invalid_configs_are_rejected() {
    let cases = [
        OrbitConfig {
            min_distance: 0.0,
            ..OrbitConfig::default()
        },
        OrbitConfig {
            min_distance: 5.0,
            max_distance: 2.0,
            ..OrbitConfig::default()
        },
        OrbitConfig {
            max_polar_angle: PI + 0.5,
            ..OrbitConfig::default()
        },
        OrbitConfig {
            damping_factor: 0.0,
            ..OrbitConfig::default()
        },
        OrbitConfig {
            zoom_step: 1.0,
            ..OrbitConfig::default()
        },
    ];
    for config in cases {
        let res = OrbitController::new(config.clone(), Vec3::Z, Vec3::ZERO);
        assert!(
            matches!(res, Err(PlenumError::InvalidConfig(_))),
            "{config:?} should be rejected"
        );
    }
    assert!(OrbitConfig::default().validate().is_ok());
}
