use complex_dynamics::camera::{CameraInput, CameraState, FIXED_DT, MOUSE_SENSITIVITY};
use complex_dynamics::core::{Button, Controller};
use glam::{DVec2, Vec3};

struct MockController {
    pressed: Vec<Button>,
}

impl Controller for MockController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

fn only(configure: impl FnOnce(&mut CameraInput)) -> CameraInput {
    let mut input = CameraInput::default();
    configure(&mut input);
    input
}

fn displacement(start: CameraState, input: &CameraInput) -> Vec3 {
    let mut camera = start;
    camera.update(input, FIXED_DT);
    camera.position - start.position
}

// ============================================================================
// Frame Update Properties
// ============================================================================

#[test]
fn test_zero_input_leaves_state_unchanged() {
    let start = CameraState {
        position: Vec3::new(0.3, -1.2, 4.0),
        zoom: 0.25,
        theta: 1.1,
        phi: -0.4,
    };
    let mut camera = start;

    for _ in 0..100 {
        camera.update(&CameraInput::default(), FIXED_DT);
    }

    assert_eq!(camera, start);
}

#[test]
fn test_zoom_in_then_out_round_trips() {
    for turbo in [false, true] {
        let mut camera = CameraState::new();
        let zoom_in = only(|i| {
            i.zoom_in = true;
            i.turbo = turbo;
        });
        let zoom_out = only(|i| {
            i.zoom_out = true;
            i.turbo = turbo;
        });

        for _ in 0..30 {
            camera.update(&zoom_in, FIXED_DT);
        }
        assert!(camera.zoom > 1.0);

        for _ in 0..30 {
            camera.update(&zoom_out, FIXED_DT);
        }
        assert!((camera.zoom - 1.0).abs() < 1e-4, "zoom = {}", camera.zoom);
    }
}

#[test]
fn test_both_zoom_keys_cancel() {
    let mut camera = CameraState::new();
    let input = only(|i| {
        i.zoom_in = true;
        i.zoom_out = true;
    });

    camera.update(&input, FIXED_DT);
    assert!((camera.zoom - 1.0).abs() < 1e-6);
}

#[test]
fn test_zoom_stays_positive() {
    let mut camera = CameraState::new();
    let zoom_out = only(|i| i.zoom_out = true);

    for _ in 0..1000 {
        camera.update(&zoom_out, FIXED_DT);
    }
    assert!(camera.zoom > 0.0);
}

#[test]
fn test_forward_at_rest_moves_along_z() {
    let mut camera = CameraState::new();
    let input = only(|i| i.forward = true);
    let (forward, _, _) = camera.local_velocity(&input, FIXED_DT);

    camera.update(&input, FIXED_DT);

    assert_eq!(camera.position.z, forward);
    assert_eq!(camera.position.x, 0.0);
    assert_eq!(camera.position.y, 0.0);
}

#[test]
fn test_back_at_rest_moves_along_negative_z() {
    let mut camera = CameraState::new();
    camera.update(&only(|i| i.back = true), FIXED_DT);

    assert_eq!(camera.position.z, -FIXED_DT);
}

#[test]
fn test_mouse_motion_rotates_one_radian() {
    let mut camera = CameraState::new();
    camera.update(
        &only(|i| i.mouse_delta = DVec2::new(MOUSE_SENSITIVITY, 0.0)),
        FIXED_DT,
    );
    assert_eq!(camera.theta, 1.0);
    assert_eq!(camera.phi, 0.0);

    let mut camera = CameraState::new();
    camera.update(
        &only(|i| i.mouse_delta = DVec2::new(0.0, MOUSE_SENSITIVITY)),
        FIXED_DT,
    );
    assert_eq!(camera.theta, 0.0);
    assert_eq!(camera.phi, 1.0);
}

#[test]
fn test_angles_are_not_wrapped() {
    let mut camera = CameraState::new();
    let input = only(|i| i.mouse_delta = DVec2::new(MOUSE_SENSITIVITY, MOUSE_SENSITIVITY));

    for _ in 0..10 {
        camera.update(&input, FIXED_DT);
    }

    assert!((camera.theta - 10.0).abs() < 1e-5);
    assert!((camera.phi - 10.0).abs() < 1e-5);
}

#[test]
fn test_turbo_doubles_displacement() {
    let starts = [
        CameraState::new(),
        CameraState {
            zoom: 3.0,
            theta: 0.7,
            phi: -1.3,
            ..CameraState::new()
        },
    ];
    let keys: [fn(&mut CameraInput); 6] = [
        |i| i.forward = true,
        |i| i.back = true,
        |i| i.left = true,
        |i| i.right = true,
        |i| i.up = true,
        |i| i.down = true,
    ];

    for start in starts {
        for key in keys {
            let normal = displacement(start, &only(key));
            let turbo = displacement(
                start,
                &only(|i| {
                    key(i);
                    i.turbo = true;
                }),
            );

            assert!(normal.length() > 0.0);
            assert_eq!(turbo, normal * 2.0);
        }
    }
}

#[test]
fn test_movement_scales_with_zoom() {
    let near = CameraState {
        zoom: 0.5,
        ..CameraState::new()
    };
    let far = CameraState {
        zoom: 2.0,
        ..CameraState::new()
    };
    let input = only(|i| i.forward = true);

    assert_eq!(displacement(far, &input), displacement(near, &input) * 4.0);
}

#[test]
fn test_forward_follows_yaw() {
    let start = CameraState {
        theta: std::f32::consts::FRAC_PI_2,
        ..CameraState::new()
    };
    let moved = displacement(start, &only(|i| i.forward = true));

    assert!((moved.x - FIXED_DT).abs() < 1e-6);
    assert!(moved.y.abs() < 1e-6);
    assert!(moved.z.abs() < 1e-6);
}

#[test]
fn test_forward_follows_pitch() {
    let start = CameraState {
        phi: std::f32::consts::FRAC_PI_2,
        ..CameraState::new()
    };
    let moved = displacement(start, &only(|i| i.forward = true));

    // Positive pitch looks down
    assert!(moved.x.abs() < 1e-6);
    assert!((moved.y + FIXED_DT).abs() < 1e-6);
    assert!(moved.z.abs() < 1e-6);
}

#[test]
fn test_pitch_past_pole_inverts_up() {
    let start = CameraState {
        phi: std::f32::consts::PI,
        ..CameraState::new()
    };
    let moved = displacement(start, &only(|i| i.up = true));

    assert!((moved.y + FIXED_DT).abs() < 1e-6);
}

#[test]
fn test_rotation_applies_before_integration() {
    let mut camera = CameraState::new();
    let input = only(|i| {
        i.forward = true;
        i.mouse_delta = DVec2::new(MOUSE_SENSITIVITY * std::f64::consts::FRAC_PI_2, 0.0);
    });

    let basis = camera.update(&input, FIXED_DT);

    assert_eq!(basis, camera.basis());
    assert!((camera.position.x - FIXED_DT).abs() < 1e-6);
    assert!(camera.position.z.abs() < 1e-6);
}

// ============================================================================
// Controller Snapshot
// ============================================================================

#[test]
fn test_input_from_controller() {
    let controller = MockController {
        pressed: vec![
            Button::Forward,
            Button::StrafeLeft,
            Button::Up,
            Button::ZoomOut,
            Button::Turbo,
        ],
    };

    let input = CameraInput::from_controller(&controller, DVec2::new(5.0, -3.0));

    assert!(input.forward && input.left && input.up && input.zoom_out && input.turbo);
    assert!(!input.back && !input.right && !input.down && !input.zoom_in);
    assert_eq!(input.mouse_delta, DVec2::new(5.0, -3.0));
    assert_eq!(input.direction(), (1.0, -1.0, 1.0));
}

#[test]
fn test_quit_does_not_affect_camera() {
    let controller = MockController {
        pressed: vec![Button::Quit],
    };
    let input = CameraInput::from_controller(&controller, DVec2::ZERO);

    assert_eq!(input, CameraInput::default());
}
