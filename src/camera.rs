use glam::{DVec2, Vec2, Vec3};
use crate::core::{Button, Controller};
use crate::types::FrameUniform;

/// Fixed simulation step per frame. Movement speed is tied to frame rate.
pub const FIXED_DT: f32 = 10.0 / 60.0;
/// Speed multiplier while turbo is held
pub const TURBO_FACTOR: f32 = 2.0;
/// Base per-frame zoom factor; turbo adds `turbo / 50` on top
pub const ZOOM_STEP: f64 = 1.05;
/// Pointer pixels per radian of rotation
pub const MOUSE_SENSITIVITY: f64 = 1000.0;

/// Input snapshot for one frame
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraInput {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub turbo: bool,
    /// Pointer displacement since the previous frame
    pub mouse_delta: DVec2,
}

impl CameraInput {
    pub fn from_controller(controller: &dyn Controller, mouse_delta: DVec2) -> Self {
        Self {
            forward: controller.is_down(Button::Forward),
            back: controller.is_down(Button::Back),
            left: controller.is_down(Button::StrafeLeft),
            right: controller.is_down(Button::StrafeRight),
            up: controller.is_down(Button::Up),
            down: controller.is_down(Button::Down),
            zoom_in: controller.is_down(Button::ZoomIn),
            zoom_out: controller.is_down(Button::ZoomOut),
            turbo: controller.is_down(Button::Turbo),
            mouse_delta,
        }
    }

    pub const fn turbo_factor(&self) -> f32 {
        if self.turbo {
            TURBO_FACTOR
        } else {
            1.0
        }
    }

    /// Per-frame zoom multiplier, kept in double precision
    pub fn zoom_factor(&self) -> f64 {
        ZOOM_STEP + f64::from(self.turbo_factor() / 50.0)
    }

    const fn to_direction(positive: bool, negative: bool) -> f32 {
        match (positive, negative) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    /// Unit (forward, right, up) direction in camera space
    pub const fn direction(&self) -> (f32, f32, f32) {
        (
            Self::to_direction(self.forward, self.back),
            Self::to_direction(self.right, self.left),
            Self::to_direction(self.up, self.down),
        )
    }
}

/// Trigonometric basis of the current orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub cos_theta: f32,
    pub sin_theta: f32,
    pub cos_phi: f32,
    pub sin_phi: f32,
}

impl Basis {
    pub fn from_angles(theta: f32, phi: f32) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();
        Self {
            cos_theta,
            sin_theta,
            cos_phi,
            sin_phi,
        }
    }

    /// Rotate a camera-space displacement into world space: yaw about Y,
    /// then pitch about the lateral axis.
    pub fn to_world(&self, forward: f32, right: f32, up: f32) -> Vec3 {
        Vec3::new(
            forward * self.cos_phi * self.sin_theta
                + up * self.sin_phi * self.sin_theta
                + right * self.cos_theta,
            -(forward * self.sin_phi) + up * self.cos_phi,
            forward * self.cos_phi * self.cos_theta
                + up * self.sin_phi * self.cos_theta
                - right * self.sin_theta,
        )
    }
}

/// First-person camera over the fractal's parameter space.
///
/// `theta` is yaw and `phi` is pitch. Neither is wrapped or clamped, so
/// pitching past the poles flips "up". `zoom` only ever changes by
/// multiplication and is not bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Vec3,
    pub zoom: f32,
    pub theta: f32,
    pub phi: f32,
}

impl CameraState {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            zoom: 1.0,
            theta: 0.0,
            phi: 0.0,
        }
    }

    pub fn basis(&self) -> Basis {
        Basis::from_angles(self.theta, self.phi)
    }

    /// Camera-space displacement for this frame, scaled by the current zoom
    pub fn local_velocity(&self, input: &CameraInput, dt: f32) -> (f32, f32, f32) {
        let speed = input.turbo_factor() * self.zoom * dt;
        let (forward, right, up) = input.direction();
        (forward * speed, right * speed, up * speed)
    }

    /// Advance one frame and return the basis used for integration.
    ///
    /// Velocity is taken from the zoom before this frame's zoom change;
    /// position integrates with the basis after this frame's rotation.
    /// Zoom and angle steps are computed in f64 and narrowed on store.
    pub fn update(&mut self, input: &CameraInput, dt: f32) -> Basis {
        let (forward, right, up) = self.local_velocity(input, dt);

        let zoom_factor = input.zoom_factor();
        if input.zoom_in {
            self.zoom = (f64::from(self.zoom) * zoom_factor) as f32;
        }
        if input.zoom_out {
            self.zoom = (f64::from(self.zoom) / zoom_factor) as f32;
        }

        self.theta = (f64::from(self.theta) + input.mouse_delta.x / MOUSE_SENSITIVITY) as f32;
        self.phi = (f64::from(self.phi) + input.mouse_delta.y / MOUSE_SENSITIVITY) as f32;

        let basis = self.basis();
        self.position += basis.to_world(forward, right, up);
        basis
    }

    /// View scale for the given framebuffer aspect ratio (x, y)
    pub fn view_scale(&self, aspect_ratio: f32) -> Vec2 {
        Vec2::new(self.zoom * aspect_ratio, self.zoom)
    }

    pub fn to_uniform(&self, aspect_ratio: f32) -> FrameUniform {
        let basis = self.basis();

        FrameUniform {
            position: self.position.to_array(),
            _pad: 0.0,
            view_scale: self.view_scale(aspect_ratio).to_array(),
            cos_theta: basis.cos_theta,
            sin_theta: basis.sin_theta,
            cos_phi: basis.cos_phi,
            sin_phi: basis.sin_phi,
        }
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new()
    }
}
