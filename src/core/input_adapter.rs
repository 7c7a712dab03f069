use std::collections::HashSet;
use glam::DVec2;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Adapter that bridges Winit events to the Controller trait
#[derive(Debug, Clone)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Raw mouse motion accumulated since the last take
    mouse_delta: DVec2,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self {
            pressed_keys: HashSet::new(),
            mouse_delta: DVec2::ZERO,
        }
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        match event.state {
                            ElementState::Pressed => self.press(button),
                            ElementState::Released => self.release(button),
                        }
                    }
                }
            }
            // Key releases are not delivered while unfocused
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    /// Accumulate relative pointer motion. Only raw device motion is used so
    /// the delta stays valid while the cursor is locked.
    pub fn process_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.mouse_delta += DVec2::new(delta.0, delta.1);
        }
    }

    pub fn press(&mut self, button: Button) {
        self.pressed_keys.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed_keys.remove(&button);
    }

    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Motion since the previous call; the accumulator is reset to zero
    pub fn take_mouse_delta(&mut self) -> DVec2 {
        std::mem::take(&mut self.mouse_delta)
    }

    /// Map Winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::Forward),
            KeyCode::KeyS => Some(Button::Back),
            KeyCode::KeyA => Some(Button::StrafeLeft),
            KeyCode::KeyD => Some(Button::StrafeRight),
            KeyCode::KeyQ => Some(Button::Down),
            KeyCode::KeyE => Some(Button::Up),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(Button::ZoomIn),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(Button::ZoomOut),
            KeyCode::ShiftLeft => Some(Button::Turbo),
            KeyCode::Escape => Some(Button::Quit),
            _ => None,
        }
    }
}

impl Default for WinitController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }
}
