use std::sync::Arc;
use winit::window::{CursorGrabMode, Window as WinitWindow};
use crate::core::WindowContext;

/// Wrapper around the winit window the fractal is presented in
pub struct ViewerWindow {
    inner: Arc<WinitWindow>,
}

impl ViewerWindow {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }
}

impl WindowContext for ViewerWindow {
    fn request_redraw(&self) {
        self.inner.request_redraw();
    }

    fn capture_cursor(&self) -> bool {
        // Locked gives relative motion; not every platform has it
        let grabbed = self.inner.set_cursor_grab(CursorGrabMode::Locked).is_ok()
            || self.inner.set_cursor_grab(CursorGrabMode::Confined).is_ok();
        self.inner.set_cursor_visible(false);
        grabbed
    }
}
