/// Framebuffer dimensions in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height; 1.0 for a zero-height (minimized) framebuffer
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Window abstraction used by the viewer loop
pub trait WindowContext {
    /// Request the window to redraw
    fn request_redraw(&self);

    /// Hide the cursor and capture it for relative motion.
    /// Returns false when the platform supports no grab mode.
    fn capture_cursor(&self) -> bool;
}
