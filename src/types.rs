/// Number of 32-bit floats in the fragment shader's uniform block
pub const FRAME_UNIFORM_FLOATS: usize = 10;

/// Size of the uniform block in bytes
pub const FRAME_UNIFORM_SIZE: usize = FRAME_UNIFORM_FLOATS * std::mem::size_of::<f32>();

/// Per-frame uniform block read by the fractal fragment shader.
///
/// Field order and count must match `struct Frame` in
/// `shaders/complex_dynamics.frag.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniform {
    pub position: [f32; 3],
    pub _pad: f32,
    pub view_scale: [f32; 2],
    pub cos_theta: f32,
    pub sin_theta: f32,
    pub cos_phi: f32,
    pub sin_phi: f32,
}

const _: () = assert!(std::mem::size_of::<FrameUniform>() == FRAME_UNIFORM_SIZE);

impl FrameUniform {
    /// Flatten into shader order: cx, cy, cz, pad, scale x/y, cos/sin theta, cos/sin phi
    pub fn to_floats(&self) -> [f32; FRAME_UNIFORM_FLOATS] {
        bytemuck::cast(*self)
    }

    pub fn from_floats(floats: [f32; FRAME_UNIFORM_FLOATS]) -> Self {
        bytemuck::cast(floats)
    }

    /// Raw bytes as uploaded to the uniform buffer
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Decode a block previously produced by [`FrameUniform::as_bytes`].
    /// Returns `None` when the slice is not exactly one block long.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        bytemuck::try_pod_read_unaligned(bytes).ok()
    }
}
