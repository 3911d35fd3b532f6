//! Cobot Render System
//!
//! Turns a simulation snapshot into coloured triangles on the CPU and
//! presents them through wgpu on a winit window.

pub mod gpu;
pub mod palette;
pub mod scene;
pub mod shapes;
pub mod window;

pub use wgpu;
pub use winit;

pub use gpu::CanvasRenderer;
pub use scene::build_scene;
pub use shapes::{Mesh, Vertex};

use thiserror::Error;

/// Errors raised while setting up windowing or the GPU surface
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create event loop")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create device")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}
