//! Window management
//!
//! Cross-platform window creation via winit

use crate::RenderError;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::Window;

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cobot".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

/// Create window attributes from config
pub fn window_attributes(config: WindowConfig) -> winit::window::WindowAttributes {
    Window::default_attributes()
        .with_title(config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
}

/// Open a window on a running event loop.
pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: WindowConfig,
) -> Result<Window, RenderError> {
    Ok(event_loop.create_window(window_attributes(config))?)
}

pub fn create_event_loop() -> Result<EventLoop<()>, RenderError> {
    Ok(EventLoop::new()?)
}
