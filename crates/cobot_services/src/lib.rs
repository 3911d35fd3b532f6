//! Cobot Services Layer
//!
//! Host-boundary collaborators for the simulation: pointer and gyroscope
//! input, debounced resizing, and settings.

pub mod input;
pub mod resize;
pub mod settings;

pub use input::{GyroInput, PointerRegister, PointerSample};
pub use resize::ResizeDebouncer;
pub use settings::{MetricsSettings, Settings, SettingsError, WindowSettings};
