//! Canvas colours, linear RGBA passed straight through to the surface

pub type Rgba = [f32; 4];

pub const BACKGROUND: Rgba = [0.039, 0.047, 0.063, 1.0];

// Base
pub const BASE_PLATE: Rgba = [0.067, 0.067, 0.067, 1.0];
pub const HUB: Rgba = [0.173, 0.243, 0.314, 1.0];

// Arm
pub const LINK: Rgba = [0.588, 0.627, 0.667, 0.9];
pub const OUTLINE: Rgba = [0.0, 0.0, 0.0, 1.0];
pub const JOINT: Rgba = [0.102, 0.122, 0.141, 1.0];
pub const ACCENT: Rgba = [0.0, 0.953, 1.0, 1.0];
pub const TOOL_TIP: Rgba = [0.878, 0.902, 0.929, 1.0];

// Overlays
pub const ARC_LIGHT: Rgba = [1.0, 1.0, 1.0, 0.9];
pub const ARC_HALO: Rgba = [0.0, 0.953, 1.0, 0.25];
pub const RETICLE: Rgba = [0.0, 0.953, 1.0, 0.4];

// Sparks, alpha replaced by heat
pub const SPARK_WHITE_HOT: Rgba = [1.0, 1.0, 1.0, 1.0];
pub const SPARK_GLOWING: Rgba = [0.0, 0.953, 1.0, 1.0];
pub const SPARK_COOLING: Rgba = [0.0, 0.392, 1.0, 1.0];

/// Same colour with a different alpha.
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], alpha]
}
